pub mod mapper;
pub mod repository;
pub mod service;
