use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::shared::config::ServerConfig;
use crate::shared::erp::RecordSource;
use crate::system::auth::Authenticator;
use crate::{handlers, system};

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RecordSource>,
    pub authenticator: Arc<dyn Authenticator>,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH ROUTES (PUBLIC)
        // ========================================
        .route("/api/auth/login", post(system::handlers::auth::login))
        .route("/api/auth/logout", post(system::handlers::auth::logout))
        .route("/api/auth/user/:id", get(system::handlers::auth::user_info))
        .merge(business_routes(server.require_bearer))
        .with_state(state)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors)
}

fn business_routes(require_bearer: bool) -> Router<AppState> {
    let router = Router::new()
        // A001 Sale orders
        .route("/sales", get(handlers::a001_sale_order::list))
        .route(
            "/sales/daily-summary",
            get(handlers::d400_sales_summary::daily_summary),
        )
        .route(
            "/sales/period-summary",
            get(handlers::d400_sales_summary::period_summary),
        )
        // A002 Invoices
        .route("/invoices", get(handlers::a002_invoice::list))
        .route(
            "/invoices/daily-summary",
            get(handlers::d401_invoice_summary::daily_summary),
        )
        .route(
            "/invoices/period-summary",
            get(handlers::d401_invoice_summary::period_summary),
        );

    if require_bearer {
        router.route_layer(middleware::from_fn(
            system::auth::middleware::require_bearer,
        ))
    } else {
        router
    }
}
