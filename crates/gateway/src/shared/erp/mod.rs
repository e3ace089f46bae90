//! Источник записей ERP (Odoo).
//!
//! Остальная часть сервиса работает только через трейт [`RecordSource`]:
//! подсчёт, поиск id, чтение по списку id и комбинированный search+read.
//! Конкретный JSON-RPC клиент находится в [`client`].

pub mod client;
pub mod criteria;
pub mod error;
pub mod record;

#[cfg(test)]
pub mod mock;

pub use client::OdooClient;
pub use criteria::{Criteria, Operator, SearchOptions};
pub use error::ErpError;
pub use record::RawRecord;

use async_trait::async_trait;

/// Трейт источника записей ERP
///
/// Каждый вызов выполняется ровно один раз, без повторов.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Количество записей модели, подходящих под фильтр
    async fn count(&self, model: &str, criteria: &Criteria) -> Result<i64, ErpError>;

    /// Поиск id записей с учётом limit/offset/order
    async fn search_ids(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &SearchOptions,
    ) -> Result<Vec<i64>, ErpError>;

    /// Пакетное чтение записей по списку id с явным списком полей
    async fn read_by_ids(
        &self,
        model: &str,
        ids: &[i64],
        fields: &[&str],
    ) -> Result<Vec<RawRecord>, ErpError>;

    /// Поиск и чтение за один запрос
    async fn search_read(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &SearchOptions,
    ) -> Result<Vec<RawRecord>, ErpError>;
}
