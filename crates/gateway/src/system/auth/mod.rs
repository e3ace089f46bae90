//! Проверка учётных данных пользователей через ERP и заглушка Bearer.
//!
//! Токены не выпускаются и не проверяются: middleware только требует
//! наличие заголовка и кладёт токен в extensions запроса.

pub mod middleware;

use async_trait::async_trait;

use crate::shared::erp::ErpError;

/// Проверка логина/пароля пользователя
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// uid пользователя при совпадении, None при неверных данных
    async fn authenticate(&self, login: &str, password: &str) -> Result<Option<i64>, ErpError>;
}
