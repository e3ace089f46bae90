use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::{Criteria, ErpError, RawRecord, RecordSource, SearchOptions};
use crate::shared::config::ErpConfig;
use crate::system::auth::Authenticator;

/// JSON-RPC клиент Odoo
///
/// При создании аутентифицирует сервисную учётную запись и дальше
/// выполняет все запросы через `object.execute_kw` от её имени.
pub struct OdooClient {
    client: reqwest::Client,
    endpoint: String,
    database: String,
    login: String,
    password: String,
    uid: i64,
    next_id: AtomicU64,
}

impl OdooClient {
    /// Подключение к ERP с учётными данными из конфигурации
    pub async fn connect(config: &ErpConfig) -> Result<Self, ErpError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let mut erp = Self {
            client,
            endpoint: format!("{}/jsonrpc", config.url.trim_end_matches('/')),
            database: config.database.clone(),
            login: config.username.clone(),
            password: config.password.clone(),
            uid: 0,
            next_id: AtomicU64::new(1),
        };

        tracing::info!(
            "ERP: authenticating '{}' on {} (db='{}', password={})",
            erp.login,
            erp.endpoint,
            erp.database,
            if erp.password.is_empty() { "EMPTY" } else { "***" }
        );

        let uid = erp
            .authenticate_user(&erp.login, &erp.password)
            .await?
            .ok_or_else(|| ErpError::AuthenticationFailed(erp.login.clone()))?;
        erp.uid = uid;

        tracing::info!("ERP: connected as uid={}", uid);
        Ok(erp)
    }

    async fn call(&self, service: &str, method: &str, args: Value) -> Result<Value, ErpError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "method": "call",
            "params": {
                "service": service,
                "method": method,
                "args": args,
            },
            "id": id,
        });

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ErpError::rpc(format!(
                "HTTP {} from {}: {}",
                status, self.endpoint, text
            )));
        }

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| ErpError::Decode(format!("invalid JSON-RPC envelope: {}", e)))?;

        envelope.into_result()
    }

    async fn execute_kw(
        &self,
        model: &str,
        method: &str,
        args: Value,
        kwargs: Map<String, Value>,
    ) -> Result<Value, ErpError> {
        tracing::debug!("ERP: {}.{} args={} kwargs={:?}", model, method, args, kwargs);

        self.call(
            "object",
            "execute_kw",
            json!([
                self.database,
                self.uid,
                self.password,
                model,
                method,
                args,
                kwargs
            ]),
        )
        .await
    }

    /// `common.authenticate`: uid при совпадении логина и пароля, иначе None
    async fn authenticate_user(&self, login: &str, password: &str) -> Result<Option<i64>, ErpError> {
        let result = self
            .call(
                "common",
                "authenticate",
                json!([self.database, login, password, {}]),
            )
            .await?;

        Ok(result.as_i64().filter(|uid| *uid > 0))
    }
}

#[async_trait]
impl RecordSource for OdooClient {
    async fn count(&self, model: &str, criteria: &Criteria) -> Result<i64, ErpError> {
        let value = self
            .execute_kw(model, "search_count", json!([criteria.to_domain()]), Map::new())
            .await?;

        value
            .as_i64()
            .ok_or_else(|| ErpError::Decode(format!("{}.search_count returned {}", model, value)))
    }

    async fn search_ids(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &SearchOptions,
    ) -> Result<Vec<i64>, ErpError> {
        let mut kwargs = options.to_kwargs();
        // search не принимает fields
        kwargs.remove("fields");

        let value = self
            .execute_kw(model, "search", json!([criteria.to_domain()]), kwargs)
            .await?;

        decode_ids(model, value)
    }

    async fn read_by_ids(
        &self,
        model: &str,
        ids: &[i64],
        fields: &[&str],
    ) -> Result<Vec<RawRecord>, ErpError> {
        let mut kwargs = Map::new();
        kwargs.insert("fields".into(), json!(fields));

        let value = self.execute_kw(model, "read", json!([ids]), kwargs).await?;

        decode_records(model, value)
    }

    async fn search_read(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &SearchOptions,
    ) -> Result<Vec<RawRecord>, ErpError> {
        let value = self
            .execute_kw(
                model,
                "search_read",
                json!([criteria.to_domain()]),
                options.to_kwargs(),
            )
            .await?;

        decode_records(model, value)
    }
}

#[async_trait]
impl Authenticator for OdooClient {
    async fn authenticate(&self, login: &str, password: &str) -> Result<Option<i64>, ErpError> {
        self.authenticate_user(login, password).await
    }
}

/// Ответ JSON-RPC: либо `result`, либо `error`
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<RpcErrorData>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorData {
    #[serde(default)]
    message: Option<String>,
}

impl RpcResponse {
    fn into_result(self) -> Result<Value, ErpError> {
        if let Some(error) = self.error {
            // В data.message Odoo кладёт текст исключения, message обычно "Odoo Server Error"
            let message = error
                .data
                .and_then(|d| d.message)
                .filter(|m| !m.is_empty())
                .unwrap_or(error.message);
            return Err(ErpError::Rpc { message });
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

fn decode_ids(model: &str, value: Value) -> Result<Vec<i64>, ErpError> {
    serde_json::from_value(value)
        .map_err(|e| ErpError::Decode(format!("{}.search: expected id list: {}", model, e)))
}

fn decode_records(model: &str, value: Value) -> Result<Vec<RawRecord>, ErpError> {
    serde_json::from_value(value)
        .map_err(|e| ErpError::Decode(format!("{}: expected record list: {}", model, e)))
}
