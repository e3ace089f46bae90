//! In-memory источник записей для тестов

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{Criteria, ErpError, RawRecord, RecordSource, SearchOptions};

/// Зафиксированный вызов источника
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub model: String,
    pub method: &'static str,
    pub criteria: Option<Criteria>,
    pub options: Option<SearchOptions>,
    pub ids: Vec<i64>,
    pub fields: Vec<String>,
}

/// Записи хранятся по моделям; фильтры не применяются, они только
/// записываются в журнал вызовов для проверок.
#[derive(Default)]
pub struct MockSource {
    records: HashMap<String, Vec<RawRecord>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, model: &str, records: Vec<Value>) -> Self {
        let parsed = records
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect();
        self.records.insert(model.to_string(), parsed);
        self
    }

    /// Все вызовы для модели завершаются ошибкой
    pub fn failing(mut self, model: &str) -> Self {
        self.failing.insert(model.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, model: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.model == model)
            .collect()
    }

    fn record_call(&self, call: Call) -> Result<(), ErpError> {
        let fails = self.failing.contains(&call.model);
        let model = call.model.clone();
        self.calls.lock().unwrap().push(call);
        if fails {
            return Err(ErpError::rpc(format!("{} is unavailable", model)));
        }
        Ok(())
    }

    fn stored(&self, model: &str) -> Vec<RawRecord> {
        self.records.get(model).cloned().unwrap_or_default()
    }

    fn window(&self, model: &str, options: &SearchOptions) -> Vec<RawRecord> {
        let offset = options.offset.unwrap_or(0).max(0) as usize;
        let limit = options.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        self.stored(model)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect()
    }
}

#[async_trait]
impl RecordSource for MockSource {
    async fn count(&self, model: &str, criteria: &Criteria) -> Result<i64, ErpError> {
        self.record_call(Call {
            model: model.to_string(),
            method: "count",
            criteria: Some(criteria.clone()),
            options: None,
            ids: vec![],
            fields: vec![],
        })?;
        Ok(self.stored(model).len() as i64)
    }

    async fn search_ids(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &SearchOptions,
    ) -> Result<Vec<i64>, ErpError> {
        self.record_call(Call {
            model: model.to_string(),
            method: "search_ids",
            criteria: Some(criteria.clone()),
            options: Some(options.clone()),
            ids: vec![],
            fields: vec![],
        })?;
        Ok(self.window(model, options).iter().map(RawRecord::id).collect())
    }

    async fn read_by_ids(
        &self,
        model: &str,
        ids: &[i64],
        fields: &[&str],
    ) -> Result<Vec<RawRecord>, ErpError> {
        self.record_call(Call {
            model: model.to_string(),
            method: "read_by_ids",
            criteria: None,
            options: None,
            ids: ids.to_vec(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        })?;
        Ok(self
            .stored(model)
            .into_iter()
            .filter(|r| ids.contains(&r.id()))
            .collect())
    }

    async fn search_read(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &SearchOptions,
    ) -> Result<Vec<RawRecord>, ErpError> {
        self.record_call(Call {
            model: model.to_string(),
            method: "search_read",
            criteria: Some(criteria.clone()),
            options: Some(options.clone()),
            ids: vec![],
            fields: options.fields.clone(),
        })?;
        Ok(self.window(model, options))
    }
}
