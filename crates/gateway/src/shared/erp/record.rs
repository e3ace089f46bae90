use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Сырая запись из ERP
///
/// ERP отдаёт поля слабо типизированными: пустое значение приходит как
/// `false` или `null`, many2one как пара `[id, "name"]`, даты как строки.
/// Все аксессоры проверяют наличие и тип, отсутствие значения даёт `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    fn present(&self, field: &str) -> Option<&Value> {
        match self.0.get(field) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(value) => Some(value),
        }
    }

    /// id записи, 0 если поле отсутствует
    pub fn id(&self) -> i64 {
        self.int("id").unwrap_or(0)
    }

    pub fn int(&self, field: &str) -> Option<i64> {
        self.present(field).and_then(Value::as_i64)
    }

    pub fn float(&self, field: &str) -> Option<f64> {
        self.present(field).and_then(Value::as_f64)
    }

    pub fn string(&self, field: &str) -> Option<String> {
        self.present(field)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn boolean(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(Value::Bool(true)))
    }

    /// id из many2one поля: `[42, "Name"]` или просто `42`
    pub fn many2one(&self, field: &str) -> Option<i64> {
        let id = match self.present(field)? {
            Value::Array(pair) => pair.first().and_then(Value::as_i64),
            value => value.as_i64(),
        };
        id.filter(|id| *id != 0)
    }

    /// Дата-время из строки "YYYY-MM-DD HH:MM:SS" или "YYYY-MM-DD" (полночь)
    pub fn datetime(&self, field: &str) -> Option<NaiveDateTime> {
        let raw = self.present(field)?.as_str()?.trim();

        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, DATE_FORMAT)
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
    }
}
