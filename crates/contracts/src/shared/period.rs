use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Именованные периоды для сводок по продажам и счетам
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    /// Последние 24 часа
    #[serde(rename = "1D")]
    Last24Hours,
    /// Последние 7 дней
    #[serde(rename = "7D")]
    Last7Days,
    /// Последние 30 дней
    #[serde(rename = "30D")]
    Last30Days,
    /// Последние 90 дней
    #[serde(rename = "90D")]
    Last90Days,
    /// Текущий календарный месяц
    #[serde(rename = "MONTHLY")]
    CurrentMonth,
    /// Текущий календарный год
    #[serde(rename = "YEARLY")]
    CurrentYear,
}

impl PeriodType {
    /// Код периода, как он передаётся в `period_type`
    pub fn code(&self) -> &'static str {
        match self {
            PeriodType::Last24Hours => "1D",
            PeriodType::Last7Days => "7D",
            PeriodType::Last30Days => "30D",
            PeriodType::Last90Days => "90D",
            PeriodType::CurrentMonth => "MONTHLY",
            PeriodType::CurrentYear => "YEARLY",
        }
    }

    pub fn all() -> Vec<PeriodType> {
        vec![
            PeriodType::Last24Hours,
            PeriodType::Last7Days,
            PeriodType::Last30Days,
            PeriodType::Last90Days,
            PeriodType::CurrentMonth,
            PeriodType::CurrentYear,
        ]
    }

    /// Парсинг из строки (регистр учитывается)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1D" => Some(PeriodType::Last24Hours),
            "7D" => Some(PeriodType::Last7Days),
            "30D" => Some(PeriodType::Last30Days),
            "90D" => Some(PeriodType::Last90Days),
            "MONTHLY" => Some(PeriodType::CurrentMonth),
            "YEARLY" => Some(PeriodType::CurrentYear),
            _ => None,
        }
    }
}

impl Default for PeriodType {
    fn default() -> Self {
        PeriodType::Last30Days
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Диапазон дат, по которому строилась сводка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// Query-параметры period-summary эндпоинтов
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodSummaryQuery {
    #[serde(default)]
    pub period_type: Option<String>,
    /// "YYYY-MM-DD"
    #[serde(default)]
    pub start_date: Option<String>,
    /// "YYYY-MM-DD"
    #[serde(default)]
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for period in PeriodType::all() {
            assert_eq!(PeriodType::from_code(period.code()), Some(period));
        }
        assert_eq!(PeriodType::from_code("30d"), None);
        assert_eq!(PeriodType::from_code("WEEKLY"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&PeriodType::CurrentMonth).unwrap();
        assert_eq!(json, "\"MONTHLY\"");
        let parsed: PeriodType = serde_json::from_str("\"90D\"").unwrap();
        assert_eq!(parsed, PeriodType::Last90Days);
    }
}
