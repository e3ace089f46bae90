//! Разрешение периода сводки в конкретный диапазон дат.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use contracts::shared::period::{DateRange, PeriodSummaryQuery, PeriodType};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const CUSTOM_PERIOD_CODE: &str = "CUSTOM";

/// Диапазон и подпись периода
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: String,
}

impl ResolvedPeriod {
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start_date: self.start,
            end_date: self.end,
        }
    }

    /// Среднее за день: total / max(1, ceil(дней в диапазоне))
    pub fn average_daily(&self, total_amount: f64) -> f64 {
        average_daily(total_amount, self.start, self.end)
    }
}

/// Разрешить период относительно `now`.
///
/// Если заданы обе явные границы, они используются как есть, независимо от
/// `period_type`. Иначе диапазон считается от `now`; нераспознанный тип
/// (`None`) ведёт себя как последние 30 дней.
pub fn resolve(
    period_type: Option<PeriodType>,
    explicit_start: Option<NaiveDateTime>,
    explicit_end: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> ResolvedPeriod {
    let (start, end) = match (explicit_start, explicit_end) {
        (Some(start), Some(end)) => (start, end),
        _ => named_range(period_type.unwrap_or_default(), now),
    };

    let label = match period_type {
        Some(PeriodType::Last24Hours) => "Last 24 Hours".to_string(),
        Some(PeriodType::Last7Days) => "Last 7 Days".to_string(),
        Some(PeriodType::Last30Days) => "Last 30 Days".to_string(),
        Some(PeriodType::Last90Days) => "Last 90 Days".to_string(),
        Some(PeriodType::CurrentMonth) => end.format("%B %Y").to_string(),
        Some(PeriodType::CurrentYear) => end.format("%Y").to_string(),
        None => format!(
            "{} to {}",
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        ),
    };

    ResolvedPeriod { start, end, label }
}

fn named_range(period_type: PeriodType, now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    match period_type {
        PeriodType::Last24Hours => (now - Duration::days(1), now),
        PeriodType::Last7Days => (now - Duration::days(7), now),
        PeriodType::Last30Days => (now - Duration::days(30), now),
        PeriodType::Last90Days => (now - Duration::days(90), now),
        PeriodType::CurrentMonth => {
            let first = now.date() - Duration::days(i64::from(now.day0()));
            calendar_span(first, Months::new(1))
        }
        PeriodType::CurrentYear => {
            let first = now.date() - Duration::days(i64::from(now.ordinal0()));
            calendar_span(first, Months::new(12))
        }
    }
}

/// [first 00:00:00, first + months - 1s]
fn calendar_span(first: NaiveDate, months: Months) -> (NaiveDateTime, NaiveDateTime) {
    let start = first.and_time(NaiveTime::MIN);
    let end = (first + months).and_time(NaiveTime::MIN) - Duration::seconds(1);
    (start, end)
}

pub fn average_daily(total_amount: f64, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let days = ((end - start).num_seconds() as f64 / 86_400.0).ceil().max(1.0);
    total_amount / days
}

/// Ошибки разбора query-параметров period-summary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodQueryError {
    #[error("Both start_date and end_date must be provided for custom date range")]
    OneSidedRange,

    #[error("Invalid {field}: '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid period_type. Must be one of: 1D, 7D, 30D, 90D, MONTHLY, YEARLY")]
    InvalidPeriodType,
}

/// Проверенный запрос периода
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRequest {
    pub period_type: Option<PeriodType>,
    /// Что вернуть в `period_type` ответа
    pub period_code: String,
    pub explicit: Option<(NaiveDate, NaiveDate)>,
}

impl PeriodRequest {
    /// Разбор и валидация query-параметров
    ///
    /// - start_date/end_date: обе или ни одной
    /// - без period_type и без дат используется 30D
    /// - нераспознанный period_type допустим только вместе с явными датами
    pub fn from_query(query: &PeriodSummaryQuery) -> Result<Self, PeriodQueryError> {
        let start = parse_date("start_date", query.start_date.as_deref())?;
        let end = parse_date("end_date", query.end_date.as_deref())?;

        let explicit = match (start, end) {
            (Some(start), Some(end)) => Some((start, end)),
            (None, None) => None,
            _ => return Err(PeriodQueryError::OneSidedRange),
        };

        let token = query
            .period_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let (period_type, period_code) = match (token, explicit) {
            (None, None) => (Some(PeriodType::default()), PeriodType::default().code().to_string()),
            (None, Some(_)) => (None, CUSTOM_PERIOD_CODE.to_string()),
            (Some(token), _) => match PeriodType::from_code(token) {
                Some(period_type) => (Some(period_type), token.to_string()),
                None if explicit.is_some() => (None, token.to_string()),
                None => return Err(PeriodQueryError::InvalidPeriodType),
            },
        };

        Ok(Self {
            period_type,
            period_code,
            explicit,
        })
    }

    pub fn resolve(&self, now: NaiveDateTime) -> ResolvedPeriod {
        let (start, end) = match self.explicit {
            Some((start, end)) => (
                Some(start.and_time(NaiveTime::MIN)),
                Some(end.and_time(NaiveTime::MIN)),
            ),
            None => (None, None),
        };
        resolve(self.period_type, start, end, now)
    }
}

fn parse_date(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>, PeriodQueryError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(|_| PeriodQueryError::InvalidDate {
                field,
                value: value.to_string(),
            }),
    }
}
