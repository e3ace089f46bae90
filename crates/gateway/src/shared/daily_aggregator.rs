use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

/// Запись, которую можно разложить по дням
pub trait DailyEntry {
    /// Основная дата документа (дата заказа / дата счёта)
    fn entry_date(&self) -> Option<NaiveDateTime>;
    /// Сумма, которая идёт в итог дня
    fn entry_amount(&self) -> f64;
}

/// Итоги одного календарного дня
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBucket<S> {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub count: u32,
    pub items: Vec<S>,
}

impl<S> DailyBucket<S> {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_amount: 0.0,
            count: 0,
            items: Vec::new(),
        }
    }
}

/// Ключ дня: дата без времени, без перевода часовых поясов.
/// Запись без даты попадает в нулевой день 1970-01-01.
pub fn day_key(date: Option<NaiveDateTime>) -> NaiveDate {
    date.map(|d| d.date()).unwrap_or_default()
}

/// Группировка по дням.
///
/// `summarize` получает запись и её порядковый номер внутри дня (с 1,
/// в порядке просмотра входного среза). Дни отсортированы по убыванию даты.
pub fn aggregate<R, S, F>(records: &[R], mut summarize: F) -> Vec<DailyBucket<S>>
where
    R: DailyEntry,
    F: FnMut(&R, u32) -> S,
{
    let mut days: HashMap<NaiveDate, DailyBucket<S>> = HashMap::new();

    for record in records {
        let date = day_key(record.entry_date());
        let bucket = days.entry(date).or_insert_with(|| DailyBucket::empty(date));

        bucket.count += 1;
        bucket.total_amount += record.entry_amount();
        let item = summarize(record, bucket.count);
        bucket.items.push(item);
    }

    let mut buckets: Vec<DailyBucket<S>> = days.into_values().collect();
    buckets.sort_by(|a, b| b.date.cmp(&a.date));
    buckets
}

/// Общая сумма и количество по всем дням
pub fn totals<S>(buckets: &[DailyBucket<S>]) -> (f64, u32) {
    buckets.iter().fold((0.0, 0), |(amount, count), bucket| {
        (amount + bucket.total_amount, count + bucket.count)
    })
}
