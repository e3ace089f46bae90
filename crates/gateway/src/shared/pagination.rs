use std::collections::HashMap;

use contracts::shared::pagination::MAX_PAGE_SIZE;

use super::erp::{Criteria, ErpError, RawRecord, RecordSource, SearchOptions};

/// Окно страницы после нормализации входных параметров
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub page_size: i64,
    pub offset: i64,
}

/// Метаданные страницы для ответа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

/// Нормализация page/page_size. Никогда не возвращает ошибку:
/// `page < 1` превращается в 1, `page_size` вне [1, 500] в 500.
pub fn paginate(page: i64, page_size: i64) -> PageWindow {
    let page = page.max(1);
    let page_size = if (1..=MAX_PAGE_SIZE).contains(&page_size) {
        page_size
    } else {
        MAX_PAGE_SIZE
    };

    PageWindow {
        page,
        page_size,
        offset: (page - 1).saturating_mul(page_size),
    }
}

/// ceil(total_count / page_size), 0 для пустой выборки
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    if total_count <= 0 || page_size <= 0 {
        return 0;
    }
    (total_count + page_size - 1) / page_size
}

impl PageWindow {
    pub fn meta(&self, total_items: i64) -> PageMeta {
        PageMeta {
            page: self.page,
            page_size: self.page_size,
            total_items,
            total_pages: total_pages(total_items, self.page_size),
        }
    }
}

/// Одна страница записей модели: count, затем search по окну и пакетное
/// чтение найденных id. Пустая выборка или окно за пределами выборки
/// не порождают лишних запросов.
pub async fn fetch_page(
    source: &dyn RecordSource,
    model: &str,
    criteria: &Criteria,
    window: &PageWindow,
    order: &str,
    fields: &[&str],
) -> Result<(i64, Vec<RawRecord>), ErpError> {
    let total = source.count(model, criteria).await?;
    if total == 0 || window.offset >= total {
        return Ok((total, Vec::new()));
    }

    let options = SearchOptions::new()
        .limit(window.page_size)
        .offset(window.offset)
        .order(order);
    let ids = source.search_ids(model, criteria, &options).await?;
    if ids.is_empty() {
        return Ok((total, Vec::new()));
    }

    let records = source.read_by_ids(model, &ids, fields).await?;
    Ok((total, in_id_order(&ids, records)))
}

/// read не гарантирует порядок, восстанавливаем порядок поиска
fn in_id_order(ids: &[i64], records: Vec<RawRecord>) -> Vec<RawRecord> {
    let mut by_id: HashMap<i64, RawRecord> = records.into_iter().map(|r| (r.id(), r)).collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::erp::mock::MockSource;
    use crate::shared::erp::Operator;
    use serde_json::json;

    #[test]
    fn test_page_below_one_is_clamped() {
        for raw in [0, -1, -100, i64::MIN] {
            assert_eq!(paginate(raw, 20).page, 1);
            assert_eq!(paginate(raw, 20).offset, 0);
        }
    }

    #[test]
    fn test_page_size_outside_range_falls_back_to_max() {
        for raw in [0, -5, 501, 10_000] {
            assert_eq!(paginate(1, raw).page_size, 500);
        }
        assert_eq!(paginate(1, 1).page_size, 1);
        assert_eq!(paginate(1, 500).page_size, 500);
    }

    #[test]
    fn test_offset() {
        assert_eq!(
            paginate(3, 50),
            PageWindow {
                page: 3,
                page_size: 50,
                offset: 100
            }
        );
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 500), 0);
        assert_eq!(total_pages(1, 500), 1);
        assert_eq!(total_pages(500, 500), 1);
        assert_eq!(total_pages(501, 500), 2);
        assert_eq!(total_pages(101, 10), 11);
    }

    #[test]
    fn test_meta() {
        let meta = paginate(2, 10).meta(25);
        assert_eq!(
            meta,
            PageMeta {
                page: 2,
                page_size: 10,
                total_items: 25,
                total_pages: 3
            }
        );
    }

    fn orders(n: i64) -> Vec<serde_json::Value> {
        (1..=n).map(|id| json!({"id": id, "name": format!("SO{:03}", id)})).collect()
    }

    #[tokio::test]
    async fn test_fetch_page_reads_window() {
        let source = MockSource::new().with_records("sale.order", orders(25));
        let criteria = Criteria::new().add("state", Operator::Ne, "cancel");

        let (total, records) = fetch_page(
            &source,
            "sale.order",
            &criteria,
            &paginate(2, 10),
            "id desc",
            &["id", "name"],
        )
        .await
        .unwrap();

        assert_eq!(total, 25);
        let ids: Vec<i64> = records.iter().map(RawRecord::id).collect();
        assert_eq!(ids, (11..=20).collect::<Vec<_>>());

        let calls = source.calls();
        let methods: Vec<&str> = calls.iter().map(|c| c.method).collect();
        assert_eq!(methods, vec!["count", "search_ids", "read_by_ids"]);
        let search = calls[1].options.clone().unwrap();
        assert_eq!((search.limit, search.offset), (Some(10), Some(10)));
        assert_eq!(search.order.as_deref(), Some("id desc"));
        assert_eq!(calls[2].fields, vec!["id", "name"]);
    }

    #[tokio::test]
    async fn test_fetch_page_empty_and_out_of_range() {
        let empty = MockSource::new();
        let (total, records) =
            fetch_page(&empty, "sale.order", &Criteria::new(), &paginate(1, 500), "id", &["id"])
                .await
                .unwrap();
        assert_eq!(total, 0);
        assert!(records.is_empty());
        assert_eq!(empty.calls().len(), 1);

        let source = MockSource::new().with_records("sale.order", orders(5));
        let (total, records) =
            fetch_page(&source, "sale.order", &Criteria::new(), &paginate(3, 5), "id", &["id"])
                .await
                .unwrap();
        assert_eq!(total, 5);
        assert!(records.is_empty());
        assert_eq!(source.calls().len(), 1);
    }

    #[test]
    fn test_in_id_order() {
        let records: Vec<RawRecord> = [3, 1, 2]
            .iter()
            .map(|id| serde_json::from_value(json!({"id": id})).unwrap())
            .collect();
        let ordered = in_id_order(&[1, 2, 3, 4], records);
        let ids: Vec<i64> = ordered.iter().map(RawRecord::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
