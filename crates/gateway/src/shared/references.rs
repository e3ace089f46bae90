//! Пакетное разрешение ссылок (партнёр, журнал, валюта, продавец).
//!
//! Для страницы записей собираются уникальные id по каждому типу ссылки,
//! затем по каждому непустому набору выполняется ровно одно чтение.
//! Ошибка чтения одного справочника не роняет запрос: его карта остаётся
//! пустой, а поля записи получают пустые значения.

use std::collections::{BTreeSet, HashMap};

use super::erp::{RawRecord, RecordSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Partner,
    Journal,
    Currency,
    Salesperson,
}

impl ReferenceKind {
    /// Модель справочника в ERP
    pub fn model(&self) -> &'static str {
        match self {
            ReferenceKind::Partner => "res.partner",
            ReferenceKind::Journal => "account.journal",
            ReferenceKind::Currency => "res.currency",
            ReferenceKind::Salesperson => "res.users",
        }
    }

    /// many2one поле на документе, которое ссылается на справочник
    pub fn foreign_field(&self) -> &'static str {
        match self {
            ReferenceKind::Partner => "partner_id",
            ReferenceKind::Journal => "journal_id",
            ReferenceKind::Currency => "currency_id",
            ReferenceKind::Salesperson => "user_id",
        }
    }

    /// Поля, которые читаются из справочника
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ReferenceKind::Partner => &["id", "name", "vat", "phone", "mobile"],
            _ => &["id", "name"],
        }
    }
}

/// Атрибуты записи справочника, отсутствующие значения пустые
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceAttrs {
    pub name: String,
    pub vat: String,
    pub phone: String,
    pub mobile: String,
}

impl ReferenceAttrs {
    fn from_record(record: &RawRecord) -> Self {
        Self {
            name: record.string("name").unwrap_or_default(),
            vat: record.string("vat").unwrap_or_default(),
            phone: record.string("phone").unwrap_or_default(),
            mobile: record.string("mobile").unwrap_or_default(),
        }
    }
}

/// id → атрибуты, отдельная карта на каждый тип ссылки.
/// Живёт только в рамках одного запроса.
#[derive(Debug, Default)]
pub struct ReferenceLookup {
    maps: HashMap<ReferenceKind, HashMap<i64, ReferenceAttrs>>,
}

impl ReferenceLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ReferenceKind, id: i64, attrs: ReferenceAttrs) {
        self.maps.entry(kind).or_default().insert(id, attrs);
    }

    pub fn get(&self, kind: ReferenceKind, id: i64) -> Option<&ReferenceAttrs> {
        self.maps.get(&kind).and_then(|m| m.get(&id))
    }

    /// Атрибуты по id, либо пустые значения
    pub fn attrs_or_default(&self, kind: ReferenceKind, id: Option<i64>) -> ReferenceAttrs {
        id.and_then(|id| self.get(kind, id))
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self, kind: ReferenceKind) -> usize {
        self.maps.get(&kind).map(HashMap::len).unwrap_or(0)
    }
}

/// Уникальные ненулевые id ссылки заданного типа
pub fn collect_ids(records: &[RawRecord], kind: ReferenceKind) -> Vec<i64> {
    records
        .iter()
        .filter_map(|r| r.many2one(kind.foreign_field()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Разрешить ссылки страницы: по одному пакетному чтению на тип
pub async fn resolve(
    source: &dyn RecordSource,
    records: &[RawRecord],
    kinds: &[ReferenceKind],
) -> ReferenceLookup {
    let mut lookup = ReferenceLookup::new();

    for &kind in kinds {
        let ids = collect_ids(records, kind);
        if ids.is_empty() {
            continue;
        }

        match source.read_by_ids(kind.model(), &ids, kind.fields()).await {
            Ok(found) => {
                for record in &found {
                    lookup.insert(kind, record.id(), ReferenceAttrs::from_record(record));
                }
                tracing::debug!(
                    "Resolved {}/{} {} references",
                    found.len(),
                    ids.len(),
                    kind.model()
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read {} for {} ids, continuing without it: {}",
                    kind.model(),
                    ids.len(),
                    e
                );
            }
        }
    }

    lookup
}
