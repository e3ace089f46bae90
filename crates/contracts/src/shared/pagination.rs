use serde::{Deserialize, Deserializer, Serialize};

/// Размер страницы по умолчанию и он же верхняя граница
pub const MAX_PAGE_SIZE: i64 = 500;

/// Query-параметры постраничных запросов (`?page=&page_size=`)
///
/// Значения не валидируются здесь: нормализация (clamp) выполняется на backend.
/// Нечисловое значение считается отсутствующим.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page_size: Option<i64>,
}

impl PageQuery {
    pub fn page_or_default(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn page_size_or_default(&self) -> i64 {
        self.page_size.unwrap_or(MAX_PAGE_SIZE)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
    /// Любое другое значение (bool, дробное число, объект)
    Other(serde::de::IgnoredAny),
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
        Some(NumberOrText::Other(_)) | None => None,
    })
}
