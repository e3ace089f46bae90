use serde_json::{json, Map, Value};

/// Операторы сравнения, которые используются в фильтрах
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Ge,
    Le,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Ge => ">=",
            Operator::Le => "<=",
        }
    }
}

/// Одно условие фильтра: (поле, оператор, значение)
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
}

/// Фильтр ERP: конъюнкция условий
///
/// ```ignore
/// let criteria = Criteria::new()
///     .add("state", Operator::Eq, "posted")
///     .add("invoice_date", Operator::Ge, "2025-01-01");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    conditions: Vec<Condition>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, field: &str, operator: Operator, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition {
            field: field.to_string(),
            operator,
            value: value.into(),
        });
        self
    }

    /// Значение условия по полю и оператору
    pub fn value_of(&self, field: &str, operator: Operator) -> Option<&Value> {
        self.conditions
            .iter()
            .find(|c| c.field == field && c.operator == operator)
            .map(|c| &c.value)
    }

    /// Domain в формате ERP: `[[field, op, value], ...]`
    pub fn to_domain(&self) -> Value {
        Value::Array(
            self.conditions
                .iter()
                .map(|c| json!([c.field, c.operator.as_str(), c.value]))
                .collect(),
        )
    }
}

/// Параметры поиска: пагинация, набор полей и сортировка
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub fields: Vec<String>,
    pub order: Option<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn order(mut self, order: &str) -> Self {
        self.order = Some(order.to_string());
        self
    }

    /// kwargs для execute_kw
    pub fn to_kwargs(&self) -> Map<String, Value> {
        let mut kwargs = Map::new();
        if !self.fields.is_empty() {
            kwargs.insert("fields".into(), json!(self.fields));
        }
        if let Some(limit) = self.limit {
            kwargs.insert("limit".into(), json!(limit));
        }
        if let Some(offset) = self.offset.filter(|o| *o > 0) {
            kwargs.insert("offset".into(), json!(offset));
        }
        if let Some(order) = &self.order {
            kwargs.insert("order".into(), json!(order));
        }
        kwargs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_keeps_condition_order() {
        let criteria = Criteria::new()
            .add("state", Operator::Eq, "posted")
            .add("invoice_date", Operator::Ge, "2025-01-01")
            .add("invoice_date", Operator::Le, "2025-01-31");

        assert_eq!(
            criteria.to_domain(),
            json!([
                ["state", "=", "posted"],
                ["invoice_date", ">=", "2025-01-01"],
                ["invoice_date", "<=", "2025-01-31"]
            ])
        );
        assert_eq!(
            criteria.value_of("invoice_date", Operator::Le),
            Some(&json!("2025-01-31"))
        );
    }

    #[test]
    fn test_empty_criteria_is_empty_domain() {
        assert_eq!(Criteria::new().to_domain(), json!([]));
    }

    #[test]
    fn test_kwargs_skip_unset_values() {
        assert!(SearchOptions::new().to_kwargs().is_empty());

        let kwargs = SearchOptions::new()
            .limit(50)
            .offset(0)
            .fields(&["id", "name"])
            .order("date_order desc")
            .to_kwargs();

        assert_eq!(kwargs.get("limit"), Some(&json!(50)));
        assert_eq!(kwargs.get("offset"), None);
        assert_eq!(kwargs.get("fields"), Some(&json!(["id", "name"])));
        assert_eq!(kwargs.get("order"), Some(&json!("date_order desc")));
    }
}
