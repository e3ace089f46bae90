use contracts::system::auth::UserInfo;

use crate::shared::erp::{Criteria, ErpError, Operator, RawRecord, RecordSource, SearchOptions};

pub const MODEL: &str = "res.users";
pub const FIELDS: &[&str] = &["id", "login", "email", "active", "login_date"];

/// Пользователь ERP по id, None если такого нет
///
/// `read` по несуществующему id в ERP падает с MissingError, поэтому
/// используется search_read с фильтром по id: он возвращает пустой список.
pub async fn get_by_id(source: &dyn RecordSource, id: i64) -> Result<Option<UserInfo>, ErpError> {
    let criteria = Criteria::new().add("id", Operator::Eq, id);
    let options = SearchOptions::new().fields(FIELDS).limit(1);

    let records = source.search_read(MODEL, &criteria, &options).await?;
    Ok(records.iter().find(|r| r.id() == id).map(to_user_info))
}

fn to_user_info(raw: &RawRecord) -> UserInfo {
    UserInfo {
        id: raw.id(),
        username: raw.string("login").unwrap_or_default(),
        email: raw.string("email").unwrap_or_default(),
        active: raw.boolean("active"),
        last_login: raw.datetime("login_date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::erp::mock::MockSource;
    use async_trait::async_trait;
    use serde_json::json;

    /// Ведёт себя как ERP: read по неизвестному id падает,
    /// search_read по неизвестному id возвращает пустой список
    struct MissingUsers;

    #[async_trait]
    impl RecordSource for MissingUsers {
        async fn count(&self, _model: &str, _criteria: &Criteria) -> Result<i64, ErpError> {
            Ok(0)
        }

        async fn search_ids(
            &self,
            _model: &str,
            _criteria: &Criteria,
            _options: &SearchOptions,
        ) -> Result<Vec<i64>, ErpError> {
            Ok(vec![])
        }

        async fn read_by_ids(
            &self,
            _model: &str,
            _ids: &[i64],
            _fields: &[&str],
        ) -> Result<Vec<RawRecord>, ErpError> {
            Err(ErpError::rpc("Record does not exist or has been deleted."))
        }

        async fn search_read(
            &self,
            _model: &str,
            _criteria: &Criteria,
            _options: &SearchOptions,
        ) -> Result<Vec<RawRecord>, ErpError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let source = MockSource::new().with_records(
            MODEL,
            vec![
                json!({"id": 2, "login": "admin", "email": "admin@example.com", "active": true, "login_date": "2024-05-01 07:30:00"}),
            ],
        );

        let admin = get_by_id(&source, 2).await.unwrap().unwrap();
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.email, "admin@example.com");
        assert!(admin.active);
        assert_eq!(admin.last_login.unwrap().to_string(), "2024-05-01 07:30:00");

        let call = &source.calls()[0];
        assert_eq!(call.method, "search_read");
        assert_eq!(call.fields, FIELDS);
        assert_eq!(
            call.criteria.as_ref().unwrap().value_of("id", Operator::Eq),
            Some(&json!(2))
        );
        assert_eq!(call.options.as_ref().unwrap().limit, Some(1));
    }

    #[tokio::test]
    async fn test_empty_fields_default() {
        let source = MockSource::new().with_records(
            MODEL,
            vec![json!({"id": 6, "login": "demo", "email": false, "active": true, "login_date": false})],
        );

        let demo = get_by_id(&source, 6).await.unwrap().unwrap();
        assert_eq!(demo.email, "");
        assert_eq!(demo.last_login, None);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none_not_error() {
        assert!(get_by_id(&MissingUsers, 77).await.unwrap().is_none());
    }
}
