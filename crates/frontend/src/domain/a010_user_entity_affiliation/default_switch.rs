//! Making one affiliation the user's default.
//!
//! The backend has no atomic operation for this, so the client clears the
//! flag on the user's other defaults one by one and then sets it on the
//! target. Each PATCH waits for the previous one; the first failure stops
//! the sequence.

use contracts::domain::common::RecordId;
use serde_json::json;
use thiserror::Error;

use super::resource::Affiliations;
use crate::shared::crud::{Resource, Row};
use crate::shared::http::{ApiClient, ApiError, HttpTransport, Session};

#[derive(Debug, Error)]
#[error("Основная привязка не переключена (выполнено шагов: {completed} из {total}): {source}")]
pub struct DefaultSwitchError {
    pub completed: usize,
    pub total: usize,
    #[source]
    pub source: ApiError,
}

/// One PATCH of the sequence: record id and the new `is_default`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchStep {
    pub id: RecordId,
    pub is_default: bool,
}

pub fn is_default(row: &Row) -> bool {
    row.value("is_default").as_bool().unwrap_or(false)
}

/// Clears first, target last
pub fn switch_plan(rows: &[Row], target: &Row) -> Vec<SwitchStep> {
    let user = target.id_of("user_id");
    let mut steps: Vec<SwitchStep> = rows
        .iter()
        .filter(|r| r.id != target.id && user.is_some() && r.id_of("user_id") == user)
        .filter(|r| is_default(r))
        .map(|r| SwitchStep {
            id: r.id,
            is_default: false,
        })
        .collect();
    steps.push(SwitchStep {
        id: target.id,
        is_default: true,
    });
    steps
}

/// Returns the number of PATCHes sent
pub async fn make_default<T: HttpTransport, S: Session>(
    api: &ApiClient<T, S>,
    rows: &[Row],
    target: &Row,
) -> Result<usize, DefaultSwitchError> {
    let plan = switch_plan(rows, target);
    let total = plan.len();
    for (completed, step) in plan.into_iter().enumerate() {
        let endpoint = Affiliations.item_endpoint(step.id);
        api.patch(&endpoint, &json!({ "is_default": step.is_default }))
            .await
            .map_err(|source| DefaultSwitchError {
                completed,
                total,
                source,
            })?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::references::ReferenceData;
    use crate::shared::http::testing::{client, MockSession, MockTransport};
    use crate::shared::http::Method;
    use contracts::domain::a010_user_entity_affiliation::UserEntityAffiliation;

    fn aff(id: RecordId, user: RecordId, default: bool) -> Row {
        let record = UserEntityAffiliation {
            id: Some(id),
            user_id: Some(user),
            entity_id: Some(100 + id),
            is_active: true,
            is_default: default,
        };
        Row::project(&record, &ReferenceData::default()).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![aff(1, 7, true), aff(2, 7, false), aff(3, 8, true), aff(4, 7, true)]
    }

    #[test]
    fn test_plan_clears_same_user_defaults_then_sets_target() {
        let rows = rows();
        let plan = switch_plan(&rows, &rows[1]);
        assert_eq!(
            plan,
            vec![
                SwitchStep { id: 1, is_default: false },
                SwitchStep { id: 4, is_default: false },
                SwitchStep { id: 2, is_default: true },
            ]
        );
    }

    #[test]
    fn test_plan_for_lone_affiliation() {
        let rows = rows();
        let plan = switch_plan(&rows, &rows[2]);
        assert_eq!(plan, vec![SwitchStep { id: 3, is_default: true }]);
    }

    #[tokio::test]
    async fn test_patches_are_sent_in_order() {
        let t = MockTransport::new();
        let s = MockSession::with_token("tok");
        let rows = rows();

        let sent = make_default(&client(&t, &s), &rows, &rows[1]).await.unwrap();

        assert_eq!(sent, 3);
        let requests = t.requests();
        let trail: Vec<(Method, String, Option<String>)> = requests
            .into_iter()
            .map(|r| (r.method, r.url, r.body))
            .collect();
        let base = "http://test/api/core/user-entity-affiliations";
        assert_eq!(
            trail,
            vec![
                (Method::Patch, format!("{base}/1/"), Some(r#"{"is_default":false}"#.into())),
                (Method::Patch, format!("{base}/4/"), Some(r#"{"is_default":false}"#.into())),
                (Method::Patch, format!("{base}/2/"), Some(r#"{"is_default":true}"#.into())),
            ]
        );
    }

    #[tokio::test]
    async fn test_first_failure_stops_sequence() {
        let t = MockTransport::new();
        t.respond(Method::Patch, "/core/user-entity-affiliations/4/", 500, "boom");
        let s = MockSession::with_token("tok");
        let rows = rows();

        let err = make_default(&client(&t, &s), &rows, &rows[1]).await.unwrap_err();

        assert_eq!(err.completed, 1);
        assert_eq!(err.total, 3);
        assert_eq!(err.source.status(), Some(500));
        assert_eq!(t.count(Method::Patch), 2);
        assert!(err.to_string().contains("1 из 3"));
    }
}
