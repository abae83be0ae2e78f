use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body for POST /user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub password: String,
}

/// Body for PATCH /user/:id.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Public part of the user returned to the client. The password hash never
/// leaves the repo layer.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub registration_time: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct DeleteStatus {
    pub status: &'static str,
}

impl DeleteStatus {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn public_user_has_no_password_field() {
        let user = PublicUser {
            id: 1,
            name: "alice".into(),
            registration_time: datetime!(2024-03-01 12:00 UTC),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn delete_status_shape() {
        let json = serde_json::to_value(DeleteStatus::deleted()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "deleted" }));
    }
}
