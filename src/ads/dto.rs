use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body for POST /api. All three fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateAdvertisement {
    pub heading: String,
    pub description: String,
    pub user_id: i64,
}

/// Body for PATCH /api/:id. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAdvertisement {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<i64>,
}

/// GET response with the denormalized owner fields. The owner field names
/// are part of the existing wire contract.
#[derive(Debug, Serialize)]
pub struct AdvertisementDetails {
    pub id: i64,
    pub heading: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date_of_creation: OffsetDateTime,
    #[serde(rename = "User_name")]
    pub user_name: String,
    #[serde(rename = "id_user")]
    pub id_user: i64,
}

/// POST/PATCH response shape.
#[derive(Debug, Serialize)]
pub struct AdvertisementSummary {
    pub id: i64,
    pub heading: String,
    pub description: String,
    pub user_id: i64,
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
    fn details_keep_owner_wire_names() {
        let details = AdvertisementDetails {
            id: 7,
            heading: "Sale".into(),
            description: "Selling a bike".into(),
            date_of_creation: datetime!(2024-03-01 12:00 UTC),
            user_name: "alice".into(),
            id_user: 1,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["User_name"], "alice");
        assert_eq!(json["id_user"], 1);
        assert_eq!(json["heading"], "Sale");
    }

    #[test]
    fn delete_status_shape() {
        let json = serde_json::to_value(DeleteStatus::deleted()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "deleted" }));
    }

    #[test]
    fn update_body_tolerates_partial_maps() {
        let body: UpdateAdvertisement =
            serde_json::from_str(r#"{"heading": "New heading"}"#).unwrap();
        assert_eq!(body.heading.as_deref(), Some("New heading"));
        assert!(body.description.is_none());
        assert!(body.user_id.is_none());
    }

    #[test]
    fn create_body_requires_all_fields() {
        let result: Result<CreateAdvertisement, _> =
            serde_json::from_str(r#"{"heading": "Sale", "user_id": 1}"#);
        assert!(result.is_err());
    }
}
