use crate::ads::dto::{CreateAdvertisement, UpdateAdvertisement};
use crate::error::ApiError;

/// Matches the VARCHAR(20) column constraint.
pub const MAX_HEADING_CHARS: usize = 20;

/// Structural checks only. The user-existence lookup is a separate repo
/// call made by the handler so this stays free of I/O.
pub fn check_create(body: &CreateAdvertisement) -> Result<(), ApiError> {
    check_heading(&body.heading)
}

pub fn check_update(body: &UpdateAdvertisement) -> Result<(), ApiError> {
    if let Some(heading) = &body.heading {
        check_heading(heading)?;
    }
    Ok(())
}

fn check_heading(heading: &str) -> Result<(), ApiError> {
    if heading.trim().is_empty() {
        return Err(ApiError::Validation("heading must not be empty".into()));
    }
    if heading.chars().count() > MAX_HEADING_CHARS {
        return Err(ApiError::Validation(format!(
            "heading must be at most {MAX_HEADING_CHARS} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_body(heading: &str) -> CreateAdvertisement {
        CreateAdvertisement {
            heading: heading.into(),
            description: "Selling a bike".into(),
            user_id: 1,
        }
    }

    #[test]
    fn accepts_heading_at_the_bound() {
        assert!(check_create(&create_body(&"x".repeat(MAX_HEADING_CHARS))).is_ok());
    }

    #[test]
    fn rejects_heading_over_the_bound() {
        let err = check_create(&create_body(&"x".repeat(MAX_HEADING_CHARS + 1))).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn rejects_blank_heading() {
        assert!(check_create(&create_body("   ")).is_err());
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 20 multibyte characters fit even though the byte length is larger.
        assert!(check_create(&create_body(&"я".repeat(MAX_HEADING_CHARS))).is_ok());
    }

    #[test]
    fn update_without_heading_passes() {
        let body = UpdateAdvertisement {
            description: Some("new text".into()),
            ..Default::default()
        };
        assert!(check_update(&body).is_ok());
    }

    #[test]
    fn update_with_long_heading_fails() {
        let body = UpdateAdvertisement {
            heading: Some("x".repeat(MAX_HEADING_CHARS + 1)),
            ..Default::default()
        };
        assert!(check_update(&body).is_err());
    }
}
