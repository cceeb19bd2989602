use lazy_static::lazy_static;
use mongodb::bson::oid::ObjectId;
use regex::Regex;
use tracing::warn;

use crate::contacts::dto::ContactRequest;
use crate::contacts::repo::Contact;
use crate::error::ApiError;

pub(crate) const REQUIRED_FIELDS_MESSAGE: &str =
    "All fields (firstName, lastName, email, favoriteColor, birthday) are required.";
pub(crate) const INVALID_EMAIL_MESSAGE: &str = "Invalid email format.";

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Checks the five required fields (present and non-empty), then the email
/// format; first failure wins. On success returns the document to store,
/// carrying exactly the five fields and no id.
pub(crate) fn validate_contact(payload: ContactRequest) -> Result<Contact, ApiError> {
    let first_name = required(payload.first_name);
    let last_name = required(payload.last_name);
    let email = required(payload.email);
    let favorite_color = required(payload.favorite_color);
    let birthday = required(payload.birthday);

    let (Some(first_name), Some(last_name), Some(email), Some(favorite_color), Some(birthday)) =
        (first_name, last_name, email, favorite_color, birthday)
    else {
        return Err(ApiError::Validation(REQUIRED_FIELDS_MESSAGE));
    };

    if !is_valid_email(&email) {
        return Err(ApiError::Validation(INVALID_EMAIL_MESSAGE));
    }

    Ok(Contact {
        id: None,
        first_name,
        last_name,
        email,
        favorite_color,
        birthday,
    })
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Syntactic gate on the path id; runs before any store call. The message is
/// operation-specific and becomes the 400 body verbatim.
pub(crate) fn parse_object_id(id: &str, message: &'static str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| {
        warn!(%id, "malformed contact id");
        ApiError::MalformedId(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> ContactRequest {
        ContactRequest {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("ada@example.com".into()),
            favorite_color: Some("blue".into()),
            birthday: Some("1815-12-10".into()),
        }
    }

    #[test]
    fn accepts_a_complete_contact() {
        let contact = validate_contact(full_payload()).expect("valid payload");
        assert_eq!(contact.id, None);
        assert_eq!(contact.first_name, "Ada");
        assert_eq!(contact.last_name, "Lovelace");
        assert_eq!(contact.email, "ada@example.com");
        assert_eq!(contact.favorite_color, "blue");
        assert_eq!(contact.birthday, "1815-12-10");
    }

    #[test]
    fn missing_field_reports_required_message() {
        let mut payload = full_payload();
        payload.birthday = None;
        let err = validate_contact(payload).unwrap_err();
        assert!(matches!(err, ApiError::Validation(m) if m == REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn empty_field_reports_required_message() {
        let mut payload = full_payload();
        payload.favorite_color = Some(String::new());
        let err = validate_contact(payload).unwrap_err();
        assert!(matches!(err, ApiError::Validation(m) if m == REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn missing_field_wins_over_bad_email() {
        let mut payload = full_payload();
        payload.first_name = None;
        payload.email = Some("not-an-email".into());
        let err = validate_contact(payload).unwrap_err();
        assert!(matches!(err, ApiError::Validation(m) if m == REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn bad_email_reports_email_message() {
        let mut payload = full_payload();
        payload.email = Some("ada@example".into());
        let err = validate_contact(payload).unwrap_err();
        assert!(matches!(err, ApiError::Validation(m) if m == INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn email_format_rules() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        // no @
        assert!(!is_valid_email("adaexample.com"));
        // no . after the @
        assert!(!is_valid_email("ada@examplecom"));
        assert!(!is_valid_email("ada@."));
        // whitespace anywhere
        assert!(!is_valid_email("ada lovelace@example.com"));
        assert!(!is_valid_email("ada@exa mple.com"));
        assert!(!is_valid_email("ada@example.com "));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn object_id_gate_accepts_24_hex() {
        let oid = parse_object_id("0123456789abcdef01234567", "bad id").expect("valid oid");
        assert_eq!(oid.to_hex(), "0123456789abcdef01234567");
    }

    #[test]
    fn object_id_gate_rejects_malformed_ids() {
        let candidates = [
            "",
            "123",
            "zzzzzzzzzzzzzzzzzzzzzzzz",
            "0123456789abcdef0123456",
            "not an id",
        ];
        for candidate in candidates {
            let err = parse_object_id(candidate, "bad id").unwrap_err();
            assert!(matches!(err, ApiError::MalformedId("bad id")), "{candidate}");
        }
    }
}
