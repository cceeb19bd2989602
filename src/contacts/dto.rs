use serde::{Deserialize, Serialize};

use crate::contacts::repo::Contact;

/// Request body for creating or replacing a contact. Fields stay optional at
/// the serde layer so presence is reported by validation with the domain
/// message instead of as a decode rejection; unknown body fields are ignored
/// and never stored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub favorite_color: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

/// Contact as returned to clients: the five fields plus the id in hex form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub favorite_color: String,
    pub birthday: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            favorite_color: contact.favorite_color,
            birthday: contact.birthday,
        }
    }
}

/// Insertion acknowledgment returned with 201.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedContactResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn request_tolerates_missing_and_unknown_fields() {
        let payload: ContactRequest =
            serde_json::from_str(r#"{"firstName":"Ada","role":"mathematician"}"#).unwrap();
        assert_eq!(payload.first_name.as_deref(), Some("Ada"));
        assert_eq!(payload.last_name, None);
        assert_eq!(payload.birthday, None);
    }

    #[test]
    fn response_uses_wire_field_names() {
        let id = ObjectId::new();
        let contact = Contact {
            id: Some(id),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            favorite_color: "blue".into(),
            birthday: "1815-12-10".into(),
        };
        let json = serde_json::to_value(ContactResponse::from(contact)).unwrap();
        assert_eq!(json["id"], id.to_hex());
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["favoriteColor"], "blue");
        assert_eq!(json["birthday"], "1815-12-10");
    }

    #[test]
    fn created_response_serializes_inserted_id() {
        let response = CreatedContactResponse {
            acknowledged: true,
            inserted_id: "0123456789abcdef01234567".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("insertedId"));
        assert!(json.contains("acknowledged"));
    }
}
