use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` the same way as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A record as the backend returns it. Fetched data is not validated, so the
/// text fields fall back to empty strings when absent or null.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Contact {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// `None` for a missing, null or empty message.
    pub fn note(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Body of create and update requests.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_record() {
        let json = r#"{
            "_id": "65f0a1",
            "name": "Suraj Singh",
            "email": "suraj@example.com",
            "phone": "7880314386",
            "message": "",
            "createdAt": "2024-03-12T10:15:00.000Z",
            "updatedAt": "2024-03-12T10:15:00.000Z",
            "__v": 0
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id, "65f0a1");
        assert_eq!(contact.note(), None);
        assert_eq!(contact.created_at.unwrap().to_rfc3339(), "2024-03-12T10:15:00+00:00");
    }

    #[test]
    fn tolerates_sparse_seeded_record() {
        let contact: Contact = serde_json::from_str(r#"{"id": "x1", "name": "Ann", "message": null}"#).unwrap();
        assert_eq!(contact.id, "x1");
        assert_eq!(contact.email, "");
        assert_eq!(contact.phone, "");
        assert!(contact.created_at.is_none());
    }

    #[test]
    fn null_text_fields_read_as_empty() {
        let json = r#"{"_id": "n1", "name": null, "email": "a@b.com", "phone": null, "createdAt": null}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.name, "");
        assert_eq!(contact.email, "a@b.com");
        assert_eq!(contact.phone, "");
        assert!(contact.created_at.is_none());
    }

    #[test]
    fn record_without_id_is_rejected() {
        assert!(serde_json::from_str::<Contact>(r#"{"name": "Ann"}"#).is_err());
    }
}
