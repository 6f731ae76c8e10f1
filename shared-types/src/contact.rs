use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Placeholder used by callers that need a non-empty name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A contact recovered from document text.
///
/// Empty strings mean "absent" for `name`, `email` and `phone`. `member_id`
/// is only set by the anchor-block strategy and carries the anchor line verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub member_id: Option<String>,
}

impl ContactRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            member_id: None,
        }
    }

    pub fn with_member_id(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    /// True when the record can be reached by email or phone.
    pub fn is_reachable(&self) -> bool {
        !self.email.is_empty() || !self.phone.is_empty()
    }

    /// Named and reachable.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.is_reachable()
    }

    /// The name, or `fallback` when the engine could not find one.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.name.is_empty() {
            fallback
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_omitted_when_absent() {
        let contact = ContactRecord::new("Jane Doe", "jane@example.com", "");
        let json = serde_json::to_value(&contact).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": ""
            })
        );
    }

    #[test]
    fn test_member_id_serialized_camel_case() {
        let contact = ContactRecord::new("John Smith", "john@example.com", "")
            .with_member_id("FL00123");
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("\"memberId\":\"FL00123\""));

        let parsed: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, contact);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let parsed: ContactRecord = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(parsed.email, "");
        assert_eq!(parsed.phone, "");
        assert!(parsed.member_id.is_none());
        assert!(!parsed.is_reachable());
    }

    #[test]
    fn test_completeness() {
        assert!(ContactRecord::new("Ada", "", "08012345678").is_complete());
        assert!(!ContactRecord::new("", "ada@example.com", "").is_complete());
        assert!(!ContactRecord::new("Ada", "", "").is_complete());
    }

    #[test]
    fn test_display_name_fallback() {
        let unnamed = ContactRecord::new("", "x@example.com", "");
        assert_eq!(unnamed.display_name(UNKNOWN_NAME), "Unknown");

        let named = ContactRecord::new("Ada", "x@example.com", "");
        assert_eq!(named.display_name(UNKNOWN_NAME), "Ada");
    }
}
