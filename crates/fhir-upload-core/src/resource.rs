use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single FHIR resource as read from disk.
///
/// The document is kept as an untyped JSON value so that every member the
/// server understands is forwarded verbatim. Only `resourceType` and `id` are
/// ever inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(Value);

impl Resource {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn parse(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes).map(Self)
    }

    /// The `resourceType` member, if present and a string.
    pub fn resource_type(&self) -> Option<&str> {
        self.str_member("resourceType")
    }

    /// The logical `id` member, if present and a string.
    pub fn id(&self) -> Option<&str> {
        self.str_member("id")
    }

    /// Relative reference `{resourceType}/{id}`.
    ///
    /// Segments are joined as-is. FHIR restricts ids to `[A-Za-z0-9.-]`, so a
    /// conforming resource never needs escaping; a non-conforming id is passed
    /// through and left for the server to reject.
    pub fn reference(&self) -> Option<String> {
        Some(format!("{}/{}", self.resource_type()?, self.id()?))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn str_member(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Value> for Resource {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_type_and_id() {
        let r = Resource::new(json!({"resourceType": "Patient", "id": "123", "active": true}));
        assert_eq!(r.resource_type(), Some("Patient"));
        assert_eq!(r.id(), Some("123"));
        assert_eq!(r.reference().as_deref(), Some("Patient/123"));
    }

    #[test]
    fn non_string_members_count_as_missing() {
        let r = Resource::new(json!({"resourceType": "Patient", "id": 123}));
        assert_eq!(r.id(), None);
        assert_eq!(r.reference(), None);
    }

    #[test]
    fn non_object_documents_have_no_members() {
        let r = Resource::new(json!(["Patient", "123"]));
        assert_eq!(r.resource_type(), None);
        assert_eq!(r.id(), None);
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(Resource::parse(b"{\"resourceType\": ").is_err());
    }

    #[test]
    fn serializes_as_the_original_document() {
        let doc = json!({"resourceType": "Observation", "id": "o1", "status": "final"});
        let r = Resource::new(doc.clone());
        assert_eq!(serde_json::to_value(&r).unwrap(), doc);
    }
}
