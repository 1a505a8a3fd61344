use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// JWT claims carried by an access token.
///
/// `sub` identifies the user, `exp`/`iat` are Unix timestamps stamped by the
/// [`TokenIssuer`](super::TokenIssuer). Anything else rides along in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user identity)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims identifying `subject`, ready to hand to the issuer.
    pub fn for_subject(subject: impl ToString) -> Self {
        Self::new().with_subject(subject)
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Add a custom field. Values that fail to serialize are skipped.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Subject, if present and non-empty.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::for_subject("alice@example.com");
        assert_eq!(claims.sub, Some("alice@example.com".to_string()));
        assert!(claims.exp.is_none());
        assert!(claims.iat.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let claims = Claims::new()
            .with_subject("alice@example.com")
            .with_expiration(1234567890)
            .with_issued_at(1234567800)
            .with_extra("role", "admin");

        assert_eq!(claims.subject(), Some("alice@example.com"));
        assert_eq!(claims.exp, Some(1234567890));
        assert_eq!(claims.iat, Some(1234567800));
        assert_eq!(claims.extra.get("role").unwrap().as_str(), Some("admin"));
    }

    #[test]
    fn test_empty_subject_is_absent() {
        assert_eq!(Claims::for_subject("").subject(), None);
        assert_eq!(Claims::new().subject(), None);
    }

    #[test]
    fn test_extra_fields_are_flattened() {
        let claims = Claims::for_subject("alice@example.com").with_extra("scope", "blog");
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["sub"], "alice@example.com");
        assert_eq!(json["scope"], "blog");
        assert!(json.get("exp").is_none());
        assert!(json.get("extra").is_none());
    }
}
