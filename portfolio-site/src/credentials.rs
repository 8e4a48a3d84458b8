//! Basic-Auth credential pairs and header decoding.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use constant_time_eq::constant_time_eq;
use std::fmt;
use thiserror::Error;

/// Standard alphabet; decoding accepts tokens with or without `=` padding,
/// encoding always pads.
const BASIC_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why an `Authorization` header could not be turned into a [`CredentialPair`].
///
/// Callers fold every variant into the same authentication failure; the
/// distinction exists for logs only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("authorization header is not visible ASCII")]
    NotAscii,
    #[error("authorization header has no credential token")]
    MissingToken,
    #[error("credential token is not valid base64")]
    Base64,
    #[error("decoded credentials are not valid UTF-8")]
    Utf8,
    #[error("decoded credentials have no ':' separator")]
    MissingSeparator,
}

#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub username: String,
    pub password: String,
}

impl CredentialPair {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Decodes the value of an `Authorization` header.
    ///
    /// The second whitespace-separated token is base64-decoded and split on
    /// the first colon. The scheme token is not checked.
    pub fn from_header_value(value: &str) -> Result<Self, CredentialError> {
        let token = value
            .split_whitespace()
            .nth(1)
            .ok_or(CredentialError::MissingToken)?;
        let bytes = BASIC_ENGINE.decode(token).map_err(|_| CredentialError::Base64)?;
        let decoded = String::from_utf8(bytes).map_err(|_| CredentialError::Utf8)?;
        let (username, password) = decoded
            .split_once(':')
            .ok_or(CredentialError::MissingSeparator)?;
        Ok(Self::new(username, password))
    }

    /// Like [`CredentialPair::from_header_value`], for raw header bytes.
    pub fn from_header_bytes(value: &[u8]) -> Result<Self, CredentialError> {
        let value = std::str::from_utf8(value)
            .ok()
            .filter(|v| v.bytes().all(|b| b == b'\t' || (b' '..=b'~').contains(&b)))
            .ok_or(CredentialError::NotAscii)?;
        Self::from_header_value(value)
    }

    /// `Basic <base64(username:password)>`, as a client would send it.
    pub fn to_header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASIC_ENGINE.encode(raw))
    }

    /// Exact equality on both fields.
    pub fn matches(&self, other: &CredentialPair) -> bool {
        let user_ok = constant_time_eq(self.username.as_bytes(), other.username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), other.password.as_bytes());
        user_ok & pass_ok
    }
}

// Keep passwords out of logs.
impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn decodes_basic_header() {
        // "kurita:chicken"
        let pair = CredentialPair::from_header_value("Basic a3VyaXRhOmNoaWNrZW4=").unwrap();
        assert_eq!(pair, CredentialPair::new("kurita", "chicken"));
    }

    #[test]
    fn unpadded_token_decodes() {
        // "kurita:chicken" with the trailing '=' dropped
        let pair = CredentialPair::from_header_value("Basic a3VyaXRhOmNoaWNrZW4").unwrap();
        assert_eq!(pair, CredentialPair::new("kurita", "chicken"));
    }

    #[test]
    fn encoding_keeps_padding() {
        assert_eq!(
            CredentialPair::new("kurita", "chicken").to_header_value(),
            "Basic a3VyaXRhOmNoaWNrZW4="
        );
    }

    #[test]
    fn password_keeps_everything_after_first_colon() {
        let header = CredentialPair::new("kurita", "a:b:c").to_header_value();
        let pair = CredentialPair::from_header_value(&header).unwrap();
        assert_eq!(pair.username, "kurita");
        assert_eq!(pair.password, "a:b:c");
    }

    #[test]
    fn empty_fields_are_allowed() {
        let pair = CredentialPair::from_header_value(&format!("Basic {}", STANDARD.encode(":"))).unwrap();
        assert_eq!(pair, CredentialPair::new("", ""));
    }

    #[test]
    fn scheme_token_is_not_inspected() {
        let header = format!("Whatever {}", STANDARD.encode("kurita:chicken"));
        assert!(CredentialPair::from_header_value(&header).is_ok());
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert_eq!(
            CredentialPair::from_header_value("Basic"),
            Err(CredentialError::MissingToken)
        );
        assert_eq!(
            CredentialPair::from_header_value("Basic !!!notbase64"),
            Err(CredentialError::Base64)
        );
        assert_eq!(
            CredentialPair::from_header_value(&format!("Basic {}", STANDARD.encode([0xff, 0xfe]))),
            Err(CredentialError::Utf8)
        );
        assert_eq!(
            CredentialPair::from_header_value(&format!("Basic {}", STANDARD.encode("nocolon"))),
            Err(CredentialError::MissingSeparator)
        );
        assert_eq!(
            CredentialPair::from_header_bytes(b"Basic \xe3\x81\x82"),
            Err(CredentialError::NotAscii)
        );
    }

    #[test]
    fn matching_requires_both_fields() {
        let expected = CredentialPair::new("kurita", "chicken");
        assert!(expected.matches(&CredentialPair::new("kurita", "chicken")));
        assert!(!expected.matches(&CredentialPair::new("kurita", "wrong")));
        assert!(!expected.matches(&CredentialPair::new("Kurita", "chicken")));
        assert!(!expected.matches(&CredentialPair::new("kurita", "chicken ")));
    }

    #[test]
    fn reencoding_gives_same_outcome() {
        let expected = CredentialPair::new("kurita", "chicken");
        for candidate in [
            CredentialPair::new("kurita", "chicken"),
            CredentialPair::new("kurita", "wrong"),
            CredentialPair::new("ユーザー", "パス:ワード"),
        ] {
            let first = CredentialPair::from_header_value(&candidate.to_header_value()).unwrap();
            let second = CredentialPair::from_header_value(&first.to_header_value()).unwrap();
            assert_eq!(first, second);
            assert_eq!(expected.matches(&first), expected.matches(&second));
        }
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", CredentialPair::new("kurita", "chicken"));
        assert!(rendered.contains("kurita"));
        assert!(!rendered.contains("chicken"));
    }
}
