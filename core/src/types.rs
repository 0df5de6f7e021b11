//! Domain DTO for the usuarios API.
//!
//! # Design
//! `User` mirrors the server's wire schema but is defined independently of
//! the mock-server crate; integration tests catch schema drift between the
//! two. The wire keys are the server's (`user`, `nombre`, `edad`), so the
//! login field is renamed on serialization to keep the Rust side readable.
//!
//! A record is immutable in spirit: create and update operations send a
//! whole record and never patch fields in place.

use serde::{Deserialize, Serialize};

/// One user record as exchanged with the usuarios API.
///
/// `id` is assigned by the server; `0` marks a draft that has not been
/// created yet. Every other field round-trips through the wire format
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    /// Login handle, `user` on the wire.
    #[serde(rename = "user")]
    pub username: String,
    /// Display name.
    pub nombre: String,
    /// Age in years.
    pub edad: u32,
}

impl User {
    /// A draft record for `create` — the server ignores the sentinel id and
    /// assigns its own.
    pub fn new(username: impl Into<String>, nombre: impl Into<String>, edad: u32) -> Self {
        Self {
            id: 0,
            username: username.into(),
            nombre: nombre.into(),
            edad,
        }
    }

    /// Whether this record carries a server-assigned id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Input-time validation of the form-entry rules. The client operations
    /// never call this — the server stays authoritative — but callers
    /// collecting user input are expected to run it before `create`/`update`.
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().chars().count() < 3 {
            return Err("login must be at least 3 characters".to_string());
        }
        if self.nombre.trim().chars().count() < 2 {
            return Err("nombre must be at least 2 characters".to_string());
        }
        if self.edad < 1 || self.edad > 120 {
            return Err("edad must be between 1 and 120".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_keys() {
        let user = User {
            id: 7,
            username: "ann".to_string(),
            nombre: "Ann".to_string(),
            edad: 30,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["user"], "ann");
        assert_eq!(json["nombre"], "Ann");
        assert_eq!(json["edad"], 30);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn roundtrips_through_json() {
        let user = User {
            id: 42,
            username: "bob_the_builder".to_string(),
            nombre: "Bob".to_string(),
            edad: 55,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn decode_rejects_missing_key() {
        let result: Result<User, _> =
            serde_json::from_str(r#"{"id":1,"user":"ann","nombre":"Ann"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn decode_rejects_wrong_type() {
        let result: Result<User, _> =
            serde_json::from_str(r#"{"id":1,"user":"ann","nombre":"Ann","edad":"30"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_has_sentinel_id() {
        let draft = User::new("ann", "Ann", 30);
        assert_eq!(draft.id, 0);
        assert!(!draft.is_persisted());
    }

    #[test]
    fn validate_accepts_well_formed_input() {
        assert!(User::new("ann", "Ann", 30).validate().is_ok());
    }

    #[test]
    fn validate_trims_before_measuring() {
        assert!(User::new("  ab  ", "Ann", 30).validate().is_err());
        assert!(User::new("ann", "  A ", 30).validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_age() {
        assert!(User::new("ann", "Ann", 0).validate().is_err());
        assert!(User::new("ann", "Ann", 121).validate().is_err());
        assert!(User::new("ann", "Ann", 120).validate().is_ok());
        assert!(User::new("ann", "Ann", 1).validate().is_ok());
    }
}
