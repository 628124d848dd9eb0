//! # Workshop Registrations
//!
//! The set of workshops the current user has signed up for.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Registration Operations                                 │
//! │                                                                         │
//! │  register(w) ─────► id already present? ──► yes: no-op (kept as-is)    │
//! │                                         └─► no:  push to the end       │
//! │                                                                         │
//! │  unregister(id) ──► removed if present, otherwise no-op                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Serialized as `{"registrations": [...]}`, the persisted layout.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::types::Workshop;
use crate::validation::{validate_id, validate_name};

/// One workshop sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkshopRegistration {
    pub id: String,
    pub title: String,
    /// ISO-8601 timestamp, never parsed here.
    pub date: String,
}

impl WorkshopRegistration {
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        WorkshopRegistration {
            id: id.into(),
            title: title.into(),
            date: date.into(),
        }
    }

    /// Registration record for a catalog workshop.
    pub fn from_workshop(workshop: &Workshop) -> Self {
        WorkshopRegistration::new(
            workshop.id.clone(),
            workshop.title.clone(),
            workshop.date.clone(),
        )
    }
}

/// Registrations in sign-up order, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkshopRegistrations {
    #[serde(default)]
    registrations: Vec<WorkshopRegistration>,
}

impl WorkshopRegistrations {
    pub fn new() -> Self {
        WorkshopRegistrations {
            registrations: Vec::new(),
        }
    }

    /// Builds the set from persisted records, as-is.
    pub fn from_registrations(registrations: Vec<WorkshopRegistration>) -> Self {
        WorkshopRegistrations { registrations }
    }

    pub fn registrations(&self) -> &[WorkshopRegistration] {
        &self.registrations
    }

    pub fn get(&self, id: &str) -> Option<&WorkshopRegistration> {
        self.registrations.iter().find(|r| r.id == id)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Registers for a workshop.
    ///
    /// Returns `Ok(true)` if added, `Ok(false)` if the id was already
    /// registered (the existing record is not overwritten).
    pub fn register(&mut self, registration: WorkshopRegistration) -> CoreResult<bool> {
        validate_id("id", &registration.id)?;
        validate_name("title", &registration.title)?;

        if self.is_registered(&registration.id) {
            return Ok(false);
        }

        self.registrations.push(registration);
        Ok(true)
    }

    /// Cancels a registration. Returns `true` if one was removed.
    pub fn unregister(&mut self, id: &str) -> bool {
        let initial_len = self.registrations.len();
        self.registrations.retain(|r| r.id != id);
        self.registrations.len() != initial_len
    }

    /// Drops later records whose id already appeared, keeping the first.
    pub fn dedup_by_id(&mut self) -> usize {
        let initial_len = self.registrations.len();
        let mut seen = HashSet::new();
        self.registrations.retain(|r| seen.insert(r.id.clone()));
        initial_len - self.registrations.len()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn block_printing() -> WorkshopRegistration {
        WorkshopRegistration::new("w1", "Block Printing", "2024-03-25T10:00:00Z")
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut regs = WorkshopRegistrations::new();

        assert!(regs.register(block_printing()).unwrap());
        assert!(!regs.register(block_printing()).unwrap());

        assert_eq!(regs.len(), 1);
        assert_eq!(regs.get("w1").unwrap().title, "Block Printing");
    }

    #[test]
    fn test_register_does_not_overwrite() {
        let mut regs = WorkshopRegistrations::new();
        regs.register(block_printing()).unwrap();

        let changed = WorkshopRegistration::new("w1", "Something Else", "2025-01-01T00:00:00Z");
        regs.register(changed).unwrap();

        assert_eq!(regs.registrations(), &[block_printing()]);
    }

    #[test]
    fn test_unregister_twice_is_idempotent() {
        let mut regs = WorkshopRegistrations::new();
        regs.register(block_printing()).unwrap();

        assert!(regs.unregister("w1"));
        assert!(!regs.unregister("w1"));
        assert!(regs.is_empty());
    }

    #[test]
    fn test_preserves_sign_up_order() {
        let mut regs = WorkshopRegistrations::new();
        for id in ["w3", "w1", "w2"] {
            regs.register(WorkshopRegistration::new(id, "Title", "2024-03-25T10:00:00Z"))
                .unwrap();
        }
        regs.unregister("w1");

        let ids: Vec<&str> = regs.registrations().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["w3", "w2"]);
    }

    #[test]
    fn test_register_rejects_blank_fields() {
        let mut regs = WorkshopRegistrations::new();

        let err = regs
            .register(WorkshopRegistration::new("", "Title", "2024-03-25T10:00:00Z"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = regs
            .register(WorkshopRegistration::new("w1", " ", "2024-03-25T10:00:00Z"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        assert!(regs.is_empty());
    }

    #[test]
    fn test_date_is_opaque() {
        let mut regs = WorkshopRegistrations::new();
        regs.register(WorkshopRegistration::new("w9", "Pottery", "next tuesday"))
            .unwrap();
        assert_eq!(regs.get("w9").unwrap().date, "next tuesday");
    }

    #[test]
    fn test_persisted_layout_round_trip() {
        let mut regs = WorkshopRegistrations::new();
        regs.register(block_printing()).unwrap();
        regs.register(WorkshopRegistration::new("w2", "Digital Marketing", "2024-03-27T14:00:00Z"))
            .unwrap();

        let json = serde_json::to_string(&regs).unwrap();
        assert!(json.starts_with(r#"{"registrations":[{"id":"w1""#));

        let back: WorkshopRegistrations = serde_json::from_str(&json).unwrap();
        assert_eq!(back, regs);
    }

    #[test]
    fn test_dedup_keeps_first() {
        let mut regs = WorkshopRegistrations::from_registrations(vec![
            block_printing(),
            WorkshopRegistration::new("w1", "Duplicate", "2024-01-01T00:00:00Z"),
        ]);
        assert_eq!(regs.dedup_by_id(), 1);
        assert_eq!(regs.registrations(), &[block_printing()]);
    }
}
