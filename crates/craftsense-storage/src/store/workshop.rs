//! # Workshop Store
//!
//! Persisted workshop registrations, stored under
//! [`WORKSHOP_KEY`](crate::WORKSHOP_KEY) as `{"registrations": [...]}`.

use craftsense_core::{CoreResult, WorkshopRegistration, WorkshopRegistrations};
use tracing::debug;

use crate::backend::KeyValueStore;
use crate::error::StorageResult;
use crate::store::{persist, rehydrate, report_duplicates, save};
use crate::WORKSHOP_KEY;

/// Workshop registrations bound to a storage backend.
#[derive(Debug)]
pub struct WorkshopStore<S> {
    storage: S,
    registrations: WorkshopRegistrations,
}

impl<S: KeyValueStore> WorkshopStore<S> {
    /// Rehydrates registrations from `storage`. Never fails.
    pub fn open(storage: S) -> Self {
        let mut registrations: WorkshopRegistrations = rehydrate(&storage, WORKSHOP_KEY);
        report_duplicates(WORKSHOP_KEY, registrations.dedup_by_id());

        debug!(registrations = registrations.len(), "Workshop store opened");
        WorkshopStore {
            storage,
            registrations,
        }
    }

    pub fn registrations(&self) -> &[WorkshopRegistration] {
        self.registrations.registrations()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registrations.is_registered(id)
    }

    /// Registers, then persists.
    ///
    /// Returns `Ok(false)` when already registered; the stored record is
    /// left untouched.
    pub fn register(&mut self, registration: WorkshopRegistration) -> CoreResult<bool> {
        debug!(id = %registration.id, "register");
        let added = self.registrations.register(registration)?;
        self.save();
        Ok(added)
    }

    /// Cancels a registration, then persists.
    pub fn unregister(&mut self, id: &str) -> bool {
        debug!(id, "unregister");
        let removed = self.registrations.unregister(id);
        self.save();
        removed
    }

    /// Writes the current registrations, returning any storage error.
    pub fn persist(&self) -> StorageResult<()> {
        persist(&self.storage, WORKSHOP_KEY, &self.registrations)
    }

    fn save(&self) {
        save(&self.storage, WORKSHOP_KEY, &self.registrations);
    }
}
