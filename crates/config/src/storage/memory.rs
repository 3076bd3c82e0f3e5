//! In-memory slot storage.

use std::collections::HashMap;

use crate::error::StorageError;

use super::SlotStorage;

/// Slot storage that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: HashMap<String, String>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with `slot` pre-populated with `value`.
    pub fn with_slot(slot: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(slot.into(), value.into());
        storage
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write_slot(&mut self, slot: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
