//! Durable cart slot port.
//!
//! A shopper's cart lives in exactly one named slot holding the serialized
//! record produced by [`Cart::to_record`](crate::Cart::to_record). Front ends
//! decide where that slot lives (a session, a file) by implementing
//! [`CartStore`].

use thiserror::Error;

/// Name of the slot holding the cart record.
pub const CART_SLOT: &str = "vinoCrackersCart";

/// Errors that can occur when reading or writing the cart slot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium failed.
    #[error("cart storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cart could not be encoded.
    #[error("cart encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backend rejected the operation.
    #[error("cart storage unavailable: {0}")]
    Unavailable(String),
}

/// A single durable slot holding the cart record.
pub trait CartStore {
    /// Read the record, or `None` when the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Replace the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn write(&mut self, record: &str) -> Result<(), StoreError>;
}

impl<S: CartStore + ?Sized> CartStore for &mut S {
    fn read(&self) -> Result<Option<String>, StoreError> {
        (**self).read()
    }

    fn write(&mut self, record: &str) -> Result<(), StoreError> {
        (**self).write(record)
    }
}

/// In-memory slot.
///
/// Used directly in tests and as a per-request snapshot of slots whose real
/// home is only reachable asynchronously (e.g. a web session).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySlot {
    record: Option<String>,
    dirty: bool,
}

impl MemorySlot {
    /// An empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with `record`.
    #[must_use]
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
            dirty: false,
        }
    }

    /// Current record.
    #[must_use]
    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }

    /// Whether the slot has been written since it was created.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl CartStore for MemorySlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.record.clone())
    }

    fn write(&mut self, record: &str) -> Result<(), StoreError> {
        self.record = Some(record.to_owned());
        self.dirty = true;
        Ok(())
    }
}
