//! File-backed cart slot.

use std::io::ErrorKind;
use std::path::PathBuf;

use vino_crackers_core::{CartStore, StoreError};

/// Cart slot stored as a JSON file.
///
/// Writes go to a sibling temporary file that is then renamed over the slot,
/// so an interrupted write never leaves a truncated record behind.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CartStore for FileSlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, record: &str) -> Result<(), StoreError> {
        let temp = self.temp_path();
        std::fs::write(&temp, record)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vino_crackers_core::{CartManager, ProductId};

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("vc-cart-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_reads_as_absent() {
        let slot = FileSlot::new(scratch_path());
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let path = scratch_path();
        let mut slot = FileSlot::new(&path);
        slot.write(r#"{"2":4}"#).unwrap();

        assert_eq!(slot.read().unwrap().as_deref(), Some(r#"{"2":4}"#));
        assert!(!slot.temp_path().exists());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_cart_survives_between_runs() {
        let path = scratch_path();
        {
            let mut manager = CartManager::load(FileSlot::new(&path));
            manager.adjust(ProductId::new(5), 2).unwrap();
        }

        let manager = CartManager::load(FileSlot::new(&path));
        assert_eq!(manager.cart().quantity(ProductId::new(5)), 2);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_corrupted_file_loads_empty_cart() {
        let path = scratch_path();
        std::fs::write(&path, "not a cart").unwrap();

        let manager = CartManager::load(FileSlot::new(&path));
        assert!(manager.cart().is_empty());
        std::fs::remove_file(path).unwrap();
    }
}
