//! An in-memory [`FileManager`], used by the `heap` crate's tests so they do
//! not need a filesystem.

use crate::api::FileManager;
use crate::errors::FileError;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Storage {
    pages: RefCell<BTreeMap<u64, Box<[u8]>>>,
    directory: RefCell<Option<Vec<u8>>>,
}

/// Stores pages and the directory sidecar as plain buffers in memory.
///
/// Cloning shares the same backing storage (`Rc`, not `Arc`: this crate is
/// single-threaded throughout) so tests can simulate closing and reopening a
/// heap file without touching a filesystem.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFileManager {
    storage: Rc<Storage>,
}

impl InMemoryFileManager {
    /// Creates an empty in-memory file manager.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileManager for InMemoryFileManager {
    fn read_page(&self, offset: u64, destination: &mut [u8]) -> Result<bool, FileError> {
        match self.storage.pages.borrow().get(&offset) {
            Some(page) if page.len() == destination.len() => {
                destination.copy_from_slice(page);
                Ok(true)
            }
            Some(page) => Err(FileError::ShortRead {
                offset,
                expected: destination.len(),
                actual: page.len(),
            }),
            None => Ok(false),
        }
    }

    fn write_page(&self, offset: u64, page_data: &[u8]) -> Result<(), FileError> {
        self.storage
            .pages
            .borrow_mut()
            .insert(offset, page_data.to_vec().into_boxed_slice());
        Ok(())
    }

    fn read_directory(&self) -> Result<Option<Vec<u8>>, FileError> {
        Ok(self.storage.directory.borrow().clone())
    }

    fn write_directory(&self, bytes: &[u8]) -> Result<(), FileError> {
        *self.storage.directory.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_page_reads_as_absent() {
        let fm = InMemoryFileManager::new();
        let mut buf = [0u8; 8];
        assert!(!fm.read_page(0, &mut buf).unwrap());
    }

    #[test]
    fn write_then_read_round_trips() {
        let fm = InMemoryFileManager::new();
        fm.write_page(0, &[1, 2, 3, 4]).unwrap();
        let mut buf = [0u8; 4];
        assert!(fm.read_page(0, &mut buf).unwrap());
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn directory_round_trips() {
        let fm = InMemoryFileManager::new();
        assert_eq!(fm.read_directory().unwrap(), None);
        fm.write_directory(&[9, 9, 9]).unwrap();
        assert_eq!(fm.read_directory().unwrap(), Some(vec![9, 9, 9]));
    }
}
