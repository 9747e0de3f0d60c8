use crate::api::FileManager;
use crate::errors::FileError;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::FileExt;
#[cfg(windows)]
use std::os::windows::fs::FileExt;

/// A disk-backed [`FileManager`] storing one heap file's data pages in
/// `data_path` and its directory sidecar in `directory_path`.
///
/// Every call opens the relevant file, performs its I/O, and drops the
/// handle before returning — there is no handle cache to keep consistent
/// (spec.md §5).
#[derive(Debug)]
pub struct DiskFileManager {
    data_path: PathBuf,
    directory_path: PathBuf,
}

impl DiskFileManager {
    /// Creates a manager bound to `data_path` for pages and `directory_path`
    /// for the directory sidecar. Neither file needs to exist yet.
    pub fn new(data_path: impl Into<PathBuf>, directory_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            directory_path: directory_path.into(),
        }
    }

    fn ensure_parent_dir(path: &Path) -> Result<(), FileError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn open_read(path: &Path) -> Result<Option<File>, FileError> {
        match OpenOptions::new().read(true).open(path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn open_write(path: &Path) -> Result<File, FileError> {
        Self::ensure_parent_dir(path)?;
        Ok(OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?)
    }

    #[inline]
    fn read_at(file: &File, buf: &mut [u8], offset: u64) -> std::io::Result<usize> {
        #[cfg(unix)]
        {
            file.read_at(buf, offset)
        }
        #[cfg(windows)]
        {
            file.seek_read(buf, offset)
        }
    }

    #[inline]
    fn write_at(file: &File, buf: &[u8], offset: u64) -> std::io::Result<usize> {
        #[cfg(unix)]
        {
            file.write_at(buf, offset)
        }
        #[cfg(windows)]
        {
            file.seek_write(buf, offset)
        }
    }
}

impl FileManager for DiskFileManager {
    fn read_page(&self, offset: u64, destination: &mut [u8]) -> Result<bool, FileError> {
        let Some(file) = Self::open_read(&self.data_path)? else {
            return Ok(false);
        };
        if file.metadata()?.len() < offset + destination.len() as u64 {
            return Ok(false);
        }

        let mut total = 0;
        while total < destination.len() {
            let n = Self::read_at(&file, &mut destination[total..], offset + total as u64)?;
            if n == 0 {
                return Err(FileError::ShortRead {
                    offset,
                    expected: destination.len(),
                    actual: total,
                });
            }
            total += n;
        }
        Ok(true)
    }

    fn write_page(&self, offset: u64, page_data: &[u8]) -> Result<(), FileError> {
        let file = Self::open_write(&self.data_path)?;

        let mut written = 0;
        while written < page_data.len() {
            let n = Self::write_at(&file, &page_data[written..], offset + written as u64)?;
            if n == 0 {
                return Err(FileError::ShortWrite {
                    offset,
                    written,
                    expected: page_data.len(),
                });
            }
            written += n;
        }
        Ok(())
    }

    fn read_directory(&self) -> Result<Option<Vec<u8>>, FileError> {
        let Some(mut file) = Self::open_read(&self.directory_path)? else {
            return Ok(None);
        };
        use std::io::Read;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(Some(buf))
    }

    fn write_directory(&self, bytes: &[u8]) -> Result<(), FileError> {
        Self::ensure_parent_dir(&self.directory_path)?;
        use std::io::Write;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.directory_path)?;
        file.write_all(bytes)?;
        Ok(())
    }
}
