//! Host-side SD card manager
//!
//! A directory stands in for the mounted card. The manager keeps the
//! explicit mounted flag the firmware exposes: a failed mount leaves a
//! manager whose every operation answers [`SdError::NotMounted`] instead
//! of panicking, and `unmount` returns it to that state. File arguments
//! are names relative to the card root.
//!
//! Capacity is supplied at mount time because hosts have no portable
//! filesystem-statistics call; used space is the recursive size of the
//! card contents and free space the remainder.

use log::{error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage layer failures
#[derive(Debug, Error)]
pub enum SdError {
    /// The card is not mounted; no operation can run
    #[error("sd card is not mounted")]
    NotMounted,
    /// Exclusive creation hit an existing file
    #[error("file '{0}' already exists")]
    AlreadyExists(String),
    /// Underlying filesystem failure
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Card statistics plus the root file listing
#[derive(Debug, Clone, PartialEq)]
pub struct CardDetails {
    /// Total capacity in megabytes
    pub capacity_mb: f64,
    /// Space consumed by card contents in megabytes
    pub used_mb: f64,
    /// Remaining space in megabytes
    pub free_mb: f64,
    /// File names in the card root, sorted
    pub files: Vec<String>,
}

/// Mount-state wrapper around the card root directory
pub struct SdManager {
    root: PathBuf,
    capacity_bytes: u64,
    mounted: bool,
}

impl SdManager {
    /// Mount the card at `root`, creating the directory if needed.
    ///
    /// A mount failure is logged and produces an unmounted manager, the
    /// firmware pattern: the caller checks [`is_mounted`] and every
    /// operation fails softly until then.
    ///
    /// [`is_mounted`]: SdManager::is_mounted
    pub fn mount(root: impl Into<PathBuf>, capacity_bytes: u64) -> Self {
        let root = root.into();
        let mounted = match fs::create_dir_all(&root) {
            Ok(()) => {
                info!("sd card mounted at {}", root.display());
                true
            }
            Err(err) => {
                error!("failed to mount sd card at {}: {err}", root.display());
                false
            }
        };
        Self {
            root,
            capacity_bytes,
            mounted,
        }
    }

    /// Whether the card is usable
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Release the card; subsequent operations answer `NotMounted`
    pub fn unmount(&mut self) {
        self.mounted = false;
        info!("sd card unmounted");
    }

    /// Root directory backing the card
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_mounted(&self) -> Result<(), SdError> {
        if self.mounted {
            Ok(())
        } else {
            Err(SdError::NotMounted)
        }
    }

    /// Sorted file names in the card root
    pub fn list_files(&self) -> Result<Vec<String>, SdError> {
        self.list_dir("")
    }

    /// Sorted file names in a subdirectory of the card
    pub fn list_dir(&self, sub: &str) -> Result<Vec<String>, SdError> {
        self.ensure_mounted()?;
        let dir = if sub.is_empty() {
            self.root.clone()
        } else {
            self.root.join(sub)
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// Read a file to a string
    pub fn read_file(&self, name: &str) -> Result<String, SdError> {
        self.ensure_mounted()?;
        let contents = fs::read_to_string(self.root.join(name))?;
        info!("read '{name}' ({} bytes)", contents.len());
        Ok(contents)
    }

    /// Write a file, creating or truncating it
    pub fn write_file(&self, name: &str, contents: &str) -> Result<(), SdError> {
        self.ensure_mounted()?;
        fs::write(self.root.join(name), contents)?;
        info!("wrote '{name}'");
        Ok(())
    }

    /// Create a file that must not already exist
    pub fn create_file(&self, name: &str, contents: &str) -> Result<(), SdError> {
        self.ensure_mounted()?;
        let path = self.root.join(name);
        if path.exists() {
            return Err(SdError::AlreadyExists(name.into()));
        }
        fs::write(path, contents)?;
        info!("created '{name}'");
        Ok(())
    }

    /// Append to a file, creating it when missing
    pub fn append_file(&self, name: &str, contents: &str) -> Result<(), SdError> {
        use std::io::Write;

        self.ensure_mounted()?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.root.join(name))?;
        file.write_all(contents.as_bytes())?;
        info!("appended {} bytes to '{name}'", contents.len());
        Ok(())
    }

    /// Rename a file within the card
    pub fn rename_file(&self, from: &str, to: &str) -> Result<(), SdError> {
        self.ensure_mounted()?;
        fs::rename(self.root.join(from), self.root.join(to))?;
        info!("renamed '{from}' to '{to}'");
        Ok(())
    }

    /// Copy a file within the card
    pub fn copy_file(&self, from: &str, to: &str) -> Result<(), SdError> {
        self.ensure_mounted()?;
        fs::copy(self.root.join(from), self.root.join(to))?;
        info!("copied '{from}' to '{to}'");
        Ok(())
    }

    /// Delete a file
    pub fn delete_file(&self, name: &str) -> Result<(), SdError> {
        self.ensure_mounted()?;
        fs::remove_file(self.root.join(name))?;
        info!("deleted '{name}'");
        Ok(())
    }

    /// Capacity, used/free space and the root listing
    pub fn details(&self) -> Result<CardDetails, SdError> {
        const MB: f64 = 1024.0 * 1024.0;

        self.ensure_mounted()?;
        let used_bytes = dir_size(&self.root)?;
        let capacity_mb = self.capacity_bytes as f64 / MB;
        let used_mb = used_bytes as f64 / MB;
        let details = CardDetails {
            capacity_mb,
            used_mb,
            free_mb: (capacity_mb - used_mb).max(0.0),
            files: self.list_files()?,
        };
        info!(
            "card details: {:.2} MB capacity, {:.2} MB used, {:.2} MB free, {} files",
            details.capacity_mb,
            details.used_mb,
            details.free_mb,
            details.files.len()
        );
        Ok(details)
    }

    /// Next free name of the form `"{base} {n}.{ext}"` in the card root.
    ///
    /// Existing numbers are scanned tolerantly: stray spaces around the
    /// number are accepted, non-numeric middles are ignored. An
    /// unmounted card answers `"{base} 1.{ext}"` without touching the
    /// filesystem.
    pub fn next_incremental_name(&self, base: &str, ext: &str) -> String {
        let existing = self.list_files().unwrap_or_default();
        let prefix = format!("{base} ");
        let suffix = format!(".{ext}");
        let mut max_n = 0u32;

        for name in &existing {
            let middle = match name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(&suffix))
            {
                Some(middle) => middle.trim(),
                None => continue,
            };
            if let Ok(n) = middle.parse::<u32>() {
                max_n = max_n.max(n);
            }
        }

        format!("{base} {}{suffix}", max_n + 1)
    }
}

/// Recursive byte size of a directory's contents
fn dir_size(path: &Path) -> io::Result<u64> {
    let mut total = 0;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if meta.is_dir() {
            total += dir_size(&entry.path())?;
        } else {
            total += meta.len();
        }
    }
    Ok(total)
}
