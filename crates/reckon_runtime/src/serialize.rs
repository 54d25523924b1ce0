//! Sheet snapshot persistence using `MessagePack`.
//!
//! A snapshot is the durable part of a sheet: entry texts, per-entry radix
//! modes, and the selection. Answers and hints are never persisted; a load
//! is always followed by a full recalculation.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use reckon_foundation::{Error, ErrorKind, Result};
use reckon_sheet::{RadixMode, Sheet};
use serde::{Deserialize, Serialize};

/// The persisted form of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
    selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SnapshotEntry {
    text: String,
    radix: RadixMode,
}

impl Snapshot {
    /// Captures a sheet's durable state.
    #[must_use]
    pub fn of(sheet: &Sheet) -> Self {
        Self {
            entries: sheet
                .entries()
                .iter()
                .map(|entry| SnapshotEntry {
                    text: entry.text().to_string(),
                    radix: entry.radix(),
                })
                .collect(),
            selected: sheet.selected(),
        }
    }

    /// Writes this snapshot's entries and selection into a sheet.
    ///
    /// The caller recalculates afterwards; restored entries have no
    /// answers until then.
    pub fn restore(&self, sheet: &mut Sheet) {
        sheet.clear();
        for (i, snap) in self.entries.iter().enumerate() {
            if i == 0 {
                sheet.set_text(0, snap.text.clone());
            } else {
                sheet.push(snap.text.clone());
            }
            if let Some(entry) = sheet.entry_mut(i) {
                entry.set_radix(snap.radix);
            }
        }
        sheet.select(self.selected);
    }
}

/// Serializes a snapshot to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(snapshot: &Snapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(snapshot)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Saves a snapshot to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to, or if
/// serialization fails.
pub fn save_to_file<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(snapshot)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to write to file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    writer.flush().map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to flush file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    Ok(())
}

/// Loads a snapshot from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::Io(format!(
            "failed to read file '{}': {e}",
            path.as_ref().display()
        )))
    })?;

    from_bytes(&bytes)
}
