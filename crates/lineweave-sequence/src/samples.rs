//! The note sample bank.
//!
//! Three fixed ordered collections of sample files (plucks, melody, bass),
//! resolved against a configured base path. Read-only after construction;
//! loading and playback belong to the host's audio engine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;

/// Sample layer triggered by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleCategory {
    Pluck,
    Melody,
    Bass,
}

const PLUCK_FILES: [&str; 8] = [
    "pluck-d7.mp3",
    "pluck-a7.mp3",
    "pluck-b7.mp3",
    "pluck-cs8.mp3",
    "pluck-d8.mp3",
    "pluck-e7.mp3",
    "pluck-fs7.mp3",
    "pluck-g7.mp3",
];

const MELODY_FILES: [&str; 16] = [
    "melody-11.mp3",
    "melody-12.mp3",
    "melody-13.mp3",
    "melody-14.mp3",
    "melody-21.mp3",
    "melody-22.mp3",
    "melody-23.mp3",
    "melody-24.mp3",
    "melody-31.mp3",
    "melody-32.mp3",
    "melody-33.mp3",
    "melody-34.mp3",
    "melody-41.mp3",
    "melody-42.mp3",
    "melody-43.mp3",
    "melody-44.mp3",
];

const BASS_FILES: [&str; 16] = [
    "bass-11.mp3",
    "bass-12.mp3",
    "bass-13.mp3",
    "bass-14.mp3",
    "bass-21.mp3",
    "bass-22.mp3",
    "bass-23.mp3",
    "bass-24.mp3",
    "bass-31.mp3",
    "bass-32.mp3",
    "bass-33.mp3",
    "bass-34.mp3",
    "bass-41.mp3",
    "bass-42.mp3",
    "bass-43.mp3",
    "bass-44.mp3",
];

/// A resolved, playable sample reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRef {
    pub category: SampleCategory,
    pub index: usize,
    pub path: PathBuf,
}

/// Fixed sample catalog rooted at a base path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleBank {
    base_path: PathBuf,
}

impl SampleBank {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn files(category: SampleCategory) -> &'static [&'static str] {
        match category {
            SampleCategory::Pluck => &PLUCK_FILES,
            SampleCategory::Melody => &MELODY_FILES,
            SampleCategory::Bass => &BASS_FILES,
        }
    }

    /// Number of samples in the given category.
    pub fn len(category: SampleCategory) -> usize {
        Self::files(category).len()
    }

    /// Resolve a bank index to a playable sample reference.
    pub fn resolve(
        &self,
        category: SampleCategory,
        index: usize,
    ) -> Result<SampleRef, SequenceError> {
        let files = Self::files(category);
        let file = files
            .get(index)
            .copied()
            .ok_or(SequenceError::SampleOutOfRange {
                category,
                index,
                len: files.len(),
            })?;
        Ok(SampleRef {
            category,
            index,
            path: self.base_path.join(file),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bank_sizes() {
        assert_eq!(SampleBank::len(SampleCategory::Pluck), 8);
        assert_eq!(SampleBank::len(SampleCategory::Melody), 16);
        assert_eq!(SampleBank::len(SampleCategory::Bass), 16);
    }

    #[test]
    fn test_resolve_joins_base_path() {
        let bank = SampleBank::new("assets/audio");
        let sample = bank.resolve(SampleCategory::Pluck, 3).unwrap();
        assert_eq!(sample.path, PathBuf::from("assets/audio/pluck-cs8.mp3"));
        assert_eq!(sample.index, 3);
    }

    #[test]
    fn test_resolve_out_of_range() {
        let bank = SampleBank::new("audio");
        assert!(matches!(
            bank.resolve(SampleCategory::Pluck, 8),
            Err(SequenceError::SampleOutOfRange {
                category: SampleCategory::Pluck,
                index: 8,
                len: 8
            })
        ));
    }
}
