//! Scale-sequence catalog.
//!
//! Each entry pairs a pluck note pattern with the bass/melody sample
//! subsets that share its key. One entry is chosen per interaction,
//! never the same one twice in a row.

use serde::{Deserialize, Serialize};

use lineweave_compose::{pick_random, ComposeError, DeterministicRng};

use crate::error::SequenceError;

/// A fixed note-index pattern plus bass/melody sample-index subsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSequence {
    pub index: usize,
    /// Indices into the bass sample bank.
    pub bass: Vec<usize>,
    /// Indices into the melody sample bank.
    pub melody: Vec<usize>,
    /// Pluck note pattern; indices into the pluck sample bank.
    pub sequence: Vec<usize>,
}

/// The fixed catalog of scale sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleCatalog {
    entries: Vec<ScaleSequence>,
}

impl Default for ScaleCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                ScaleSequence {
                    index: 0,
                    bass: vec![0, 1, 2, 3],
                    melody: vec![0, 1, 2, 3],
                    sequence: vec![0, 6, 1, 2, 0, 6, 7, 2],
                },
                ScaleSequence {
                    index: 1,
                    bass: vec![4, 5, 6, 7],
                    melody: vec![4, 5, 6, 7],
                    sequence: vec![0, 5, 1, 2, 0, 6, 1, 2],
                },
                ScaleSequence {
                    index: 2,
                    bass: vec![8, 9, 10, 11],
                    melody: vec![8, 9, 10, 11],
                    sequence: vec![0, 6, 1, 3, 0, 6, 1, 2],
                },
                ScaleSequence {
                    index: 3,
                    bass: vec![12, 13, 14, 15],
                    melody: vec![12, 13, 14, 15],
                    sequence: vec![0, 6, 1, 2, 0, 6, 2, 4],
                },
            ],
        }
    }
}

impl ScaleCatalog {
    /// Build a catalog, enforcing the no-immediate-repeat precondition
    /// (at least 2 entries) and non-empty per-category sequences.
    pub fn new(entries: Vec<ScaleSequence>) -> Result<Self, SequenceError> {
        if entries.len() < 2 {
            return Err(SequenceError::CatalogTooSmall {
                len: entries.len(),
            });
        }
        for entry in &entries {
            for (part, seq) in [
                ("pluck", &entry.sequence),
                ("melody", &entry.melody),
                ("bass", &entry.bass),
            ] {
                if seq.is_empty() {
                    return Err(SequenceError::EmptyScaleSequence {
                        scale: entry.index,
                        part,
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick a scale uniformly at random, excluding the previous pick.
    pub fn pick_next(
        &self,
        rng: &mut DeterministicRng,
        last: Option<usize>,
    ) -> Result<&ScaleSequence, SequenceError> {
        let eligible: Vec<&ScaleSequence> = self
            .entries
            .iter()
            .filter(|entry| last != Some(entry.index))
            .collect();
        if eligible.is_empty() {
            return Err(SequenceError::NoEligibleScale);
        }
        let picked = pick_random(rng, &eligible).map_err(ComposeError::from)?;
        Ok(*picked)
    }
}
