//! Per-category step counters.
//!
//! Each sample category (pluck, melody, bass) advances through its scale
//! sequence as the audio step animation sweeps the line set. A track only
//! fires every `frequency` steps (plus the very first step), and its
//! position wraps back to index 1 — not 0 — because position 0 is
//! consumed by the first firing of the interaction.

/// Step counter for one sample category within one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    frequency: u32,
    sequence: Vec<usize>,
    steps_seen: u32,
    position: usize,
}

impl Track {
    /// An inert track; it fires nothing until [`Track::reset`] installs a
    /// sequence.
    pub fn idle(frequency: u32) -> Self {
        Self {
            frequency,
            sequence: Vec::new(),
            steps_seen: 0,
            position: 0,
        }
    }

    /// Install a new sequence and zero all counters. Called once per
    /// interaction, before any step fires.
    pub fn reset(&mut self, sequence: Vec<usize>) {
        self.sequence = sequence;
        self.steps_seen = 0;
        self.position = 0;
    }

    /// Register one audio step. Returns the sample bank index to trigger,
    /// or `None` when this step is gated out by the track's frequency.
    pub fn on_step(&mut self) -> Option<usize> {
        if self.sequence.is_empty() {
            return None;
        }
        self.steps_seen += 1;
        if self.steps_seen != 1 && self.steps_seen % self.frequency != 0 {
            return None;
        }
        if self.position > self.sequence.len() - 1 {
            self.position = 1;
        }
        let sample = self.sequence[self.position];
        self.position += 1;
        Some(sample)
    }
}
