//! The pointer-down interaction sequencer.
//!
//! Each pointer-down builds one atomic [`InteractionPlan`]: a fresh line
//! snapshot for both sides, per-line animation targets with staggered
//! delays, and the timed note-sample triggers that sweep the line set in
//! lockstep with the animation. Nothing is applied until the whole plan
//! exists, so a failed draw leaves the previous state untouched; a new
//! plan supersedes (never stacks on) the one before it.

use serde::{Deserialize, Serialize};

use lineweave_compose::{pick_bool, regenerate_lines, DeterministicRng};
use lineweave_spec::{
    ArtworkConfig, CompositionParams, LineState, ReseedPolicy, Side, SpringConfig,
};

use crate::error::SequenceError;
use crate::samples::{SampleBank, SampleCategory, SampleRef};
use crate::scale::ScaleCatalog;
use crate::track::Track;

/// Animation target for one line, offset by its stagger delay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTarget {
    pub side: Side,
    pub delay_ms: u32,
    pub state: LineState,
}

/// A timed sample trigger; fired at the *start* of its audio step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioEvent {
    pub delay_ms: u32,
    pub category: SampleCategory,
    /// Index into the category's sample bank.
    pub sample_index: usize,
}

/// Everything one interaction schedules, generated atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionPlan {
    pub scale_index: usize,
    /// Stagger sweeps from the far end toward index 0.
    pub reversed: bool,
    pub melody_enabled: bool,
    pub bass_enabled: bool,
    /// True on the first interaction: the host must unlock its audio
    /// engine before honoring the audio events. The settle delay is
    /// already folded into their offsets.
    pub unlock_audio: bool,
    pub spring: SpringConfig,
    pub lines: Vec<LineTarget>,
    pub audio: Vec<AudioEvent>,
}

/// Spring animation scheduler provided by the presentation layer.
///
/// `start` replaces all in-flight animations; the sequencer always calls
/// `stop` first so re-entrant interactions interrupt rather than enqueue.
pub trait Animator {
    fn stop(&mut self);
    fn start(&mut self, targets: &[LineTarget], spring: SpringConfig);
}

/// Sample playback handle provided by the host audio engine.
pub trait SamplePlayer {
    fn trigger_attack(&mut self, sample: &SampleRef);
}

impl InteractionPlan {
    /// Replace the in-flight line animations with this plan's targets.
    pub fn apply_visuals(&self, animator: &mut dyn Animator) {
        animator.stop();
        animator.start(&self.lines, self.spring);
    }

    /// Resolve and fire every audio event, in schedule order. The host is
    /// responsible for honoring each event's `delay_ms`; this helper only
    /// sequences the trigger calls.
    pub fn dispatch_audio(
        &self,
        bank: &SampleBank,
        player: &mut dyn SamplePlayer,
    ) -> Result<(), SequenceError> {
        for event in &self.audio {
            let sample = bank.resolve(event.category, event.sample_index)?;
            player.trigger_attack(&sample);
        }
        Ok(())
    }
}

/// Interaction state machine for one artwork instance.
///
/// Owns the per-category step counters and the last-played scale index;
/// both are touched only from [`Sequencer::pointer_down`], matching the
/// single-threaded event model of the host.
#[derive(Debug, Clone)]
pub struct Sequencer {
    params: CompositionParams,
    config: ArtworkConfig,
    catalog: ScaleCatalog,
    base_seed: u32,
    interactions: u32,
    last_scale: Option<usize>,
    audio_unlocked: bool,
    pluck: Track,
    melody: Track,
    bass: Track,
}

impl Sequencer {
    /// Build a sequencer over the composition's immutable parameters,
    /// using the default scale catalog.
    pub fn new(
        params: CompositionParams,
        config: ArtworkConfig,
        base_seed: u32,
    ) -> Result<Self, SequenceError> {
        Self::with_catalog(params, config, base_seed, ScaleCatalog::default())
    }

    pub fn with_catalog(
        params: CompositionParams,
        config: ArtworkConfig,
        base_seed: u32,
        catalog: ScaleCatalog,
    ) -> Result<Self, SequenceError> {
        if catalog.len() < 2 {
            return Err(SequenceError::CatalogTooSmall {
                len: catalog.len(),
            });
        }
        Ok(Self {
            pluck: Track::idle(config.pluck_step_frequency),
            melody: Track::idle(config.accompaniment_step_frequency),
            bass: Track::idle(config.accompaniment_step_frequency),
            params,
            config,
            catalog,
            base_seed,
            interactions: 0,
            last_scale: None,
            audio_unlocked: false,
        })
    }

    /// Scale index chosen by the most recent interaction.
    pub fn last_scale(&self) -> Option<usize> {
        self.last_scale
    }

    /// Number of pointer-down interactions handled so far.
    pub fn interactions(&self) -> u32 {
        self.interactions
    }

    /// RNG for the next interaction, per the configured reseed policy.
    fn interaction_rng(&self) -> DeterministicRng {
        match self.config.reseed {
            ReseedPolicy::Seeded => DeterministicRng::new(
                DeterministicRng::derive_interaction_seed(self.base_seed, self.interactions),
            ),
            ReseedPolicy::SystemEntropy => DeterministicRng::from_entropy(),
        }
    }

    /// Handle one pointer-down: regenerate the line snapshot, pick a new
    /// scale, and lay out the staggered animation and audio schedules.
    pub fn pointer_down(&mut self) -> Result<InteractionPlan, SequenceError> {
        let mut rng = self.interaction_rng();
        self.interactions += 1;

        // First gesture unlocks the audio engine; give it a settle delay
        // before any trigger fires.
        let unlock_audio = !self.audio_unlocked;
        self.audio_unlocked = true;
        let audio_offset = if unlock_audio {
            self.config.unlock_settle_ms
        } else {
            0
        };

        let (left, right) = regenerate_lines(&self.params, &self.config, &mut rng)?;
        let reversed = pick_bool(&mut rng, 0.5);

        let scale = self.catalog.pick_next(&mut rng, self.last_scale)?.clone();
        self.last_scale = Some(scale.index);

        // Plucks always sound; the accompaniment layers join half the time.
        let melody_enabled = pick_bool(&mut rng, 0.5);
        let bass_enabled = pick_bool(&mut rng, 0.5);

        self.pluck.reset(scale.sequence);
        self.melody.reset(scale.melody);
        self.bass.reset(scale.bass);

        let stagger = self.config.stagger_ms;
        let mut lines = Vec::with_capacity(left.len() + right.len());
        push_targets(&mut lines, Side::Left, left, reversed, stagger);
        push_targets(&mut lines, Side::Right, right, reversed, stagger);

        // The audio sweep runs over a dummy index range sized to the wider
        // side; triggers fire on step onset, decoupled from the springs'
        // physical settling.
        let steps = self.params.max_count();
        let mut audio = Vec::new();
        for step in 0..steps {
            let offset = if reversed { steps - step } else { step };
            let delay_ms = audio_offset + stagger * offset;

            if let Some(sample_index) = self.pluck.on_step() {
                audio.push(AudioEvent {
                    delay_ms,
                    category: SampleCategory::Pluck,
                    sample_index,
                });
            }
            if melody_enabled {
                if let Some(sample_index) = self.melody.on_step() {
                    audio.push(AudioEvent {
                        delay_ms,
                        category: SampleCategory::Melody,
                        sample_index,
                    });
                }
            }
            if bass_enabled {
                if let Some(sample_index) = self.bass.on_step() {
                    audio.push(AudioEvent {
                        delay_ms,
                        category: SampleCategory::Bass,
                        sample_index,
                    });
                }
            }
        }

        Ok(InteractionPlan {
            scale_index: scale.index,
            reversed,
            melody_enabled,
            bass_enabled,
            unlock_audio,
            spring: self.config.spring,
            lines,
            audio,
        })
    }
}

fn push_targets(
    out: &mut Vec<LineTarget>,
    side: Side,
    states: Vec<LineState>,
    reversed: bool,
    stagger: u32,
) {
    let count = states.len() as u32;
    out.extend(states.into_iter().map(|state| {
        let offset = if reversed {
            count - state.index
        } else {
            state.index
        };
        LineTarget {
            side,
            delay_ms: stagger * offset,
            state,
        }
    }));
}
