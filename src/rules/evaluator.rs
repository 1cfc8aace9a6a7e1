//! Match evaluation.
//!
//! Given the two selected tiles and the progress cursor, decide the outcome
//! and the effects needed to apply it. Evaluation is pure: the same inputs
//! always produce the same `Evaluation`, and nothing is mutated.

use serde::{Deserialize, Serialize};

use crate::core::{CueId, MissPolicy, PairId, SessionConfig};
use crate::effects::{Effect, EffectBatch};
use crate::tiles::TileDescriptor;

/// How a completed pair was judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The tiles have different pair ids.
    Mismatch,
    /// Same pair id, and it is the one the cursor expects.
    MatchInOrder,
    /// Same pair id, but not the one the cursor expects. Punished like a
    /// mismatch.
    MatchOutOfOrder,
}

impl MatchOutcome {
    /// Whether the pick counts as progress.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, MatchOutcome::MatchInOrder)
    }
}

/// Outcome plus the effects that apply it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outcome: MatchOutcome,
    pub effects: EffectBatch,
}

/// Rules for judging a completed pair.
///
/// Implementations must be deterministic. The session empties the
/// selection after every evaluation, whatever effects are returned.
pub trait MatchRules {
    /// Judge tiles `a` and `b` against the cursor value `cursor`.
    fn evaluate(&self, a: &TileDescriptor, b: &TileDescriptor, cursor: PairId) -> Evaluation;
}

/// Ordered memory rules: pairs must be matched in ascending pair id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderedMatchRules {
    pub success_cue: CueId,
    pub failure_cue: CueId,
    pub miss_policy: MissPolicy,
}

impl OrderedMatchRules {
    /// Create rules from a session configuration.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            success_cue: config.success_cue,
            failure_cue: config.failure_cue,
            miss_policy: config.miss_policy,
        }
    }

    /// Effects shared by both kinds of miss.
    fn miss(&self, outcome: MatchOutcome, a: &TileDescriptor, b: &TileDescriptor) -> Evaluation {
        let mut effects = EffectBatch::new().with(Effect::PlayCue(self.failure_cue));
        match self.miss_policy {
            MissPolicy::HideSelected => {
                effects.push(Effect::hide(a.handle));
                effects.push(Effect::hide(b.handle));
                effects.push(Effect::ClearSelection);
            }
            MissPolicy::ReloadScene => effects.push(Effect::ResetSession),
        }
        Evaluation { outcome, effects }
    }
}

impl Default for OrderedMatchRules {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl MatchRules for OrderedMatchRules {
    fn evaluate(&self, a: &TileDescriptor, b: &TileDescriptor, cursor: PairId) -> Evaluation {
        if !a.pairs_with(b) {
            return self.miss(MatchOutcome::Mismatch, a, b);
        }
        if a.pair != cursor {
            return self.miss(MatchOutcome::MatchOutOfOrder, a, b);
        }

        // Matched tiles stay face up.
        Evaluation {
            outcome: MatchOutcome::MatchInOrder,
            effects: EffectBatch::new()
                .with(Effect::PlayCue(self.success_cue))
                .with(Effect::AdvanceCursor)
                .with(Effect::ClearSelection),
        }
    }
}
