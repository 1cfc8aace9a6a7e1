//! Effect definitions.
//!
//! Effects are the declarative output of match evaluation. The evaluator
//! never touches state; it returns an `EffectBatch` that the resolver
//! applies in order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CueId, TileHandle};

/// A single side effect requested by the rules.
///
/// ## Host effects
///
/// - `PlayCue`: forwarded to the audio sink
/// - `SetVisible`: updates the registry and the visibility sink
///
/// ## Session effects
///
/// - `AdvanceCursor`: move progression to the next pair id
/// - `ClearSelection`: empty both selection slots
/// - `ResetSession`: full reset, including a scene reinitialization
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Play an audio cue once.
    PlayCue(CueId),

    /// Flip a tile face up or face down.
    SetVisible { tile: TileHandle, visible: bool },

    /// Advance the progress cursor by one.
    AdvanceCursor,

    /// Empty both selection slots.
    ClearSelection,

    /// Reset the whole session and reload the scene.
    ResetSession,
}

impl Effect {
    /// Create a hide-tile effect.
    pub fn hide(tile: TileHandle) -> Self {
        Self::SetVisible { tile, visible: false }
    }

    /// Create a reveal-tile effect.
    pub fn reveal(tile: TileHandle) -> Self {
        Self::SetVisible { tile, visible: true }
    }
}

/// Ordered list of effects. Evaluations produce at most five.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBatch {
    effects: SmallVec<[Effect; 5]>,
}

impl EffectBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect.
    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with(mut self, effect: Effect) -> Self {
        self.push(effect);
        self
    }

    /// Check whether the batch contains an effect.
    pub fn contains(&self, effect: &Effect) -> bool {
        self.effects.contains(effect)
    }

    /// Iterate over effects in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Get number of effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }
}

impl FromIterator<Effect> for EffectBatch {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EffectBatch {
    type Item = Effect;
    type IntoIter = smallvec::IntoIter<[Effect; 5]>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}
