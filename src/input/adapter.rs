//! Input-to-selection adapter.
//!
//! Tracks which tile zone the avatar is standing in and turns an
//! "interact" press into a selection. When the press completes a pair the
//! adapter runs the match rules and resolves their effects.
//!
//! ## States
//!
//! | candidate | interact does                                   |
//! |-----------|-------------------------------------------------|
//! | `None`    | nothing (logged)                                |
//! | `Some(t)` | reveal `t`, play its cue, `try_select(t)`, and  |
//! |           | evaluate if that completed a pair               |

use tracing::{debug, info, warn};

use super::event::Zone;
use crate::core::{EvaluationRecord, SessionState, TileHandle};
use crate::effects::{EffectResolver, ResolverContext};
use crate::rules::{Evaluation, MatchRules};
use crate::selection::SelectOutcome;
use crate::tiles::TileRegistry;

/// Result of an interact press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractOutcome {
    /// The avatar is not standing on a tile.
    NoTile,
    /// The candidate handle is not in the registry.
    UnknownTile(TileHandle),
    /// The tile was flipped and offered to the tracker.
    Selected {
        tile: TileHandle,
        selection: SelectOutcome,
        /// Present when the press completed a pair.
        evaluation: Option<Evaluation>,
    },
}

/// Zone tracking plus interact handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionAdapter {
    candidate: Option<TileHandle>,
}

impl InteractionAdapter {
    /// Create an adapter with no candidate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tile the avatar is standing on.
    #[must_use]
    pub fn candidate(&self) -> Option<TileHandle> {
        self.candidate
    }

    /// Whether an interact press would do anything.
    #[must_use]
    pub fn tile_available(&self) -> bool {
        self.candidate.is_some()
    }

    /// The avatar entered a zone. Non-tile zones are ignored.
    pub fn on_zone_enter(&mut self, zone: Zone) {
        if let Some(tile) = zone.tile() {
            debug!(%tile, "entered tile zone");
            self.candidate = Some(tile);
        }
    }

    /// The avatar left a zone. Leaving any tile zone drops the candidate.
    pub fn on_zone_exit(&mut self, zone: Zone) {
        if let Some(tile) = zone.tile() {
            debug!(%tile, "left tile zone");
            self.candidate = None;
        }
    }

    /// Drop the candidate without a zone event (scene reload).
    pub fn clear(&mut self) {
        self.candidate = None;
    }

    /// Handle an interact press.
    pub fn interact(
        &self,
        state: &mut SessionState,
        registry: &mut TileRegistry,
        rules: &dyn MatchRules,
        context: &mut ResolverContext,
    ) -> InteractOutcome {
        let Some(tile) = self.candidate else {
            info!("not standing on a tile, interact ignored");
            return InteractOutcome::NoTile;
        };
        let Some(descriptor) = registry.get(tile).copied() else {
            warn!(%tile, "interact on a tile that is not registered");
            return InteractOutcome::UnknownTile(tile);
        };

        // Flip and play the tile before deciding anything.
        EffectResolver::set_visible(registry, tile, true, context);
        context.audio.play(descriptor.cue);

        let selection = state.selection.try_select(tile);
        let evaluation = selection
            .pair()
            .and_then(|(first, second)| Self::evaluate(state, registry, rules, context, first, second));

        InteractOutcome::Selected {
            tile,
            selection,
            evaluation,
        }
    }

    /// Judge a completed pair and apply the result.
    fn evaluate(
        state: &mut SessionState,
        registry: &mut TileRegistry,
        rules: &dyn MatchRules,
        context: &mut ResolverContext,
        first: TileHandle,
        second: TileHandle,
    ) -> Option<Evaluation> {
        let (Some(a), Some(b)) = (registry.get(first).copied(), registry.get(second).copied()) else {
            warn!(%first, %second, "selected tile vanished from the registry, dropping selection");
            state.selection.clear();
            return None;
        };

        let cursor = state.current_pair();
        let evaluation = rules.evaluate(&a, &b, cursor);
        info!(%cursor, first = %a.pair, second = %b.pair, outcome = ?evaluation.outcome, "pair evaluated");

        state.record(EvaluationRecord {
            first,
            second,
            pairs: (a.pair, b.pair),
            cursor,
            outcome: evaluation.outcome,
        });
        EffectResolver::resolve_batch(state, registry, &evaluation.effects, context);
        // Slots are empty after every evaluation, even if the rules left them.
        state.selection.clear();

        Some(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CueId, PairId, VisualId};
    use crate::host::{HostCall, Recorder};
    use crate::rules::{MatchOutcome, OrderedMatchRules};

    fn registry() -> TileRegistry {
        let mut registry = TileRegistry::new();
        registry.add(PairId::new(1), CueId::new(10), VisualId::new(0));
        registry.add(PairId::new(1), CueId::new(10), VisualId::new(1));
        registry
    }

    #[test]
    fn test_zone_tracking() {
        let mut adapter = InteractionAdapter::new();
        assert!(!adapter.tile_available());

        adapter.on_zone_enter(Zone::Tile(TileHandle::new(1)));
        assert_eq!(adapter.candidate(), Some(TileHandle::new(1)));

        adapter.on_zone_enter(Zone::Other);
        assert_eq!(adapter.candidate(), Some(TileHandle::new(1)));

        adapter.on_zone_exit(Zone::Other);
        assert!(adapter.tile_available());

        adapter.on_zone_exit(Zone::Tile(TileHandle::new(1)));
        assert!(!adapter.tile_available());
    }

    #[test]
    fn test_interact_without_tile() {
        let adapter = InteractionAdapter::new();
        let mut state = SessionState::default();
        let mut registry = registry();
        let recorder = Recorder::new();
        let (mut audio, mut visuals, mut scene) = (recorder.clone(), recorder.clone(), recorder.clone());
        let mut context = ResolverContext::new(&mut audio, &mut visuals, &mut scene);

        let outcome = adapter.interact(&mut state, &mut registry, &OrderedMatchRules::default(), &mut context);

        assert_eq!(outcome, InteractOutcome::NoTile);
        assert!(state.selection.is_empty());
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_interact_reveals_and_selects() {
        let mut adapter = InteractionAdapter::new();
        let mut state = SessionState::default();
        let mut registry = registry();
        let recorder = Recorder::new();
        let (mut audio, mut visuals, mut scene) = (recorder.clone(), recorder.clone(), recorder.clone());
        let mut context = ResolverContext::new(&mut audio, &mut visuals, &mut scene);
        let rules = OrderedMatchRules::default();

        adapter.on_zone_enter(Zone::Tile(TileHandle::new(0)));
        let outcome = adapter.interact(&mut state, &mut registry, &rules, &mut context);

        assert_eq!(
            outcome,
            InteractOutcome::Selected {
                tile: TileHandle::new(0),
                selection: SelectOutcome::First,
                evaluation: None,
            }
        );
        assert!(registry.is_visible(TileHandle::new(0)));
        assert_eq!(
            recorder.take(),
            vec![HostCall::SetVisible(VisualId::new(0), true), HostCall::Play(CueId::new(10))]
        );

        adapter.on_zone_exit(Zone::Tile(TileHandle::new(0)));
        adapter.on_zone_enter(Zone::Tile(TileHandle::new(1)));
        let outcome = adapter.interact(&mut state, &mut registry, &rules, &mut context);

        match outcome {
            InteractOutcome::Selected { evaluation: Some(eval), .. } => {
                assert_eq!(eval.outcome, MatchOutcome::MatchInOrder);
            }
            other => panic!("Expected an evaluation, got {other:?}"),
        }
        assert_eq!(state.current_pair(), PairId::new(2));
        assert!(state.selection.is_empty());
        assert_eq!(state.attempts(), 1);
    }

    #[test]
    fn test_interact_unknown_tile() {
        let mut adapter = InteractionAdapter::new();
        let mut state = SessionState::default();
        let mut registry = registry();
        let recorder = Recorder::new();
        let (mut audio, mut visuals, mut scene) = (recorder.clone(), recorder.clone(), recorder.clone());
        let mut context = ResolverContext::new(&mut audio, &mut visuals, &mut scene);

        adapter.on_zone_enter(Zone::Tile(TileHandle::new(42)));
        let outcome = adapter.interact(&mut state, &mut registry, &OrderedMatchRules::default(), &mut context);

        assert_eq!(outcome, InteractOutcome::UnknownTile(TileHandle::new(42)));
        assert!(state.selection.is_empty());
    }
}
