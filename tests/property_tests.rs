//! Property tests for match evaluation and reset.
//!
//! Every pair of tiles is checked against every cursor value in range,
//! through a full session so visibility and slots are observed too.

use proptest::prelude::*;

use memory_tiles::core::{CueId, PairId, SessionConfig, TileHandle, VisualId};
use memory_tiles::host::Recorder;
use memory_tiles::input::{Event, InteractOutcome};
use memory_tiles::rules::{MatchOutcome, MatchRules, OrderedMatchRules};
use memory_tiles::session::{EventOutcome, Session, SessionBuilder};
use memory_tiles::tiles::{TileDescriptor, TileRegistry};

/// Session with two tiles (handles 0 and 1) and the cursor at `cursor`.
fn two_tile_session(a: u32, b: u32, cursor: u32) -> Session {
    let mut registry = TileRegistry::new();
    registry.add(PairId::new(a), CueId::new(a), VisualId::new(0));
    registry.add(PairId::new(b), CueId::new(b), VisualId::new(1));

    SessionBuilder::new(registry)
        .with_config(SessionConfig::new().with_initial_cursor(PairId::new(cursor)))
        .with_recorder(&Recorder::new())
        .try_build()
        .unwrap()
}

fn select_both(session: &mut Session) -> MatchOutcome {
    for tile in [TileHandle::new(0), TileHandle::new(1)] {
        session.handle(Event::enter(tile));
        let outcome = session.handle(Event::Interact);
        session.handle(Event::exit(tile));

        if let EventOutcome::Interacted(InteractOutcome::Selected { evaluation: Some(eval), .. }) = outcome {
            return eval.outcome;
        }
    }
    panic!("selecting two distinct tiles must produce an evaluation");
}

fn descriptor(handle: u32, pair: u32) -> TileDescriptor {
    TileDescriptor::new(TileHandle::new(handle), PairId::new(pair), CueId::new(0), VisualId::new(handle))
}

proptest! {
    #[test]
    fn prop_in_order_match(id in 1u32..50) {
        let mut session = two_tile_session(id, id, id);

        prop_assert_eq!(select_both(&mut session), MatchOutcome::MatchInOrder);
        prop_assert_eq!(session.state().current_pair(), PairId::new(id + 1));
        prop_assert!(session.registry().is_visible(TileHandle::new(0)));
        prop_assert!(session.registry().is_visible(TileHandle::new(1)));
        prop_assert!(session.state().selection.is_empty());
    }

    #[test]
    fn prop_out_of_order_match(id in 1u32..50, cursor in 1u32..50) {
        prop_assume!(id != cursor);
        let mut session = two_tile_session(id, id, cursor);

        prop_assert_eq!(select_both(&mut session), MatchOutcome::MatchOutOfOrder);
        prop_assert_eq!(session.state().current_pair(), PairId::new(cursor));
        prop_assert_eq!(session.registry().visible_count(), 0);
        prop_assert!(session.state().selection.is_empty());
    }

    #[test]
    fn prop_mismatch(a in 1u32..50, b in 1u32..50, cursor in 1u32..50) {
        prop_assume!(a != b);
        let mut session = two_tile_session(a, b, cursor);

        prop_assert_eq!(select_both(&mut session), MatchOutcome::Mismatch);
        prop_assert_eq!(session.state().current_pair(), PairId::new(cursor));
        prop_assert_eq!(session.registry().visible_count(), 0);
        prop_assert!(session.state().selection.is_empty());
    }

    #[test]
    fn prop_evaluation_is_deterministic(a in 1u32..10, b in 1u32..10, cursor in 1u32..10) {
        let rules = OrderedMatchRules::default();
        let (ta, tb) = (descriptor(0, a), descriptor(1, b));

        prop_assert_eq!(rules.evaluate(&ta, &tb, PairId::new(cursor)), rules.evaluate(&ta, &tb, PairId::new(cursor)));
    }

    #[test]
    fn prop_reset_from_any_state(picks in proptest::collection::vec(0u32..2, 0..12), a in 1u32..4, b in 1u32..4) {
        let mut session = two_tile_session(a, b, 1);
        for tile in picks {
            session.handle(Event::enter(TileHandle::new(tile)));
            session.handle(Event::Interact);
        }

        session.handle(Event::Reload);

        prop_assert_eq!(session.state().current_pair(), PairId::FIRST);
        prop_assert!(session.state().selection.is_empty());
        prop_assert_eq!(session.registry().visible_count(), 0);
    }
}
