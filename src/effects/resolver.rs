//! Effect resolution - applying effects to the session and the host.
//!
//! The `EffectResolver` is the only place where evaluation output turns
//! into mutations. Session effects change `SessionState` and the registry;
//! host effects are forwarded to the sinks in `ResolverContext`.

use tracing::{debug, warn};

use crate::core::{SessionState, TileHandle};
use crate::host::{AudioSink, SceneHost, VisibilitySink};
use crate::tiles::TileRegistry;

use super::{Effect, EffectBatch};

/// Host sinks the resolver forwards to.
pub struct ResolverContext<'a> {
    pub audio: &'a mut dyn AudioSink,
    pub visuals: &'a mut dyn VisibilitySink,
    pub scene: &'a mut dyn SceneHost,
}

impl<'a> ResolverContext<'a> {
    /// Bundle the three sinks.
    pub fn new(
        audio: &'a mut dyn AudioSink,
        visuals: &'a mut dyn VisibilitySink,
        scene: &'a mut dyn SceneHost,
    ) -> Self {
        Self { audio, visuals, scene }
    }
}

/// Applies effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a batch in order. An effect that cannot be applied is
    /// logged and skipped; the rest of the batch still runs.
    pub fn resolve_batch(
        state: &mut SessionState,
        registry: &mut TileRegistry,
        batch: &EffectBatch,
        context: &mut ResolverContext,
    ) {
        for effect in batch.iter() {
            Self::resolve_single(state, registry, effect, context);
        }
    }

    /// Resolve a single effect.
    pub fn resolve_single(
        state: &mut SessionState,
        registry: &mut TileRegistry,
        effect: &Effect,
        context: &mut ResolverContext,
    ) {
        match *effect {
            Effect::PlayCue(cue) => context.audio.play(cue),

            Effect::SetVisible { tile, visible } => Self::set_visible(registry, tile, visible, context),

            Effect::AdvanceCursor => {
                state.cursor.advance();
                debug!(cursor = %state.current_pair(), "cursor advanced");
            }

            Effect::ClearSelection => state.selection.clear(),

            Effect::ResetSession => Self::reset(state, registry, context),
        }
    }

    /// Flip one tile and tell the renderer. Unknown tiles are logged and
    /// nothing is sent.
    pub fn set_visible(
        registry: &mut TileRegistry,
        tile: TileHandle,
        visible: bool,
        context: &mut ResolverContext,
    ) {
        match registry.set_visible(tile, visible) {
            Some(visual) => context.visuals.set_visible(visual, visible),
            None => warn!(%tile, "visibility change for unknown tile"),
        }
    }

    /// Full reset: state back to defaults, every tile face down, scene
    /// reloaded. The host reloads the scene, so per-tile hide requests are
    /// not sent.
    pub fn reset(state: &mut SessionState, registry: &mut TileRegistry, context: &mut ResolverContext) {
        state.reset();
        registry.hide_all();
        context.scene.reinitialize();
        debug!(cursor = %state.current_pair(), "session reset");
    }
}
