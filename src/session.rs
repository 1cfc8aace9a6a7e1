//! The game session.
//!
//! `Session` is the explicitly constructed root of the game: it owns the
//! state, the tile registry, the zone tracker, the avatar, the match rules,
//! and the host sinks. The host loop creates one with [`SessionBuilder`]
//! and feeds it events:
//!
//! ```
//! use memory_tiles::core::{CueId, PairId, TileHandle, VisualId};
//! use memory_tiles::host::Recorder;
//! use memory_tiles::input::Event;
//! use memory_tiles::session::SessionBuilder;
//! use memory_tiles::tiles::TileRegistry;
//!
//! let mut registry = TileRegistry::new();
//! let a = registry.add(PairId::new(1), CueId::new(10), VisualId::new(0));
//! let b = registry.add(PairId::new(1), CueId::new(10), VisualId::new(1));
//!
//! let recorder = Recorder::new();
//! let mut session = SessionBuilder::new(registry).with_recorder(&recorder).try_build().unwrap();
//!
//! for tile in [a, b] {
//!     session.handle(Event::enter(tile));
//!     session.handle(Event::Interact);
//!     session.handle(Event::exit(tile));
//! }
//!
//! assert_eq!(session.state().current_pair(), PairId::new(2));
//! assert!(session.is_solved());
//! ```
//!
//! A session whose configuration is incomplete is *inert*: the error is
//! logged once at build time and every later event is ignored.

use tracing::{error, info, instrument};

use crate::core::{SessionConfig, SessionState, TileHandle};
use crate::effects::{Effect, EffectResolver, ResolverContext};
use crate::error::ConfigError;
use crate::host::{AudioSink, Recorder, SceneHost, VisibilitySink};
use crate::input::{Avatar, Event, InteractOutcome, InteractionAdapter, Vec2};
use crate::rules::{MatchRules, OrderedMatchRules};
use crate::tiles::TileRegistry;

/// What a handled event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The session is inert; nothing happened.
    Inert,
    /// The interaction candidate may have changed.
    ZoneChanged { candidate: Option<TileHandle> },
    /// The avatar's direction was updated.
    Moved,
    /// An interact press was handled.
    Interacted(InteractOutcome),
    /// The session was reset and the scene reloaded.
    Reset,
}

/// The three host collaborators.
struct HostSinks {
    audio: Box<dyn AudioSink>,
    visuals: Box<dyn VisibilitySink>,
    scene: Box<dyn SceneHost>,
}

impl HostSinks {
    fn context(&mut self) -> ResolverContext<'_> {
        ResolverContext::new(&mut *self.audio, &mut *self.visuals, &mut *self.scene)
    }
}

/// A running memory game.
pub struct Session {
    config: SessionConfig,
    state: SessionState,
    registry: TileRegistry,
    adapter: InteractionAdapter,
    avatar: Avatar,
    rules: Box<dyn MatchRules>,
    /// `None` when the session is inert.
    host: Option<HostSinks>,
}

impl Session {
    /// Handle one host event.
    #[instrument(skip(self), level = "debug")]
    pub fn handle(&mut self, event: Event) -> EventOutcome {
        let Some(host) = self.host.as_mut() else {
            return EventOutcome::Inert;
        };

        match event {
            Event::ZoneEnter(zone) => {
                self.adapter.on_zone_enter(zone);
                EventOutcome::ZoneChanged {
                    candidate: self.adapter.candidate(),
                }
            }

            Event::ZoneExit(zone) => {
                self.adapter.on_zone_exit(zone);
                EventOutcome::ZoneChanged {
                    candidate: self.adapter.candidate(),
                }
            }

            Event::Move(input) => {
                self.avatar.on_move(input);
                EventOutcome::Moved
            }

            Event::Interact => {
                let mut context = host.context();
                let outcome =
                    self.adapter
                        .interact(&mut self.state, &mut self.registry, self.rules.as_ref(), &mut context);

                // A miss under the reload policy reloaded the scene.
                if let InteractOutcome::Selected { evaluation: Some(eval), .. } = &outcome {
                    if eval.effects.contains(&Effect::ResetSession) {
                        self.after_reload();
                    }
                }
                EventOutcome::Interacted(outcome)
            }

            Event::Reload => {
                self.reset_session();
                EventOutcome::Reset
            }
        }
    }

    /// Clear the selection, reset the cursor, hide every tile, and ask the
    /// scene host to reload. Valid at any time, including mid-selection.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        let mut context = host.context();
        EffectResolver::reset(&mut self.state, &mut self.registry, &mut context);
        self.after_reload();
        info!("session reset");
    }

    /// The reloaded scene re-delivers zone events and respawns the avatar.
    fn after_reload(&mut self) {
        self.adapter.clear();
        self.avatar.halt();
    }

    // === Accessors ===

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The tile table.
    #[must_use]
    pub fn registry(&self) -> &TileRegistry {
        &self.registry
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Tile the avatar is standing on.
    #[must_use]
    pub fn candidate(&self) -> Option<TileHandle> {
        self.adapter.candidate()
    }

    /// Avatar velocity for the next physics tick.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.avatar.velocity()
    }

    /// Whether setup failed and the session ignores events.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.host.is_none()
    }

    /// Pair ids not yet matched in order.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        let cursor = self.state.current_pair();
        self.registry.pair_ids().into_iter().filter(|pair| *pair >= cursor).count()
    }

    /// Every pair has been matched in order.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.registry.is_empty() && self.pairs_remaining() == 0
    }
}

/// Builder for a [`Session`].
pub struct SessionBuilder {
    config: SessionConfig,
    registry: TileRegistry,
    rules: Option<Box<dyn MatchRules>>,
    audio: Option<Box<dyn AudioSink>>,
    visuals: Option<Box<dyn VisibilitySink>>,
    scene: Option<Box<dyn SceneHost>>,
}

impl SessionBuilder {
    /// Start a builder for the given tiles with default configuration.
    pub fn new(registry: TileRegistry) -> Self {
        Self {
            config: SessionConfig::default(),
            registry,
            rules: None,
            audio: None,
            visuals: None,
            scene: None,
        }
    }

    /// Set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default ordered rules.
    #[must_use]
    pub fn with_rules(mut self, rules: impl MatchRules + 'static) -> Self {
        self.rules = Some(Box::new(rules));
        self
    }

    /// Attach the audio sink.
    #[must_use]
    pub fn with_audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    /// Attach the visibility sink.
    #[must_use]
    pub fn with_visuals(mut self, visuals: impl VisibilitySink + 'static) -> Self {
        self.visuals = Some(Box::new(visuals));
        self
    }

    /// Attach the scene host.
    #[must_use]
    pub fn with_scene(mut self, scene: impl SceneHost + 'static) -> Self {
        self.scene = Some(Box::new(scene));
        self
    }

    /// Attach clones of one recorder as all three sinks.
    #[must_use]
    pub fn with_recorder(self, recorder: &Recorder) -> Self {
        self.with_audio(recorder.clone())
            .with_visuals(recorder.clone())
            .with_scene(recorder.clone())
    }

    /// Check that the session can run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        if self.audio.is_none() {
            return Err(ConfigError::MissingAudioSink);
        }
        if self.visuals.is_none() {
            return Err(ConfigError::MissingVisibilitySink);
        }
        if self.scene.is_none() {
            return Err(ConfigError::MissingSceneHost);
        }
        if self.registry.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }
        Ok(())
    }

    /// Build, failing on incomplete configuration.
    pub fn try_build(self) -> Result<Session, ConfigError> {
        self.validate()?;
        Ok(self.assemble(true))
    }

    /// Build, logging a configuration error once and returning an inert
    /// session instead of failing.
    pub fn build(self) -> Session {
        match self.validate() {
            Ok(()) => self.assemble(true),
            Err(err) => {
                error!(%err, "session is misconfigured and will ignore all events");
                self.assemble(false)
            }
        }
    }

    fn assemble(self, live: bool) -> Session {
        let host = match (live, self.audio, self.visuals, self.scene) {
            (true, Some(audio), Some(visuals), Some(scene)) => Some(HostSinks { audio, visuals, scene }),
            _ => None,
        };
        if host.is_some() {
            self.registry.audit_pairs();
        }

        let rules: Box<dyn MatchRules> = match self.rules {
            Some(rules) => rules,
            None => Box::new(OrderedMatchRules::from_config(&self.config)),
        };

        Session {
            state: SessionState::new(self.config.initial_cursor),
            avatar: Avatar::new(self.config.avatar_speed),
            adapter: InteractionAdapter::new(),
            registry: self.registry,
            rules,
            host,
            config: self.config,
        }
    }
}
