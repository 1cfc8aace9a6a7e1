//! Effect system.
//!
//! - `Effect`: one requested side effect (cue, visibility, cursor, reset)
//! - `EffectBatch`: ordered list of effects produced by an evaluation
//! - `EffectResolver`: applies a batch to session state and host sinks
//!
//! Keeping evaluation output declarative means the rules can be tested
//! without a host, and the host only ever sees resolved requests.

mod effect;
mod resolver;

pub use effect::{Effect, EffectBatch};
pub use resolver::{EffectResolver, ResolverContext};
