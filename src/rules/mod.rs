//! Match rules.
//!
//! `MatchRules` judges a completed pair and returns the effects to apply.
//! The session calls into it but never interprets the outcome itself;
//! everything the outcome changes is expressed as effects.

pub mod evaluator;

pub use evaluator::{Evaluation, MatchOutcome, MatchRules, OrderedMatchRules};
