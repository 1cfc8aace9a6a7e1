//! Call-recording host.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::{AudioSink, SceneHost, VisibilitySink};
use crate::core::{CueId, VisualId};

/// One request received from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostCall {
    Play(CueId),
    SetVisible(VisualId, bool),
    Reinitialize,
}

/// Records host requests into a shared log.
///
/// Clones share the same log, so one clone can be boxed into each sink
/// slot of a session while the caller keeps another for inspection.
///
/// ```
/// use memory_tiles::core::CueId;
/// use memory_tiles::host::{AudioSink, HostCall, Recorder};
///
/// let recorder = Recorder::new();
/// let mut sink = recorder.clone();
/// sink.play(CueId::new(3));
///
/// assert_eq!(recorder.calls(), vec![HostCall::Play(CueId::new(3))]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<HostCall>>>,
}

impl Recorder {
    /// Create a recorder with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call so far.
    #[must_use]
    pub fn calls(&self) -> Vec<HostCall> {
        self.log.borrow().clone()
    }

    /// Return and clear the log.
    pub fn take(&self) -> Vec<HostCall> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    /// Cues played so far, in order.
    #[must_use]
    pub fn cues(&self) -> Vec<CueId> {
        self.log
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Play(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    /// Number of scene reinitializations requested.
    #[must_use]
    pub fn reinit_count(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|call| matches!(call, HostCall::Reinitialize))
            .count()
    }

    fn push(&self, call: HostCall) {
        self.log.borrow_mut().push(call);
    }
}

impl AudioSink for Recorder {
    fn play(&mut self, cue: CueId) {
        self.push(HostCall::Play(cue));
    }
}

impl VisibilitySink for Recorder {
    fn set_visible(&mut self, visual: VisualId, visible: bool) {
        self.push(HostCall::SetVisible(visual, visible));
    }
}

impl SceneHost for Recorder {
    fn reinitialize(&mut self) {
        self.push(HostCall::Reinitialize);
    }
}
