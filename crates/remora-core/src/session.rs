//! Overlapping-generation bookkeeping.
//!
//! The upstream natural-language-to-graph step is asynchronous and may be invoked
//! again before a prior invocation resolves. Relying on arrival order makes the
//! current snapshot a last-write-wins race; this module replaces that with an
//! explicit monotonic request token so a stale response can never clobber a newer
//! one.

use crate::model::WorkflowData;

/// Token handed out per generation request. Only the most recently issued token
/// can change the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct GenerationSession {
    latest: u64,
    current: Option<WorkflowData>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the token for a new generation request, invalidating all earlier
    /// in-flight requests.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Applies a generation response. Returns `false` (and keeps the current
    /// snapshot) when `token` is not the latest issued one.
    pub fn accept(&mut self, token: RequestToken, data: WorkflowData) -> bool {
        if token.0 != self.latest {
            return false;
        }
        self.current = Some(data);
        true
    }

    /// Records a failed generation. The prior snapshot is cleared so the caller
    /// shows an error state rather than a stale scene, but only when the failing
    /// request is still the latest.
    pub fn fail(&mut self, token: RequestToken) -> bool {
        if token.0 != self.latest {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&WorkflowData> {
        self.current.as_ref()
    }
}
