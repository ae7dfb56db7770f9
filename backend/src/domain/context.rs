//! Per-request context forwarded through every domain call.
//!
//! Domain services accept a [`RequestContext`] and hand it to the ports they
//! call, unchanged. Only outbound adapters look inside: they attach the trace
//! identifier to outgoing requests and bound each call by the remaining
//! request budget.

use std::time::{Duration, Instant};

use super::TraceId;

/// Observability and cancellation context for one inbound request.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use backend::domain::RequestContext;
/// use backend::TraceId;
///
/// let trace_id = TraceId::generate();
/// let ctx = RequestContext::new(Some(trace_id)).with_budget(Duration::from_secs(5));
/// assert_eq!(ctx.trace_id(), Some(trace_id));
/// assert!(ctx.remaining().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    trace_id: Option<TraceId>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context carrying a trace identifier and no deadline.
    #[must_use]
    pub fn new(trace_id: Option<TraceId>) -> Self {
        Self {
            trace_id,
            deadline: None,
        }
    }

    /// Context with neither a trace identifier nor a deadline.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(None)
    }

    /// Bound all downstream work to `budget` from now.
    #[must_use]
    pub fn with_budget(self, budget: Duration) -> Self {
        self.with_deadline(Instant::now() + budget)
    }

    /// Bound all downstream work to an absolute deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Trace identifier to propagate, if any.
    #[must_use]
    pub fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }

    /// Time left before the deadline; zero once it has passed.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::detached()
    }
}
