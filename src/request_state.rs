//! Request Display State
//!
//! Pending / success / failure state for a page's requests, with tickets so a
//! page can decide what to do with responses that arrive out of order.

/// What to do with a response whose request was superseded by a newer one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Every response is applied; whichever resolves last is shown
    #[default]
    LastResolved,
    /// Only the most recently issued request may update the state
    LatestIssued,
}

/// Monotonically increasing request number handed out by [`RequestTracker::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct RequestTracker<T> {
    policy: ResponsePolicy,
    issued: u64,
    pending: bool,
    value: Option<T>,
    error: Option<String>,
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self::new(ResponsePolicy::default())
    }
}

impl<T> RequestTracker<T> {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            issued: 0,
            pending: false,
            value: None,
            error: None,
        }
    }

    /// Start a request: clears the error, keeps the last value on screen
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.pending = true;
        self.error = None;
        Ticket(self.issued)
    }

    /// Start a request and drop the last value as well
    pub fn begin_fresh(&mut self) -> Ticket {
        self.value = None;
        self.begin()
    }

    /// Apply a response. Returns `false` when the policy discarded it.
    pub fn finish<E: ToString>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if self.policy == ResponsePolicy::LatestIssued && ticket.0 != self.issued {
            return false;
        }

        self.pending = false;
        match result {
            Ok(value) => self.value = Some(value),
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }

    /// Record a failure that never reached the network (e.g. validation)
    pub fn fail(&mut self, message: impl Into<String>) {
        self.pending = false;
        self.value = None;
        self.error = Some(message.into());
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
