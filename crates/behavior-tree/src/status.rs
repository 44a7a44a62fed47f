//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Tick Semantics
///
/// Decision nodes (conditions, instantaneous actions) complete within a single
/// tick and return `Success` or `Failure`. `Running` is reserved for
/// action-executor nodes whose effect spans multiple ticks; the scheduler
/// re-invokes a running node on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The decision was taken and written to the context.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The decision could not be taken (e.g. the target died).
    /// Failure is a normal negative result, never an error: a failed node
    /// must be safe to re-invoke on the next tick.
    Failure,

    /// The behavior started but has not finished.
    ///
    /// Only multi-tick actions return this; evaluation resumes next tick.
    Running,
}

impl Status {
    /// Maps a boolean condition outcome onto `Success`/`Failure`.
    #[inline]
    pub fn from_success(success: bool) -> Self {
        if success { Status::Success } else { Status::Failure }
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// `Running` is left untouched; an in-progress action has no negation.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}
