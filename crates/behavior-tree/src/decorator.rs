//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`Inverter`] (NOT logic) and [`AlwaysSucceed`]
//! (failure suppression).

use crate::{Behavior, Status, behavior::BoxedBehavior};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<'a, C> {
    child: BoxedBehavior<'a, C>,
}

impl<'a, C> Inverter<'a, C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: BoxedBehavior<'a, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Converts a child's `Failure` into `Success`.
///
/// # Semantics
///
/// - If the child returns `Success` or `Failure`, returns `Success`
/// - `Running` passes through unchanged
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Degraded fallback paths where a best-effort attempt is acceptable
pub struct AlwaysSucceed<'a, C> {
    child: BoxedBehavior<'a, C>,
}

impl<'a, C> AlwaysSucceed<'a, C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: BoxedBehavior<'a, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        match self.child.tick(ctx) {
            Status::Running => Status::Running,
            _ => Status::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Succeed;
    impl Behavior<()> for Succeed {
        fn tick(&self, _ctx: &mut ()) -> Status {
            Status::Success
        }
    }

    struct Fail;
    impl Behavior<()> for Fail {
        fn tick(&self, _ctx: &mut ()) -> Status {
            Status::Failure
        }
    }

    #[test]
    fn inverter_flips_results() {
        assert_eq!(Inverter::new(Box::new(Succeed)).tick(&mut ()), Status::Failure);
        assert_eq!(Inverter::new(Box::new(Fail)).tick(&mut ()), Status::Success);
    }

    #[test]
    fn always_succeed_masks_failure() {
        assert_eq!(
            AlwaysSucceed::new(Box::new(Fail)).tick(&mut ()),
            Status::Success
        );
    }
}
