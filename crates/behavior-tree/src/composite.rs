//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for priority-ordered
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).

use crate::{Behavior, Status, behavior::BoxedBehavior};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence stops and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<'a, C> {
    children: Vec<BoxedBehavior<'a, C>>,
}

impl<'a, C> Sequence<'a, C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<BoxedBehavior<'a, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        // Execute children in order until one stops the chain
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                Status::Failure => return Status::Failure,
                Status::Running => return Status::Running,
            }
        }
        // All children succeeded
        Status::Success
    }
}

/// Executes child behaviors in priority order until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector stops and returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. Because
/// children are tried in a fixed order, a selector is also the natural way to
/// express a strict priority policy: earlier children always preempt later
/// ones.
pub struct Selector<'a, C> {
    children: Vec<BoxedBehavior<'a, C>>,
}

impl<'a, C> Selector<'a, C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<BoxedBehavior<'a, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        // Try children in order until one succeeds or suspends
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => return Status::Success,
                Status::Running => return Status::Running,
                Status::Failure => continue,
            }
        }
        // All children failed
        Status::Failure
    }
}
