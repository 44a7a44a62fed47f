//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to read agent state and record decisions.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C> {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   world state through it and write decision outputs.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if a multi-tick action is still in progress
    fn tick(&self, ctx: &mut C) -> Status;
}

/// A boxed behavior node.
///
/// The explicit lifetime lets a tree be instantiated for a context type that
/// borrows from the current world snapshot (a non-`'static` `C`).
pub type BoxedBehavior<'a, C> = Box<dyn Behavior<C> + 'a>;

/// Blanket implementation for boxed behaviors.
///
/// This allows `BoxedBehavior<C>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C> + '_> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
