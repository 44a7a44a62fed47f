//! Lightweight behavior tree library for tick-driven tactical agents.
//!
//! This library provides a minimal, deterministic behavior tree implementation
//! designed for simulations where an external scheduler advances every agent's
//! decision tree once per simulation step.
//!
//! - **Synchronous nodes**: A node's body always runs to completion within one
//!   tick; there is no cooperative yielding inside a node.
//! - **Three-state results**: [`Status::Running`] exists for multi-tick
//!   *actions* (e.g. a wave spawn). Pure decision nodes return only
//!   `Success` or `Failure` and must be safe to re-invoke after `Failure`.
//! - **Minimal state**: Composites hold no per-tick bookkeeping, so a tree can
//!   be rebuilt or re-evaluated at any time without desync.
//! - **Zero dependencies**: Pure Rust with no external crates.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure, or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, BoxedBehavior};
pub use builder::{always_succeed, inverter, selector, sequence};
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use status::Status;
