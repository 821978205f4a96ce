//! # Design Patterns Catalog
//!
//! Isolated, runnable illustrations of classic object-oriented design
//! patterns. Each module is self-contained and each has a matching demo
//! binary that prints a walk-through:
//!
//! - [`bridge`]: abstraction/implementation split, shape logic decoupled
//!   from interchangeable renderers.
//! - [`memento`]: state history, an opaque-snapshot undo stack with a
//!   strict last-captured-first-restored discipline.
//!
//! Run the walk-throughs with:
//!
//! ```bash
//! cargo run --bin p1_bridge
//! RUST_LOG=debug cargo run --bin p2_memento
//! ```
//!
//! ## Covered in the notes only
//!
//! Three more creational ideas come up in the accompanying notes but need
//! no code of their own here, because the language already carries them:
//! object cloning is `#[derive(Clone)]` (prototype), single-instance
//! restriction is a `static` `OnceLock` (singleton), and deferred
//! instantiation is `OnceLock::get_or_init` (lazy initialization).

pub mod bridge;
pub mod memento;
