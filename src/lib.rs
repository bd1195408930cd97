//! # Partyline
//!
//! Scoped shared-state contexts for Rust.
//!
//! Partyline turns a value-producing function into a shareable context:
//! a provider that computes the value from input props, and one or more
//! accessors that read (optionally a projected slice of) that value
//! from the nearest enclosing provider scope.
//!
//! ## Context families (high-level)
//!
//! Set up once, share everywhere below a `provide` call:
//! - [`create_context`] - one cell carrying the whole value
//! - [`ContextBuilder`] - one cell per registered selector, to narrow
//!   what each accessor sees
//! - [`Provider`] - computes the value and installs the cell overrides
//!   for a subtree; [`Provider::use_provider`] hands the value back
//!   together with an [`Inject`] for wrapping subtrees later
//!
//! ## Scope runtime (low-level)
//!
//! Provider scopes are frames on a thread-local stack; the nearest
//! enclosing frame that binds a cell wins, so nested provides shadow
//! outer ones for their subtree only. Reading an accessor with no
//! enclosing provider returns `None` and, with diagnostics enabled
//! (see [`set_diagnostics`]), logs a warning instead of failing.

pub mod context;
pub mod provider;
pub mod runtime;

// Re-export main types for convenience
pub use context::Accessor;
pub use provider::{create_context, ContextBuilder, Inject, Provider};
pub use runtime::set_diagnostics;
