//! Runtime support for provider scopes.
//!
//! This module provides the ambient-scope machinery the rest of the
//! crate is built on: a thread-local stack of scope frames, nearest-
//! enclosing binding resolution, cell id allocation, and the
//! diagnostics gate.

mod diagnostics;
mod scope;

pub use diagnostics::set_diagnostics;

pub(crate) use diagnostics::diagnostics_enabled;
pub(crate) use scope::{enter, next_cell_id, read_nearest, ScopeFrame};
