use crate::runtime;
use std::any::Any;
use std::sync::Arc;

/// A broadcast slot carrying the nearest-enclosing value for one
/// (selector, value) pairing.
///
/// Cells are allocated while a context family is being set up and the
/// set owned by a provider never changes afterwards. A cell holds no
/// value of its own; providers bind values to it for the duration of a
/// scope, and the binding disappears when the scope exits.
#[derive(Clone, Copy)]
pub(crate) struct ContextCell {
    id: usize,
    label: &'static str,
}

impl ContextCell {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            id: runtime::next_cell_id(),
            label,
        }
    }

    pub(crate) fn id(&self) -> usize {
        self.id
    }

    pub(crate) fn label(&self) -> &'static str {
        self.label
    }

    /// Read the nearest enclosing binding for this cell.
    ///
    /// Returns `None` when no provider scope on the current thread binds
    /// the cell. That condition is non-fatal: with diagnostics enabled it
    /// is reported as a warning, and the read still resolves to `None`.
    pub(crate) fn read(&self) -> Option<Arc<dyn Any + Send + Sync>> {
        match runtime::read_nearest(self.id) {
            Some(value) => Some(value),
            None => {
                if runtime::diagnostics_enabled() {
                    tracing::warn!(
                        cell = self.label,
                        "accessor read outside of a provider scope"
                    );
                }
                None
            }
        }
    }
}
