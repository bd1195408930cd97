use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// One provider scope's worth of cell bindings.
///
/// A frame maps cell ids to the (type-erased) values a provider fanned
/// out for its subtree. Frames are pushed for exactly the duration of
/// the subtree closure and popped on the way out, unwinding included.
pub(crate) struct ScopeFrame {
    label: &'static str,
    bindings: HashMap<usize, Arc<dyn Any + Send + Sync>>,
}

impl ScopeFrame {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            bindings: HashMap::new(),
        }
    }

    /// Bind a cell to a value for the lifetime of this frame.
    pub(crate) fn bind(&mut self, cell_id: usize, value: Arc<dyn Any + Send + Sync>) {
        self.bindings.insert(cell_id, value);
    }

    fn get(&self, cell_id: usize) -> Option<Arc<dyn Any + Send + Sync>> {
        self.bindings.get(&cell_id).cloned()
    }
}

// Thread-local stack of provider scopes. The nearest enclosing scope
// for a cell is the topmost frame that binds it.
thread_local! {
    static SCOPE_STACK: RefCell<Vec<ScopeFrame>> = RefCell::new(vec![]);
}

/// Global id allocator for cells.
static NEXT_CELL_ID: AtomicUsize = AtomicUsize::new(0);

/// Allocate the next unique cell id.
pub(crate) fn next_cell_id() -> usize {
    NEXT_CELL_ID.fetch_add(1, Ordering::SeqCst)
}

/// Run a function with a frame pushed as the current innermost scope.
///
/// The frame is popped when the function returns. A panic inside the
/// function still pops the frame before resuming the unwind, so a
/// caller that catches the panic observes a balanced stack.
pub(crate) fn enter<F, R>(frame: ScopeFrame, f: F) -> R
where
    F: FnOnce() -> R,
{
    tracing::trace!(
        provider = frame.label,
        cells = frame.bindings.len(),
        "entering provider scope"
    );

    SCOPE_STACK.with(|stack| {
        stack.borrow_mut().push(frame);
    });

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    let popped = SCOPE_STACK.with(|stack| stack.borrow_mut().pop());
    if let Some(frame) = popped {
        tracing::trace!(provider = frame.label, "leaving provider scope");
    }

    match result {
        Ok(r) => r,
        Err(e) => std::panic::resume_unwind(e),
    }
}

/// Read the nearest enclosing binding for a cell, innermost frame first.
///
/// Returns `None` when no frame on this thread binds the cell, which is
/// the "no provider mounted above" condition.
pub(crate) fn read_nearest(cell_id: usize) -> Option<Arc<dyn Any + Send + Sync>> {
    SCOPE_STACK.with(|stack| {
        stack
            .borrow()
            .iter()
            .rev()
            .find_map(|frame| frame.get(cell_id))
    })
}

#[cfg(test)]
pub(crate) fn depth() -> usize {
    SCOPE_STACK.with(|stack| stack.borrow().len())
}
