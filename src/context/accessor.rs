use crate::context::cell::ContextCell;
use std::marker::PhantomData;

/// A read-only handle bound to one cell.
///
/// Accessors are handed out when a context family is set up, one per
/// registered selector (or a single one reading the whole value). They
/// are `Copy`, cheap to pass around, and keep the same identity for the
/// lifetime of the family.
///
/// # Missing providers
///
/// Reading an accessor with no enclosing provider scope returns `None`
/// rather than panicking. With diagnostics enabled the miss is also
/// reported with a warning naming the cell's label. Callers that
/// `unwrap()` the result without mounting a provider are opting into
/// that sharp edge.
///
/// # Examples
///
/// ```
/// use partyline::create_context;
///
/// struct Props {
///     initial: i32,
/// }
///
/// #[derive(Clone)]
/// struct State {
///     count: i32,
/// }
///
/// let (counter, use_counter) =
///     create_context("counter", |props: &Props| State { count: props.initial });
///
/// // No provider scope yet: the read resolves to the unset sentinel.
/// assert!(use_counter.get().is_none());
///
/// let count = counter.provide(&Props { initial: 5 }, || {
///     use_counter.get().unwrap().count
/// });
/// assert_eq!(count, 5);
/// ```
pub struct Accessor<T> {
    cell: ContextCell,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Clone + Send + Sync + 'static> Accessor<T> {
    pub(crate) fn new(cell: ContextCell) -> Self {
        Self {
            cell,
            _marker: PhantomData,
        }
    }

    /// Read the nearest enclosing value for this accessor's cell.
    ///
    /// Returns `None` when no provider scope on the current thread binds
    /// the cell.
    pub fn get(&self) -> Option<T> {
        self.cell
            .read()
            .and_then(|value| value.downcast_ref::<T>().cloned())
    }

    /// The label the cell was registered under.
    pub fn label(&self) -> &'static str {
        self.cell.label()
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Accessor<T> {}
