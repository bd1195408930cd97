use crate::context::{Accessor, ContextCell};
use crate::provider::provider::{CellBinding, Projection, Provider};
use std::any::Any;
use std::sync::Arc;

/// Factory for a context family: one value-producing function plus any
/// number of selector-narrowed cells.
///
/// Every [`select`] call allocates one backing cell and hands back the
/// accessor bound to it. [`finish`] fixes the cell set and produces the
/// provider; no cells can be added or removed afterwards.
///
/// [`select`]: ContextBuilder::select
/// [`finish`]: ContextBuilder::finish
///
/// # Examples
///
/// ```
/// use partyline::ContextBuilder;
///
/// struct Props {
///     initial: i32,
/// }
///
/// #[derive(Clone)]
/// struct CounterState {
///     count: i32,
///     step: i32,
/// }
///
/// let mut builder = ContextBuilder::new("counter", |props: &Props| CounterState {
///     count: props.initial,
///     step: 1,
/// });
/// let use_count = builder.select("count", |state: &CounterState| state.count);
/// let use_step = builder.select("step", |state: &CounterState| state.step);
/// let counter = builder.finish();
///
/// counter.provide(&Props { initial: 3 }, || {
///     assert_eq!(use_count.get(), Some(3));
///     assert_eq!(use_step.get(), Some(1));
/// });
/// ```
pub struct ContextBuilder<P, V> {
    label: &'static str,
    use_value: Arc<dyn Fn(&P) -> V + Send + Sync>,
    bindings: Vec<CellBinding<V>>,
}

impl<P, V: Clone + Send + Sync + 'static> ContextBuilder<P, V> {
    /// Start a context family around a value-producing function.
    ///
    /// The label is used for diagnostics only and never affects
    /// behavior.
    pub fn new<F>(label: &'static str, use_value: F) -> Self
    where
        F: Fn(&P) -> V + Send + Sync + 'static,
    {
        Self {
            label,
            use_value: Arc::new(use_value),
            bindings: Vec::new(),
        }
    }

    /// Register a selector and return the accessor for its cell.
    ///
    /// The selector must be pure; it runs once per `provide` call, at
    /// the moment the provider fans its value out. Selectors are applied
    /// in registration order, which is also the cell order.
    pub fn select<U, S>(&mut self, label: &'static str, selector: S) -> Accessor<U>
    where
        U: Clone + Send + Sync + 'static,
        S: Fn(&V) -> U + Send + Sync + 'static,
    {
        let cell = ContextCell::new(label);
        let project: Projection<V> =
            Arc::new(move |value: &V| -> Arc<dyn Any + Send + Sync> { Arc::new(selector(value)) });
        self.bindings.push(CellBinding { cell, project });
        Accessor::new(cell)
    }

    /// Register the identity selection: an accessor for the whole value.
    ///
    /// The cell is tagged with the builder's own label.
    pub fn select_value(&mut self) -> Accessor<V> {
        let label = self.label;
        self.select(label, |value: &V| value.clone())
    }

    /// Fix the cell set and produce the provider.
    ///
    /// A family always owns at least one cell: finishing with no
    /// registered selector allocates the identity cell. Grab its
    /// accessor with [`select_value`] beforehand (or use
    /// [`create_context`]) if you need to read the whole value.
    ///
    /// [`select_value`]: ContextBuilder::select_value
    pub fn finish(mut self) -> Provider<P, V> {
        if self.bindings.is_empty() {
            self.select_value();
        }
        Provider::new(self.label, self.use_value, self.bindings)
    }
}

/// Create a context family with a single cell carrying the whole value.
///
/// This is the no-selector form: the returned accessor reads the full
/// value unprojected. For per-field cells, use [`ContextBuilder`] and
/// register selectors instead.
///
/// # Examples
///
/// ```
/// use partyline::create_context;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Session {
///     user: String,
/// }
///
/// let (session, use_session) = create_context("session", |name: &String| Session {
///     user: name.clone(),
/// });
///
/// session.provide(&"ada".to_string(), || {
///     assert_eq!(use_session.get().unwrap().user, "ada");
/// });
/// ```
pub fn create_context<P, V, F>(label: &'static str, use_value: F) -> (Provider<P, V>, Accessor<V>)
where
    V: Clone + Send + Sync + 'static,
    F: Fn(&P) -> V + Send + Sync + 'static,
{
    let mut builder = ContextBuilder::new(label, use_value);
    let accessor = builder.select_value();
    (builder.finish(), accessor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct State {
        count: i32,
        name: String,
    }

    fn make_state(initial: &i32) -> State {
        State {
            count: *initial,
            name: "test".to_string(),
        }
    }

    #[test]
    fn no_selectors_reads_whole_value() {
        let (provider, accessor) = create_context("state", make_state);

        provider.provide(&5, || {
            assert_eq!(accessor.get(), Some(make_state(&5)));
        });
    }

    #[test]
    fn selectors_read_their_slices() {
        let mut builder = ContextBuilder::new("state", make_state);
        let use_count = builder.select("count", |state: &State| state.count);
        let use_name = builder.select("name", |state: &State| state.name.clone());
        let provider = builder.finish();

        provider.provide(&5, || {
            assert_eq!(use_count.get(), Some(5));
            assert_eq!(use_name.get(), Some("test".to_string()));
        });
    }

    #[test]
    fn select_value_alongside_selectors() {
        let mut builder = ContextBuilder::new("state", make_state);
        let use_count = builder.select("count", |state: &State| state.count);
        let use_state = builder.select_value();
        let provider = builder.finish();

        provider.provide(&1, || {
            assert_eq!(use_count.get(), Some(1));
            assert_eq!(use_state.get(), Some(make_state(&1)));
        });
    }

    #[test]
    fn finish_without_selectors_still_provides() {
        let builder = ContextBuilder::new("state", make_state);
        let provider = builder.finish();

        // The implicit identity cell exists; nothing reads it here, but
        // providing must not mind.
        provider.provide(&0, || {});
    }
}
