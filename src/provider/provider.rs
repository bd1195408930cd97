use crate::context::ContextCell;
use crate::runtime::{self, ScopeFrame};
use std::any::Any;
use std::sync::Arc;

/// Projection from a family's value to the slice one cell carries.
pub(crate) type Projection<V> = Arc<dyn Fn(&V) -> Arc<dyn Any + Send + Sync> + Send + Sync>;

/// One cell together with the selector that feeds it.
pub(crate) struct CellBinding<V> {
    pub(crate) cell: ContextCell,
    pub(crate) project: Projection<V>,
}

/// A mountable unit that computes a value and installs cell overrides
/// for a subtree.
///
/// Providers are produced by [`ContextBuilder::finish`] or
/// [`create_context`] and own a fixed set of cells. Each call to
/// [`provide`] recomputes the value from the given props; nothing is
/// cached between calls. Cloning a provider shares the same cells, so
/// clones and the original feed the same accessors.
///
/// [`ContextBuilder::finish`]: crate::ContextBuilder::finish
/// [`create_context`]: crate::create_context
/// [`provide`]: Provider::provide
pub struct Provider<P, V> {
    label: &'static str,
    use_value: Arc<dyn Fn(&P) -> V + Send + Sync>,
    bindings: Arc<Vec<CellBinding<V>>>,
}

impl<P, V: Clone + Send + Sync + 'static> Provider<P, V> {
    pub(crate) fn new(
        label: &'static str,
        use_value: Arc<dyn Fn(&P) -> V + Send + Sync>,
        bindings: Vec<CellBinding<V>>,
    ) -> Self {
        Self {
            label,
            use_value,
            bindings: Arc::new(bindings),
        }
    }

    /// Compute the value from `props` and run `subtree` with it provided.
    ///
    /// The value is derived fresh on every call. Accessors of this
    /// family resolve to the value's projections for the duration of
    /// the closure; nesting `provide` calls shadows outer scopes for
    /// the inner subtree only.
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
    /// let count = counter.provide(&Props { initial: 5 }, || {
    ///     use_counter.get().unwrap().count
    /// });
    /// assert_eq!(count, 5);
    /// ```
    pub fn provide<R>(&self, props: &P, subtree: impl FnOnce() -> R) -> R {
        let value = (self.use_value)(props);
        self.provide_value(value, subtree)
    }

    /// Run `subtree` with an already-computed value provided.
    ///
    /// Bypasses the value-producing function entirely, which makes it
    /// the building block for nested overrides: an inner
    /// `provide_value` shadows an outer `provide` for the same cells.
    pub fn provide_value<R>(&self, value: V, subtree: impl FnOnce() -> R) -> R {
        runtime::enter(fan_out(self.label, &self.bindings, &value), subtree)
    }

    /// Compute the value once and return it alongside an [`Inject`].
    ///
    /// No scope is entered by this call. The returned value can be used
    /// directly by the caller, and the `Inject` wraps any closure with
    /// that same value provided, without recomputing it.
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
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct State {
    ///     count: i32,
    /// }
    ///
    /// let (counter, use_counter) =
    ///     create_context("counter", |props: &Props| State { count: props.initial });
    ///
    /// let (inject, state) = counter.use_provider(&Props { initial: 2 });
    /// assert_eq!(state, State { count: 2 });
    ///
    /// let seen = inject.wrap(|| use_counter.get().unwrap());
    /// assert_eq!(seen, state);
    /// ```
    pub fn use_provider(&self, props: &P) -> (Inject<V>, V) {
        let value = (self.use_value)(props);
        let inject = Inject {
            label: self.label,
            value: value.clone(),
            bindings: Arc::clone(&self.bindings),
        };
        (inject, value)
    }

    /// The label this provider was registered under.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<P, V> Clone for Provider<P, V> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            use_value: Arc::clone(&self.use_value),
            bindings: Arc::clone(&self.bindings),
        }
    }
}

/// Wraps subtrees with a value captured ahead of time.
///
/// Produced by [`Provider::use_provider`]. Holds the computed value and
/// provides it to any number of wrapped closures without invoking the
/// value-producing function again.
pub struct Inject<V> {
    label: &'static str,
    value: V,
    bindings: Arc<Vec<CellBinding<V>>>,
}

impl<V> Inject<V> {
    /// Run `subtree` with the captured value provided.
    pub fn wrap<R>(&self, subtree: impl FnOnce() -> R) -> R {
        runtime::enter(fan_out(self.label, &self.bindings, &self.value), subtree)
    }
}

/// Apply every selector to the value, in cell order, into one frame.
fn fan_out<V>(label: &'static str, bindings: &[CellBinding<V>], value: &V) -> ScopeFrame {
    let mut frame = ScopeFrame::new(label);
    for binding in bindings {
        frame.bind(binding.cell.id(), (binding.project)(value));
    }
    frame
}
