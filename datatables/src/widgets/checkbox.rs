//! Checkbox widget - a toggleable `[x]` / `[ ]` indicator.

use tabledom::Element;

use crate::{Handler, HandlerRegistry};

fn indicator(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Typestate marker: checkbox is not bound to a value yet.
pub struct NeedsBinding;

/// Typestate marker: checkbox shows `checked` and calls `on_toggle` when activated.
pub struct Bound {
    checked: bool,
    on_toggle: Handler,
}

/// A checkbox widget builder.
///
/// The checkbox does not own its value. It displays whatever `checked` it is
/// bound to and reports activation through the toggle handler; the owner
/// flips its state and the next build shows the new value.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use datatables::{HandlerRegistry, State};
/// use datatables::widgets::Checkbox;
///
/// let registry = HandlerRegistry::new();
/// let agree = State::new(false);
/// let handle = agree.clone();
///
/// let element = Checkbox::new()
///     .id("agree")
///     .bind(agree.get(), Arc::new(move |_| handle.update(|v| *v = !*v)))
///     .build(&registry);
///
/// assert_eq!(element.text_content(), "[ ]");
/// registry.dispatch("agree", "on_activate");
/// assert!(agree.get());
/// ```
pub struct Checkbox<S = NeedsBinding> {
    binding: S,
    id: Option<String>,
    disabled: bool,
}

impl Default for Checkbox<NeedsBinding> {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox<NeedsBinding> {
    /// Create a new checkbox builder.
    pub fn new() -> Self {
        Self {
            binding: NeedsBinding,
            id: None,
            disabled: false,
        }
    }

    /// Bind the displayed value and the toggle handler. Required before `build()`.
    pub fn bind(self, checked: bool, on_toggle: Handler) -> Checkbox<Bound> {
        Checkbox {
            binding: Bound { checked, on_toggle },
            id: self.id,
            disabled: self.disabled,
        }
    }
}

impl<S> Checkbox<S> {
    /// Set the checkbox id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark the checkbox as disabled; a disabled checkbox registers no handler.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Checkbox<Bound> {
    /// Build the checkbox element and register its `on_activate` handler.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let Bound { checked, on_toggle } = self.binding;
        let id = self.id.unwrap_or_else(|| "checkbox".into());

        let elem = Element::text(indicator(checked))
            .id(&id)
            .data("checked", checked.to_string())
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled);

        if !self.disabled {
            registry.register(&id, "on_activate", on_toggle);
        }

        elem
    }
}
