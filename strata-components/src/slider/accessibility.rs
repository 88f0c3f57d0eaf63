//! Accessibility semantics for slider handles.

use derive_setters::Setters;
use smallvec::SmallVec;
use strata_ui::{
    AccessibilityNode, CallbackWith,
    accesskit::{Action, Role},
};
use tracing::trace;

use super::{
    SliderChange,
    engine::SliderEngine,
    handle::HandleId,
    value_model::KeyDirection,
};

/// Labels and value formatting announced for each handle.
#[derive(Debug, Clone, PartialEq, Default, Setters)]
pub struct SliderLabels {
    /// Label of the lower (or only) handle.
    #[setters(strip_option, into)]
    pub lower_label: Option<String>,
    /// Label of the upper handle.
    #[setters(strip_option, into)]
    pub upper_label: Option<String>,
    /// Optional description shared by both handles.
    #[setters(strip_option, into)]
    pub description: Option<String>,
    /// Formats a value into its announced text. Defaults to the plain
    /// number.
    #[setters(skip)]
    pub format_value: Option<CallbackWith<f64, String>>,
}

impl SliderLabels {
    /// Sets the value formatter.
    pub fn format_value<F>(mut self, format_value: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.format_value = Some(CallbackWith::new(format_value));
        self
    }

    fn label_for(&self, handle: HandleId) -> Option<&String> {
        match handle {
            HandleId::Lower => self.lower_label.as_ref(),
            HandleId::Upper => self.upper_label.as_ref(),
        }
    }

    fn text_for(&self, value: f64) -> String {
        match &self.format_value {
            Some(format_value) => format_value.call(value),
            None => format!("{value}"),
        }
    }
}

impl SliderEngine {
    /// Semantic node for one handle.
    ///
    /// On a range slider each handle's announced range stops where its
    /// sibling and the minimum separation would hold it. The top of the range
    /// is the last step that fits below `max`.
    pub fn accessibility_node(
        &self,
        handle: HandleId,
        labels: &SliderLabels,
    ) -> Option<AccessibilityNode> {
        let coordinator = self.document().coordinator();
        let controller = coordinator.handle(handle)?;
        let model = coordinator.model();
        let value = self.value();

        let (min, max) = match (handle, value.upper()) {
            (HandleId::Lower, Some(upper)) => (model.min(), coordinator.lower_limit(upper)),
            (HandleId::Lower, None) => (model.min(), model.grid_max()),
            (HandleId::Upper, _) => (coordinator.upper_limit(value.lower()), model.grid_max()),
        };

        let mut node = AccessibilityNode::new()
            .with_role(Role::Slider)
            .with_key(handle.key())
            .with_value(labels.text_for(controller.value()))
            .with_numeric_value(controller.value())
            .with_numeric_range(min, max)
            .with_numeric_steps(model.step(), model.large_step());

        if let Some(label) = labels.label_for(handle) {
            node = node.with_label(label.clone());
        }
        if let Some(description) = &labels.description {
            node = node.with_description(description.clone());
        }

        let interactivity = controller.interactivity();
        if interactivity.disabled {
            return Some(node.disabled());
        }
        node = node.focusable();
        if controller.state().is_focused {
            node = node.focused();
        }
        if interactivity.read_only {
            return Some(node.read_only());
        }
        Some(node.with_actions([Action::Increment, Action::Decrement, Action::SetValue]))
    }

    /// Semantic nodes for every handle, lower first.
    pub fn accessibility_nodes(&self, labels: &SliderLabels) -> SmallVec<[AccessibilityNode; 2]> {
        [HandleId::Lower, HandleId::Upper]
            .into_iter()
            .filter_map(|handle| self.accessibility_node(handle, labels))
            .collect()
    }

    /// Action requested by an assistive technology on `handle`.
    ///
    /// `Increment`/`Decrement` behave like arrow keys; `SetValue` commits
    /// `value` through the same clamping and ordering as any other input.
    pub fn on_accessibility_action(
        &mut self,
        handle: HandleId,
        action: Action,
        value: Option<f64>,
    ) -> Option<SliderChange> {
        match action {
            Action::Increment => self.on_key_down(handle, KeyDirection::Increase, false),
            Action::Decrement => self.on_key_down(handle, KeyDirection::Decrease, false),
            Action::SetValue => {
                let accepts_input = self
                    .document()
                    .coordinator()
                    .handle(handle)
                    .is_some_and(|controller| controller.interactivity().accepts_input());
                if !accepts_input {
                    return None;
                }
                self.commit_and_notify(handle, value?, true)
            }
            Action::Focus => {
                self.on_focus(handle);
                None
            }
            Action::Blur => {
                self.on_blur(handle);
                None
            }
            other => {
                trace!(?other, "unsupported accessibility action on slider");
                None
            }
        }
    }
}
