//! # Accessibility Semantics
//!
//! Components describe themselves to assistive technologies with an
//! [`AccessibilityNode`]. The host owns the AccessKit tree and its node ids;
//! it converts each published node with [`AccessibilityNode::to_accesskit`]
//! and forwards AccessKit action requests back to the component.
//!
//! ## Usage
//!
//! ```
//! use strata_ui::{
//!     AccessibilityNode,
//!     accesskit::{Action, Role},
//! };
//!
//! let node = AccessibilityNode::new()
//!     .with_role(Role::Slider)
//!     .with_label("Volume")
//!     .with_numeric_value(40.0)
//!     .with_numeric_range(0.0, 100.0)
//!     .with_action(Action::Increment)
//!     .focusable();
//!
//! let accesskit_node = node.to_accesskit();
//! assert_eq!(accesskit_node.role(), Role::Slider);
//! ```

use accesskit::{Action, Node, Role};

/// Semantic information for an accessibility node.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityNode {
    /// The role of this node (slider, button, etc.)
    pub role: Option<Role>,
    /// A human-readable label for this node
    pub label: Option<String>,
    /// A detailed description of this node
    pub description: Option<String>,
    /// The current value as announced text (`aria-valuetext`)
    pub value: Option<String>,
    /// Numeric value (`aria-valuenow`)
    pub numeric_value: Option<f64>,
    /// Minimum numeric value (`aria-valuemin`)
    pub min_numeric_value: Option<f64>,
    /// Maximum numeric value (`aria-valuemax`)
    pub max_numeric_value: Option<f64>,
    /// Optional numeric step for range-based controls.
    pub numeric_value_step: Option<f64>,
    /// Optional numeric jump value for range-based controls.
    pub numeric_value_jump: Option<f64>,
    /// Whether this node can receive focus
    pub focusable: bool,
    /// Whether this node is currently focused
    pub focused: bool,
    /// Whether this node is disabled
    pub disabled: bool,
    /// Whether this node is read-only
    pub read_only: bool,
    /// Supported actions
    pub actions: Vec<Action>,
    /// Custom accessibility key provided by the component
    pub key: Option<String>,
}

impl AccessibilityNode {
    /// Creates a new empty accessibility node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the role of this node.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets the label of this node.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the description of this node.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the value text of this node.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the numeric value of this node.
    pub fn with_numeric_value(mut self, value: f64) -> Self {
        self.numeric_value = Some(value);
        self
    }

    /// Sets the numeric range of this node.
    pub fn with_numeric_range(mut self, min: f64, max: f64) -> Self {
        self.min_numeric_value = Some(min);
        self.max_numeric_value = Some(max);
        self
    }

    /// Sets the small and large increments of a range-based control.
    pub fn with_numeric_steps(mut self, step: f64, jump: f64) -> Self {
        self.numeric_value_step = Some(step);
        self.numeric_value_jump = Some(jump);
        self
    }

    /// Marks this node as focusable.
    pub fn focusable(mut self) -> Self {
        self.focusable = true;
        self
    }

    /// Marks this node as focused.
    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    /// Marks this node as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Marks this node as read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Adds an action that this node supports.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds multiple actions that this node supports.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Sets a custom accessibility key for stable ID generation.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Converts this node into an AccessKit node.
    ///
    /// Focus is not encoded on the node itself; AccessKit tracks it on the
    /// tree update, so hosts read [`AccessibilityNode::focused`] separately.
    pub fn to_accesskit(&self) -> Node {
        let mut node = Node::new(self.role.unwrap_or(Role::Unknown));

        if let Some(label) = &self.label {
            node.set_label(label.clone());
        }
        if let Some(description) = &self.description {
            node.set_description(description.clone());
        }
        if let Some(value) = &self.value {
            node.set_value(value.clone());
        }
        if let Some(numeric_value) = self.numeric_value {
            node.set_numeric_value(numeric_value);
        }
        if let Some(min) = self.min_numeric_value {
            node.set_min_numeric_value(min);
        }
        if let Some(max) = self.max_numeric_value {
            node.set_max_numeric_value(max);
        }
        if let Some(step) = self.numeric_value_step {
            node.set_numeric_value_step(step);
        }
        if let Some(jump) = self.numeric_value_jump {
            node.set_numeric_value_jump(jump);
        }

        if self.focusable {
            node.add_action(Action::Focus);
        }
        if self.disabled {
            node.set_disabled();
        }
        if self.read_only {
            node.set_read_only();
        }
        for action in &self.actions {
            node.add_action(*action);
        }

        node
    }
}

impl Default for AccessibilityNode {
    fn default() -> Self {
        Self {
            role: None,
            label: None,
            description: None,
            value: None,
            numeric_value: None,
            min_numeric_value: None,
            max_numeric_value: None,
            numeric_value_step: None,
            numeric_value_jump: None,
            focusable: false,
            focused: false,
            disabled: false,
            read_only: false,
            actions: Vec::new(),
            key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_node_conversion() {
        let node = AccessibilityNode::new()
            .with_role(Role::Slider)
            .with_label("Lower bound")
            .with_value("25%")
            .with_numeric_value(25.0)
            .with_numeric_range(0.0, 100.0)
            .with_numeric_steps(5.0, 20.0)
            .with_actions([Action::Increment, Action::Decrement])
            .focusable()
            .read_only();

        let converted = node.to_accesskit();
        assert_eq!(converted.role(), Role::Slider);
        assert_eq!(converted.numeric_value(), Some(25.0));
        assert_eq!(converted.min_numeric_value(), Some(0.0));
        assert_eq!(converted.max_numeric_value(), Some(100.0));
        assert_eq!(converted.numeric_value_step(), Some(5.0));
        assert_eq!(converted.numeric_value_jump(), Some(20.0));
        assert_eq!(converted.value(), Some("25%"));
        assert!(converted.supports_action(Action::Increment));
        assert!(converted.supports_action(Action::Focus));
        assert!(converted.is_read_only());
        assert!(!converted.is_disabled());
    }

    #[test]
    fn test_default_node_is_unknown_role() {
        let node = AccessibilityNode::default();
        assert!(node.actions.is_empty());
        assert_eq!(node.to_accesskit().role(), Role::Unknown);
    }
}
