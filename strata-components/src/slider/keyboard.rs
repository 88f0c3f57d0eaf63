//! Navigation keys and their mapping onto slider steps.

use super::value_model::KeyDirection;

/// Navigation keys a slider handle responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// `ArrowLeft`
    ArrowLeft,
    /// `ArrowRight`
    ArrowRight,
    /// `ArrowUp`
    ArrowUp,
    /// `ArrowDown`
    ArrowDown,
    /// `PageUp`
    PageUp,
    /// `PageDown`
    PageDown,
    /// `Home`
    Home,
    /// `End`
    End,
}

impl SliderKey {
    /// Parses a DOM `KeyboardEvent.key` name.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            "ArrowUp" | "Up" => Some(Self::ArrowUp),
            "ArrowDown" | "Down" => Some(Self::ArrowDown),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }

    /// Direction and step size for this key.
    ///
    /// Shift turns arrow keys into large steps; page keys are always large
    /// steps. Horizontal arrows follow the track direction, vertical arrows
    /// do not.
    pub fn resolve(self, shift: bool, is_right_to_left: bool) -> (KeyDirection, bool) {
        let forward = if is_right_to_left {
            KeyDirection::Decrease
        } else {
            KeyDirection::Increase
        };
        let backward = if is_right_to_left {
            KeyDirection::Increase
        } else {
            KeyDirection::Decrease
        };
        match self {
            Self::ArrowRight => (forward, shift),
            Self::ArrowLeft => (backward, shift),
            Self::ArrowUp => (KeyDirection::Increase, shift),
            Self::ArrowDown => (KeyDirection::Decrease, shift),
            Self::PageUp => (KeyDirection::Increase, true),
            Self::PageDown => (KeyDirection::Decrease, true),
            Self::Home => (KeyDirection::ToMinimum, false),
            Self::End => (KeyDirection::ToMaximum, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_follow_direction() {
        assert_eq!(
            SliderKey::ArrowRight.resolve(false, false),
            (KeyDirection::Increase, false)
        );
        assert_eq!(
            SliderKey::ArrowRight.resolve(false, true),
            (KeyDirection::Decrease, false)
        );
        assert_eq!(
            SliderKey::ArrowLeft.resolve(true, true),
            (KeyDirection::Increase, true)
        );
        assert_eq!(
            SliderKey::ArrowUp.resolve(false, true),
            (KeyDirection::Increase, false)
        );
    }

    #[test]
    fn test_page_and_extreme_keys() {
        assert_eq!(
            SliderKey::PageDown.resolve(false, false),
            (KeyDirection::Decrease, true)
        );
        assert_eq!(
            SliderKey::Home.resolve(true, false),
            (KeyDirection::ToMinimum, false)
        );
        assert_eq!(
            SliderKey::End.resolve(false, true),
            (KeyDirection::ToMaximum, false)
        );
    }

    #[test]
    fn test_from_key_name() {
        assert_eq!(SliderKey::from_key_name("ArrowUp"), Some(SliderKey::ArrowUp));
        assert_eq!(SliderKey::from_key_name("Left"), Some(SliderKey::ArrowLeft));
        assert_eq!(SliderKey::from_key_name("Enter"), None);
    }
}
