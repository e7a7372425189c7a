//! Input normalization for shortcut activation.

use iced::keyboard::Modifiers;

/// Whether the held modifiers request "open in the other pane".
/// Command on macOS, Control everywhere else.
pub fn alternate_pane_requested(modifiers: Modifiers) -> bool {
    if cfg!(target_os = "macos") {
        modifiers.logo()
    } else {
        modifiers.control()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_click_stays_in_the_same_pane() {
        assert!(!alternate_pane_requested(Modifiers::empty()));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn control_requests_the_other_pane() {
        assert!(alternate_pane_requested(Modifiers::CTRL));
        assert!(!alternate_pane_requested(Modifiers::SHIFT));
    }
}
