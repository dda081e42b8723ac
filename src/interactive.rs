//! Key mapping for the top-level interactive menu.
//!
//! The menu itself lives in the CLI layer; this module only decides what a
//! key means, so the mapping is testable without a terminal. Keys arrive
//! through the same [`crate::viewer::KeyReader`] capability the paged viewer
//! uses.

/// Action selected from the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Pick a location from the registry and log it for today.
    LogToday,
    /// Open the paged stats viewer.
    Stats,
    Quit,
}

/// Map one key to a menu action. Unrecognized keys mean "keep waiting".
pub fn menu_action(key: char) -> Option<MenuAction> {
    match key {
        'l' => Some(MenuAction::LogToday),
        's' => Some(MenuAction::Stats),
        'q' | '\x1b' => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Interpret a key as a pick from a numbered list of `len` items.
/// Non-digits and out-of-range digits cancel the pick.
pub fn pick_index(key: char, len: usize) -> Option<usize> {
    key.to_digit(10)
        .map(|d| d as usize)
        .filter(|&i| i < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_keys_map_to_actions() {
        assert_eq!(menu_action('l'), Some(MenuAction::LogToday));
        assert_eq!(menu_action('s'), Some(MenuAction::Stats));
        assert_eq!(menu_action('q'), Some(MenuAction::Quit));
        assert_eq!(menu_action('\x1b'), Some(MenuAction::Quit));
    }

    #[test]
    fn unrecognized_menu_keys_wait() {
        assert_eq!(menu_action('x'), None);
        assert_eq!(menu_action('0'), None);
    }

    #[test]
    fn pick_accepts_digits_in_range() {
        assert_eq!(pick_index('0', 3), Some(0));
        assert_eq!(pick_index('2', 3), Some(2));
    }

    #[test]
    fn pick_cancels_on_out_of_range_or_non_digit() {
        assert_eq!(pick_index('3', 3), None);
        assert_eq!(pick_index('9', 2), None);
        assert_eq!(pick_index('a', 3), None);
        assert_eq!(pick_index('\n', 3), None);
    }
}
