//! Resolves which option of the open menu the player picked

use tracing::debug;

use crate::host::{ClientHost, WidgetRef, KEY_DIGIT_1, KEY_DIGIT_6, MENU_ACTION_WIDGET_CONTINUE};

const CONTINUE_MENU_OPTION: &str = "Continue";

/// Option index selected by a digit key, `1` through `6`
pub fn option_index_for_key(key_code: i32) -> Option<usize> {
    if (KEY_DIGIT_1..=KEY_DIGIT_6).contains(&key_code) {
        usize::try_from(key_code - KEY_DIGIT_1 + 1).ok()
    } else {
        None
    }
}

/// Resolve a clicked "Continue" menu entry to the chosen option's text.
///
/// `param` indexes the option list's children directly.
pub fn resolve_menu_click(
    host: &dyn ClientHost,
    label: &str,
    action: i32,
    param: i32,
) -> Option<String> {
    if !label.starts_with(CONTINUE_MENU_OPTION) || action != MENU_ACTION_WIDGET_CONTINUE {
        return None;
    }
    let index = usize::try_from(param).ok()?;
    let text = option_text(host, index)?;
    debug!(index, text = %text, "Option clicked");
    Some(text)
}

/// Resolve a digit key shortcut to the chosen option's text
pub fn resolve_key_press(host: &dyn ClientHost, key_code: i32) -> Option<String> {
    let index = option_index_for_key(key_code)?;
    let text = option_text(host, index)?;
    debug!(index, text = %text, "Option chosen by key");
    Some(text)
}

fn option_text(host: &dyn ClientHost, index: usize) -> Option<String> {
    let children = host.widget_children(WidgetRef::OptionList)?;
    let text = children.into_iter().nth(index)?;
    if text.trim().is_empty() {
        return None;
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;

    fn host_with_options() -> MemoryHost {
        let mut host = MemoryHost::new();
        host.show_options(&["Select an Option", "Yes please", "", "No thanks"]);
        host
    }

    #[test]
    fn test_option_index_for_key() {
        assert_eq!(option_index_for_key(49), Some(1));
        assert_eq!(option_index_for_key(54), Some(6));
        assert_eq!(option_index_for_key(48), None);
        assert_eq!(option_index_for_key(55), None);
        assert_eq!(option_index_for_key(32), None);
    }

    #[test]
    fn test_menu_click_resolves_child() {
        let host = host_with_options();
        let text = resolve_menu_click(&host, "Continue", 30, 3);
        assert_eq!(text.as_deref(), Some("No thanks"));
    }

    #[test]
    fn test_menu_click_requires_continue_widget_action() {
        let host = host_with_options();
        assert_eq!(resolve_menu_click(&host, "Walk here", 30, 1), None);
        assert_eq!(resolve_menu_click(&host, "Continue", 57, 1), None);
        assert_eq!(
            resolve_menu_click(&host, "Continue-dialogue", 30, 1).as_deref(),
            Some("Yes please")
        );
    }

    #[test]
    fn test_menu_click_ignores_blank_and_out_of_range() {
        let host = host_with_options();
        assert_eq!(resolve_menu_click(&host, "Continue", 30, 2), None);
        assert_eq!(resolve_menu_click(&host, "Continue", 30, 9), None);
        assert_eq!(resolve_menu_click(&host, "Continue", 30, -1), None);
    }

    #[test]
    fn test_key_press_resolves_child() {
        let host = host_with_options();
        assert_eq!(resolve_key_press(&host, 49).as_deref(), Some("Yes please"));
        assert_eq!(resolve_key_press(&host, 51).as_deref(), Some("No thanks"));
        assert_eq!(resolve_key_press(&host, 50), None);
        assert_eq!(resolve_key_press(&host, 54), None);
    }

    #[test]
    fn test_key_press_without_menu() {
        let host = MemoryHost::new();
        assert_eq!(resolve_key_press(&host, 49), None);
    }
}
