//! Centralized keybindings and navigation commands
//!
//! Maps concrete key events onto the logical key surface and provides the
//! command list shown in the help footer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::navigator::{ClusterAction, KeyAction};

/// What the keyboard is currently feeding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Normal,
    /// The search box owns printable keys
    TextEntry,
    /// A yes/no question is pending
    Confirmation,
}

/// Map a key event to a logical action
pub fn map_key(key: KeyEvent, context: InputContext) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::ForceQuit),
            _ => None,
        };
    }

    match context {
        InputContext::TextEntry => match key.code {
            KeyCode::Enter => Some(KeyAction::ConfirmSearch),
            KeyCode::Esc => Some(KeyAction::Cancel),
            KeyCode::Backspace => Some(KeyAction::TextBackspace),
            KeyCode::Char(c) => Some(KeyAction::TextInput(c)),
            _ => None,
        },
        InputContext::Confirmation => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(KeyAction::Accept),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(KeyAction::Reject),
            _ => None,
        },
        InputContext::Normal => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::MoveDown),
            KeyCode::Char('/') => Some(KeyAction::StartSearch),
            KeyCode::Esc => Some(KeyAction::Cancel),
            KeyCode::Char('n') => Some(KeyAction::NextMatch),
            KeyCode::Char('N') => Some(KeyAction::PrevMatch),
            KeyCode::Char('c') => Some(KeyAction::Copy),
            KeyCode::Enter | KeyCode::Char('y') => Some(KeyAction::Show),
            KeyCode::Char('g') => Some(KeyAction::Cluster(ClusterAction::GetManifest)),
            KeyCode::Char('d') => Some(KeyAction::Cluster(ClusterAction::Describe)),
            KeyCode::Char('e') => Some(KeyAction::Cluster(ClusterAction::Edit)),
            KeyCode::Char('x') => Some(KeyAction::Cluster(ClusterAction::Delete)),
            KeyCode::Char('?') | KeyCode::Char('h') => Some(KeyAction::ToggleHelp),
            KeyCode::Char('q') => Some(KeyAction::Quit),
            _ => None,
        },
    }
}

/// Navigation command with keybinding and label
#[derive(Debug, Clone)]
pub struct NavigationCommand {
    /// The keybinding string (e.g., "j/k", "Enter")
    pub key: &'static str,
    /// The human-readable label (e.g., "Navigate", "Show")
    pub label: &'static str,
}

impl NavigationCommand {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Navigator commands in the order they appear in the help footer
pub fn get_navigation_commands() -> Vec<NavigationCommand> {
    vec![
        NavigationCommand::new("j/k", "Navigate"),
        NavigationCommand::new("/", "Search"),
        NavigationCommand::new("n/N", "Next/Prev match"),
        NavigationCommand::new("Enter", "Show"),
        NavigationCommand::new("c", "Copy ID"),
        NavigationCommand::new("g", "Get YAML"),
        NavigationCommand::new("d", "Describe"),
        NavigationCommand::new("e", "Edit"),
        NavigationCommand::new("x", "Delete"),
        NavigationCommand::new("?", "Help"),
        NavigationCommand::new("q", "Quit"),
    ]
}

/// Manifest viewer commands
pub fn get_viewer_commands() -> Vec<NavigationCommand> {
    vec![
        NavigationCommand::new("j/k", "Scroll"),
        NavigationCommand::new("Esc/q", "Back"),
    ]
}

/// Width of " | " between footer segments
pub const SEPARATOR_LEN: usize = 3;

/// Lines the help footer needs at `terminal_width`, borders included
///
/// Segments are laid out as `key label` joined by " | ", wrapping onto a new
/// line when the next segment does not fit.
pub fn calculate_footer_height(terminal_width: u16, commands: &[NavigationCommand]) -> u16 {
    footer_lines(terminal_width, commands).len() as u16 + 2
}

/// Split commands into footer lines for the available width
pub fn footer_lines(terminal_width: u16, commands: &[NavigationCommand]) -> Vec<Vec<NavigationCommand>> {
    let available = terminal_width.saturating_sub(2) as usize;
    let mut lines: Vec<Vec<NavigationCommand>> = vec![Vec::new()];
    let mut line_len = 0;

    for cmd in commands {
        let segment_len = cmd.key.chars().count() + 1 + cmd.label.chars().count();
        if line_len > 0 && line_len + SEPARATOR_LEN + segment_len > available {
            lines.push(Vec::new());
            line_len = 0;
        }
        if line_len > 0 {
            line_len += SEPARATOR_LEN;
        }
        line_len += segment_len;
        if let Some(line) = lines.last_mut() {
            line.push(cmd.clone());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_keys() {
        let ctx = InputContext::Normal;
        assert_eq!(map_key(key(KeyCode::Char('j')), ctx), Some(KeyAction::MoveDown));
        assert_eq!(map_key(key(KeyCode::Up), ctx), Some(KeyAction::MoveUp));
        assert_eq!(map_key(key(KeyCode::Char('N')), ctx), Some(KeyAction::PrevMatch));
        assert_eq!(map_key(key(KeyCode::Char('y')), ctx), Some(KeyAction::Show));
        assert_eq!(
            map_key(key(KeyCode::Char('x')), ctx),
            Some(KeyAction::Cluster(ClusterAction::Delete))
        );
        assert_eq!(map_key(key(KeyCode::F(5)), ctx), None);
    }

    #[test]
    fn test_text_entry_captures_letters() {
        let ctx = InputContext::TextEntry;
        assert_eq!(map_key(key(KeyCode::Char('q')), ctx), Some(KeyAction::TextInput('q')));
        assert_eq!(map_key(key(KeyCode::Enter), ctx), Some(KeyAction::ConfirmSearch));
        assert_eq!(map_key(key(KeyCode::Backspace), ctx), Some(KeyAction::TextBackspace));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for ctx in [
            InputContext::Normal,
            InputContext::TextEntry,
            InputContext::Confirmation,
        ] {
            assert_eq!(map_key(ctrl_c, ctx), Some(KeyAction::ForceQuit));
        }
    }

    #[test]
    fn test_confirmation_keys() {
        let ctx = InputContext::Confirmation;
        assert_eq!(map_key(key(KeyCode::Char('y')), ctx), Some(KeyAction::Accept));
        assert_eq!(map_key(key(KeyCode::Esc), ctx), Some(KeyAction::Reject));
        assert_eq!(map_key(key(KeyCode::Char('j')), ctx), None);
    }

    #[test]
    fn test_footer_wraps_on_narrow_terminals() {
        let commands = get_navigation_commands();
        assert_eq!(calculate_footer_height(400, &commands), 3);
        assert!(calculate_footer_height(40, &commands) > 3);
    }
}
