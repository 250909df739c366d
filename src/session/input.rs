use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a single sentence position looks like against the typed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharStatus {
    Pending,
    Correct,
    Incorrect(char),
}

/// A key press as seen by the session, stripped of terminal details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Other,
}

impl From<&KeyEvent> for Keystroke {
    fn from(key: &KeyEvent) -> Self {
        // Ctrl/Alt chords are commands, not text. Shift already folds into the char.
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Keystroke::Other;
        }
        match key.code {
            KeyCode::Char(ch) => Keystroke::Char(ch),
            _ => Keystroke::Other,
        }
    }
}

impl Keystroke {
    /// The visible character carried by this keystroke, if any.
    pub fn printable(self) -> Option<char> {
        match self {
            Keystroke::Char(ch) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct KeystrokeEvent {
    pub expected: char,
    pub actual: char,
    pub correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::ModifierKeyCode;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Keystroke {
        Keystroke::from(&KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_char_is_printable() {
        let ks = press(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(ks, Keystroke::Char('a'));
        assert_eq!(ks.printable(), Some('a'));
    }

    #[test]
    fn test_shifted_char_is_kept() {
        let ks = press(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(ks.printable(), Some('A'));
    }

    #[test]
    fn test_space_is_printable() {
        assert_eq!(press(KeyCode::Char(' '), KeyModifiers::NONE).printable(), Some(' '));
    }

    #[test]
    fn test_control_chords_are_not_text() {
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), Keystroke::Other);
        assert_eq!(press(KeyCode::Char('x'), KeyModifiers::ALT), Keystroke::Other);
    }

    #[test]
    fn test_modifier_and_named_keys_are_ignored() {
        let shift = press(
            KeyCode::Modifier(ModifierKeyCode::LeftShift),
            KeyModifiers::SHIFT,
        );
        assert_eq!(shift.printable(), None);
        assert_eq!(press(KeyCode::CapsLock, KeyModifiers::NONE).printable(), None);
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE).printable(), None);
        assert_eq!(press(KeyCode::Backspace, KeyModifiers::NONE).printable(), None);
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE).printable(), None);
    }

    #[test]
    fn test_control_characters_are_not_printable() {
        assert_eq!(Keystroke::Char('\t').printable(), None);
        assert_eq!(Keystroke::Char('\u{7f}').printable(), None);
    }
}
