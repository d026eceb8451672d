use cortland::keyboard;
use termion::event::Key;

/// Translate a terminal key event into a latch byte for the machine.
///
/// Returns `None` for keys the machine has no encoding for (function
/// keys, mouse chords and so on). Ctrl-letter chords latch as their
/// control codes, which is how the firmware's break (Ctrl-C) reaches
/// BASIC.
pub fn translate(key: Key) -> Option<u8> {
    let code = match key {
        Key::Char(c) if c.is_ascii() => c as u8,
        Key::Left | Key::Backspace => keyboard::LEFT_ARROW,
        Key::Right => keyboard::RIGHT_ARROW,
        Key::Esc => 0x1B,
        Key::Ctrl(c) if c.is_ascii_alphabetic() => (c.to_ascii_uppercase() as u8) & 0x1F,
        _ => return None,
    };

    Some(keyboard::latch_byte(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_key_latches_a_carriage_return() {
        assert_eq!(translate(Key::Char('\n')), Some(0x8D));
    }

    #[test]
    fn arrows_latch_the_machine_cursor_codes() {
        assert_eq!(translate(Key::Left), Some(0x88));
        assert_eq!(translate(Key::Right), Some(0x95));
    }

    #[test]
    fn control_chords_latch_control_codes() {
        assert_eq!(translate(Key::Ctrl('c')), Some(0x83));
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(translate(Key::F(1)), None);
        assert_eq!(translate(Key::Home), None);
    }
}
