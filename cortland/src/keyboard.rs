//! Translation from host key codes to the byte the firmware expects to
//! find in the keyboard latch.

/// What the machine's left-arrow key produces (backspace).
pub const LEFT_ARROW: u8 = 0x08;

/// What the machine's right-arrow key produces (NAK).
pub const RIGHT_ARROW: u8 = 0x15;

/// Map a host key's ASCII code onto the latch encoding.
///
/// The firmware wants carriage returns, uppercase letters and the strobe
/// bit set; terminals produce line feeds, lowercase and bare bytes, so the
/// input adapter funnels every keystroke through here before storing it in
/// the latch.
pub fn latch_byte(key: u8) -> u8 {
    let key = match key {
        // Terminals send line feed for the return key.
        0x0A => 0x0D,
        // Bell doubles as backspace.
        0x07 => 0x08,
        // The character generator only knows uppercase.
        b'a'..=b'z' => key & !0x20,
        _ => key,
    };

    key | 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_feed_becomes_carriage_return() {
        assert_eq!(latch_byte(0x0A), 0x8D);
    }

    #[test]
    fn bell_becomes_backspace() {
        assert_eq!(latch_byte(0x07), 0x88);
    }

    #[test]
    fn lowercase_letters_are_folded_to_uppercase() {
        assert_eq!(latch_byte(b'a'), 0x80 | b'A');
        assert_eq!(latch_byte(b'z'), 0x80 | b'Z');
    }

    #[test]
    fn uppercase_and_digits_pass_through() {
        assert_eq!(latch_byte(b'A'), 0x80 | b'A');
        assert_eq!(latch_byte(b'7'), 0x80 | b'7');
    }

    #[test]
    fn the_strobe_bit_is_always_set() {
        for key in [0x00u8, 0x0D, b' ', b'Q', 0x7F] {
            assert!(latch_byte(key) & 0x80 != 0);
        }
    }

    #[test]
    fn arrow_codes_latch_as_control_bytes() {
        assert_eq!(latch_byte(LEFT_ARROW), 0x88);
        assert_eq!(latch_byte(RIGHT_ARROW), 0x95);
    }
}
