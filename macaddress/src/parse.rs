use log::debug;

#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    #[error("Invalid length; expecting 14 or 17 characters, found {0}")]
    InvalidLength(usize),
    #[error("Invalid character; found '{0}' at offset {1}")]
    InvalidCharacter(char, usize),
}

/// Parses a MAC address written as 12 hex digits, optionally prefixed with
/// `0x`/`0X` and interleaved with `-`, `:` or `.` separators.
///
/// Only the total length (14 or 17 characters, prefix included) and the
/// character classes are checked, separator placement is not. Offsets in
/// errors count characters from the start of `s`.
pub fn parse_mac_address(s: &str) -> Result<[u8; 6], ParseError> {
    parse(s).inspect_err(|e| debug!("Rejected MAC address {:?}: {}", s, e))
}

fn parse(s: &str) -> Result<[u8; 6], ParseError> {
    let length = s.chars().count();
    if length != 14 && length != 17 {
        return Err(ParseError::InvalidLength(length));
    }

    let start = if s.starts_with("0x") || s.starts_with("0X") {
        2
    } else {
        0
    };

    let mut eui = [0u8; 6];
    let mut index = 0;
    let mut low_nibble = false;

    for (offset, c) in s.chars().enumerate().skip(start) {
        if index >= eui.len() {
            return Err(ParseError::InvalidLength(length));
        }

        match c {
            '-' | ':' | '.' => {}
            _ => {
                let Some(digit) = c.to_digit(16) else {
                    return Err(ParseError::InvalidCharacter(c, offset));
                };
                // to_digit(16) is at most 15
                let digit = digit as u8;
                if low_nibble {
                    eui[index] |= digit;
                    index += 1;
                } else {
                    eui[index] = digit << 4;
                }
                low_nibble = !low_nibble;
            }
        }
    }

    if index != eui.len() {
        return Err(ParseError::InvalidLength(length));
    }

    Ok(eui)
}
