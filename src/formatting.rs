//! Text formatting for printed values
//!
//! Floating-point values print either in their shortest round-trip form or with
//! a fixed number of decimal digits. Booleans print as words and characters as
//! the character itself. Integers ignore the precision setting.

use crate::memory::value::Value;

/// How floating-point values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Shortest text that round-trips to the same value
    #[default]
    Shortest,
    /// Exactly this many digits after the decimal point
    Fixed(usize),
}

/// Format a value for the output stream
pub fn format_value(value: &Value, precision: Precision) -> String {
    match (value, precision) {
        (Value::Float(x), Precision::Fixed(digits)) => format!("{:.*}", digits, x),
        (Value::Double(x), Precision::Fixed(digits)) => format!("{:.*}", digits, x),
        (Value::Float(x), Precision::Shortest) => format!("{}", x),
        (Value::Double(x), Precision::Shortest) => format!("{}", x),
        (Value::Int(n), _) => format!("{}", n),
        (Value::Bool(b), _) => format!("{}", b),
        (Value::Char(c), _) => char::from(*c as u8).to_string(),
        (Value::LongLong(n), _) => format!("{}", n),
        (Value::Short(n), _) => format!("{}", n),
        (Value::Str(s), _) => s.clone(),
    }
}

/// Format the size line for a value
pub fn format_size(size: usize) -> String {
    format!("Size: {} bytes", size)
}

/// Format a character for the inspector: quoted when printable, escaped otherwise
pub fn format_char_literal(c: i8) -> String {
    let byte = c as u8;
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("'{}'", byte as char)
    } else {
        format!("'\\x{:02x}'", byte)
    }
}

/// Format a value the way it would be written in source
pub fn format_literal(value: &Value) -> String {
    match value {
        Value::Char(c) => format_char_literal(*c),
        Value::Str(s) => format!("{:?}", s),
        other => format_value(other, Precision::Shortest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_precision_double() {
        assert_eq!(
            format_value(&Value::Double(434.4343), Precision::Fixed(4)),
            "434.4343"
        );
        assert_eq!(format_value(&Value::Double(1.5), Precision::Fixed(4)), "1.5000");
    }

    #[test]
    fn test_shortest_float() {
        assert_eq!(format_value(&Value::Float(4.5), Precision::Shortest), "4.5");
    }

    #[test]
    fn test_precision_ignored_for_integers() {
        assert_eq!(format_value(&Value::Int(4), Precision::Fixed(4)), "4");
        assert_eq!(
            format_value(&Value::LongLong(9_876_543_210), Precision::Fixed(2)),
            "9876543210"
        );
    }

    #[test]
    fn test_words_and_characters() {
        assert_eq!(format_value(&Value::Bool(true), Precision::default()), "true");
        assert_eq!(format_value(&Value::Bool(false), Precision::default()), "false");
        assert_eq!(format_value(&Value::Char(b'A' as i8), Precision::default()), "A");
    }

    #[test]
    fn test_size_line_is_always_plural() {
        assert_eq!(format_size(1), "Size: 1 bytes");
        assert_eq!(format_size(8), "Size: 8 bytes");
    }

    #[test]
    fn test_literals() {
        assert_eq!(format_literal(&Value::Char(b'A' as i8)), "'A'");
        assert_eq!(format_literal(&Value::Char(7)), "'\\x07'");
        assert_eq!(format_literal(&Value::Str("Mercury-CPP".into())), "\"Mercury-CPP\"");
    }
}
