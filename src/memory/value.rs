//! Runtime value representation
//!
//! This module defines the [`Value`] enum, one tagged variant per demonstrated
//! primitive type. Each variant holds the host Rust type that matches the C-family
//! type in size:
//!
//! - [`Value::Int`]: 32-bit signed integer
//! - [`Value::Float`]: 32-bit IEEE float
//! - [`Value::Double`]: 64-bit IEEE float
//! - [`Value::Bool`]: boolean
//! - [`Value::Char`]: 8-bit signed character
//! - [`Value::LongLong`]: 64-bit signed integer
//! - [`Value::Short`]: 16-bit signed integer
//! - [`Value::Str`]: owned text

use crate::types::{sizeof_type, PrimType};

/// Runtime values in the demonstration
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Double(f64),
    Bool(bool),
    Char(i8),
    LongLong(i64),
    Short(i16),
    Str(String),
}

/// Virtual address type (64-bit)
pub type Address = u64;

impl Value {
    /// The primitive type this value belongs to
    pub fn prim_type(&self) -> PrimType {
        match self {
            Value::Int(_) => PrimType::Int,
            Value::Float(_) => PrimType::Float,
            Value::Double(_) => PrimType::Double,
            Value::Bool(_) => PrimType::Bool,
            Value::Char(_) => PrimType::Char,
            Value::LongLong(_) => PrimType::LongLong,
            Value::Short(_) => PrimType::Short,
            Value::Str(_) => PrimType::String,
        }
    }

    /// Storage size in bytes
    pub fn size(&self) -> usize {
        sizeof_type(self.prim_type())
    }

    /// Little-endian byte image of the value.
    ///
    /// Strings yield their UTF-8 text, which is not what `size()` counts.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            Value::Int(n) => n.to_le_bytes().to_vec(),
            Value::Float(x) => x.to_le_bytes().to_vec(),
            Value::Double(x) => x.to_le_bytes().to_vec(),
            Value::Bool(b) => vec![u8::from(*b)],
            Value::Char(c) => c.to_le_bytes().to_vec(),
            Value::LongLong(n) => n.to_le_bytes().to_vec(),
            Value::Short(n) => n.to_le_bytes().to_vec(),
            Value::Str(s) => s.as_bytes().to_vec(),
        }
    }

    /// Get the char value, returns None if not a Char
    pub fn as_char(&self) -> Option<i8> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_matches_type() {
        assert_eq!(Value::Int(4).size(), 4);
        assert_eq!(Value::Short(32767).size(), 2);
        assert_eq!(Value::Str("abc".to_string()).size(), std::mem::size_of::<String>());
    }

    #[test]
    fn test_byte_images() {
        assert_eq!(Value::Int(4).to_le_bytes(), vec![4, 0, 0, 0]);
        assert_eq!(Value::Bool(true).to_le_bytes(), vec![1]);
        assert_eq!(Value::Char(b'A' as i8).to_le_bytes(), vec![0x41]);
        assert_eq!(Value::Short(32767).to_le_bytes(), vec![0xff, 0x7f]);
        assert_eq!(Value::Float(4.5).to_le_bytes(), vec![0x00, 0x00, 0x90, 0x40]);
        assert_eq!(Value::Str("Hi".to_string()).to_le_bytes(), b"Hi".to_vec());
    }

    #[test]
    fn test_fixed_width_images_fill_their_size() {
        let values = [
            Value::Int(1),
            Value::Float(1.0),
            Value::Double(1.0),
            Value::Bool(false),
            Value::Char(0),
            Value::LongLong(1),
            Value::Short(1),
        ];
        for v in values {
            assert_eq!(v.to_le_bytes().len(), v.size(), "{:?}", v);
        }
    }
}
