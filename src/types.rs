// Primitive types demonstrated by the program

/// Primitive types covered by the demonstration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimType {
    Int,
    Float,
    Double,
    Bool,
    Char,
    LongLong,
    Short,
    String,
}

impl PrimType {
    /// All demonstrated types, in the order they are printed
    pub const ALL: [PrimType; 8] = [
        PrimType::Int,
        PrimType::Float,
        PrimType::Double,
        PrimType::Bool,
        PrimType::Char,
        PrimType::LongLong,
        PrimType::Short,
        PrimType::String,
    ];

    /// C-family spelling of the type
    pub fn keyword(self) -> &'static str {
        match self {
            PrimType::Int => "int",
            PrimType::Float => "float",
            PrimType::Double => "double",
            PrimType::Bool => "bool",
            PrimType::Char => "char",
            PrimType::LongLong => "long long",
            PrimType::Short => "short",
            PrimType::String => "std::string",
        }
    }

    /// Whether values of this type live in a fixed number of bytes
    pub fn is_fixed_width(self) -> bool {
        !matches!(self, PrimType::String)
    }
}

/// Size of a type in bytes, as laid out by the host.
///
/// `char` maps to a one-byte integer, not Rust's four-byte `char`.
/// `String` reports the size of its header only; the text lives elsewhere.
pub fn sizeof_type(t: PrimType) -> usize {
    use std::mem::size_of;

    match t {
        PrimType::Int => size_of::<i32>(),
        PrimType::Float => size_of::<f32>(),
        PrimType::Double => size_of::<f64>(),
        PrimType::Bool => size_of::<bool>(),
        PrimType::Char => size_of::<i8>(),
        PrimType::LongLong => size_of::<i64>(),
        PrimType::Short => size_of::<i16>(),
        PrimType::String => size_of::<String>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_sizes() {
        assert_eq!(sizeof_type(PrimType::Int), 4);
        assert_eq!(sizeof_type(PrimType::Float), 4);
        assert_eq!(sizeof_type(PrimType::Double), 8);
        assert_eq!(sizeof_type(PrimType::Bool), 1);
        assert_eq!(sizeof_type(PrimType::Char), 1);
        assert_eq!(sizeof_type(PrimType::LongLong), 8);
        assert_eq!(sizeof_type(PrimType::Short), 2);
    }

    #[test]
    fn test_string_size_is_header_only() {
        assert_eq!(
            sizeof_type(PrimType::String),
            3 * std::mem::size_of::<usize>()
        );
        assert!(!PrimType::String.is_fixed_width());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(PrimType::LongLong.keyword(), "long long");
        assert_eq!(PrimType::String.keyword(), "std::string");
    }
}
