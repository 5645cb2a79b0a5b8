//! Memory model for the demonstration
//!
//! - [`value`]: tagged runtime values, one variant per primitive type
//! - [`frame`]: the single stack frame holding the demonstrated locals
//!
//! # Type Sizes
//!
//! Sizes come from the host layout via [`crate::types::sizeof_type`]:
//! - `int`, `float`: 4 bytes
//! - `double`, `long long`: 8 bytes
//! - `short`: 2 bytes
//! - `bool`, `char`: 1 byte
//! - `std::string`: the size of the string header (24 bytes on 64-bit hosts)

pub mod frame;
pub mod value;
