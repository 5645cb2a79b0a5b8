// Constants for the demonstration

/// Starting address for local variable addresses
/// Stack addresses start at 0x00000004, leaving 0 free to stand for NULL
pub const STACK_ADDRESS_START: u64 = 0x0000_0004;

/// Number of decimal digits used when printing a `double`
pub const DOUBLE_PRECISION: usize = 4;
