//! Wick Numeric - Arbitrary-precision numbers for the Wick value core.
//!
//! This crate provides:
//! - `Integer` and `Decimal`, immutable big numbers with NaN and signed
//!   Infinity states
//! - `Number`, the either-kind wrapper produced by numeric parsing
//! - `RoundingMode` and the rounding operations on both kinds
//! - `NumberFormat`, the script-visible rendering pattern
//!
//! # Undefined states
//!
//! An undefined number stores a sentinel magnitude whose sign names its
//! state (zero is NaN, positive is +Infinity, negative is -Infinity). NaN
//! compares equal only to NaN, and ordering places -Infinity below every
//! defined value, +Infinity above, and NaN last.

#[macro_use]
mod macros;

mod decimal;
mod format;
mod integer;
mod number;
mod parse;
mod rounding;
mod state;

pub use decimal::Decimal;
pub use format::{NumberFormat, DEFAULT_PATTERN};
pub use integer::Integer;
pub use number::Number;
pub use parse::ParseNumberError;
pub use rounding::RoundingMode;
pub use state::{NumberState, INFINITY_TOKEN, NAN_TOKEN, NEG_INFINITY_TOKEN};
