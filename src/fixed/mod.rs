pub mod angle;
pub mod rounding;
pub mod wide;

pub use angle::{Enclosure, Precision, TurnFraction};
pub use rounding::{Rational, round_shift_convergent};
pub use wide::Wide;
