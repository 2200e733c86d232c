mod base;

pub mod make;

pub use base::*;
pub use make::{Coords, Make, Text};
