#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod exercise;
mod format;
mod grouping;
mod measurement;
mod plates;
mod values;

pub use exercise::*;
pub use format::*;
pub use grouping::*;
pub use measurement::*;
pub use plates::*;
pub use values::*;
