pub mod category;
pub use category::*;

pub mod describe;
pub use describe::*;

pub(crate) mod evaluator;

pub mod kicks;
pub use kicks::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;
