pub mod cutoff;
pub use cutoff::*;

pub mod simulation;
pub use simulation::*;
