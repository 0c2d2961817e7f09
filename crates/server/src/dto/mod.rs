mod station;
mod train;

pub use station::*;
pub use train::*;
