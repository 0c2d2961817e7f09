mod selection;
mod stations;
mod trains;

pub use selection::*;
pub use stations::*;
pub use trains::*;
