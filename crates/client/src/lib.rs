pub mod error;
pub mod predict;

pub use error::*;
pub use predict::*;
