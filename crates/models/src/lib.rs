pub mod prediction;
pub mod history;
pub mod error;

pub use prediction::*;
pub use history::*;
pub use error::*;
