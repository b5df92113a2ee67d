pub mod store;
pub mod json_file;
pub mod memory;

pub use store::*;
pub use json_file::*;
pub use memory::*;
