pub mod format;
pub mod table;
pub mod view;
pub mod terminal;

pub use table::*;
pub use view::*;
pub use terminal::*;
