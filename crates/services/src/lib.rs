pub mod form;
pub mod controller;

pub use form::*;
pub use controller::*;
