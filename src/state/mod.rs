//! Application state module

mod controller;
mod format;
mod forms;
mod presenter;
mod surface;
mod validation;

pub use controller::*;
pub use forms::*;
pub use presenter::*;
pub use surface::*;
