//! Reusable UI components for the landing page sections

mod button;
mod carousel_controls;
mod input;
mod status;

pub use button::*;
pub use carousel_controls::*;
pub use input::*;
pub use status::*;
