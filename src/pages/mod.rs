//! Page components for the estate site.

mod landing;

pub use landing::Landing;
