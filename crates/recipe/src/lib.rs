mod catalog;
mod form;
mod image;

pub use catalog::*;
pub use form::*;
pub use image::*;
