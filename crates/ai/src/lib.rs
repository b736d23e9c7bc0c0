mod action;
mod assistant;
mod error;
mod image;
mod prompt;

pub use action::*;
pub use assistant::*;
pub use error::*;
pub use image::*;
pub use prompt::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod client;

        pub use client::*;
    }
}
