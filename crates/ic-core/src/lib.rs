/// Types partagés et dérivation déterministe des identicons.
///
/// This crate holds the pure half of the pipeline: digest, color and
/// pattern derivation, the pixel canvas, errors, and configuration.

pub mod canvas;
pub mod color;
pub mod config;
pub mod digest;
pub mod error;
pub mod identicon;
pub mod pattern;

pub use canvas::Canvas;
pub use color::{BACKGROUND, Rgba};
pub use config::IconConfig;
pub use digest::Digest;
pub use error::CoreError;
pub use identicon::Identicon;
pub use pattern::BitMatrix;
