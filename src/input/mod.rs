//! Input loading
//! Turns files or inline text into the plain text the extractors consume

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::{InputManager, TextSource};
