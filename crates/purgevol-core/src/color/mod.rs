//! Color primitives — 8-bit RGB, HSV conversion, luminance, and hex decoding.

pub mod hex;
pub mod hsv;
pub mod rgb;

pub use hsv::{Hsv, rgb_to_hsv};
pub use rgb::{Rgb8, luminance};
