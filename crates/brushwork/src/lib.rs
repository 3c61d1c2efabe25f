//! Brushwork - acrylic-style brush stroke rendering over a CPU raster
//!
//! This crate provides the core types for a stamp-based paint surface:
//! - [`stamp`] - procedural brush stamps and the per-(color, size) cache
//! - [`brush`] - stroke interpolation from pointer input
//! - [`surface`] - the paintable RGBA pixel buffer
//! - [`guide`] - the five-point star practice guide
//! - [`input`] - mouse/touch normalization
//! - [`renderer`] - the complete renderer tying it all together
//!
//! Everything runs single-threaded and event-driven; the renderer's only
//! randomness comes from its own seedable generator.

pub mod brush;
pub mod color;
pub mod constants;
pub mod guide;
pub mod input;
pub mod renderer;
pub mod rng;
pub mod stamp;
pub mod surface;

pub use brush::*;
pub use color::*;
pub use constants::*;
pub use guide::*;
pub use input::*;
pub use renderer::*;
pub use rng::*;
pub use stamp::*;
pub use surface::*;
