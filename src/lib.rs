//! color-models provides immutable colors in nine color spaces, conversions
//! between all of them and the operations built on top: hue rotation,
//! inversion, interpolation, gradients and palette resampling.
//!
//! ```rust
//! use color_models::prelude::*;
//!
//! let red = Rgb::new(255.0, 0.0, 0.0).unwrap();
//! let blue = Hsl::new(240.0, 100.0, 50.0).unwrap();
//!
//! let gradient = red.lerp_to(&blue, 3, Some(ColorSpace::Oklab), false).unwrap();
//! assert_eq!(gradient.len(), 5);
//! assert_eq!(gradient[4], blue);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod interpolate;
mod math;
mod models;
mod palette;


pub use color::{Channel, ChannelKind, Color, ColorSpace, Component};
pub use error::ColorError;
pub use models::{ColorModel, Cmyk, Hsb, Hsi, Hsl, Hsp, Hsv, Lab, Oklab, Rgb, Xyz};
pub use palette::Palette;

/// The types and traits needed to work with colors.
pub mod prelude {
    pub use crate::{
        Cmyk, Color, ColorError, ColorModel, ColorSpace, Hsb, Hsi, Hsl, Hsp, Hsv, Lab, Oklab,
        Palette, Rgb, Xyz,
    };
}
