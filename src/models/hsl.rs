//! Model a color with the HSL notation.

use crate::{convert, models::ColorModel, Component, Rgb};

color_models_macros::gen_model! {
    /// A color specified with hue, saturation and lightness.
    pub struct Hsl {
        /// Hue in degrees.
        #[channel(hue)]
        hue: Component,
        #[channel(bounded(0.0, 100.0))]
        saturation: Component,
        #[channel(bounded(0.0, 100.0))]
        lightness: Component,
    }
}

impl Hsl {
    /// Convert an RGB color to HSL.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let [hue, saturation, lightness] = convert::rgb_to_hsl(&rgb.to_unit());
        Self::from_clamped([hue, saturation * 100.0, lightness * 100.0], rgb.alpha())
    }

    pub(crate) fn convert_to_rgb(&self) -> Rgb {
        let unit = [self.hue, self.saturation / 100.0, self.lightness / 100.0];
        Rgb::from_unit(convert::hsl_to_rgb(&unit), self.alpha)
    }
}
