//! Model a color with the HSI notation.

use crate::{convert, models::ColorModel, Component, Rgb};

color_models_macros::gen_model! {
    /// A color specified with hue, saturation and intensity, where intensity
    /// is the mean of the RGB channels.
    pub struct Hsi {
        /// Hue in degrees.
        #[channel(hue)]
        hue: Component,
        #[channel(bounded(0.0, 100.0))]
        saturation: Component,
        #[channel(bounded(0.0, 100.0))]
        intensity: Component,
    }
}

impl Hsi {
    /// Convert an RGB color to HSI.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let [hue, saturation, intensity] = convert::rgb_to_hsi(&rgb.to_unit());
        Self::from_clamped([hue, saturation * 100.0, intensity * 100.0], rgb.alpha())
    }

    pub(crate) fn convert_to_rgb(&self) -> Rgb {
        let unit = [self.hue, self.saturation / 100.0, self.intensity / 100.0];
        Rgb::from_unit(convert::hsi_to_rgb(&unit), self.alpha)
    }
}
