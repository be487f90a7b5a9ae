//! Model a color with the HSP notation.

use crate::{convert, models::ColorModel, Component, Rgb};

color_models_macros::gen_model! {
    /// A color specified with hue, saturation and perceived brightness.
    ///
    /// Perceived brightness weighs the squared RGB channels by how bright
    /// each primary appears to the eye. Not every combination of channels is
    /// inside the RGB gamut; those are clamped when converted.
    pub struct Hsp {
        /// Hue in degrees.
        #[channel(hue)]
        hue: Component,
        #[channel(bounded(0.0, 100.0))]
        saturation: Component,
        #[channel(bounded(0.0, 100.0))]
        perceived_brightness: Component,
    }
}

impl Hsp {
    /// Convert an RGB color to HSP.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let [hue, saturation, brightness] = convert::rgb_to_hsp(&rgb.to_unit());
        Self::from_clamped([hue, saturation * 100.0, brightness * 100.0], rgb.alpha())
    }

    pub(crate) fn convert_to_rgb(&self) -> Rgb {
        let unit = [
            self.hue,
            self.saturation / 100.0,
            self.perceived_brightness / 100.0,
        ];
        Rgb::from_unit(convert::hsp_to_rgb(&unit), self.alpha)
    }
}
