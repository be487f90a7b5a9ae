//! Model a color in the CMYK color space.

use crate::{convert, models::ColorModel, Component, Rgb};

color_models_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and black (key) inks.
    pub struct Cmyk {
        #[channel(bounded(0.0, 100.0))]
        cyan: Component,
        #[channel(bounded(0.0, 100.0))]
        magenta: Component,
        #[channel(bounded(0.0, 100.0))]
        yellow: Component,
        #[channel(bounded(0.0, 100.0))]
        black: Component,
    }
}

impl Cmyk {
    /// Convert an RGB color to CMYK.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let values = convert::rgb_to_cmyk(&rgb.to_unit()).map(|value| value * 100.0);
        Self::from_clamped(values, rgb.alpha())
    }

    pub(crate) fn convert_to_rgb(&self) -> Rgb {
        let unit = self.channel_values().map(|value| value / 100.0);
        Rgb::from_unit(convert::cmyk_to_rgb(&unit), self.alpha)
    }
}
