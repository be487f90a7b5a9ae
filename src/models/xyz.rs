//! Model a color in the CIE-XYZ color space.

use crate::{convert, models::ColorModel, Component, Rgb};

color_models_macros::gen_model! {
    /// A color specified in CIE-XYZ with the D65 white point, scaled so that
    /// white has a `y` of 100.
    pub struct Xyz {
        #[channel(open(0.0, 100.0))]
        x: Component,
        #[channel(open(0.0, 100.0))]
        y: Component,
        #[channel(open(0.0, 100.0))]
        z: Component,
    }
}

impl Xyz {
    /// Convert an RGB color to CIE-XYZ.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let xyz = convert::rgb_to_xyz(&rgb.to_unit()).map(|value| value * 100.0);
        Self::from_clamped(xyz, rgb.alpha())
    }

    pub(crate) fn convert_to_rgb(&self) -> Rgb {
        let xyz = self.channel_values().map(|value| value / 100.0);
        Rgb::from_unit(convert::xyz_to_rgb(&xyz), self.alpha)
    }
}
