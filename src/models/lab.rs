//! Model a color in the CIE-Lab color space.

use crate::{convert, models::ColorModel, Component, Rgb};

color_models_macros::gen_model! {
    /// A color specified in CIE-Lab, relative to the D65 white point.
    pub struct Lab {
        #[channel(bounded(0.0, 100.0))]
        lightness: Component,
        /// The green to red axis.
        #[channel(opponent(-128.0, 127.0))]
        a: Component,
        /// The blue to yellow axis.
        #[channel(opponent(-128.0, 127.0))]
        b: Component,
    }
}

impl Lab {
    /// Convert an RGB color to CIE-Lab.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let xyz = convert::rgb_to_xyz(&rgb.to_unit());
        Self::from_clamped(convert::xyz_to_lab(&xyz), rgb.alpha())
    }

    pub(crate) fn convert_to_rgb(&self) -> Rgb {
        let xyz = convert::lab_to_xyz(&self.channel_values());
        Rgb::from_unit(convert::xyz_to_rgb(&xyz), self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_components_eq;

    #[test]
    fn white_and_black() {
        let white = Lab::from_rgb(&Rgb::new(255.0, 255.0, 255.0).unwrap());
        assert_components_eq!(white.to_list(), [100.0, 0.0, 0.0]);

        let black = Lab::from_rgb(&Rgb::new(0.0, 0.0, 0.0).unwrap());
        assert_components_eq!(black.to_list(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn opponent_channels_accept_negatives() {
        assert!(Lab::new(50.0, -128.0, 127.0).is_ok());
        assert!(Lab::new(50.0, -129.0, 0.0).is_err());
    }
}
