//! Model a color in the Oklab color space.

use crate::{convert, models::ColorModel, Component, Rgb};

color_models_macros::gen_model! {
    /// A color specified in the perceptual Oklab color space.
    pub struct Oklab {
        #[channel(bounded(0.0, 1.0))]
        lightness: Component,
        /// The green to red axis.
        #[channel(opponent(-1.0, 1.0))]
        a: Component,
        /// The blue to yellow axis.
        #[channel(opponent(-1.0, 1.0))]
        b: Component,
    }
}

impl Oklab {
    /// Convert an RGB color to Oklab.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        Self::from_clamped(convert::rgb_to_oklab(&rgb.to_unit()), rgb.alpha())
    }

    pub(crate) fn convert_to_rgb(&self) -> Rgb {
        Rgb::from_unit(convert::oklab_to_rgb(&self.channel_values()), self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_components_eq;

    #[test]
    fn from_rgb() {
        let oklab = Oklab::from_rgb(&Rgb::new(210.0, 105.0, 30.0).unwrap());
        assert_components_eq!(oklab.to_list(), [0.634398, 0.099074, 0.119193], 1.0e-5);
    }

    #[test]
    fn gray_has_no_opponents() {
        let oklab = Oklab::from_rgb(&Rgb::new(128.0, 128.0, 128.0).unwrap());
        assert_components_eq!([oklab.a(), oklab.b()], [0.0, 0.0], 1.0e-6);
    }
}
