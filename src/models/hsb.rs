//! Model a color with the HSB notation, also known as HSV.

use crate::{convert, models::ColorModel, Component, Rgb};

color_models_macros::gen_model! {
    /// A color specified with hue, saturation and brightness.
    pub struct Hsb {
        /// Hue in degrees.
        #[channel(hue)]
        hue: Component,
        #[channel(bounded(0.0, 100.0))]
        saturation: Component,
        #[channel(bounded(0.0, 100.0))]
        brightness: Component,
    }
}

/// HSV is another name for HSB.
pub type Hsv = Hsb;

impl Hsb {
    /// Convert an RGB color to HSB.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let [hue, saturation, brightness] = convert::rgb_to_hsb(&rgb.to_unit());
        Self::from_clamped([hue, saturation * 100.0, brightness * 100.0], rgb.alpha())
    }

    /// The brightness channel, under its HSV name.
    pub const fn value(&self) -> Component {
        self.brightness
    }

    pub(crate) fn convert_to_rgb(&self) -> Rgb {
        let unit = [self.hue, self.saturation / 100.0, self.brightness / 100.0];
        Rgb::from_unit(convert::hsb_to_rgb(&unit), self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_components_eq, ColorSpace};

    #[test]
    fn hsv_is_hsb() {
        let hsv = Hsv::new(108.0, 80.0, 70.0).unwrap();
        assert_eq!(hsv.space(), ColorSpace::Hsb);
        assert_eq!(hsv.value(), 70.0);
        assert_eq!("hsv".parse::<ColorSpace>(), Ok(ColorSpace::Hsb));
    }

    #[test]
    fn from_rgb() {
        let hsb = Hsb::from_rgb(&Rgb::new(210.0, 105.0, 30.0).unwrap());
        assert_components_eq!(hsb.to_list(), [25.0, 85.714286, 82.352941]);

        let black = Hsb::from_rgb(&Rgb::new(0.0, 0.0, 0.0).unwrap());
        assert_eq!(black.to_list(), vec![0.0, 0.0, 0.0]);
    }
}
