//! Model a color in the RGB color space.

use crate::{models::ColorModel, Component};

color_models_macros::gen_model! {
    /// A color specified with red, green and blue channels in `[0, 255]`.
    ///
    /// Channels are stored at full precision so that chains of conversions do
    /// not accumulate rounding errors. The plain accessors and
    /// [`ColorModel::to_list`] round to whole numbers.
    #[precise]
    pub struct Rgb {
        #[channel(bounded(0.0, 255.0))]
        red: Component,
        #[channel(bounded(0.0, 255.0))]
        green: Component,
        #[channel(bounded(0.0, 255.0))]
        blue: Component,
    }
}

impl Rgb {
    /// Create a fully opaque color from 8-bit channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_raw(red.into(), green.into(), blue.into(), 255)
    }

    /// The red channel, rounded.
    pub fn red(&self) -> u8 {
        self.red.round() as u8
    }

    /// The green channel, rounded.
    pub fn green(&self) -> u8 {
        self.green.round() as u8
    }

    /// The blue channel, rounded.
    pub fn blue(&self) -> u8 {
        self.blue.round() as u8
    }

    /// The channels scaled to `[0, 1]`.
    pub(crate) fn to_unit(&self) -> [Component; 3] {
        self.channel_values().map(|value| value / 255.0)
    }

    /// Build a color from channels in `[0, 1]`. Out of gamut values are
    /// clamped.
    pub(crate) fn from_unit(values: [Component; 3], alpha: u8) -> Self {
        Self::from_clamped(values.map(|value| value * 255.0), alpha)
    }

    /// Copy an RGB color.
    pub fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }

    pub(crate) fn convert_to_rgb(&self) -> Rgb {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorError, ColorSpace};

    #[test]
    fn accessors_round() {
        let rgb = Rgb::new(10.4, 20.5, 254.6).unwrap();
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (10, 21, 255));
        assert_eq!(rgb.red_precise(), 10.4);
        assert_eq!(Rgb::from_rgb8(1, 2, 3).to_list(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn channels_are_validated() {
        assert_eq!(
            Rgb::new(256.0, 0.0, 0.0).unwrap_err(),
            ColorError::ChannelOutOfRange {
                space: ColorSpace::Rgb,
                channel: "red",
                value: 256.0,
            }
        );
        assert!(Rgb::new(0.0, -0.5, 0.0).is_err());
    }

    #[test]
    fn from_list_with_alpha() {
        let rgb = Rgb::from_list(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(rgb.alpha(), 4);
        assert_eq!(Rgb::from_list(&[1.0, 2.0, 3.0]).unwrap().alpha(), 255);
        assert_eq!(
            Rgb::from_list(&[1.0, 2.0, 3.0, 256.0]).unwrap_err(),
            ColorError::InvalidAlpha(256.0)
        );
    }

    #[test]
    fn copy_with_replaces_channels() {
        let rgb = Rgb::new(1.0, 2.0, 3.0).unwrap();
        let copy = rgb.copy_with(None, Some(200.0), None, Some(10)).unwrap();
        assert_eq!(copy.to_list_with_alpha(), vec![1.0, 200.0, 3.0, 10.0]);
        assert!(rgb.copy_with(Some(300.0), None, None, None).is_err());
    }

    #[test]
    fn unit_values_are_clamped() {
        let rgb = Rgb::from_unit([1.2, 0.5, -0.1], 9);
        assert_eq!(rgb.to_precise_list(), vec![255.0, 127.5, 0.0]);
        assert_eq!(rgb.alpha(), 9);
    }

    #[test]
    fn display() {
        let rgb = Rgb::new(10.4, 20.0, 30.0).unwrap().with_alpha(5);
        assert_eq!(rgb.to_string(), "rgb(10, 20, 30, 5)");
    }
}
