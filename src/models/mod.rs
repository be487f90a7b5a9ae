//! Models are structs that represent a color in one color space. Every model
//! implements [`ColorModel`], which provides conversion to every other space
//! and the operations derived from it.

use std::fmt;

use crate::{
    color::dispatch,
    convert::rgb_to_hue,
    interpolate,
    math::{hue_delta, hue_distance, round_millionth, round_to},
    Color, ColorError, ColorSpace, Component,
};

mod cmyk;
mod hsb;
mod hsi;
mod hsl;
mod hsp;
mod lab;
mod oklab;
mod rgb;
mod xyz;

pub use cmyk::Cmyk;
pub use hsb::{Hsb, Hsv};
pub use hsi::Hsi;
pub use hsl::Hsl;
pub use hsp::Hsp;
pub use lab::Lab;
pub use oklab::Oklab;
pub use rgb::Rgb;
pub use xyz::Xyz;

// Oklab lightness is mapped onto chroma with this empirical curve.
const CHROMA_OFFSET: Component = 0.028;
const CHROMA_EXPONENT: Component = 6.9;

/// The capabilities shared by colors of every space.
///
/// Implementors supply their channels, alpha and the conversion to and from
/// RGB. Everything else is derived from those.
pub trait ColorModel: Clone + fmt::Debug + Into<Color> {
    /// The color space of this color.
    fn space(&self) -> ColorSpace;

    /// The alpha channel, where 0 is fully transparent.
    fn alpha(&self) -> u8;

    /// The channels of the color in list order, at full precision.
    fn to_precise_list(&self) -> Vec<Component>;

    /// Return a copy of this color with its channels and alpha replaced.
    /// Channels are brought into range: hues wrap around and every other
    /// channel is clamped. Missing values keep the current channel.
    fn with_values(&self, values: &[Component], alpha: u8) -> Self;

    /// Convert this color to RGB.
    fn to_rgb(&self) -> crate::Rgb;

    /// Convert any color to this model. Colors already in this space are
    /// returned as is.
    fn from_color(color: &Color) -> Self;

    /// Wrap this color in a [`Color`].
    fn to_color(&self) -> Color {
        self.clone().into()
    }

    /// Convert `other` into the color space of this color.
    fn convert(&self, other: &impl ColorModel) -> Self {
        Self::from_color(&other.to_color())
    }

    /// Convert this color into the color space of `other`.
    fn cast_to<M: ColorModel>(&self, other: &M) -> M {
        other.convert(self)
    }

    /// The channels of the color in list order.
    fn to_list(&self) -> Vec<Component> {
        self.to_precise_list()
    }

    /// The channels of the color in list order, followed by alpha.
    fn to_list_with_alpha(&self) -> Vec<Component> {
        let mut list = self.to_list();
        list.push(self.alpha().into());
        list
    }

    /// The channels of the color in list order at full precision, followed
    /// by alpha.
    fn to_precise_list_with_alpha(&self) -> Vec<Component> {
        let mut list = self.to_precise_list();
        list.push(self.alpha().into());
        list
    }

    /// Alpha as a fraction in `[0, 1]`.
    fn opacity(&self) -> Component {
        Component::from(self.alpha()) / 255.0
    }

    /// Return a copy of this color with a different alpha.
    fn with_alpha(&self, alpha: u8) -> Self {
        self.with_values(&self.to_precise_list(), alpha)
    }

    /// Return a copy of this color with alpha set from an opacity in
    /// `[0, 1]`. Values outside of that range are clamped.
    fn with_opacity(&self, opacity: Component) -> Self {
        self.with_alpha((opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Convert this color to CMYK.
    fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_color(&self.to_color())
    }

    /// Convert this color to HSB.
    fn to_hsb(&self) -> Hsb {
        Hsb::from_color(&self.to_color())
    }

    /// Convert this color to HSI.
    fn to_hsi(&self) -> Hsi {
        Hsi::from_color(&self.to_color())
    }

    /// Convert this color to HSL.
    fn to_hsl(&self) -> Hsl {
        Hsl::from_color(&self.to_color())
    }

    /// Convert this color to HSP.
    fn to_hsp(&self) -> Hsp {
        Hsp::from_color(&self.to_color())
    }

    /// Convert this color to CIE-Lab.
    fn to_lab(&self) -> Lab {
        Lab::from_color(&self.to_color())
    }

    /// Convert this color to Oklab.
    fn to_oklab(&self) -> Oklab {
        Oklab::from_color(&self.to_color())
    }

    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz {
        Xyz::from_color(&self.to_color())
    }

    /// The hue of the color in degrees, in `[0, 360)`.
    fn hue(&self) -> Component {
        rgb_to_hue(&self.to_rgb().to_unit())
    }

    /// The saturation of the color in HSB, in `[0, 100]`.
    fn saturation(&self) -> Component {
        self.to_hsb().saturation()
    }

    /// The intensity of the color in HSI, in `[0, 100]`.
    fn intensity(&self) -> Component {
        self.to_hsi().intensity()
    }

    /// The chroma of the color in `[0, 1]`, derived from its Oklab lightness.
    fn chroma(&self) -> Component {
        let lightness = self.to_oklab().lightness();
        let chroma = ((lightness + CHROMA_OFFSET) / (1.0 + CHROMA_OFFSET)).powf(CHROMA_EXPONENT);
        round_to(chroma, 10).clamp(0.0, 1.0)
    }

    /// Return true if the color is black.
    fn is_black(&self) -> bool {
        rounded_rgb(self) == [0.0; 3]
    }

    /// Return true if the color is white.
    fn is_white(&self) -> bool {
        rounded_rgb(self) == [255.0; 3]
    }

    /// Return true if the color is a shade of gray.
    fn is_monochromatic(&self) -> bool {
        let [red, green, blue] = rounded_rgb(self);
        red == green && green == blue
    }

    /// Return the complement of every channel within its range.
    fn inverted(&self) -> Self {
        let values = self
            .space()
            .channels()
            .iter()
            .zip(self.to_precise_list())
            .map(|(channel, value)| channel.invert(value))
            .collect::<Vec<_>>();

        self.with_values(&values, self.alpha())
    }

    /// Return the color with its hue rotated by 180 degrees.
    fn opposite(&self) -> Self {
        self.rotate_hue(180.0)
    }

    /// Move the hue towards 90 degrees. With `relative`, `amount` is a
    /// percentage of the remaining distance; otherwise it is in degrees.
    fn warmer(&self, amount: Component, relative: bool) -> Self {
        shift_hue(self, 90.0, amount, relative)
    }

    /// Move the hue towards 270 degrees. With `relative`, `amount` is a
    /// percentage of the remaining distance; otherwise it is in degrees.
    fn cooler(&self, amount: Component, relative: bool) -> Self {
        shift_hue(self, 270.0, amount, relative)
    }

    /// Rotate the hue by `degrees`.
    fn rotate_hue(&self, degrees: Component) -> Self {
        self.with_hue(self.hue() + degrees)
    }

    /// Rotate the hue by `radians`.
    fn rotate_hue_rad(&self, radians: Component) -> Self {
        self.rotate_hue(radians.to_degrees())
    }

    /// Return a copy of this color with the hue replaced.
    fn with_hue(&self, hue: Component) -> Self {
        self.convert(&self.to_hsb().with_hue(hue))
    }

    /// Return a copy of this color with the chroma replaced.
    fn with_chroma(&self, chroma: Component) -> Self {
        let lightness = (chroma.clamp(0.0, 1.0).powf(1.0 / CHROMA_EXPONENT)
            * (1.0 + CHROMA_OFFSET)
            - CHROMA_OFFSET)
            .clamp(0.0, 1.0);
        let oklab = self.to_oklab();
        self.convert(&Oklab::from_raw(lightness, oklab.a(), oklab.b(), oklab.alpha()))
    }

    /// The shortest distance in degrees between the hues of two colors, in
    /// `[0, 180]`.
    fn distance_to(&self, other: &impl ColorModel) -> Component {
        hue_distance(self.hue(), other.hue())
    }

    /// Linearly interpolate from this color to `end`, converted into the
    /// space of this color. A `step` of 0 is this color and 1 is `end`;
    /// values outside of `[0, 1]` extrapolate.
    fn interpolate(&self, end: &impl ColorModel, step: Component) -> Self {
        interpolate::interpolate(self, end, step)
    }

    /// Generate `steps` colors evenly spaced between this color and `color`,
    /// interpolated in `space` (or this color's space) and returned in this
    /// color's space. Unless `exclude_original_colors` is set, the list
    /// starts with this color and ends with `color`.
    fn lerp_to(
        &self,
        color: &impl ColorModel,
        steps: usize,
        space: Option<ColorSpace>,
        exclude_original_colors: bool,
    ) -> Result<Vec<Self>, ColorError> {
        interpolate::lerp_to(self, color, steps, space, exclude_original_colors)
    }
}

fn shift_hue<C: ColorModel>(
    color: &C,
    target: Component,
    amount: Component,
    relative: bool,
) -> C {
    let hue = color.hue();
    let delta = hue_delta(hue, target);

    let shift = if relative {
        delta * amount.clamp(0.0, 100.0) / 100.0
    } else {
        delta.signum() * amount.max(0.0).min(delta.abs())
    };

    color.with_hue(hue + shift)
}

fn rounded_rgb(color: &impl ColorModel) -> [Component; 3] {
    color.to_rgb().channel_values().map(round_millionth)
}

/// Two colors are equal when they have the same alpha and their RGB channels
/// agree to the millionth.
pub(crate) fn equals(a: &impl ColorModel, b: &impl ColorModel) -> bool {
    a.alpha() == b.alpha() && rounded_rgb(a) == rounded_rgb(b)
}

impl ColorModel for Color {
    fn space(&self) -> ColorSpace {
        dispatch!(self, model => model.space())
    }

    fn alpha(&self) -> u8 {
        dispatch!(self, model => model.alpha())
    }

    fn to_precise_list(&self) -> Vec<Component> {
        dispatch!(self, model => model.to_precise_list())
    }

    fn with_values(&self, values: &[Component], alpha: u8) -> Self {
        dispatch!(self, model => model.with_values(values, alpha).into())
    }

    fn to_rgb(&self) -> Rgb {
        dispatch!(self, model => model.to_rgb())
    }

    fn from_color(color: &Color) -> Self {
        *color
    }

    fn convert(&self, other: &impl ColorModel) -> Self {
        other.to_color().to_space(self.space())
    }

    fn to_list(&self) -> Vec<Component> {
        dispatch!(self, model => model.to_list())
    }

    fn hue(&self) -> Component {
        dispatch!(self, model => ColorModel::hue(model))
    }

    fn saturation(&self) -> Component {
        dispatch!(self, model => ColorModel::saturation(model))
    }

    fn intensity(&self) -> Component {
        dispatch!(self, model => ColorModel::intensity(model))
    }

    fn with_hue(&self, hue: Component) -> Self {
        dispatch!(self, model => model.with_hue(hue).into())
    }
}
