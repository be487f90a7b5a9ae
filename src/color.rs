//! The vocabulary shared by every color model: channel descriptions, the
//! [`ColorSpace`] selector and the [`Color`] sum type that can hold a color of
//! any space.

use std::fmt;
use std::str::FromStr;

use crate::{
    math::normalize_hue,
    models::{Cmyk, Hsb, Hsi, Hsl, Hsp, Lab, Oklab, Rgb, Xyz},
    ColorError,
};

/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// How a channel behaves at and beyond the limits of its range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    /// An angle in degrees in `[0, 360]` that wraps around.
    Hue,
    /// A value limited to `[min, max]`.
    Bounded,
    /// An opponent axis (Lab and Oklab `a`/`b`) limited to `[min, max]` and
    /// inverted by negation.
    Opponent,
    /// A value with a lower bound only. `max` is the nominal upper limit used
    /// when inverting.
    Open,
}

/// Describes one channel of a color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    /// The name of the channel.
    pub name: &'static str,
    /// The smallest valid value.
    pub min: Component,
    /// The largest valid value, or the nominal maximum for [`ChannelKind::Open`].
    pub max: Component,
    /// How the channel is validated, clamped and inverted.
    pub kind: ChannelKind,
}

impl Channel {
    /// Return true if `value` is a valid value for this channel.
    pub fn contains(&self, value: Component) -> bool {
        match self.kind {
            ChannelKind::Open => value.is_finite() && value >= self.min,
            _ => (self.min..=self.max).contains(&value),
        }
    }

    /// Bring `value` into the range of this channel. Hues wrap around, every
    /// other kind is clamped.
    pub fn clamp(&self, value: Component) -> Component {
        match self.kind {
            ChannelKind::Hue if self.contains(value) => value,
            ChannelKind::Hue => normalize_hue(value),
            ChannelKind::Open => value.max(self.min),
            ChannelKind::Bounded | ChannelKind::Opponent => value.clamp(self.min, self.max),
        }
    }

    /// Return the complement of `value` within this channel.
    pub fn invert(&self, value: Component) -> Component {
        match self.kind {
            ChannelKind::Hue => normalize_hue(value + 180.0),
            ChannelKind::Bounded => self.min + self.max - value,
            ChannelKind::Opponent => (-value).clamp(self.min, self.max),
            ChannelKind::Open => (self.max - value).max(self.min),
        }
    }
}

/// Validate a list of channel values against the channels of a space.
pub(crate) fn validate(
    space: ColorSpace,
    channels: &[Channel],
    values: &[Component],
) -> Result<(), ColorError> {
    if values.len() != channels.len() {
        return Err(ColorError::InvalidLength {
            space,
            expected: channels.len(),
            actual: values.len(),
        });
    }

    match channels
        .iter()
        .zip(values)
        .find(|(channel, &value)| !channel.contains(value))
    {
        Some((channel, &value)) => Err(ColorError::ChannelOutOfRange {
            space,
            channel: channel.name,
            value,
        }),
        None => Ok(()),
    }
}

/// Split a list of `count` channel values that is optionally followed by an
/// alpha value.
pub(crate) fn split_alpha(
    space: ColorSpace,
    values: &[Component],
    count: usize,
) -> Result<(&[Component], u8), ColorError> {
    match values.len() {
        n if n == count => Ok((values, 255)),
        n if n == count + 1 => {
            let alpha = values[count];
            if !(0.0..=255.0).contains(&alpha) {
                return Err(ColorError::InvalidAlpha(alpha));
            }
            Ok((&values[..count], alpha.round() as u8))
        }
        actual => Err(ColorError::InvalidLength {
            space,
            expected: count,
            actual,
        }),
    }
}

/// The color spaces supported by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorSpace {
    /// Red, green and blue in `[0, 255]`.
    Rgb = 0,
    /// Cyan, magenta, yellow and black (key) in `[0, 100]`.
    Cmyk = 1,
    /// Hue, saturation and brightness, also known as HSV.
    Hsb = 2,
    /// Hue, saturation and intensity.
    Hsi = 3,
    /// Hue, saturation and lightness.
    Hsl = 4,
    /// Hue, saturation and perceived brightness.
    /// <https://alienryderflex.com/hsp.html>
    Hsp = 5,
    /// CIE L*a*b* relative to the D65 white point.
    Lab = 6,
    /// Oklab.
    /// <https://bottosson.github.io/posts/oklab/>
    Oklab = 7,
    /// CIE XYZ with a D65 white point, scaled so that white has `y == 100`.
    Xyz = 8,
}

impl ColorSpace {
    /// Every supported color space.
    pub const ALL: [ColorSpace; 9] = [
        ColorSpace::Rgb,
        ColorSpace::Cmyk,
        ColorSpace::Hsb,
        ColorSpace::Hsi,
        ColorSpace::Hsl,
        ColorSpace::Hsp,
        ColorSpace::Lab,
        ColorSpace::Oklab,
        ColorSpace::Xyz,
    ];

    /// The canonical name of the space.
    pub const fn name(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => Rgb::NAME,
            ColorSpace::Cmyk => Cmyk::NAME,
            ColorSpace::Hsb => Hsb::NAME,
            ColorSpace::Hsi => Hsi::NAME,
            ColorSpace::Hsl => Hsl::NAME,
            ColorSpace::Hsp => Hsp::NAME,
            ColorSpace::Lab => Lab::NAME,
            ColorSpace::Oklab => Oklab::NAME,
            ColorSpace::Xyz => Xyz::NAME,
        }
    }

    /// The channels of the space, in list order.
    pub fn channels(&self) -> &'static [Channel] {
        match self {
            ColorSpace::Rgb => &Rgb::CHANNELS,
            ColorSpace::Cmyk => &Cmyk::CHANNELS,
            ColorSpace::Hsb => &Hsb::CHANNELS,
            ColorSpace::Hsi => &Hsi::CHANNELS,
            ColorSpace::Hsl => &Hsl::CHANNELS,
            ColorSpace::Hsp => &Hsp::CHANNELS,
            ColorSpace::Lab => &Lab::CHANNELS,
            ColorSpace::Oklab => &Oklab::CHANNELS,
            ColorSpace::Xyz => &Xyz::CHANNELS,
        }
    }

    /// Convert any color into this space.
    pub fn from_color(&self, color: &impl crate::ColorModel) -> Color {
        color.to_color().to_space(*self)
    }

    /// Create a color in this space from its channels in list order,
    /// optionally followed by an alpha value.
    pub fn from_list(&self, values: &[Component]) -> Result<Color, ColorError> {
        Ok(match self {
            ColorSpace::Rgb => Rgb::from_list(values)?.into(),
            ColorSpace::Cmyk => Cmyk::from_list(values)?.into(),
            ColorSpace::Hsb => Hsb::from_list(values)?.into(),
            ColorSpace::Hsi => Hsi::from_list(values)?.into(),
            ColorSpace::Hsl => Hsl::from_list(values)?.into(),
            ColorSpace::Hsp => Hsp::from_list(values)?.into(),
            ColorSpace::Lab => Lab::from_list(values)?.into(),
            ColorSpace::Oklab => Oklab::from_list(values)?.into(),
            ColorSpace::Xyz => Xyz::from_list(values)?.into(),
        })
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "hsv" {
            return Ok(ColorSpace::Hsb);
        }

        ColorSpace::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or_else(|| ColorError::UnsupportedSpace(s.to_string()))
    }
}

/// A color in any of the supported color spaces.
#[derive(Clone, Copy, Debug)]
pub enum Color {
    /// A color in the RGB color space.
    Rgb(Rgb),
    /// A color in the CMYK color space.
    Cmyk(Cmyk),
    /// A color in the HSB color space.
    Hsb(Hsb),
    /// A color in the HSI color space.
    Hsi(Hsi),
    /// A color in the HSL color space.
    Hsl(Hsl),
    /// A color in the HSP color space.
    Hsp(Hsp),
    /// A color in the CIE-Lab color space.
    Lab(Lab),
    /// A color in the Oklab color space.
    Oklab(Oklab),
    /// A color in the CIE-XYZ color space.
    Xyz(Xyz),
}

/// Run the same expression on whichever model a [`Color`] holds.
macro_rules! dispatch {
    ($color:expr, $model:ident => $body:expr) => {
        match $color {
            Color::Rgb($model) => $body,
            Color::Cmyk($model) => $body,
            Color::Hsb($model) => $body,
            Color::Hsi($model) => $body,
            Color::Hsl($model) => $body,
            Color::Hsp($model) => $body,
            Color::Lab($model) => $body,
            Color::Oklab($model) => $body,
            Color::Xyz($model) => $body,
        }
    };
}

pub(crate) use dispatch;

impl<M: crate::ColorModel> PartialEq<M> for Color {
    fn eq(&self, other: &M) -> bool {
        crate::models::equals(self, other)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, model => fmt::Display::fmt(model, f))
    }
}
