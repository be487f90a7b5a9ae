//! Conversions between color spaces.
//!
//! RGB is the canonical space: every model knows how to convert itself to and
//! from RGB, and a conversion between any other two spaces goes through it.
//! The functions in this module hold the conversion math. They operate on RGB
//! components normalized to `[0, 1]`, hues in degrees and every other
//! component in its unit scale (`0.5` for 50%).
//!
//! ```rust
//! use color_models::{Color, ColorModel, ColorSpace, Hsb};
//! let hsb = Hsb::new(108.0, 80.0, 70.0).unwrap();
//! let cmyk = Color::from(hsb).to_space(ColorSpace::Cmyk);
//! assert_eq!(cmyk.to_hsb(), hsb);
//! ```

use crate::{
    math::{almost_zero, normalize_hue, transform, transform_3x3, Transform},
    models::{Cmyk, Hsb, Hsi, Hsl, Hsp, Lab, Oklab, Xyz},
    Color, ColorModel, ColorSpace, Component,
};

impl Color {
    /// Convert this color from its current color space to the specified
    /// color space. Converting to the current space returns the color as is.
    pub fn to_space(&self, space: ColorSpace) -> Self {
        if self.space() == space {
            return *self;
        }

        log::trace!("converting {} to {}", self.space(), space);

        let rgb = self.to_rgb();
        match space {
            ColorSpace::Rgb => rgb.into(),
            ColorSpace::Cmyk => Cmyk::from_rgb(&rgb).into(),
            ColorSpace::Hsb => Hsb::from_rgb(&rgb).into(),
            ColorSpace::Hsi => Hsi::from_rgb(&rgb).into(),
            ColorSpace::Hsl => Hsl::from_rgb(&rgb).into(),
            ColorSpace::Hsp => Hsp::from_rgb(&rgb).into(),
            ColorSpace::Lab => Lab::from_rgb(&rgb).into(),
            ColorSpace::Oklab => Oklab::from_rgb(&rgb).into(),
            ColorSpace::Xyz => Xyz::from_rgb(&rgb).into(),
        }
    }
}

/// Calculate the hue from RGB components and return it along with the min
/// and max RGB values. Achromatic colors have a hue of 0.
fn rgb_to_hue_with_min_max(from: &[Component; 3]) -> (Component, Component, Component) {
    let [red, green, blue] = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    } else {
        0.0
    };

    (normalize_hue(hue), min, max)
}

/// The hexagonal hue shared by HSB, HSI, HSL and HSP.
pub(crate) fn rgb_to_hue(from: &[Component; 3]) -> Component {
    rgb_to_hue_with_min_max(from).0
}

/// Convert from RGB to HSB.
pub(crate) fn rgb_to_hsb(from: &[Component; 3]) -> [Component; 3] {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    let saturation = if almost_zero(max) {
        0.0
    } else {
        (max - min) / max
    };

    [hue, saturation, max]
}

/// Convert from HSB to RGB.
pub(crate) fn hsb_to_rgb(from: &[Component; 3]) -> [Component; 3] {
    let [hue, saturation, brightness] = *from;
    let hue = normalize_hue(hue);

    macro_rules! f {
        ($n:expr) => {{
            let k = ($n + hue / 60.0) % 6.0;
            brightness - brightness * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
        }};
    }

    [f!(5.0), f!(3.0), f!(1.0)]
}

/// Convert from RGB to HSL.
/// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
pub(crate) fn rgb_to_hsl(from: &[Component; 3]) -> [Component; 3] {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);

    let lightness = (min + max) / 2.0;
    let delta = max - min;

    let saturation =
        if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

    [hue, saturation, lightness]
}

/// Convert from HSL to RGB.
/// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
pub(crate) fn hsl_to_rgb(from: &[Component; 3]) -> [Component; 3] {
    let [hue, saturation, lightness] = *from;

    if saturation <= 0.0 {
        return [lightness, lightness, lightness];
    }

    let hue = normalize_hue(hue);

    macro_rules! f {
        ($n:expr) => {{
            let k = ($n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        }};
    }

    [f!(0.0), f!(8.0), f!(4.0)]
}

/// Convert from RGB to HSI.
pub(crate) fn rgb_to_hsi(from: &[Component; 3]) -> [Component; 3] {
    let (hue, min, _) = rgb_to_hue_with_min_max(from);

    let intensity = from.iter().sum::<Component>() / 3.0;
    let saturation = if almost_zero(intensity) {
        0.0
    } else {
        1.0 - min / intensity
    };

    [hue, saturation, intensity]
}

/// Convert from HSI to RGB.
pub(crate) fn hsi_to_rgb(from: &[Component; 3]) -> [Component; 3] {
    let [hue, saturation, intensity] = *from;

    let sector = normalize_hue(hue) / 60.0;
    let z = 1.0 - (sector % 2.0 - 1.0).abs();
    let chroma = 3.0 * intensity * saturation / (1.0 + z);
    let x = chroma * z;
    let m = intensity * (1.0 - saturation);

    let [red, green, blue] = match sector as u8 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    [red + m, green + m, blue + m]
}

// Weights of the red, green and blue channels in the perceived brightness.
const PR: Component = 0.299;
const PG: Component = 0.587;
const PB: Component = 0.114;

/// Convert from RGB to HSP.
/// <https://alienryderflex.com/hsp.html>
pub(crate) fn rgb_to_hsp(from: &[Component; 3]) -> [Component; 3] {
    let (hue, min, max) = rgb_to_hue_with_min_max(from);
    let [red, green, blue] = *from;

    let perceived_brightness = (red * red * PR + green * green * PG + blue * blue * PB).sqrt();
    let saturation = if almost_zero(max) { 0.0 } else { 1.0 - min / max };

    [hue, saturation, perceived_brightness]
}

/// Convert from HSP to RGB.
///
/// Each sixth of the hue circle has a different largest and smallest channel.
/// Within a sector the channels are solved from the perceived brightness
/// equation, with a separate branch for fully saturated colors where the
/// smallest channel is zero.
pub(crate) fn hsp_to_rgb(from: &[Component; 3]) -> [Component; 3] {
    let [hue, saturation, brightness] = *from;

    let hue = normalize_hue(hue) / 60.0;
    let sector = (hue as u8).min(5);

    // Position within the sector, measured from the pure primary or
    // secondary color, and the weights of the largest, middle and smallest
    // channel.
    let (h, largest, middle, smallest) = match sector {
        0 => (hue, PR, PG, PB),
        1 => (2.0 - hue, PG, PR, PB),
        2 => (hue - 2.0, PG, PB, PR),
        3 => (4.0 - hue, PB, PG, PR),
        4 => (hue - 4.0, PB, PR, PG),
        _ => (6.0 - hue, PR, PB, PG),
    };

    let min_over_max = 1.0 - saturation;
    let (max, mid, min) = if min_over_max > 0.0 {
        let part = 1.0 + h * (1.0 / min_over_max - 1.0);
        let min = brightness
            / (largest / min_over_max / min_over_max + middle * part * part + smallest).sqrt();
        let max = min / min_over_max;
        (max, min + h * (max - min), min)
    } else {
        let max = (brightness * brightness / (largest + middle * h * h)).sqrt();
        (max, max * h, 0.0)
    };

    match sector {
        0 => [max, mid, min],
        1 => [mid, max, min],
        2 => [min, max, mid],
        3 => [min, mid, max],
        4 => [mid, min, max],
        _ => [max, min, mid],
    }
}

/// Convert from RGB to CMYK.
pub(crate) fn rgb_to_cmyk(from: &[Component; 3]) -> [Component; 4] {
    let [red, green, blue] = *from;

    let black = 1.0 - red.max(green).max(blue);
    if almost_zero(1.0 - black) {
        return [0.0, 0.0, 0.0, 1.0];
    }

    let [cyan, magenta, yellow] =
        [red, green, blue].map(|value| (1.0 - value - black) / (1.0 - black));

    [cyan, magenta, yellow, black]
}

/// Convert from CMYK to RGB.
pub(crate) fn cmyk_to_rgb(from: &[Component; 4]) -> [Component; 3] {
    let [cyan, magenta, yellow, black] = *from;

    [cyan, magenta, yellow].map(|value| (1.0 - value) * (1.0 - black))
}

/// Convert a gamma encoded sRGB component to linear light.
pub(crate) fn to_linear_light(value: Component) -> Component {
    let abs = value.abs();

    if abs < 0.04045 {
        value / 12.92
    } else {
        value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light sRGB component to gamma encoded.
pub(crate) fn to_gamma_encoded(value: Component) -> Component {
    let abs = value.abs();

    if abs > 0.0031308 {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * value
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const RGB_TO_XYZ: Transform = transform_3x3(
    0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
    0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
    0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_RGB: Transform = transform_3x3(
     3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
    -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
    -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
);

/// The D65 reference white in XYZ, with `y == 1`.
#[allow(clippy::excessive_precision)]
pub(crate) const WHITE_POINT: [Component; 3] = [0.9504559270516716, 1.0, 1.0890577507598784];

/// Convert from gamma encoded RGB to XYZ with `y == 1` for white.
pub(crate) fn rgb_to_xyz(from: &[Component; 3]) -> [Component; 3] {
    transform(&RGB_TO_XYZ, from.map(to_linear_light))
}

/// Convert from XYZ with `y == 1` for white to gamma encoded RGB.
pub(crate) fn xyz_to_rgb(from: &[Component; 3]) -> [Component; 3] {
    transform(&XYZ_TO_RGB, *from).map(to_gamma_encoded)
}

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

/// Convert from XYZ with `y == 1` for white to Lab.
pub(crate) fn xyz_to_lab(from: &[Component; 3]) -> [Component; 3] {
    let adapted = [
        from[0] / WHITE_POINT[0],
        from[1] / WHITE_POINT[1],
        from[2] / WHITE_POINT[2],
    ];

    let [f0, f1, f2] = adapted.map(|v| {
        if v > EPSILON {
            v.cbrt()
        } else {
            (KAPPA * v + 16.0) / 116.0
        }
    });

    let lightness = 116.0 * f1 - 16.0;
    let a = 500.0 * (f0 - f1);
    let b = 200.0 * (f1 - f2);

    [lightness, a, b]
}

/// Convert from Lab to XYZ with `y == 1` for white.
pub(crate) fn lab_to_xyz(from: &[Component; 3]) -> [Component; 3] {
    let [lightness, a, b] = *from;

    let f1 = (lightness + 16.0) / 116.0;
    let f0 = f1 + a / 500.0;
    let f2 = f1 - b / 200.0;

    let f0_cubed = f0 * f0 * f0;
    let x = if f0_cubed > EPSILON {
        f0_cubed
    } else {
        (116.0 * f0 - 16.0) / KAPPA
    };

    let y = if lightness > KAPPA * EPSILON {
        f1 * f1 * f1
    } else {
        lightness / KAPPA
    };

    let f2_cubed = f2 * f2 * f2;
    let z = if f2_cubed > EPSILON {
        f2_cubed
    } else {
        (116.0 * f2 - 16.0) / KAPPA
    };

    [
        x * WHITE_POINT[0],
        y * WHITE_POINT[1],
        z * WHITE_POINT[2],
    ]
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LMS: Transform = transform_3x3(
     0.8190224432164319,  0.0329836671980271,  0.048177199566046255,
     0.3619062562801221,  0.9292868468965546,  0.26423952494422764,
    -0.12887378261216414, 0.03614466816999844, 0.6335478258136937,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: Transform = transform_3x3(
     0.2104542553,  1.9779984951,  0.0259040371,
     0.7936177850, -2.4285922050,  0.7827717662,
    -0.0040720468,  0.4505937099, -0.8086757660,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: Transform = transform_3x3(
    0.99999999845051981432,  1.0000000088817607767,    1.0000000546724109177,
    0.39633779217376785678, -0.1055613423236563494,   -0.089484182094965759684,
    0.21580375806075880339, -0.063854174771705903402, -1.2914855378640917399,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_XYZ: Transform = transform_3x3(
     1.2268798733741557,  -0.04057576262431372, -0.07637294974672142,
    -0.5578149965554813,   1.1122868293970594,  -0.4214933239627914,
     0.28139105017721583, -0.07171106666151701,  1.5869240244272418,
);

/// Convert from gamma encoded RGB to Oklab.
/// <https://bottosson.github.io/posts/oklab/>
pub(crate) fn rgb_to_oklab(from: &[Component; 3]) -> [Component; 3] {
    let lms = transform(&XYZ_TO_LMS, rgb_to_xyz(from));
    transform(&LMS_TO_OKLAB, lms.map(Component::cbrt))
}

/// Convert from Oklab to gamma encoded RGB.
pub(crate) fn oklab_to_rgb(from: &[Component; 3]) -> [Component; 3] {
    let lms = transform(&OKLAB_TO_LMS, *from).map(|v| v * v * v);
    xyz_to_rgb(&transform(&LMS_TO_XYZ, lms))
}
