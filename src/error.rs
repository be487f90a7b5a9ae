//! Errors reported when constructing colors or calling palette operations
//! with invalid arguments.

use std::fmt;

use crate::{ColorSpace, Component};

/// Errors that can occur when creating or operating on colors.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorError {
    /// A channel value is outside of the range of its color space.
    ChannelOutOfRange {
        /// The space of the color being created.
        space: ColorSpace,
        /// The name of the offending channel.
        channel: &'static str,
        /// The rejected value.
        value: Component,
    },
    /// A list of values does not have one value per channel.
    InvalidLength {
        /// The space of the color being created.
        space: ColorSpace,
        /// The number of channels of the space.
        expected: usize,
        /// The number of values given.
        actual: usize,
    },
    /// An alpha value outside of `[0, 255]`.
    InvalidAlpha(Component),
    /// A gradient was requested with zero intermediate steps.
    InvalidSteps,
    /// The number of stops does not match the number of colors.
    StopsLengthMismatch {
        /// The number of colors in the palette.
        colors: usize,
        /// The number of stops given.
        stops: usize,
    },
    /// The palette has no colors.
    EmptyPalette,
    /// A palette position outside of `[0, 1]`.
    DeltaOutOfRange(Component),
    /// The name does not belong to any supported color space.
    UnsupportedSpace(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::ChannelOutOfRange {
                space,
                channel,
                value,
            } => write!(f, "{space} channel `{channel}` out of range: {value}"),
            ColorError::InvalidLength {
                space,
                expected,
                actual,
            } => write!(f, "{space} expects {expected} values, got {actual}"),
            ColorError::InvalidAlpha(alpha) => write!(f, "alpha out of range: {alpha}"),
            ColorError::InvalidSteps => write!(f, "steps must be greater than 0"),
            ColorError::StopsLengthMismatch { colors, stops } => {
                write!(f, "expected {colors} stops, one for each color, got {stops}")
            }
            ColorError::EmptyPalette => write!(f, "palette has no colors"),
            ColorError::DeltaOutOfRange(delta) => {
                write!(f, "delta must be within [0, 1], got {delta}")
            }
            ColorError::UnsupportedSpace(name) => write!(f, "unsupported color space: {name}"),
        }
    }
}

impl std::error::Error for ColorError {}
