//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::Component;

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix. Vectors are multiplied as rows, so
/// each argument row holds the contributions of one input component.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, [x, y, z]: [Component; 3]) -> [Component; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Linear interpolation written so that `t == 0` and `t == 1` return the
/// end points exactly.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

/// Round `value` to the given number of decimal digits.
pub fn round_to(value: Component, digits: i32) -> Component {
    let factor = Component::powi(10.0, digits);
    let scaled = value * factor;
    // Values this large carry no fractional digits.
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

/// Round `value` to the nearest millionth, the precision colors are compared
/// and interpolated at.
pub fn round_millionth(value: Component) -> Component {
    round_to(value, 6)
}

/// The signed shortest rotation in degrees that takes hue `from` to hue `to`,
/// in `(-180, 180]`.
pub fn hue_delta(from: Component, to: Component) -> Component {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// The shortest angular distance between two hues, in `[0, 180]`.
pub fn hue_distance(a: Component, b: Component) -> Component {
    hue_delta(a, b).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn transform_multiplies_rows() {
        #[rustfmt::skip]
        const SWAP: Transform = transform_3x3(
            0.0, 1.0, 0.0,
            2.0, 0.0, 0.0,
            0.0, 0.0, 3.0,
        );

        assert_eq!(transform(&SWAP, [1.0, 2.0, 3.0]), [4.0, 1.0, 9.0]);
    }

    #[test]
    fn lerp_hits_end_points_exactly() {
        assert_eq!(lerp(0.1, 0.7, 0.0), 0.1);
        assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
        assert_component_eq!(lerp(10.0, 20.0, 0.25), 12.5);
        assert_component_eq!(lerp(10.0, 20.0, 1.5), 25.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.23456789, 2), 1.23);
        assert_eq!(round_millionth(0.12345651), 0.123457);
        assert_eq!(round_millionth(254.99999999997), 255.0);
        assert_eq!(round_millionth(1.0e305), 1.0e305);
    }

    #[test]
    fn hue_math() {
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-10.0), 350.0);
        assert_eq!(normalize_hue(360.0), 0.0);

        assert_eq!(hue_delta(350.0, 10.0), 20.0);
        assert_eq!(hue_delta(10.0, 350.0), -20.0);
        assert_eq!(hue_delta(0.0, 180.0), 180.0);

        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }
}
