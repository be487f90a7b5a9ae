//! Interpolation between two colors.

use crate::{
    math::{lerp, round_millionth},
    models::ColorModel,
    ColorError, ColorSpace, Component,
};

/// Interpolate every channel and alpha of `start` towards `end`, after
/// converting `end` into the space of `start`. Channels are rounded to the
/// millionth and brought back into range.
pub(crate) fn interpolate<C: ColorModel>(start: &C, end: &impl ColorModel, step: Component) -> C {
    let end = start.convert(end);

    let values = start
        .to_precise_list()
        .into_iter()
        .zip(end.to_precise_list())
        .map(|(a, b)| round_millionth(finite_lerp(a, b, step)))
        .collect::<Vec<_>>();

    let alpha = finite_lerp(
        Component::from(start.alpha()),
        Component::from(end.alpha()),
        step,
    )
    .round()
    .clamp(0.0, 255.0) as u8;

    start.with_values(&values, alpha)
}

/// Extrapolating by a huge `step` can overflow; such channels keep the start
/// value.
fn finite_lerp(a: Component, b: Component, step: Component) -> Component {
    let value = lerp(a, b, step);
    if value.is_finite() {
        value
    } else {
        a
    }
}

/// Build a gradient of `steps` colors between `start` and `end`, evenly
/// spaced at `i / (steps + 1)`. The colors are interpolated in `space`, or
/// the space of `start`, and returned in the space of `start`.
pub(crate) fn lerp_to<C: ColorModel>(
    start: &C,
    end: &impl ColorModel,
    steps: usize,
    space: Option<ColorSpace>,
    exclude_original_colors: bool,
) -> Result<Vec<C>, ColorError> {
    if steps == 0 {
        return Err(ColorError::InvalidSteps);
    }

    let space = space.unwrap_or_else(|| start.space());
    log::debug!(
        "interpolating {} steps from {} to {} in {}",
        steps,
        start.space(),
        end.space(),
        space
    );

    let from = start.to_color().to_space(space);
    let to = end.to_color().to_space(space);

    let mut colors = Vec::with_capacity(steps + 2);
    if !exclude_original_colors {
        colors.push(start.clone());
    }

    let denominator = (steps + 1) as Component;
    colors.extend((1..=steps).map(|i| {
        let step = i as Component / denominator;
        start.convert(&from.interpolate(&to, step))
    }));

    if !exclude_original_colors {
        colors.push(start.convert(end));
    }

    Ok(colors)
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_components_eq, Color, ColorError, ColorModel, ColorSpace, Component, Hsl, Rgb,
    };

    fn rgb(red: f64, green: f64, blue: f64) -> Rgb {
        Rgb::new(red, green, blue).unwrap()
    }

    #[test]
    fn basic() {
        let left = rgb(0.0, 0.0, 0.0);
        let right = rgb(255.0, 255.0, 255.0);
        let mixed = left.interpolate(&right, 0.5);
        assert_eq!(mixed.to_precise_list(), vec![127.5, 127.5, 127.5]);
        assert_eq!(mixed.space(), ColorSpace::Rgb);
    }

    #[test]
    fn end_points() {
        let a = Hsl::new(10.0, 20.0, 30.0).unwrap();
        let b = rgb(200.0, 100.0, 50.0).with_alpha(20);
        assert_eq!(a.interpolate(&b, 0.0), a);

        // Channels are rounded in HSL, so the RGB projection only agrees to
        // that precision.
        let end = a.interpolate(&b, 1.0);
        assert_components_eq!(
            end.to_rgb().to_precise_list(),
            b.to_precise_list(),
            1.0e-4
        );
        assert_eq!(end.alpha(), 20);
        assert_eq!(b.interpolate(&a, 0.0), b);
    }

    #[test]
    fn end_is_converted_into_the_start_space() {
        let hsl = Hsl::new(0.0, 100.0, 50.0).unwrap();
        let blue = rgb(0.0, 0.0, 255.0);
        let mixed = hsl.interpolate(&blue, 0.5);
        assert_eq!(mixed.to_list(), vec![120.0, 100.0, 50.0]);
        assert_eq!(mixed.to_rgb().to_list(), vec![0.0, 255.0, 0.0]);
    }

    #[test]
    fn hue_takes_the_long_way_linearly() {
        let a = Hsl::new(10.0, 50.0, 50.0).unwrap();
        let b = Hsl::new(350.0, 50.0, 50.0).unwrap();
        assert_eq!(a.interpolate(&b, 0.5).hue(), 180.0);
    }

    #[test]
    fn alpha_is_interpolated_and_rounded() {
        let a = rgb(0.0, 0.0, 0.0).with_alpha(0);
        let b = rgb(0.0, 0.0, 0.0);
        assert_eq!(a.interpolate(&b, 0.5).alpha(), 128);
        assert_eq!(a.interpolate(&b, 0.1).alpha(), 26);
    }

    #[test]
    fn extrapolation_is_clamped() {
        let a = rgb(100.0, 100.0, 100.0);
        let b = rgb(200.0, 200.0, 200.0);
        assert_eq!(a.interpolate(&b, 2.0).to_list(), vec![255.0, 255.0, 255.0]);
        assert_eq!(a.interpolate(&b, -2.0).to_list(), vec![0.0, 0.0, 0.0]);

        let hsl = Hsl::new(300.0, 50.0, 50.0).unwrap();
        let other = Hsl::new(340.0, 50.0, 50.0).unwrap();
        assert_eq!(hsl.interpolate(&other, 2.0).hue(), 20.0);
    }

    #[test]
    fn overflowing_steps_stay_in_range() {
        let a = Hsl::new(10.0, 50.0, 50.0).unwrap().with_alpha(40);
        let b = Hsl::new(20.0, 60.0, 50.0).unwrap();
        for step in [1.0e303, 1.0e308, -1.0e308, Component::INFINITY] {
            let mixed = a.interpolate(&b, step);
            assert!(mixed.to_list().iter().all(|value| value.is_finite()));
            for (channel, value) in Hsl::CHANNELS.iter().zip(mixed.to_list()) {
                assert!(channel.contains(value), "{} = {}", channel.name, value);
            }
        }
        assert_eq!(a.interpolate(&b, 1.0e308).to_list(), vec![10.0, 50.0, 50.0]);
        assert_eq!(a.interpolate(&b, 1.0e308).alpha(), 40);
    }

    #[test]
    fn lerp_to_includes_the_end_points() {
        let black = rgb(0.0, 0.0, 0.0);
        let white = rgb(255.0, 255.0, 255.0);

        let colors = black.lerp_to(&white, 3, None, false).unwrap();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], black);
        assert_components_eq!(colors[1].to_precise_list(), [63.75, 63.75, 63.75]);
        assert_components_eq!(colors[2].to_precise_list(), [127.5, 127.5, 127.5]);
        assert_components_eq!(colors[3].to_precise_list(), [191.25, 191.25, 191.25]);
        assert_eq!(colors[4], white);

        let inner = black.lerp_to(&white, 3, None, true).unwrap();
        assert_eq!(inner.len(), 3);
        assert_eq!(inner[..], colors[1..4]);
    }

    #[test]
    fn lerp_to_in_another_space() {
        let red = rgb(255.0, 0.0, 0.0);
        let blue = rgb(0.0, 0.0, 255.0);

        let colors = red.lerp_to(&blue, 1, Some(ColorSpace::Hsl), true).unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].space(), ColorSpace::Rgb);
        assert_eq!(colors[0].to_list(), vec![0.0, 255.0, 0.0]);

        let in_rgb = red.lerp_to(&blue, 1, None, true).unwrap();
        assert_components_eq!(in_rgb[0].to_precise_list(), [127.5, 0.0, 127.5]);
    }

    #[test]
    fn lerp_to_keeps_the_start_space() {
        let hsl = Hsl::new(0.0, 100.0, 50.0).unwrap();
        let colors = Color::from(hsl)
            .lerp_to(&rgb(0.0, 0.0, 255.0), 2, Some(ColorSpace::Rgb), false)
            .unwrap();
        assert!(colors.iter().all(|color| color.space() == ColorSpace::Hsl));
        assert_eq!(colors[3].to_list(), vec![240.0, 100.0, 50.0]);
    }

    #[test]
    fn lerp_to_needs_steps() {
        let black = rgb(0.0, 0.0, 0.0);
        assert_eq!(
            black.lerp_to(&black, 0, None, false).unwrap_err(),
            ColorError::InvalidSteps
        );
    }
}
