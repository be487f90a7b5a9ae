//! Operations on ordered lists of colors.

use crate::{models::ColorModel, Color, ColorError, ColorSpace, Component};

/// Sampling and resampling of a list of colors treated as a gradient.
pub trait Palette {
    /// The type of the colors in the palette.
    type Item;

    /// Resample the palette into `new_length` colors.
    ///
    /// Each color sits at its stop in `[0, 1]`; without `stops` the colors are
    /// spread evenly. Stops that are not in increasing order are sorted along
    /// with their colors. Sample `i` is taken at `i / (new_length - 1)`
    /// between the two nearest stops, interpolated in `space` if given or in
    /// the space of the lower color. With `invert` and no `space`, the upper
    /// color is interpolated towards the lower one instead, in its own space.
    fn augment(
        &self,
        new_length: usize,
        stops: Option<&[Component]>,
        space: Option<ColorSpace>,
        invert: bool,
    ) -> Result<Vec<Color>, ColorError>;

    /// Sample the palette at `delta` in `[0, 1]`, with the colors spread
    /// evenly.
    fn get_color_at(&self, delta: Component) -> Result<Self::Item, ColorError>;
}

impl<C: ColorModel> Palette for [C] {
    type Item = C;

    fn augment(
        &self,
        new_length: usize,
        stops: Option<&[Component]>,
        space: Option<ColorSpace>,
        invert: bool,
    ) -> Result<Vec<Color>, ColorError> {
        if self.is_empty() {
            return Err(ColorError::EmptyPalette);
        }

        let mut stops = match stops {
            Some(stops) if stops.len() != self.len() => {
                return Err(ColorError::StopsLengthMismatch {
                    colors: self.len(),
                    stops: stops.len(),
                })
            }
            Some(stops) => stops.to_vec(),
            None if self.len() == 1 => vec![0.0],
            None => {
                let last = (self.len() - 1) as Component;
                (0..self.len()).map(|i| i as Component / last).collect()
            }
        };
        let mut colors = self.iter().map(ColorModel::to_color).collect::<Vec<_>>();

        if !stops.windows(2).all(|pair| pair[0] <= pair[1]) {
            log::debug!("sorting palette stops {:?}", stops);
            let mut pairs = stops.into_iter().zip(colors).collect::<Vec<_>>();
            pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
            (stops, colors) = pairs.into_iter().unzip();
        }

        log::debug!(
            "augmenting {} colors to {} in {:?}",
            colors.len(),
            new_length,
            space
        );

        let in_space = |color: &Color| match space {
            Some(space) => color.to_space(space),
            None => *color,
        };

        let first = stops[0];
        let last = stops[stops.len() - 1];

        let samples = (0..new_length)
            .map(|i| {
                let step = if new_length == 1 {
                    0.0
                } else {
                    i as Component / (new_length - 1) as Component
                };

                if step <= first {
                    return in_space(&colors[0]);
                }
                if step >= last {
                    return in_space(&colors[colors.len() - 1]);
                }
                if let Some(index) = stops.iter().position(|&stop| stop == step) {
                    return colors[index];
                }

                // first < step < last, so both neighbors exist.
                let upper = stops.partition_point(|&stop| stop <= step);
                let (lower_stop, upper_stop) = (stops[upper - 1], stops[upper]);
                let substep = (step - lower_stop) / (upper_stop - lower_stop);

                let lower = in_space(&colors[upper - 1]);
                let upper = in_space(&colors[upper]);
                // Inverting only chooses the space, which `space` already fixes.
                if invert && space.is_none() {
                    upper.interpolate(&lower, 1.0 - substep)
                } else {
                    lower.interpolate(&upper, substep)
                }
            })
            .collect();

        Ok(samples)
    }

    fn get_color_at(&self, delta: Component) -> Result<C, ColorError> {
        if !(0.0..=1.0).contains(&delta) {
            return Err(ColorError::DeltaOutOfRange(delta));
        }

        match self {
            [] => Err(ColorError::EmptyPalette),
            [color] => Ok(color.clone()),
            _ => {
                let position = delta * (self.len() - 1) as Component;
                let index = (position.floor() as usize).min(self.len() - 2);
                Ok(self[index].interpolate(&self[index + 1], position - index as Component))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_components_eq, Hsl, Rgb};
    use pretty_assertions::assert_eq;

    fn rgb(red: f64, green: f64, blue: f64) -> Rgb {
        Rgb::new(red, green, blue).unwrap()
    }

    fn lists(colors: &[Color]) -> Vec<Vec<Component>> {
        colors.iter().map(ColorModel::to_list_with_alpha).collect()
    }

    #[test]
    fn augment_evenly() {
        let palette = [rgb(0.0, 0.0, 0.0), rgb(255.0, 255.0, 255.0)];
        let colors = palette.augment(5, None, None, false).unwrap();
        assert_eq!(colors.len(), 5);
        assert_components_eq!(colors[1].to_precise_list(), [63.75, 63.75, 63.75]);
        assert_components_eq!(colors[2].to_precise_list(), [127.5, 127.5, 127.5]);
        assert_eq!(colors[0], palette[0]);
        assert_eq!(colors[4], palette[1]);
    }

    #[test]
    fn augment_keeps_colors_at_their_stops() {
        let palette = [
            rgb(255.0, 0.0, 0.0),
            rgb(0.0, 255.0, 0.0),
            rgb(0.0, 0.0, 255.0),
        ];
        let colors = palette.augment(3, None, None, false).unwrap();
        assert_eq!(lists(&colors), lists(&palette.map(Color::from)));
    }

    #[test]
    fn augment_sorts_stops() {
        let a = rgb(255.0, 0.0, 0.0);
        let b = rgb(0.0, 255.0, 0.0);
        let c = rgb(0.0, 0.0, 255.0);

        let unsorted = [a, b, c]
            .augment(3, Some(&[0.5, 0.0, 1.0]), None, false)
            .unwrap();
        let sorted = [b, a, c]
            .augment(3, Some(&[0.0, 0.5, 1.0]), None, false)
            .unwrap();

        assert_eq!(lists(&unsorted), lists(&sorted));
        assert_eq!(lists(&unsorted)[1], vec![255.0, 0.0, 0.0, 255.0]);
    }

    #[test]
    fn augment_clamps_outside_of_stops() {
        let palette = [rgb(10.0, 10.0, 10.0), rgb(20.0, 20.0, 20.0)];
        let colors = palette
            .augment(5, Some(&[0.25, 0.75]), None, false)
            .unwrap();
        assert_eq!(colors[0], palette[0]);
        assert_eq!(colors[1], palette[0]);
        assert_components_eq!(colors[2].to_precise_list(), [15.0, 15.0, 15.0]);
        assert_eq!(colors[3], palette[1]);
        assert_eq!(colors[4], palette[1]);
    }

    #[test]
    fn augment_in_a_space() {
        let palette = [rgb(255.0, 0.0, 0.0), rgb(0.0, 0.0, 255.0)];
        let colors = palette
            .augment(3, None, Some(ColorSpace::Hsl), false)
            .unwrap();
        assert!(colors.iter().all(|color| color.space() == ColorSpace::Hsl));
        assert_eq!(colors[1].to_list(), vec![120.0, 100.0, 50.0]);
    }

    #[test]
    fn augment_inverted() {
        let palette = [
            Hsl::new(0.0, 100.0, 50.0).unwrap(),
            Hsl::new(240.0, 100.0, 50.0).unwrap(),
        ];
        let forward = palette.augment(5, None, None, false).unwrap();
        let inverted = palette.augment(5, None, None, true).unwrap();
        assert_eq!(lists(&forward), lists(&inverted));
        assert_eq!(forward[1].to_list(), vec![60.0, 100.0, 50.0]);
    }

    #[test]
    fn invert_is_ignored_with_a_space() {
        let palette = [
            Color::from(rgb(255.0, 0.0, 0.0)),
            Hsl::new(240.0, 100.0, 50.0).unwrap().into(),
        ];
        let stops = [0.0, 1.0];
        let forward = palette
            .augment(7, Some(&stops), Some(ColorSpace::Lab), false)
            .unwrap();
        let inverted = palette
            .augment(7, Some(&stops), Some(ColorSpace::Lab), true)
            .unwrap();
        assert_eq!(lists(&forward), lists(&inverted));
        assert!(inverted.iter().all(|color| color.space() == ColorSpace::Lab));

        // Without a space the upper color's space is used.
        let mixed = palette.augment(3, None, None, true).unwrap();
        assert_eq!(mixed[1].space(), ColorSpace::Hsl);
    }

    #[test]
    fn augment_edge_cases() {
        let palette = [rgb(1.0, 2.0, 3.0), rgb(4.0, 5.0, 6.0)];
        assert!(palette.augment(0, None, None, false).unwrap().is_empty());

        let one = palette.augment(1, None, None, false).unwrap();
        assert_eq!(lists(&one), vec![vec![1.0, 2.0, 3.0, 255.0]]);

        let single = [rgb(7.0, 8.0, 9.0)].augment(3, None, None, false).unwrap();
        assert_eq!(lists(&single), vec![vec![7.0, 8.0, 9.0, 255.0]; 3]);

        assert_eq!(
            palette.augment(3, Some(&[0.0]), None, false).unwrap_err(),
            ColorError::StopsLengthMismatch { colors: 2, stops: 1 }
        );

        let empty: [Rgb; 0] = [];
        assert_eq!(
            empty.augment(3, None, None, false).unwrap_err(),
            ColorError::EmptyPalette
        );
    }

    #[test]
    fn get_color_at() {
        let palette = vec![
            rgb(0.0, 0.0, 0.0),
            rgb(100.0, 100.0, 100.0),
            rgb(200.0, 200.0, 200.0),
        ];
        assert_eq!(palette.get_color_at(0.0).unwrap(), palette[0]);
        assert_eq!(palette.get_color_at(1.0).unwrap(), palette[2]);
        assert_components_eq!(
            palette.get_color_at(0.25).unwrap().to_precise_list(),
            [50.0, 50.0, 50.0]
        );
        assert_components_eq!(
            palette.get_color_at(0.75).unwrap().to_precise_list(),
            [150.0, 150.0, 150.0]
        );
    }

    #[test]
    fn get_color_at_single_color() {
        let palette = [Hsl::new(10.0, 20.0, 30.0).unwrap()];
        for delta in [0.0, 0.3, 1.0] {
            assert_eq!(palette.get_color_at(delta).unwrap().to_list(), vec![10.0, 20.0, 30.0]);
        }
    }

    #[test]
    fn get_color_at_errors() {
        let palette = [rgb(0.0, 0.0, 0.0)];
        assert_eq!(
            palette.get_color_at(1.5).unwrap_err(),
            ColorError::DeltaOutOfRange(1.5)
        );
        let empty: Vec<Rgb> = vec![];
        assert_eq!(empty.get_color_at(0.5).unwrap_err(), ColorError::EmptyPalette);
    }
}
