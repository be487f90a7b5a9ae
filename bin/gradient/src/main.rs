use color_models::prelude::*;
use image::{Rgba, RgbaImage};

const WIDTH: u32 = 1000;
const HEIGHT_PER_ROW: u32 = 100;

/// One row of pixels, left to right.
fn gradient_row(space: ColorSpace) -> Result<Vec<Rgb>, ColorError> {
    let left = Rgb::new(255.0, 0.0, 0.0)?;
    let right = Rgb::new(0.0, 0.0, 255.0)?;

    left.lerp_to(&right, WIDTH as usize - 2, Some(space), false)
}

/// A multi-stop row resampled from a small palette.
fn palette_row() -> Result<Vec<Rgb>, ColorError> {
    let palette = [
        Color::from(Hsl::new(0.0, 100.0, 50.0)?),
        Color::from(Oklab::new(0.9, 0.0, 0.15)?),
        Color::from(Hsb::new(200.0, 80.0, 60.0)?),
    ];

    Ok(palette
        .augment(WIDTH as usize, Some(&[0.0, 0.3, 1.0]), Some(ColorSpace::Oklab), false)?
        .iter()
        .map(ColorModel::to_rgb)
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rows = ColorSpace::ALL
        .into_iter()
        .map(gradient_row)
        .chain(std::iter::once(palette_row()))
        .collect::<Result<Vec<_>, _>>()?;

    let height = rows.len() as u32 * HEIGHT_PER_ROW;

    let mut img = RgbaImage::new(WIDTH, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = rows[(y / HEIGHT_PER_ROW) as usize][x as usize];
        *pixel = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    img.save("out.png")?;

    for (space, row) in ColorSpace::ALL.iter().zip(&rows) {
        println!("{space}: {} .. {}", row[WIDTH as usize / 2], row[WIDTH as usize - 1]);
    }

    Ok(())
}
