use image::{imageops, Rgb, RgbImage};

pub const BORDER_COLOR: Rgb<u8> = Rgb([10, 30, 40]);
pub const BORDER_WIDTH: u32 = 10;

/// Frame `image` with a `BORDER_WIDTH` margin and draw the accent outline that
/// starts a quarter of the framed width down and runs to the bottom-right corner.
pub fn add_border(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let new_width = width + 2 * BORDER_WIDTH;
    let new_height = height + 2 * BORDER_WIDTH;

    let mut framed = RgbImage::from_pixel(new_width, new_height, BORDER_COLOR);
    imageops::replace(&mut framed, image, BORDER_WIDTH as i64, BORDER_WIDTH as i64);

    draw_rectangle_outline(
        &mut framed,
        (0, new_width / 4),
        (new_width - 1, new_height - 1),
        BORDER_WIDTH,
        BORDER_COLOR,
    );

    framed
}

/// Inclusive corners; the stroke grows inward from each edge.
fn draw_rectangle_outline(
    image: &mut RgbImage,
    top_left: (u32, u32),
    bottom_right: (u32, u32),
    stroke: u32,
    color: Rgb<u8>,
) {
    let (x0, y0) = top_left;
    let (x1, y1) = bottom_right;

    if x0 > x1 || y0 > y1 || stroke == 0 {
        tracing::debug!("Skipping outline: corners ({x0},{y0})-({x1},{y1}) do not form a rectangle");
        return;
    }

    let x_end = x1.min(image.width().saturating_sub(1));
    let y_end = y1.min(image.height().saturating_sub(1));

    for y in y0..=y_end {
        let horizontal_edge = y < y0 + stroke || y + stroke > y1;
        for x in x0..=x_end {
            if horizontal_edge || x < x0 + stroke || x + stroke > x1 {
                image.put_pixel(x, y, color);
            }
        }
    }
}
