use anyhow::anyhow;
use coord_2d::Coord;
use sdl2::{
    pixels::Color,
    rect::{Point, Rect},
    render::Canvas,
    video::Window,
};

/// Fills a disc by drawing one horizontal span per scanline of its bounding
/// box.
pub fn fill_circle(
    canvas: &mut Canvas<Window>,
    centre: Coord,
    radius: i32,
    color: Color,
) -> anyhow::Result<()> {
    canvas.set_draw_color(color);
    for dy in -radius..=radius {
        let half_width = (((radius * radius) - (dy * dy)) as f32).sqrt() as i32;
        let rect = Rect::new(
            centre.x - half_width,
            centre.y + dy,
            (half_width * 2 + 1) as u32,
            1,
        );
        canvas.fill_rect(rect).map_err(|e| anyhow!("{e}"))?;
    }
    Ok(())
}

/// Midpoint circle outline.
pub fn draw_circle_outline(
    canvas: &mut Canvas<Window>,
    centre: Coord,
    radius: i32,
    color: Color,
) -> anyhow::Result<()> {
    canvas.set_draw_color(color);
    let mut x = radius - 1;
    let mut y = 0;
    let mut dx = 1;
    let mut dy = 1;
    let mut err = dx - (radius << 1);
    while x >= y {
        for (px, py) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            canvas
                .draw_point(Point::new(centre.x + px, centre.y + py))
                .map_err(|e| anyhow!("{e}"))?;
        }
        if err <= 0 {
            y += 1;
            err += dy;
            dy += 2;
        }
        if err > 0 {
            x -= 1;
            dx += 2;
            err += dx - (radius << 1);
        }
    }
    Ok(())
}
