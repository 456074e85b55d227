use anyhow::anyhow;
use handsaw_widgets::fill_circle;
use line_2d::Coord;
use sdl2::{
    pixels::Color, rect::Rect, render::BlendMode, render::Canvas,
    video::Window,
};

pub const WINDOW_WIDTH_PX: u32 = 1000;
pub const WINDOW_HEIGHT_PX: u32 = 600;

/// Height of the control strip along the bottom of the window. Everything
/// above it is the wave area.
pub const PANEL_HEIGHT_PX: u32 = 120;
pub const WAVE_AREA_HEIGHT_PX: u32 = WINDOW_HEIGHT_PX - PANEL_HEIGHT_PX;

const GRID_COLS: u32 = 10;
const GRID_ROWS: u32 = 8;

// The waveform's +/-1 swing spans this fraction of the wave area's height
// either side of the centre line.
const WAVE_SCALE: f32 = 0.4;

const HALO_RADIUS_PX: i32 = 25;

const GRID_COLOR: Color = Color::RGB(64, 64, 64);
const SEPARATOR_COLOR: Color = Color::RGB(128, 128, 128);
const PANEL_COLOR: Color = Color::RGB(30, 30, 30);
const WAVEFORM_COLOR: Color = Color::RGB(255, 0, 0);
const HALO_PINCHED_COLOR: Color = Color::RGBA(255, 80, 180, 120);
const HALO_IDLE_COLOR: Color = Color::RGBA(0, 200, 255, 100);

pub fn draw_grid(canvas: &mut Canvas<Window>) -> anyhow::Result<()> {
    canvas.set_draw_color(GRID_COLOR);
    for i in 0..=GRID_COLS {
        let x = (i * (WINDOW_WIDTH_PX - 1) / GRID_COLS) as i32;
        canvas
            .fill_rect(Rect::new(x, 0, 1, WAVE_AREA_HEIGHT_PX))
            .map_err(|e| anyhow!("{e}"))?;
    }
    for i in 0..=GRID_ROWS {
        let y = (i * (WAVE_AREA_HEIGHT_PX - 1) / GRID_ROWS) as i32;
        canvas
            .fill_rect(Rect::new(0, y, WINDOW_WIDTH_PX, 1))
            .map_err(|e| anyhow!("{e}"))?;
    }
    Ok(())
}

/// Plots the scope snapshot as a polyline across the wave area, oldest
/// sample at the left edge.
pub fn draw_waveform(
    canvas: &mut Canvas<Window>,
    samples: &[f32],
) -> anyhow::Result<()> {
    canvas.set_draw_color(WAVEFORM_COLOR);
    let centre_y = WAVE_AREA_HEIGHT_PX as f32 / 2.0;
    let scale_y = WAVE_AREA_HEIGHT_PX as f32 * WAVE_SCALE;
    let mut coords = samples.iter().enumerate().map(|(i, sample)| Coord {
        x: (i * WINDOW_WIDTH_PX as usize / samples.len()) as i32,
        y: (centre_y - (sample * scale_y)) as i32,
    });
    if let Some(mut prev) = coords.next() {
        for coord in coords {
            for Coord { x, y } in line_2d::coords_between(prev, coord) {
                let _ = canvas.fill_rect(Rect::new(x, y, 1, 1));
            }
            prev = coord;
        }
    }
    Ok(())
}

/// Dark strip holding the knobs, with a separator line along its top edge.
pub fn draw_panel(canvas: &mut Canvas<Window>) -> anyhow::Result<()> {
    canvas.set_draw_color(PANEL_COLOR);
    canvas
        .fill_rect(Rect::new(
            0,
            WAVE_AREA_HEIGHT_PX as i32,
            WINDOW_WIDTH_PX,
            PANEL_HEIGHT_PX,
        ))
        .map_err(|e| anyhow!("{e}"))?;
    canvas.set_draw_color(SEPARATOR_COLOR);
    canvas
        .fill_rect(Rect::new(0, WAVE_AREA_HEIGHT_PX as i32, WINDOW_WIDTH_PX, 1))
        .map_err(|e| anyhow!("{e}"))?;
    Ok(())
}

/// Semi-transparent disc marking the remote pointer: pink while pinched,
/// cyan otherwise. Alpha blending is enabled for this draw only.
pub fn draw_pointer_halo(
    canvas: &mut Canvas<Window>,
    position: Coord,
    pinched: bool,
) -> anyhow::Result<()> {
    let color = if pinched {
        HALO_PINCHED_COLOR
    } else {
        HALO_IDLE_COLOR
    };
    canvas.set_blend_mode(BlendMode::Blend);
    fill_circle(canvas, position, HALO_RADIUS_PX, color)?;
    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}
