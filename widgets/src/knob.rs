use crate::draw::{draw_circle_outline, fill_circle};
use coord_2d::Coord;
use sdl2::{pixels::Color, render::Canvas, video::Window};

/// Hit-test and visual radius of a knob.
pub const KNOB_RADIUS_PX: i32 = 30;

/// A vertical drag of this many pixels sweeps a knob across its full range.
pub const DRAG_RANGE_PX: f32 = 100.0;

const INDICATOR_RADIUS_PX: i32 = 4;
const INDICATOR_ORBIT_PX: i32 = KNOB_RADIUS_PX - 8;

// Fraction of a full turn swept by the indicator between min and max.
const SWEEP_01: f32 = 0.8;

const BODY_COLOR: Color = Color::RGB(60, 60, 60);
const OUTLINE_COLOR: Color = Color::RGB(200, 200, 200);
const INDICATOR_COLOR: Color = Color::RGB(255, 100, 100);

/// A single pointer sample fed to the widgets each frame: position in window
/// coordinates plus whether the pointer is engaged (left mouse button held,
/// or remote pinch gesture).
#[derive(Debug, Clone, Copy)]
pub struct PointerReading {
    pub x: i32,
    pub y: i32,
    pub engaged: bool,
}

struct Drag {
    start_y: f32,
    start_value: f32,
}

/// A rotary control bound to one scalar parameter. Engaging the pointer
/// within the knob's radius starts a drag; while the drag lasts, vertical
/// pointer movement maps linearly onto the parameter range (an upward drag
/// increases the value) and disengaging ends the drag wherever the pointer
/// happens to be.
pub struct Knob {
    centre: Coord,
    min_value: f32,
    max_value: f32,
    value: f32,
    drag: Option<Drag>,
}

impl Knob {
    pub fn new(
        centre: Coord,
        min_value: f32,
        max_value: f32,
        initial_value: f32,
    ) -> Self {
        Self {
            centre,
            min_value,
            max_value,
            value: initial_value.clamp(min_value, max_value),
            drag: None,
        }
    }

    fn hit(&self, pointer: PointerReading) -> bool {
        let dx = (pointer.x - self.centre.x) as f32;
        let dy = (pointer.y - self.centre.y) as f32;
        ((dx * dx) + (dy * dy)).sqrt() <= KNOB_RADIUS_PX as f32
    }

    pub fn update(&mut self, pointer: PointerReading) {
        if pointer.engaged {
            if self.drag.is_none() && self.hit(pointer) {
                self.drag = Some(Drag {
                    start_y: pointer.y as f32,
                    start_value: self.value,
                });
            }
            if let Some(drag) = self.drag.as_ref() {
                let delta_y = drag.start_y - pointer.y as f32;
                let per_px = (self.max_value - self.min_value) / DRAG_RANGE_PX;
                self.value = (drag.start_value + (delta_y * per_px))
                    .clamp(self.min_value, self.max_value);
            }
        } else {
            self.drag = None;
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    fn value_01(&self) -> f32 {
        (self.value - self.min_value) / (self.max_value - self.min_value)
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>) -> anyhow::Result<()> {
        fill_circle(canvas, self.centre, KNOB_RADIUS_PX, BODY_COLOR)?;
        draw_circle_outline(
            canvas,
            self.centre,
            KNOB_RADIUS_PX,
            OUTLINE_COLOR,
        )?;
        let angle_rads = ((self.value_01() * 2.0) - 1.0)
            * SWEEP_01
            * std::f32::consts::PI;
        let indicator = self.centre
            + Coord {
                x: (angle_rads.cos() * INDICATOR_ORBIT_PX as f32) as i32,
                y: (angle_rads.sin() * INDICATOR_ORBIT_PX as f32) as i32,
            };
        fill_circle(canvas, indicator, INDICATOR_RADIUS_PX, INDICATOR_COLOR)
    }
}
