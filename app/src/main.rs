mod input;
mod scene;

use anyhow::anyhow;
use handsaw_core::{Scope, SynthParams, params};
use handsaw_player::Player;
use handsaw_pointer_udp::{PointerListener, PointerState};
use handsaw_widgets::Knob;
use input::PointerSource;
use line_2d::Coord;
use sdl2::{
    event::Event, keyboard::Keycode, mouse::MouseButton, pixels::Color,
};
use std::{
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / 60);

const KNOB_CENTRE_Y: i32 =
    (scene::WINDOW_HEIGHT_PX - (scene::PANEL_HEIGHT_PX / 2)) as i32;
const FREQ_KNOB_X: i32 = 150;
const PHASE_KNOB_X: i32 = 350;
const AMPLITUDE_KNOB_X: i32 = 550;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("sawtooth generator with interactive knobs");
    log::info!(
        "- frequency: {}-{} hz",
        params::FREQ_HZ_MIN,
        params::FREQ_HZ_MAX
    );
    log::info!(
        "- phase offset: {}-{}",
        params::PHASE_OFFSET_01_MIN,
        params::PHASE_OFFSET_01_MAX
    );
    log::info!(
        "- amplitude: {}-{}",
        params::AMPLITUDE_01_MIN,
        params::AMPLITUDE_01_MAX
    );
    log::info!("drag knobs with the mouse or the hand-tracking pointer");
    log::info!("press escape or close the window to exit");

    let synth_params = Arc::new(SynthParams::new());
    let scope = Scope::new();
    let player = Player::new()?;
    // Audio stops when the stream is dropped at the end of main.
    let _stream = player.play(Arc::clone(&synth_params), scope.clone())?;

    let pointer_state = PointerState::new();
    let listener = PointerListener::spawn(Arc::clone(&pointer_state))?;
    let mut pointer_source = PointerSource::new(Arc::clone(&pointer_state));

    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
    let window = video_subsystem
        .window(
            "Sawtooth Generator",
            scene::WINDOW_WIDTH_PX,
            scene::WINDOW_HEIGHT_PX,
        )
        .position_centered()
        .build()?;
    let mut canvas = window
        .into_canvas()
        .target_texture()
        .present_vsync()
        .build()?;
    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

    let mut freq_knob = Knob::new(
        Coord::new(FREQ_KNOB_X, KNOB_CENTRE_Y),
        params::FREQ_HZ_MIN,
        params::FREQ_HZ_MAX,
        params::FREQ_HZ_INITIAL,
    );
    let mut phase_knob = Knob::new(
        Coord::new(PHASE_KNOB_X, KNOB_CENTRE_Y),
        params::PHASE_OFFSET_01_MIN,
        params::PHASE_OFFSET_01_MAX,
        params::PHASE_OFFSET_01_INITIAL,
    );
    let mut amplitude_knob = Knob::new(
        Coord::new(AMPLITUDE_KNOB_X, KNOB_CENTRE_Y),
        params::AMPLITUDE_01_MIN,
        params::AMPLITUDE_01_MAX,
        params::AMPLITUDE_01_INITIAL,
    );

    let mut scope_samples = Vec::new();
    let mut prev_tick_complete = Instant::now();
    let mut running = true;
    while running {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => running = false,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => running = false,
                Event::MouseMotion { x, y, .. } => {
                    pointer_source.on_mouse_motion(x, y)
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    ..
                } => pointer_source.on_mouse_button(true),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => pointer_source.on_mouse_button(false),
                _ => (),
            }
        }

        let reading = pointer_source.reading();
        for knob in [&mut freq_knob, &mut phase_knob, &mut amplitude_knob] {
            knob.update(reading);
        }
        synth_params.freq_hz.set(freq_knob.value());
        synth_params.phase_offset_01.set(phase_knob.value());
        synth_params.amplitude_01.set(amplitude_knob.value());

        canvas.set_draw_color(Color::BLACK);
        canvas.clear();
        scene::draw_grid(&mut canvas)?;
        scope.snapshot_into(&mut scope_samples);
        scene::draw_waveform(&mut canvas, &scope_samples)?;
        scene::draw_panel(&mut canvas)?;
        for knob in [&freq_knob, &phase_knob, &amplitude_knob] {
            knob.draw(&mut canvas)?;
        }
        if pointer_source.remote_seen() {
            scene::draw_pointer_halo(
                &mut canvas,
                Coord::new(pointer_state.x(), pointer_state.y()),
                pointer_state.active(),
            )?;
        }
        canvas.present();

        if let Some(period_to_sleep) = (prev_tick_complete + FRAME_DURATION)
            .checked_duration_since(Instant::now())
        {
            thread::sleep(period_to_sleep);
        }
        prev_tick_complete = Instant::now();
    }

    listener.stop();
    Ok(())
}
