use cpal::{
    BufferSize, Device, OutputCallbackInfo, SampleRate, StreamConfig,
    SupportedBufferSize,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use handsaw_core::{Oscillator, Scope, SynthParams};
use std::sync::Arc;

pub mod render;
pub use render::{SCOPE_STRIDE, render_block};

pub const SAMPLE_RATE_HZ: u32 = 44100;
pub const FRAMES_PER_BLOCK: u32 = 256;
const NUM_CHANNELS: u16 = 2;

pub struct Player {
    device: Device,
}

impl Player {
    pub fn new() -> anyhow::Result<Self> {
        let host = cpal::default_host();
        log::info!("cpal host: {}", host.id().name());
        let device = host
            .default_output_device()
            .ok_or(anyhow::anyhow!("no output device"))?;
        if let Ok(name) = device.name() {
            log::info!("cpal device: {}", name);
        } else {
            log::info!("cpal device: (no name)");
        }
        Ok(Self { device })
    }

    fn choose_config(&self) -> anyhow::Result<StreamConfig> {
        let default_config = self.device.default_output_config()?;
        let buffer_size = match default_config.buffer_size() {
            SupportedBufferSize::Range { min, max } => {
                BufferSize::Fixed(FRAMES_PER_BLOCK.clamp(*min, *max))
            }
            SupportedBufferSize::Unknown => BufferSize::Default,
        };
        Ok(StreamConfig {
            channels: NUM_CHANNELS,
            sample_rate: SampleRate(SAMPLE_RATE_HZ),
            buffer_size,
        })
    }

    /// Builds the output stream around the render callback and starts it.
    /// The returned stream must be kept alive for as long as audio should
    /// play; dropping it stops the audio thread.
    pub fn play(
        &self,
        params: Arc<SynthParams>,
        scope: Scope,
    ) -> anyhow::Result<cpal::Stream> {
        let config = self.choose_config()?;
        log::info!("sample rate: {}", config.sample_rate.0);
        log::info!("num channels: {}", config.channels);
        log::info!("buffer size: {:?}", config.buffer_size);
        let channels = config.channels as usize;
        let sample_rate_hz = config.sample_rate.0 as f32;
        let mut oscillator = Oscillator::new();
        let stream = self.device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &OutputCallbackInfo| {
                render_block(
                    &mut oscillator,
                    &params,
                    &scope,
                    data,
                    channels,
                    sample_rate_hz,
                );
            },
            |err| eprintln!("stream error: {}", err),
            None,
        )?;
        stream.play()?;
        Ok(stream)
    }
}
