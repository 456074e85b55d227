use handsaw_core::{Oscillator, Scope, SynthParams};

/// One visualization sample is captured for every `SCOPE_STRIDE` output
/// frames, keeping the scope lock mostly uncontended.
pub const SCOPE_STRIDE: usize = 4;

/// Fills one interleaved output block. Each parameter cell is loaded once
/// per block; per frame the sample is duplicated across all channels and the
/// only shared-state access is the downsampled scope write. No allocation
/// and no blocking I/O happen here.
pub fn render_block(
    oscillator: &mut Oscillator,
    params: &SynthParams,
    scope: &Scope,
    data: &mut [f32],
    channels: usize,
    sample_rate_hz: f32,
) {
    let freq_hz = params.freq_hz.get();
    let phase_offset_01 = params.phase_offset_01.get();
    let amplitude_01 = params.amplitude_01.get();
    for (i, frame) in data.chunks_mut(channels).enumerate() {
        let sample = oscillator.next_sample(
            freq_hz,
            phase_offset_01,
            amplitude_01,
            sample_rate_hz,
        );
        for element in frame {
            *element = sample;
        }
        if i % SCOPE_STRIDE == 0 {
            scope.write(sample);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use handsaw_core::{
        SCOPE_CAPACITY,
        params::{AMPLITUDE_01_INITIAL, FREQ_HZ_INITIAL},
    };

    const SAMPLE_RATE_HZ: f32 = 44100.0;
    const FRAMES_PER_BLOCK: usize = 256;

    #[test]
    fn duplicates_each_sample_across_both_channels() {
        let params = SynthParams::new();
        let scope = Scope::new();
        let mut oscillator = Oscillator::new();
        let mut block = vec![0.0; FRAMES_PER_BLOCK * 2];
        render_block(
            &mut oscillator,
            &params,
            &scope,
            &mut block,
            2,
            SAMPLE_RATE_HZ,
        );
        for frame in block.chunks(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn first_sample_is_the_bottom_of_the_ramp() {
        let params = SynthParams::new();
        let scope = Scope::new();
        let mut oscillator = Oscillator::new();
        let mut block = vec![0.0; FRAMES_PER_BLOCK * 2];
        render_block(
            &mut oscillator,
            &params,
            &scope,
            &mut block,
            2,
            SAMPLE_RATE_HZ,
        );
        assert_eq!(block[0], -AMPLITUDE_01_INITIAL);
    }

    #[test]
    fn phase_is_continuous_across_blocks() {
        let params = SynthParams::new();
        let scope = Scope::new();
        let mut oscillator = Oscillator::new();
        let mut block = vec![0.0; FRAMES_PER_BLOCK * 2];
        render_block(
            &mut oscillator,
            &params,
            &scope,
            &mut block,
            2,
            SAMPLE_RATE_HZ,
        );
        let last = block[block.len() - 2];
        render_block(
            &mut oscillator,
            &params,
            &scope,
            &mut block,
            2,
            SAMPLE_RATE_HZ,
        );
        let step = 2.0 * AMPLITUDE_01_INITIAL
            * (FREQ_HZ_INITIAL / SAMPLE_RATE_HZ);
        assert!((block[0] - last - step).abs() < 1e-4);
    }

    #[test]
    fn scope_reconstructs_a_sawtooth_of_the_expected_period() {
        let params = SynthParams::new();
        // 441Hz divides the sample rate so the downsampled period is exact.
        params.freq_hz.set(441.0);
        let scope = Scope::new();
        let mut oscillator = Oscillator::new();
        let mut block = vec![0.0; FRAMES_PER_BLOCK * 2];
        // Enough blocks to wrap the scope, so every entry is a real sample.
        for _ in 0..16 {
            render_block(
                &mut oscillator,
                &params,
                &scope,
                &mut block,
                2,
                SAMPLE_RATE_HZ,
            );
        }
        let mut samples = Vec::new();
        scope.snapshot_into(&mut samples);
        assert_eq!(samples.len(), SCOPE_CAPACITY);
        // Every delta is either one downsampled ramp step or a reset, and
        // resets land one nominal period (100 frames / 25 entries) apart,
        // give or take the frame of accumulated float error.
        let ramp_step = 2.0
            * AMPLITUDE_01_INITIAL
            * (441.0 / SAMPLE_RATE_HZ)
            * SCOPE_STRIDE as f32;
        let period = 44100 / 441 / SCOPE_STRIDE;
        let mut reset_indices = Vec::new();
        for (i, pair) in samples.windows(2).enumerate() {
            let delta = pair[1] - pair[0];
            if delta < 0.0 {
                reset_indices.push(i);
            } else {
                assert!((delta - ramp_step).abs() < 1e-3);
            }
        }
        let expected_resets = SCOPE_CAPACITY / period;
        assert!(
            (reset_indices.len() as i32 - expected_resets as i32).abs() <= 1,
            "{} resets",
            reset_indices.len(),
        );
        for pair in reset_indices.windows(2) {
            let spacing = pair[1] - pair[0];
            assert!(spacing == period || spacing == period + 1);
        }
        for &sample in &samples {
            assert!(sample.abs() <= AMPLITUDE_01_INITIAL + 1e-6);
        }
    }
}
