use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use lyrebird::{
    Mixer, Modulator, PcmBlock, PcmFormat, Settings, SimplexNoise, Sine, StereoRenderer,
};

const DURATION_SECS: f32 = 20.0;

/// Two sines whose pitch wanders between 40 and 860 Hz.
fn wandering_sines(settings: &Arc<Settings>) -> Mixer {
    let mut mixer = Mixer::new();
    for _ in 0..2 {
        let noise = SimplexNoise::new(settings.clone(), 0.5);
        let modulator = Modulator::new(noise, 40.0, 860.0).expect("valid range");
        mixer.add(Sine::new(settings.clone()).with_frequency_modulator(modulator));
    }
    mixer
}

fn main() {
    tracing_subscriber::fmt::init();

    // Output
    let host = cpal::default_host();
    let out_dev = host
        .default_output_device()
        .expect("no output device available");
    let mut support_config_range = out_dev
        .supported_output_configs()
        .expect("No supported config");
    let config = support_config_range
        .find(|c| c.sample_format() == cpal::SampleFormat::I16 && c.channels() == 2)
        .expect("no 16-bit stereo output configuration")
        .with_max_sample_rate();

    let sample_rate = config.sample_rate().0 as f64;
    println!("Sample rate: {}", sample_rate);

    let settings = Settings::shared(sample_rate).expect("device sample rate");
    let mut renderer = StereoRenderer::new(
        wandering_sines(&settings),
        wandering_sines(&settings),
        PcmFormat::S16,
    );

    let stream = out_dev
        .build_output_stream(
            &config.config(),
            move |d: &mut [i16], _info| match renderer.render(d.len() / 2) {
                Ok(PcmBlock::S16(block)) => d.copy_from_slice(&block),
                Ok(PcmBlock::U8(_)) => unreachable!("renderer is configured for 16-bit output"),
                Err(e) => {
                    tracing::error!(%e, "render failed");
                    d.fill(0);
                }
            },
            |e| panic!("{}", e),
            None,
        )
        .unwrap();

    stream.play().unwrap();

    std::thread::sleep(std::time::Duration::from_secs_f32(DURATION_SECS));
}
