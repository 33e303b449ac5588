use std::{sync::Arc, thread};

use lyrebird::{
    compress_16, interleave, Constant, Generator, Mixer, Modulator, Node, PcmBlock, PcmFormat,
    Sample, Sawtooth, Settings, SimplexNoise, Sine, Square, StereoRenderer, Triangle, WhiteNoise,
};

fn render(generator: &mut impl Generator, len: usize) -> Vec<Sample> {
    let mut buffer = vec![0.0; len];
    generator.fill_buffer(&mut buffer);
    buffer
}

/// Two sines whose pitch wanders between 40 and 860 Hz, driven by slow simplex noise.
fn wandering_sines(settings: &Arc<Settings>, seed: u64) -> Mixer {
    let mut mixer = Mixer::new();
    for voice in 0..2 {
        let noise = SimplexNoise::with_seed(settings.clone(), 0.5, seed + voice);
        let modulator = Modulator::new(noise, 40.0, 860.0).unwrap();
        mixer.add(Sine::new(settings.clone()).with_frequency_modulator(modulator));
    }
    mixer
}

#[test]
fn constant_modulator_matches_fixed_frequency() {
    let settings = Settings::shared(48_000.0).unwrap();

    // a centered constant maps to the middle of the range: 0.5 * 880 = 440
    let modulator = Modulator::new(Constant::new(0.0), 0.0, 880.0).unwrap();
    let mut modulated = Sine::new(settings.clone()).with_frequency_modulator(modulator);
    let mut fixed = Sine::with_frequency(settings.clone(), 440.0);
    for _ in 0..4 {
        assert_eq!(render(&mut modulated, 256), render(&mut fixed, 256));
    }

    let modulator = Modulator::new(Constant::new(1.0), 100.0, 300.0).unwrap();
    let mut modulated = Sawtooth::new(settings.clone()).with_frequency_modulator(modulator);
    let mut fixed = Sawtooth::with_frequency(settings, 300.0);
    assert_eq!(render(&mut modulated, 1000), render(&mut fixed, 1000));
}

#[test]
fn frequency_modulator_can_be_detached() {
    let settings = Settings::shared(48_000.0).unwrap();
    let modulator = Modulator::new(Constant::new(-1.0), 1000.0, 2000.0).unwrap();
    let mut osc =
        Triangle::with_frequency(settings.clone(), 1000.0).with_frequency_modulator(modulator);
    let mut reference = Triangle::with_frequency(settings, 1000.0);

    assert_eq!(render(&mut osc, 100), render(&mut reference, 100));
    osc.set_frequency_modulator(None);
    assert!(osc.frequency_modulator_mut().is_none());
    assert_eq!(render(&mut osc, 100), render(&mut reference, 100));
}

#[test]
fn nested_tree_output_stays_bipolar() {
    let settings = Settings::shared(44_100.0).unwrap();

    // vibrato: a square whose pitch follows a slow triangle
    let vibrato =
        Modulator::new(Triangle::with_frequency(settings.clone(), 5.0), 210.0, 230.0).unwrap();
    let mut root = Node::from(
        Mixer::new()
            .with_child(wandering_sines(&settings, 1))
            .with_child(Square::new(settings.clone()).with_frequency_modulator(vibrato))
            .with_child(WhiteNoise::with_seed(4))
            .with_child(Mixer::new()),
    );

    for len in [64, 1, 441, 4096] {
        let buffer = render(&mut root, len);
        assert_eq!(buffer.len(), len);
        assert!(buffer.iter().all(|s| (-1.0..=1.0).contains(s)));
    }
}

#[test]
fn seeded_trees_render_identically() {
    let settings = Settings::shared(48_000.0).unwrap();
    let mut a = wandering_sines(&settings, 10);
    let mut b = wandering_sines(&settings, 10);
    for _ in 0..8 {
        assert_eq!(render(&mut a, 512), render(&mut b, 512));
    }
}

#[test]
fn channels_render_on_separate_threads() {
    let settings = Settings::shared(48_000.0).unwrap();
    let trees = [wandering_sines(&settings, 1), wandering_sines(&settings, 3)];

    let handles: Vec<_> = trees
        .into_iter()
        .map(|mut tree| thread::spawn(move || render(&mut tree, 2400)))
        .collect();
    let channels: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let frames = interleave(&channels[0], &channels[1]).unwrap();
    assert_eq!(frames.len(), 4800);
    assert_eq!(compress_16(&frames).len(), 4800);
}

#[test]
fn stereo_drone_block() {
    let settings = Settings::shared(192_000.0).unwrap();
    let frames = settings.buffer_len(std::time::Duration::from_millis(50));
    let mut renderer = StereoRenderer::new(
        wandering_sines(&settings, 1),
        wandering_sines(&settings, 2),
        PcmFormat::S16,
    );

    match renderer.render(frames).unwrap() {
        PcmBlock::S16(data) => {
            assert_eq!(data.len(), 2 * 9_600);
            // gain 1/8 keeps every sample within an eighth of full scale
            assert!(data.iter().all(|s| s.unsigned_abs() <= 4096));
        }
        other => panic!("expected 16-bit block, got {other:?}"),
    }
}
