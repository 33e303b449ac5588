use lyrebird::{compress_8, Generator, Mixer, Modulator, Settings, Sine, Square, Triangle};

/// Columns per plotted row. Each 8-bit PCM level maps onto one of them.
const WIDTH: usize = 64;

fn main() {
    let settings = Settings::shared(4000.0).expect("sample rate");

    // a triangle wobbling between 200 and 300 Hz, mixed with a quiet square an octave down
    let wobble = Modulator::new(Sine::with_frequency(settings.clone(), 8.0), 200.0, 300.0)
        .expect("valid range");
    let mut root = Mixer::new()
        .with_child(Triangle::new(settings.clone()).with_frequency_modulator(wobble))
        .with_child(Square::with_frequency(settings, 125.0));

    let mut samples = vec![0.0; 128];
    root.fill_buffer(&mut samples);

    // plot the quantized stream, the same bytes an 8-bit device would receive
    let center = 127 * WIDTH / 256;
    for (n, level) in compress_8(&samples).into_iter().enumerate() {
        let column = level as usize * WIDTH / 256;
        let row: String = (0..WIDTH)
            .map(|i| match i {
                i if i == column => '*',
                i if i == center => ':',
                _ => ' ',
            })
            .collect();
        println!("{n:4} {level:3} {row}");
    }
}
