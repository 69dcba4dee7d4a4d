//! Pitch, velocity and rhythm picked by Voss generators.
//!
//! Run with: cargo run --example melody -- [steps] [seed]
//!
//! Three dice-roll octaves drive pitch, two drive velocity, and a stateless
//! modular generator marks a rhythm accent every 12 steps.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use voss_noise::{table::pick, voss::summer::sum, Voss, VossStateless};

/// C major pentatonic over two octaves
const PITCHES: [u8; 10] = [60, 62, 64, 67, 69, 72, 74, 76, 79, 81];
const VELOCITIES: [u8; 6] = [48, 64, 80, 96, 112, 127];
const NOTE_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

fn note_name(note: u8) -> String {
    format!("{}{}", NOTE_NAMES[(note % 12) as usize], (note / 12) as i32 - 1)
}

/// A d`sides` roll (0-based) with its own random source
fn die(seed: u64, sides: u32) -> impl FnMut(i64, u32) -> f64 + Send + 'static {
    let mut rng = Pcg64::seed_from_u64(seed);
    move |_, _| rng.random_range(0..sides) as f64
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let steps: i64 = args.next().as_deref().unwrap_or("32").parse()?;
    let seed: u64 = args.next().as_deref().unwrap_or("7").parse()?;

    // Sum of three d4 rolls spans 0..=9, one entry per pitch
    let mut pitch = Voss::builder()
        .call(die(seed, 4))
        .call(die(seed + 1, 4))
        .call(die(seed + 2, 4))
        .build()?;

    // Two d4 rolls less one, clamped so quiet steps sit on the lowest velocity
    let mut velocity = Voss::builder()
        .call(die(seed + 10, 4))
        .call(die(seed + 11, 4))
        .summer(|values| (sum(values) - 1.0).max(0.0))
        .build()?;

    let accent = VossStateless::builder()
        .call(|n, _| if n % 12 == 0 { 1.0 } else { 0.0 })
        .build()?;

    println!("=== Voss Melody ===");
    println!("Steps: {}  Seed: {}\n", steps, seed);

    for n in 0..steps {
        let p = pitch.generate(n)?;
        let v = velocity.generate(n)?;
        let hit = accent.generate(n)? > 0.0;

        let (Some(&note), Some(&vel)) = (pick(&PITCHES, p), pick(&VELOCITIES, v)) else {
            continue;
        };
        let vel = if hit { 127 } else { vel };

        println!(
            "{:>4}  {:<4} vel {:>3} {}",
            n,
            note_name(note),
            vel,
            if hit { "*" } else { "" }
        );
    }

    Ok(())
}
