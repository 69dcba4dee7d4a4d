//! Scope - wires the generator thread to the terminal UI

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use rtrb::{Producer, RingBuffer};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::source::Source;
use super::ui::{ScopeInfo, Sample, UiApp};
use super::Args;

/// Ring buffer capacity between the generator thread and the UI
const SAMPLE_QUEUE_SIZE: usize = 8192;

/// Generator thread pacing (~60 batches per second)
const BATCH_INTERVAL: Duration = Duration::from_millis(16);

/// Main application
pub struct Scope {
    args: Args,
}

impl Scope {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Run the scope (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let source = Source::from_args(&self.args)?;
        let info = ScopeInfo {
            mode: self.args.mode.label(),
            octaves: self.args.octaves,
            seed: self.args.seed,
            floor: self.args.floor,
        };

        let (producer, consumer) = RingBuffer::<Sample>::new(SAMPLE_QUEUE_SIZE);
        let running = Arc::new(AtomicBool::new(true));

        // The generator is confined to this thread; only samples cross over
        let generator = {
            let running = Arc::clone(&running);
            let rate = self.args.rate.max(1);
            thread::Builder::new()
                .name("voss-generator".into())
                .spawn(move || drive(source, producer, rate, &running))
                .wrap_err("failed to spawn generator thread")?
        };

        let mut terminal = ratatui::try_init().wrap_err("failed to initialise terminal")?;
        let result = UiApp::new(consumer, info).run(&mut terminal);
        ratatui::restore();

        running.store(false, Ordering::Relaxed);
        let steps = generator
            .join()
            .map_err(|_| eyre!("generator thread panicked"))?;
        tracing::info!(steps, "generator stopped");

        result
    }
}

/// Feed consecutive steps into the queue until `running` clears.
///
/// Steps are only generated when there is room to deliver them, so the
/// generator never skips a step. Returns the number of steps produced.
fn drive(mut source: Source, mut producer: Producer<Sample>, rate: usize, running: &AtomicBool) -> i64 {
    let mut step: i64 = 0;
    while running.load(Ordering::Relaxed) {
        for _ in 0..rate.min(producer.slots()) {
            let value = source.step(step);
            if producer.push(Sample { step, value }).is_err() {
                break;
            }
            step += 1;
        }
        thread::sleep(BATCH_INTERVAL);
    }
    step
}
