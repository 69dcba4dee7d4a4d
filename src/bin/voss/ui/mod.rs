//! TUI module for voss
//!
//! Shows the recent generator output and its power spectrum.

mod spectrum;
mod status;
mod trace;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use spectrum::{render_spectrum, SpectrumAnalyzer};
use status::render_status;
use trace::render_trace;

/// Number of recent outputs kept for display and analysis
pub const TRACE_SIZE: usize = 1024;

/// One generator output sent from the generator thread
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub step: i64,
    pub value: f64,
}

/// Static description of the running generator
#[derive(Clone, Debug)]
pub struct ScopeInfo {
    pub mode: &'static str,
    pub octaves: u32,
    pub seed: u64,
    pub floor: Option<f64>,
}

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for generator outputs
    samples_rx: Consumer<Sample>,
    info: ScopeInfo,
    /// Most recent outputs, oldest first
    trace: Vec<f64>,
    /// Step of the most recent output
    last_step: Option<i64>,
    spectrum: SpectrumAnalyzer,
    should_quit: bool,
}

impl UiApp {
    pub fn new(samples_rx: Consumer<Sample>, info: ScopeInfo) -> Self {
        Self {
            samples_rx,
            info,
            trace: Vec::with_capacity(TRACE_SIZE),
            last_step: None,
            spectrum: SpectrumAnalyzer::new(TRACE_SIZE),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_samples();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Drain the ring buffer, keeping the last TRACE_SIZE outputs
    fn poll_samples(&mut self) {
        let mut received = false;
        while let Ok(sample) = self.samples_rx.pop() {
            self.trace.push(sample.value);
            self.last_step = Some(sample.step);
            received = true;
        }

        if self.trace.len() > TRACE_SIZE {
            let excess = self.trace.len() - TRACE_SIZE;
            self.trace.drain(0..excess);
        }

        if received {
            self.spectrum.update(&self.trace);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.trace.clear();
                self.spectrum.clear();
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Status bar
                Constraint::Min(8),     // Trace
                Constraint::Min(8),     // Spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        render_status(frame, chunks[0], &self.info, self.last_step, self.trace.last().copied(), self.spectrum.slope());
        render_trace(frame, chunks[1], &self.trace);
        render_spectrum(frame, chunks[2], self.spectrum.data());

        let help = Paragraph::new(" [Q] Quit  [R] Clear")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
