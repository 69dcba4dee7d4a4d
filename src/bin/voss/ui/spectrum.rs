//! Spectrum analyzer widget
//!
//! FFT power spectrum of the output trace, averaged into log-spaced bands,
//! with a least-squares fit of the log-log slope. White noise fits near 0,
//! Voss noise near -1.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Number of log-spaced bands to display
const SPECTRUM_BANDS: usize = 32;

/// Floor for power before taking logs
const MIN_POWER: f64 = 1e-12;

/// Spectrum analyzer with FFT processing
pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f64>,
    /// FFT bin ranges `[lo, hi)` for each band
    bands: Vec<(usize, usize)>,
    /// FFT processor
    fft: Arc<dyn Fft<f64>>,
    /// Scratch buffer for FFT computation
    scratch: Vec<Complex<f64>>,
    /// Current spectrum: (log10 cycles per step, power dB)
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    /// Create an analyzer for traces of exactly `len` values
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(len);

        // Hann window - reduces spectral leakage
        let window: Vec<f64> = (0..len)
            .map(|i| {
                if len > 1 {
                    let denom = (len - 1) as f64;
                    0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / denom).cos())
                } else {
                    1.0
                }
            })
            .collect();

        Self {
            window,
            bands: log_bands(len / 2, SPECTRUM_BANDS),
            fft,
            scratch: vec![Complex::new(0.0, 0.0); len],
            spectrum: Vec::new(),
        }
    }

    /// Recompute the spectrum. Ignored until the trace is full length.
    pub fn update(&mut self, trace: &[f64]) {
        if trace.len() != self.window.len() || self.bands.is_empty() {
            return;
        }

        // Remove DC, then window
        let mean = trace.iter().sum::<f64>() / trace.len() as f64;
        for ((bin, &value), &w) in self.scratch.iter_mut().zip(trace).zip(&self.window) {
            *bin = Complex::new((value - mean) * w, 0.0);
        }

        self.fft.process(&mut self.scratch);

        let len = self.scratch.len() as f64;
        self.spectrum.clear();
        for &(lo, hi) in &self.bands {
            let power = self.scratch[lo..hi].iter().map(|c| c.norm_sqr()).sum::<f64>() / (hi - lo) as f64;
            let centre = (lo + hi - 1) as f64 / 2.0;
            let freq = centre.max(1.0) / len;
            self.spectrum.push((freq.log10(), 10.0 * power.max(MIN_POWER).log10()));
        }
    }

    /// Drop the current spectrum
    pub fn clear(&mut self) {
        self.spectrum.clear();
    }

    /// Current spectrum data: (log10 frequency, power dB)
    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }

    /// Exponent `a` in `power ~ f^a` fitted to the current spectrum
    pub fn slope(&self) -> Option<f64> {
        fit_slope(&self.spectrum).map(|db_per_decade| db_per_decade / 10.0)
    }
}

/// Split FFT bins `1..half` into up to `count` log-spaced `[lo, hi)` ranges
fn log_bands(half: usize, count: usize) -> Vec<(usize, usize)> {
    if half < 2 || count == 0 {
        return Vec::new();
    }

    let ratio = half as f64;
    let mut bands = Vec::with_capacity(count);
    let mut lo = 1;
    for i in 1..=count {
        let edge = ratio.powf(i as f64 / count as f64).round() as usize;
        let hi = edge.clamp(lo + 1, half);
        if hi > lo {
            bands.push((lo, hi));
            lo = hi;
        }
        if lo >= half {
            break;
        }
    }
    bands
}

/// Least-squares slope of `y` against `x`
pub fn fit_slope(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;
    let (cov, var) = points.iter().fold((0.0, 0.0), |(cov, var), &(x, y)| {
        let dx = x - mean_x;
        (cov + dx * (y - mean_y), var + dx * dx)
    });
    if var == 0.0 {
        return None;
    }
    Some(cov / var)
}

/// Render the spectrum analyzer widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default()
        .title(" Spectrum (log f, dB) ")
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let (min_x, max_x) = spectrum
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| (lo.min(x), hi.max(x)));
    let (min_db, max_db) = spectrum
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let x_bounds = if min_x < max_x { [min_x, max_x] } else { [-3.0, 0.0] };
    let y_bounds = if min_db < max_db {
        [min_db - 5.0, max_db + 5.0]
    } else {
        [-60.0, 60.0]
    };

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds(x_bounds)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds(y_bounds)
                .labels(vec![format!("{:.0}", y_bounds[0]), format!("{:.0}", y_bounds[1])])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
