use crate::constants::{PARAM_STEP, PLOT_POINTS, PLOT_X_MAX, PLOT_X_MIN};
use crate::plot::function::FunctionKind;

pub const PARAM_COUNT: usize = 3;
pub const PARAM_NAMES: [&str; PARAM_COUNT] = ["FREQ", "AMP", "PHASE"];
pub const PARAM_RANGES: [(f64, f64); PARAM_COUNT] = [(0.1, 5.0), (0.1, 3.0), (0.0, 6.28)];

/// Slider-controlled curve parameters. Mutation clamps to the UI ranges.
#[derive(Debug, Clone, Copy)]
pub struct PlotParams {
    pub frequency: f64,
    pub amplitude: f64,
    pub phase: f64,
    pub kind: FunctionKind,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 1.0,
            phase: 0.0,
            kind: FunctionKind::Sine,
        }
    }
}

impl PlotParams {
    pub fn value(&self, param: usize) -> f64 {
        match param {
            0 => self.frequency,
            1 => self.amplitude,
            _ => self.phase,
        }
    }

    /// Nudge one parameter by `steps` slider increments. Returns false when
    /// the value was already pinned at the range edge (no recompute needed).
    pub fn nudge(&mut self, param: usize, steps: i32) -> bool {
        if param >= PARAM_COUNT {
            return false;
        }
        let (min, max) = PARAM_RANGES[param];
        let current = self.value(param);
        let next = (current + steps as f64 * PARAM_STEP).clamp(min, max);
        if (next - current).abs() < 1e-9 {
            return false;
        }
        match param {
            0 => self.frequency = next,
            1 => self.amplitude = next,
            _ => self.phase = next,
        }
        true
    }

    pub fn select_function(&mut self, dir: usize) {
        self.kind = if dir == 0 {
            self.kind.prev()
        } else {
            self.kind.next()
        };
    }
}

/// The sampled curve fed to the chart
pub struct Trace {
    pub points: Vec<(f64, f64)>,
    pub title: String,
    /// Incremented once per rebuild; one accepted control change = one rebuild
    pub generation: u64,
}

impl Trace {
    pub fn new(params: &PlotParams) -> Self {
        let mut trace = Self {
            points: Vec::with_capacity(PLOT_POINTS),
            title: String::new(),
            generation: 0,
        };
        trace.rebuild(params);
        trace
    }

    /// Recompute all sample points for the current parameters. A curve that
    /// produces any non-finite sample is replaced by the sine formula, the
    /// safe default.
    pub fn rebuild(&mut self, params: &PlotParams) {
        self.generation += 1;
        self.sample(params.kind, params);
        if self.points.iter().any(|(_, y)| !y.is_finite()) {
            tracing::warn!(kind = params.kind.label(), "non-finite samples, falling back to sine");
            self.sample(FunctionKind::Sine, params);
        }
    }

    fn sample(&mut self, kind: FunctionKind, params: &PlotParams) {
        let step = (PLOT_X_MAX - PLOT_X_MIN) / (PLOT_POINTS - 1) as f64;
        self.points.clear();
        for i in 0..PLOT_POINTS {
            let x = PLOT_X_MIN + i as f64 * step;
            let y = kind.eval(x, params.frequency, params.amplitude, params.phase);
            self.points.push((x, y));
        }
        self.title = kind.title(params.frequency, params.amplitude, params.phase);
    }

    /// Y-axis bounds with a little headroom, for the chart axes
    pub fn y_bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &(_, y) in &self.points {
            lo = lo.min(y);
            hi = hi.max(y);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return (-1.0, 1.0);
        }
        let pad = ((hi - lo) * 0.1).max(0.1);
        (lo - pad, hi + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_holds_exactly_the_configured_point_count() {
        let trace = Trace::new(&PlotParams::default());
        assert_eq!(trace.points.len(), PLOT_POINTS);
        assert_eq!(trace.points[0].0, PLOT_X_MIN);
        let last_x = trace.points[PLOT_POINTS - 1].0;
        assert!((last_x - PLOT_X_MAX).abs() < 1e-9);
    }

    #[test]
    fn nudge_clamps_to_range() {
        let mut params = PlotParams::default();
        // Frequency range is 0.1..=5.0
        assert!(params.nudge(0, 1000));
        assert!((params.frequency - 5.0).abs() < 1e-9);
        // Already pinned at the edge: not a change
        assert!(!params.nudge(0, 1));
        assert!(params.nudge(0, -1000));
        assert!((params.frequency - 0.1).abs() < 1e-9);
    }

    #[test]
    fn each_accepted_change_triggers_exactly_one_recompute() {
        let mut params = PlotParams::default();
        let mut trace = Trace::new(&params);
        let start = trace.generation;

        for _ in 0..3 {
            if params.nudge(2, 1) {
                trace.rebuild(&params);
            }
        }
        assert_eq!(trace.generation, start + 3);

        // Rejected change (amplitude pinned at max) must not rebuild
        assert!(params.nudge(1, 1000));
        trace.rebuild(&params);
        let before = trace.generation;
        if params.nudge(1, 1) {
            trace.rebuild(&params);
        }
        assert_eq!(trace.generation, before);
    }

    #[test]
    fn tangent_trace_stays_inside_clamp() {
        let mut params = PlotParams::default();
        params.kind = FunctionKind::Tangent;
        params.frequency = 3.7;
        let trace = Trace::new(&params);
        assert!(trace.points.iter().all(|&(_, y)| (-10.0..=10.0).contains(&y)));
    }
}
