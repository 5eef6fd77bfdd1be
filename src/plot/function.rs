/// Selectable curve families for the plotter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Sine,
    Cosine,
    Tangent,
    Exponential,
    Logarithm,
}

pub const FUNCTION_COUNT: usize = 5;

pub const ALL_FUNCTIONS: [FunctionKind; FUNCTION_COUNT] = [
    FunctionKind::Sine,
    FunctionKind::Cosine,
    FunctionKind::Tangent,
    FunctionKind::Exponential,
    FunctionKind::Logarithm,
];

impl FunctionKind {
    pub fn next(self) -> Self {
        match self {
            FunctionKind::Sine => FunctionKind::Cosine,
            FunctionKind::Cosine => FunctionKind::Tangent,
            FunctionKind::Tangent => FunctionKind::Exponential,
            FunctionKind::Exponential => FunctionKind::Logarithm,
            FunctionKind::Logarithm => FunctionKind::Sine,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FunctionKind::Sine => FunctionKind::Logarithm,
            FunctionKind::Cosine => FunctionKind::Sine,
            FunctionKind::Tangent => FunctionKind::Cosine,
            FunctionKind::Exponential => FunctionKind::Tangent,
            FunctionKind::Logarithm => FunctionKind::Exponential,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FunctionKind::Sine => "SIN",
            FunctionKind::Cosine => "COS",
            FunctionKind::Tangent => "TAN",
            FunctionKind::Exponential => "EXP",
            FunctionKind::Logarithm => "LOG",
        }
    }

    /// Evaluate one sample. Tangent and exponential are clamped so a single
    /// steep pole or overflow cannot blow out the chart scale.
    pub fn eval(self, x: f64, freq: f64, amp: f64, phase: f64) -> f64 {
        match self {
            FunctionKind::Sine => amp * (freq * x + phase).sin(),
            FunctionKind::Cosine => amp * (freq * x + phase).cos(),
            FunctionKind::Tangent => (amp * (freq * x + phase).tan()).clamp(-10.0, 10.0),
            FunctionKind::Exponential => {
                (amp * (freq * (x - 5.0) + phase).exp()).clamp(0.0, 100.0)
            }
            FunctionKind::Logarithm => amp * (freq * x + 1.0).ln() + phase,
        }
    }

    /// Chart title showing the active formula with current parameter values
    pub fn title(self, freq: f64, amp: f64, phase: f64) -> String {
        match self {
            FunctionKind::Sine => format!("y = {amp:.1} × sin({freq:.1}x + {phase:.2})"),
            FunctionKind::Cosine => format!("y = {amp:.1} × cos({freq:.1}x + {phase:.2})"),
            FunctionKind::Tangent => format!("y = {amp:.1} × tan({freq:.1}x + {phase:.2})"),
            FunctionKind::Exponential => {
                format!("y = {amp:.1} × exp({freq:.1}(x-5) + {phase:.2})")
            }
            FunctionKind::Logarithm => {
                format!("y = {amp:.1} × log({freq:.1}x + 1) + {phase:.2}")
            }
        }
    }
}
