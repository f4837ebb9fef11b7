const PHASE_STEP: f64 = 0.05;
const BASE_RADIUS: f64 = 15.0;
const RADIUS_SWING: f64 = 8.0;
const BASE_OPACITY: f64 = 0.3;
const OPACITY_SWING: f64 = 0.2;
const MIN_OPACITY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseFrame {
    pub radius: f64,
    pub opacity: f64,
}

/// Sinusoidal breathing of the node glow layer, advanced once per frame.
#[derive(Debug, Clone, Default)]
pub struct Pulse {
    phase: f64,
}

impl Pulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn advance(&mut self) -> PulseFrame {
        self.phase += PHASE_STEP;
        self.frame()
    }

    pub fn frame(&self) -> PulseFrame {
        let wave = self.phase.sin();
        PulseFrame {
            radius: BASE_RADIUS + wave * RADIUS_SWING,
            opacity: (BASE_OPACITY + wave * OPACITY_SWING).max(MIN_OPACITY),
        }
    }
}
