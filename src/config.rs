/// Runtime configuration for a simulation run
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// World width in cells
    pub width: usize,
    /// World height in cells
    pub height: usize,
    /// Probability that a cell starts alive, within [0.0, 1.0]
    pub prob: f64,
    /// Initial speed factor (generations per second)
    pub speed: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Use the fast engine (no fate/age tracking)
    pub fast: bool,
    /// Color cells by age
    pub color: bool,
}
