/// What a train does once its schedule runs out of entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EndOfLinePolicy {
    /// Park at the terminus for the rest of the session.
    #[default]
    Freeze,
    /// Jump back to the first stop and run the same schedule again.
    Respawn,
    /// Turn around: regenerate the schedule in the opposite direction
    /// starting from the current wall clock, endpoints swapped.
    Reverse,
}

/// Tuning knobs for the movement simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// A train closer than this to its target, in degree units, has
    /// arrived.
    pub arrival_threshold: f64,
    /// Distance covered per tick along the direction vector, degree units.
    pub step_size: f64,
    /// Chance of re-rolling to DELAYED on each station arrival.
    pub arrival_delay_probability: f64,
    pub end_of_line: EndOfLinePolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arrival_threshold: 0.001,
            step_size: 0.0005,
            arrival_delay_probability: 0.1,
            end_of_line: EndOfLinePolicy::Freeze,
        }
    }
}
