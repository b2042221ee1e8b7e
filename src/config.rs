//! Tunable thresholds for the chemistry sweeps.
//!
//! Mirrors the teacher's `PhysicsConfig` pattern (`simulation/physics_config.rs`
//! in the teacher repo): a plain, `Default`-implementing struct of knobs
//! threaded explicitly into the functions that need them, rather than a
//! re-initializable global.

/// Thresholds the mRNA degradation sweep, the tRNA charging sweep, and
/// population garbage collection use. §4.2/§9 fix these at `1e-2` for
/// reproducibility but call them out as parameters an implementer may
/// expose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationThresholds {
    /// mRNA population at or below this, after exponential decay, is
    /// removed from its compartment.
    pub mrna_removal_epsilon: f64,

    /// Transferred (charged) tRNA amount below this in one tick is not
    /// worth committing; above it, the uncharged entry is removed once
    /// its remaining count falls at or below this same threshold.
    pub trna_removal_epsilon: f64,

    /// General population floor used when a molecule of type mRNA or
    /// tRNA is eligible for removal from a compartment.
    pub population_epsilon: f64,
}

impl Default for SimulationThresholds {
    fn default() -> Self {
        Self {
            mrna_removal_epsilon: 1e-2,
            trna_removal_epsilon: 1e-2,
            population_epsilon: 1e-2,
        }
    }
}
