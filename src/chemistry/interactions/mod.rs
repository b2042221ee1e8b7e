//! The four interaction variants (§4.4) and the shared [`Interaction`]
//! trait they implement.

mod complex_formation;
mod dephosphorylation;
mod phosphorylation;
mod translation;

pub use complex_formation::ComplexFormation;
pub use dephosphorylation::Dephosphorylation;
pub use phosphorylation::Phosphorylation;
pub use translation::Translation;

use crate::chemistry::compartment::Compartment;
use crate::chemistry::distributor::ResourceDistributor;

/// Informational mechanism tag (§4.4): carried for diagnostics/logging,
/// never branched on by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    Phosphorylation,
    Dephosphorylation,
    ComplexFormation,
    Translation,
}

/// Common shape of every chemical interaction (§4.4): read available
/// resources from the distributor, compute intended update magnitudes,
/// then either report demand (dry run) or commit mutations (real run).
///
/// The boolean return is advisory — whether any change occurred or any
/// request was made this tick.
pub trait Interaction: std::fmt::Debug {
    fn mechanism(&self) -> Mechanism;
    fn atp_cost(&self) -> f64;
    fn apply(
        &self,
        compartment: &mut Compartment,
        dt: f64,
        distributor: &mut ResourceDistributor,
    ) -> bool;
}
