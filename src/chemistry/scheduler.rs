//! Drives one simulation tick: a dry pass, a real pass, then the mRNA
//! degradation and tRNA charging sweeps (§4.5).

use crate::chemistry::catalog::MoleculeCatalog;
use crate::chemistry::compartment::Compartment;
use crate::chemistry::distributor::{InteractionId, ResourceDistributor};
use crate::chemistry::interactions::Interaction;
use crate::chemistry::sweeps::{charge_trna, degrade_mrna};
use crate::config::SimulationThresholds;
use crate::error::RuntimeBudgetAbort;

/// An ordered, immutable list of interactions (§3 InteractionCatalog),
/// loaded once at startup. Iteration order is fixed so the simulation is
/// reproducible (§4.5): two interactions competing for the same pool
/// receive shares proportional to their requests, independent of order.
pub type InteractionCatalog = Vec<Box<dyn Interaction>>;

/// Runs the dry/real pass over an [`InteractionCatalog`] and the two
/// compartment-wide sweeps, holding the [`ResourceDistributor`]'s
/// generation state across ticks.
#[derive(Debug, Default)]
pub struct Scheduler {
    distributor: ResourceDistributor,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// One simulation tick over `compartment`, per §4.5:
    /// dry pass → real pass → mRNA degradation sweep → tRNA charging sweep.
    pub fn step(
        &mut self,
        compartment: &mut Compartment,
        dt: f64,
        interactions: &InteractionCatalog,
        molecule_catalog: &MoleculeCatalog,
        thresholds: &SimulationThresholds,
    ) {
        self.distributor.begin_dry_run(compartment);
        for (index, interaction) in interactions.iter().enumerate() {
            if self.distributor.begin_interaction(InteractionId(index)) {
                interaction.apply(compartment, dt, &mut self.distributor);
            }
        }

        self.distributor.begin_real_run();
        for (index, interaction) in interactions.iter().enumerate() {
            if self.distributor.begin_interaction(InteractionId(index)) {
                interaction.apply(compartment, dt, &mut self.distributor);
            } else {
                let abort = RuntimeBudgetAbort::SkippedByDistributor;
                log::trace!("interaction {index} skipped on real pass: {abort:?}");
            }
        }

        degrade_mrna(compartment, molecule_catalog, dt, thresholds);
        charge_trna(compartment, molecule_catalog, dt, thresholds);
    }
}
