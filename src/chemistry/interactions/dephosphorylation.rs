use super::{Interaction, Mechanism};
use crate::chemistry::compartment::Compartment;
use crate::chemistry::distributor::ResourceDistributor;
use crate::chemistry::identifier::Identifier;
use crate::chemistry::molecule::{atp, ChemicalType, Molecule};

/// First-order recovery of a phosphorylated protein back to its
/// unphosphorylated form (§4.4.2).
#[derive(Debug, Clone)]
pub struct Dephosphorylation {
    pub target: Identifier,
    pub phosphorylated: Identifier,
    pub recovery_rate: f64,
}

impl Dephosphorylation {
    pub fn new(target: Identifier, phosphorylated: Identifier, recovery_rate: f64) -> Self {
        Self { target, phosphorylated, recovery_rate }
    }
}

impl Interaction for Dephosphorylation {
    fn mechanism(&self) -> Mechanism {
        Mechanism::Dephosphorylation
    }

    fn atp_cost(&self) -> f64 {
        0.1
    }

    fn apply(
        &self,
        compartment: &mut Compartment,
        dt: f64,
        distributor: &mut ResourceDistributor,
    ) -> bool {
        let target = Molecule::new(self.target, ChemicalType::Protein);
        let phosphorylated = Molecule::new(self.phosphorylated, ChemicalType::Protein);

        let p = distributor.available_of(&phosphorylated);
        let delta = p * self.recovery_rate * dt;
        if delta <= 0.0 {
            return false;
        }

        let atp_needed = delta * self.atp_cost();

        if distributor.is_dry_run() {
            distributor.request(&atp(), atp_needed);
            distributor.request(&phosphorylated, delta);
            return true;
        }

        compartment.get_or_create(phosphorylated).count -= delta;
        compartment.get_or_create(target).count += delta;
        compartment.get_or_create(atp()).count -= atp_needed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::distributor::InteractionId;

    #[test]
    fn dephosphorylation_returns_target_and_consumes_atp() {
        let mut compartment = Compartment::new();
        compartment.get_or_create(Molecule::new(Identifier::Par1P, ChemicalType::Protein)).count = 4.0;
        compartment.get_or_create(atp()).count = 1000.0;

        let interaction = Dephosphorylation::new(Identifier::Par1, Identifier::Par1P, 0.5);
        let mut distributor = ResourceDistributor::new();

        distributor.begin_dry_run(&compartment);
        distributor.begin_interaction(InteractionId(0));
        assert!(interaction.apply(&mut compartment, 1.0, &mut distributor));

        distributor.begin_real_run();
        distributor.begin_interaction(InteractionId(0));
        assert!(interaction.apply(&mut compartment, 1.0, &mut distributor));

        let expected_delta = 4.0 * 0.5 * 1.0;
        let target = Molecule::new(Identifier::Par1, ChemicalType::Protein);
        let phospho = Molecule::new(Identifier::Par1P, ChemicalType::Protein);
        assert!((compartment.count_of(&target) - expected_delta).abs() < 1e-9);
        assert!((compartment.count_of(&phospho) - (4.0 - expected_delta)).abs() < 1e-9);
        assert!((compartment.count_of(&atp()) - (1000.0 - expected_delta * 0.1)).abs() < 1e-9);
    }

    #[test]
    fn zero_phosphorylated_pool_means_no_recovery() {
        let mut compartment = Compartment::new();
        let interaction = Dephosphorylation::new(Identifier::Par1, Identifier::Par1P, 0.5);
        let mut distributor = ResourceDistributor::new();
        distributor.begin_dry_run(&compartment);
        distributor.begin_interaction(InteractionId(0));
        assert!(!interaction.apply(&mut compartment, 1.0, &mut distributor));
    }
}
