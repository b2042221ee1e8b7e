use super::{Interaction, Mechanism};
use crate::chemistry::compartment::Compartment;
use crate::chemistry::distributor::ResourceDistributor;
use crate::chemistry::identifier::Identifier;
use crate::chemistry::molecule::{atp, ChemicalType, Molecule};

/// Hill-like phosphorylation of a target protein by a kinase (§4.4.1).
#[derive(Debug, Clone)]
pub struct Phosphorylation {
    pub kinase: Identifier,
    pub target: Identifier,
    pub phosphorylated: Identifier,
    pub removal_rate: f64,
    pub saturation_constant: f64,
}

impl Phosphorylation {
    pub fn new(
        kinase: Identifier,
        target: Identifier,
        phosphorylated: Identifier,
        removal_rate: f64,
        saturation_constant: f64,
    ) -> Self {
        Self { kinase, target, phosphorylated, removal_rate, saturation_constant }
    }
}

impl Interaction for Phosphorylation {
    fn mechanism(&self) -> Mechanism {
        Mechanism::Phosphorylation
    }

    fn atp_cost(&self) -> f64 {
        0.5
    }

    fn apply(
        &self,
        compartment: &mut Compartment,
        dt: f64,
        distributor: &mut ResourceDistributor,
    ) -> bool {
        let kinase = Molecule::new(self.kinase, ChemicalType::Protein);
        let target = Molecule::new(self.target, ChemicalType::Protein);
        let phosphorylated = Molecule::new(self.phosphorylated, ChemicalType::Protein);

        let k = distributor.available_of(&kinase);
        let t = distributor.available_of(&target);

        let rate = self.removal_rate * k / (self.saturation_constant + k);
        let delta = rate * t * dt;
        if delta <= 0.0 {
            return false;
        }

        let atp_needed = delta * self.atp_cost();

        if distributor.is_dry_run() {
            distributor.request(&atp(), atp_needed);
            distributor.request(&target, delta);
            return true;
        }

        compartment.get_or_create(atp()).count -= atp_needed;
        compartment.get_or_create(target).count -= delta;
        compartment.get_or_create(phosphorylated).count += delta;
        true
    }
}
