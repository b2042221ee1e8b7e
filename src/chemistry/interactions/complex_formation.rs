use super::{Interaction, Mechanism};
use crate::chemistry::compartment::Compartment;
use crate::chemistry::distributor::ResourceDistributor;
use crate::chemistry::identifier::Identifier;
use crate::chemistry::molecule::{atp, ChemicalType, Molecule};

/// Reversible binding of two free proteins into a complex, with
/// independent first-order dissociation of the existing complex pool
/// (§4.4.3).
#[derive(Debug, Clone)]
pub struct ComplexFormation {
    pub first: Identifier,
    pub second: Identifier,
    pub complex: Identifier,
    pub binding_rate: f64,
    pub dissociation_rate: f64,
    pub saturation_constant: f64,
}

impl ComplexFormation {
    pub fn new(
        first: Identifier,
        second: Identifier,
        complex: Identifier,
        binding_rate: f64,
        dissociation_rate: f64,
        saturation_constant: f64,
    ) -> Self {
        Self { first, second, complex, binding_rate, dissociation_rate, saturation_constant }
    }
}

impl Interaction for ComplexFormation {
    fn mechanism(&self) -> Mechanism {
        Mechanism::ComplexFormation
    }

    fn atp_cost(&self) -> f64 {
        0.2
    }

    fn apply(
        &self,
        compartment: &mut Compartment,
        dt: f64,
        distributor: &mut ResourceDistributor,
    ) -> bool {
        let first = Molecule::new(self.first, ChemicalType::Protein);
        let second = Molecule::new(self.second, ChemicalType::Protein);
        let complex = Molecule::new(self.complex, ChemicalType::Protein);

        let a = distributor.available_of(&first);
        let b = distributor.available_of(&second);

        let potential = self.binding_rate * a * b / (self.saturation_constant + a + b);
        let delta_bind = (potential * dt).min(a).min(b);

        // Queried directly: dissociation does not compete for inputs, so it
        // does not go through the distributor at all.
        let c = compartment.count_of(&complex);
        let delta_diss = c * self.dissociation_rate * dt;

        if distributor.is_dry_run() {
            if delta_bind > 0.0 {
                distributor.request(&atp(), delta_bind * self.atp_cost());
                distributor.request(&first, delta_bind);
                distributor.request(&second, delta_bind);
            }
            return delta_bind > 0.0 || delta_diss > 0.0;
        }

        if delta_bind > 0.0 {
            compartment.get_or_create(atp()).count -= delta_bind * self.atp_cost();

            let first_pop = compartment.get_or_create(first);
            debug_assert!(!first_pop.is_bound(), "complex formation's first participant must be free");
            first_pop.count -= delta_bind;

            let second_surface = {
                let second_pop = compartment.get_or_create(second);
                second_pop.count -= delta_bind;
                second_pop.binding_surface()
            };

            let complex_pop = compartment.get_or_create(complex.clone());
            complex_pop.count += delta_bind;
            if let Some(surface) = second_surface {
                complex_pop.bind_to(surface);
            }
        }

        if delta_diss > 0.0 {
            compartment.get_or_create(complex).count -= delta_diss;
            compartment.get_or_create(first).count += delta_diss;
            compartment.get_or_create(second).count += delta_diss;
        }

        delta_bind > 0.0 || delta_diss > 0.0
    }
}
