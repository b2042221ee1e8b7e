//! `ResourceDistributor` — the fair-share engine that turns a dry run's
//! total demand into per-interaction scaling factors for the paired real
//! run (§4.3).

use crate::chemistry::compartment::Compartment;
use crate::chemistry::identifier::Identifier;
use crate::chemistry::molecule::{ChemicalType, Molecule};
use crate::error::ProgrammingError;
use std::collections::HashMap;

/// Stable identity for an interaction within one catalog, used as the
/// Distributor's bookkeeping key (§3 "Interaction identity"). The catalog
/// is an ordered, immutable `Vec` (§3 InteractionCatalog), so an
/// interaction's index within it is as stable an address as a pointer
/// would be, and outlives the Distributor exactly the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractionId(pub usize);

#[derive(Debug, Clone, Copy, Default)]
struct ResourceData {
    last_update_run: u64,
    requested: f64,
    available: f64,
}

#[derive(Debug, Clone, Default)]
struct InteractionData {
    last_valid_dry_run: u64,
    scaling_factor: f64,
    requested_molecules: Vec<Molecule>,
}

/// The fairness engine. Owns one dry/real-run generation counter pair and
/// per-resource/per-interaction bookkeeping that is reset every dry run.
#[derive(Debug, Default)]
pub struct ResourceDistributor {
    dry_run_id: u64,
    real_run_id: u64,
    resources: HashMap<Molecule, ResourceData>,
    interactions: HashMap<InteractionId, InteractionData>,
    current_interaction: Option<InteractionId>,
}

impl ResourceDistributor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run_id > self.real_run_id
    }

    /// Starts a new dry run: bumps `dry_run_id` and snapshots every
    /// molecule currently in `compartment` as this generation's available
    /// supply, with zero demand so far.
    pub fn begin_dry_run(&mut self, compartment: &Compartment) {
        self.dry_run_id += 1;
        for (molecule, population) in compartment.iter() {
            let resource = self.resources.entry(molecule.clone()).or_default();
            resource.available = population.count;
            resource.requested = 0.0;
            resource.last_update_run = self.dry_run_id;
        }
    }

    /// Asserts `real_run_id < dry_run_id` (a dry run is pending) and
    /// advances `real_run_id` to match it.
    pub fn begin_real_run(&mut self) {
        if self.real_run_id >= self.dry_run_id {
            ProgrammingError::RealRunWithoutDryRun {
                real_run_id: self.real_run_id,
                dry_run_id: self.dry_run_id,
            }
            .raise();
        }
        self.real_run_id = self.dry_run_id;
    }

    /// See §4.3: during a dry run this always resets the interaction's
    /// bookkeeping and returns `true`; during a real run it computes (and
    /// caches) the interaction's scaling factor from what it requested
    /// during the just-finished dry run, or returns `false` to skip it.
    pub fn begin_interaction(&mut self, id: InteractionId) -> bool {
        self.current_interaction = Some(id);

        if self.is_dry_run() {
            let data = self.interactions.entry(id).or_default();
            data.scaling_factor = 1.0;
            data.requested_molecules.clear();
            return true;
        }

        let dry_run_id = self.dry_run_id;
        let data = self.interactions.entry(id).or_default();
        if data.last_valid_dry_run != dry_run_id || data.scaling_factor == 0.0 {
            return false;
        }

        let mut scaling_factor = data.scaling_factor;
        for molecule in &data.requested_molecules {
            let Some(resource) = self.resources.get(molecule) else {
                return false;
            };
            if resource.last_update_run != dry_run_id {
                return false;
            }
            let factor = if resource.requested > resource.available {
                resource.available / resource.requested.max(resource.available)
            } else {
                1.0
            };
            scaling_factor = scaling_factor.min(factor);
        }

        if scaling_factor == 0.0 {
            return false;
        }

        data.scaling_factor = scaling_factor;
        true
    }

    /// Available supply for `molecule`, scaled by the current
    /// interaction's scaling factor (`1.0` during a dry run). Zero if the
    /// resource's bookkeeping is stale or absent.
    pub fn available_of(&self, molecule: &Molecule) -> f64 {
        let Some(resource) = self.resources.get(molecule) else { return 0.0 };
        if resource.last_update_run != self.dry_run_id {
            return 0.0;
        }
        let scaling_factor = self
            .current_interaction
            .and_then(|id| self.interactions.get(&id))
            .map(|data| data.scaling_factor)
            .unwrap_or(1.0);
        resource.available * scaling_factor
    }

    /// Registers demand for `molecule` from the interaction currently
    /// running. `amount` must be strictly positive (§4.3).
    pub fn request(&mut self, molecule: &Molecule, amount: f64) {
        if amount <= 0.0 {
            ProgrammingError::NonPositiveRequest(molecule.clone(), amount).raise();
        }

        let id = self.current_interaction.expect(
            "request() called with no interaction started; call begin_interaction() first",
        );

        let Some(resource) = self.resources.get_mut(molecule) else {
            if molecule.identifier == Identifier::Atp && molecule.chemical_type == ChemicalType::Nucleotide
            {
                if let Some(data) = self.interactions.get_mut(&id) {
                    data.scaling_factor = 0.0;
                }
                return;
            }
            ProgrammingError::RequestForUnknownResource(molecule.clone()).raise();
        };
        resource.requested += amount;

        let data = self.interactions.entry(id).or_default();
        if !data.requested_molecules.contains(molecule) {
            data.requested_molecules.push(molecule.clone());
        }
        data.last_valid_dry_run = self.dry_run_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::molecule::ChemicalType;
    use proptest::prelude::*;

    fn protein(id: Identifier) -> Molecule {
        Molecule::new(id, ChemicalType::Protein)
    }

    #[test]
    fn dry_run_sees_raw_supply_at_scaling_factor_one() {
        let mut compartment = Compartment::new();
        compartment.get_or_create(protein(Identifier::Par1)).count = 10.0;

        let mut distributor = ResourceDistributor::new();
        distributor.begin_dry_run(&compartment);
        let id = InteractionId(0);
        assert!(distributor.begin_interaction(id));
        assert_eq!(distributor.available_of(&protein(Identifier::Par1)), 10.0);
    }

    #[test]
    fn two_interactions_over_subscribing_a_resource_split_proportionally() {
        let mut compartment = Compartment::new();
        compartment.get_or_create(protein(Identifier::Par1)).count = 10.0;

        let mut distributor = ResourceDistributor::new();
        let a = InteractionId(0);
        let b = InteractionId(1);

        distributor.begin_dry_run(&compartment);
        distributor.begin_interaction(a);
        distributor.request(&protein(Identifier::Par1), 8.0);
        distributor.begin_interaction(b);
        distributor.request(&protein(Identifier::Par1), 8.0);

        distributor.begin_real_run();

        assert!(distributor.begin_interaction(a));
        let a_available = distributor.available_of(&protein(Identifier::Par1));
        assert!(distributor.begin_interaction(b));
        let b_available = distributor.available_of(&protein(Identifier::Par1));

        // total demand 16 against supply 10: scaling factor 10/16 = 0.625
        assert!((a_available - 8.0 * 0.625).abs() < 1e-9);
        assert!((b_available - 8.0 * 0.625).abs() < 1e-9);
    }

    #[test]
    fn under_subscribed_resource_keeps_full_availability() {
        let mut compartment = Compartment::new();
        compartment.get_or_create(protein(Identifier::Par1)).count = 10.0;

        let mut distributor = ResourceDistributor::new();
        let a = InteractionId(0);

        distributor.begin_dry_run(&compartment);
        distributor.begin_interaction(a);
        distributor.request(&protein(Identifier::Par1), 2.0);

        distributor.begin_real_run();
        assert!(distributor.begin_interaction(a));
        assert_eq!(distributor.available_of(&protein(Identifier::Par1)), 2.0);
    }

    #[test]
    fn interaction_with_no_dry_run_demand_is_skipped_on_real_run() {
        let compartment = Compartment::new();
        let mut distributor = ResourceDistributor::new();
        let a = InteractionId(0);

        distributor.begin_dry_run(&compartment);
        // a never calls begin_interaction/request during the dry run.

        distributor.begin_real_run();
        assert!(!distributor.begin_interaction(a));
    }

    #[test]
    fn requesting_atp_the_compartment_never_saw_marks_interaction_unrunnable() {
        let compartment = Compartment::new();
        let mut distributor = ResourceDistributor::new();
        let a = InteractionId(0);

        distributor.begin_dry_run(&compartment);
        distributor.begin_interaction(a);
        distributor.request(&Molecule::new(Identifier::Atp, ChemicalType::Nucleotide), 1.0);

        distributor.begin_real_run();
        assert!(!distributor.begin_interaction(a));
    }

    #[test]
    fn requesting_absent_atp_then_a_present_molecule_still_skips_on_real_run() {
        // Regression: a later request() for a present molecule must not
        // overwrite the scaling_factor==0 that an earlier absent-ATP
        // request set, nor let the stale last_valid_dry_run check alone
        // wave the interaction through.
        let mut compartment = Compartment::new();
        compartment.get_or_create(protein(Identifier::Par1)).count = 10.0;

        let mut distributor = ResourceDistributor::new();
        let a = InteractionId(0);

        distributor.begin_dry_run(&compartment);
        distributor.begin_interaction(a);
        distributor.request(&Molecule::new(Identifier::Atp, ChemicalType::Nucleotide), 1.0);
        distributor.request(&protein(Identifier::Par1), 5.0);

        distributor.begin_real_run();
        assert!(!distributor.begin_interaction(a));
        assert_eq!(distributor.available_of(&protein(Identifier::Par1)), 0.0);
    }

    #[test]
    #[should_panic]
    fn requesting_non_positive_amount_is_a_programming_error() {
        let compartment = Compartment::new();
        let mut distributor = ResourceDistributor::new();
        distributor.begin_dry_run(&compartment);
        distributor.begin_interaction(InteractionId(0));
        distributor.request(&protein(Identifier::Par1), 0.0);
    }

    #[test]
    #[should_panic]
    fn begin_real_run_without_pending_dry_run_is_a_programming_error() {
        let mut distributor = ResourceDistributor::new();
        distributor.begin_real_run();
    }

    proptest! {
        // §8 "Fairness": with two interactions competing for a single
        // scarce molecule, committed consumption is r_i * A / (r_1 + r_2)
        // up to floating-point error, for any over-subscribing pair of
        // requests against any positive supply.
        #[test]
        fn fairness_holds_for_any_over_subscribed_pair(
            available in 1.0_f64..1000.0,
            r1 in 1.0_f64..1000.0,
            r2 in 1.0_f64..1000.0,
        ) {
            prop_assume!(r1 + r2 > available);

            let mut compartment = Compartment::new();
            compartment.get_or_create(protein(Identifier::Par1)).count = available;

            let mut distributor = ResourceDistributor::new();
            let a = InteractionId(0);
            let b = InteractionId(1);

            distributor.begin_dry_run(&compartment);
            distributor.begin_interaction(a);
            distributor.request(&protein(Identifier::Par1), r1);
            distributor.begin_interaction(b);
            distributor.request(&protein(Identifier::Par1), r2);

            distributor.begin_real_run();

            distributor.begin_interaction(a);
            let granted_a = distributor.available_of(&protein(Identifier::Par1));
            distributor.begin_interaction(b);
            let granted_b = distributor.available_of(&protein(Identifier::Par1));

            let expected_a = r1 * available / (r1 + r2);
            let expected_b = r2 * available / (r1 + r2);

            prop_assert!((granted_a - expected_a).abs() < 1e-6 * available.max(1.0));
            prop_assert!((granted_b - expected_b).abs() < 1e-6 * available.max(1.0));
        }

        // §8 "Order independence": swapping which interaction registers
        // its request first does not change either one's granted amount,
        // because scaling factors are computed from total demand.
        #[test]
        fn granted_amounts_are_order_independent(
            available in 1.0_f64..1000.0,
            r1 in 1.0_f64..1000.0,
            r2 in 1.0_f64..1000.0,
        ) {
            let run = |first_is_a: bool| {
                let mut compartment = Compartment::new();
                compartment.get_or_create(protein(Identifier::Par1)).count = available;
                let mut distributor = ResourceDistributor::new();
                let a = InteractionId(0);
                let b = InteractionId(1);

                distributor.begin_dry_run(&compartment);
                if first_is_a {
                    distributor.begin_interaction(a);
                    distributor.request(&protein(Identifier::Par1), r1);
                    distributor.begin_interaction(b);
                    distributor.request(&protein(Identifier::Par1), r2);
                } else {
                    distributor.begin_interaction(b);
                    distributor.request(&protein(Identifier::Par1), r2);
                    distributor.begin_interaction(a);
                    distributor.request(&protein(Identifier::Par1), r1);
                }

                distributor.begin_real_run();
                distributor.begin_interaction(a);
                let granted_a = distributor.available_of(&protein(Identifier::Par1));
                distributor.begin_interaction(b);
                let granted_b = distributor.available_of(&protein(Identifier::Par1));
                (granted_a, granted_b)
            };

            let (a1, b1) = run(true);
            let (a2, b2) = run(false);
            prop_assert!((a1 - a2).abs() < 1e-9);
            prop_assert!((b1 - b2).abs() < 1e-9);
        }
    }
}
