use super::{Interaction, Mechanism};
use crate::chemistry::catalog::TrnaDemand;
use crate::chemistry::compartment::Compartment;
use crate::chemistry::distributor::ResourceDistributor;
use crate::chemistry::identifier::Identifier;
use crate::chemistry::molecule::{atp, ChemicalType, Molecule};

/// tRNA-limited translation of a protein from its cognate mRNA (§4.4.4).
///
/// `trna_demand` is the Gene Catalog entry for this mRNA's gene,
/// captured once at construction time (the Gene Catalog, like the
/// Interaction Catalog, is read-only after startup — see §3/§6).
#[derive(Debug, Clone)]
pub struct Translation {
    pub mrna: Identifier,
    pub translation_rate: f64,
    pub trna_demand: Vec<TrnaDemand>,
}

impl Translation {
    pub fn new(mrna: Identifier, translation_rate: f64, trna_demand: Vec<TrnaDemand>) -> Self {
        Self { mrna, translation_rate, trna_demand }
    }

    fn mrna_molecule(&self) -> Molecule {
        Molecule::new(self.mrna, ChemicalType::Mrna)
    }
}

impl Interaction for Translation {
    fn mechanism(&self) -> Mechanism {
        Mechanism::Translation
    }

    fn atp_cost(&self) -> f64 {
        0.3
    }

    fn apply(
        &self,
        compartment: &mut Compartment,
        dt: f64,
        distributor: &mut ResourceDistributor,
    ) -> bool {
        let mrna = self.mrna_molecule();
        let q = distributor.available_of(&mrna);
        if q < 1e-2 {
            return false;
        }

        let mut protein_amount = self.translation_rate * q * dt;

        for demand in &self.trna_demand {
            if demand.count_per_protein == 0 {
                continue;
            }
            let trna = Molecule::new(demand.trna, ChemicalType::Trna);
            let available = distributor.available_of(&trna);
            let required = demand.count_per_protein as f64 * protein_amount;
            if available < required {
                protein_amount = protein_amount.min(available / demand.count_per_protein as f64);
            }
        }

        let atp_needed = protein_amount * self.atp_cost();

        if distributor.is_dry_run() {
            if protein_amount <= 0.0 {
                return false;
            }
            distributor.request(&atp(), atp_needed);
            // The mRNA is catalytic (not consumed at commit time) but still
            // participates in fair-share scaling, so its demand is phrased
            // back in terms of the mRNA amount that would yield this many
            // proteins.
            distributor.request(&mrna, protein_amount / (self.translation_rate * dt));
            for demand in &self.trna_demand {
                if demand.count_per_protein == 0 {
                    continue;
                }
                let trna = Molecule::new(demand.trna, ChemicalType::Trna);
                distributor.request(&trna, demand.count_per_protein as f64 * protein_amount);
            }
            return true;
        }

        let atp_pop = compartment.get_or_create(atp());
        if atp_pop.count < atp_needed {
            return false;
        }
        atp_pop.count -= atp_needed;

        // mRNA is not consumed; it can be translated multiple times.
        for demand in &self.trna_demand {
            if demand.count_per_protein == 0 {
                continue;
            }
            let trna = Molecule::new(demand.trna, ChemicalType::Trna);
            let consumed = demand.count_per_protein as f64 * protein_amount;
            let pop = compartment.get_or_create(trna);
            pop.count = (pop.count - consumed).max(0.0);
        }

        let protein = Molecule::new(self.mrna, ChemicalType::Protein);
        compartment.get_or_create(protein).count += protein_amount;

        protein_amount > 0.0
    }
}
