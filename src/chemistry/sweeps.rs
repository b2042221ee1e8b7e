//! The two cross-cutting sweeps that run directly on a [`Compartment`]
//! after the scheduler's real pass, independent of the interaction
//! catalog (§4.2).

use crate::chemistry::catalog::MoleculeCatalog;
use crate::chemistry::compartment::Compartment;
use crate::chemistry::molecule::ChemicalType;
use crate::config::SimulationThresholds;

/// For each mRNA Molecule with catalog half-life `h > 0`:
/// `count ← count · exp(−dt / h)`. Entries that decay to or below
/// `mrna_removal_epsilon` are removed.
pub fn degrade_mrna(compartment: &mut Compartment, catalog: &MoleculeCatalog, dt: f64, thresholds: &SimulationThresholds) {
    let mrna_molecules: Vec<_> = compartment
        .iter()
        .filter(|(m, _)| m.chemical_type == ChemicalType::Mrna)
        .map(|(m, _)| m.clone())
        .collect();

    for molecule in mrna_molecules {
        let half_life = match catalog.get(&molecule) {
            Ok(entry) => entry.half_life_s,
            Err(err) => err.raise(),
        };
        if half_life <= 0.0 {
            continue;
        }
        if let Some(population) = compartment.find_mut(&molecule) {
            population.count *= (-dt / half_life).exp();
        }
        compartment.remove_if_depleted(&molecule, thresholds.mrna_removal_epsilon);
    }
}

/// For each uncharged tRNA Molecule with catalog charging rate `r > 0`:
/// transfer `count(u) · r · dt` from the uncharged pool into the charged
/// variant, if that transfer exceeds `trna_removal_epsilon`. The
/// uncharged entry is removed once its remaining count falls to or below
/// the same threshold.
pub fn charge_trna(compartment: &mut Compartment, catalog: &MoleculeCatalog, dt: f64, thresholds: &SimulationThresholds) {
    let trna_molecules: Vec<_> = compartment
        .iter()
        .filter(|(m, _)| m.chemical_type == ChemicalType::Trna && m.identifier.is_uncharged_trna())
        .map(|(m, _)| m.clone())
        .collect();

    for uncharged in trna_molecules {
        let charging_rate = match catalog.get(&uncharged) {
            Ok(entry) => entry.charging_rate_per_s,
            Err(err) => err.raise(),
        };
        if charging_rate <= 0.0 {
            continue;
        }

        let count = compartment.count_of(&uncharged);
        let transferred = count * charging_rate * dt;
        if transferred <= thresholds.trna_removal_epsilon {
            continue;
        }

        let charged_id = uncharged.identifier.charged_variant().unwrap_or_else(|e| e.raise());
        let charged = crate::chemistry::molecule::Molecule::new(charged_id, ChemicalType::Trna);

        compartment.find_mut(&uncharged).expect("just queried this molecule's count").count -= transferred;
        compartment.get_or_create(charged).count += transferred;
        compartment.remove_if_depleted(&uncharged, thresholds.trna_removal_epsilon);
    }
}
