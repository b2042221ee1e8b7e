//! `Compartment` — a well-stirred mapping from [`Molecule`] to
//! [`Population`] (§3, `GridCell` in the original).

use crate::chemistry::molecule::{ChemicalType, Molecule};
use crate::chemistry::population::Population;
use std::collections::HashMap;

/// A single well-stirred volume's molecule populations. Iteration order
/// over molecules is not observable (§3) — callers that need determinism
/// should sort by whatever key they care about.
#[derive(Debug, Clone, Default)]
pub struct Compartment {
    molecules: HashMap<Molecule, Population>,
}

impl Compartment {
    pub fn new() -> Self {
        Self { molecules: HashMap::new() }
    }

    /// Inserts `Population(0.0)` if absent and returns a mutable reference.
    pub fn get_or_create(&mut self, molecule: Molecule) -> &mut Population {
        self.molecules.entry(molecule).or_insert_with(Population::default)
    }

    pub fn find(&self, molecule: &Molecule) -> Option<&Population> {
        self.molecules.get(molecule)
    }

    pub fn find_mut(&mut self, molecule: &Molecule) -> Option<&mut Population> {
        self.molecules.get_mut(molecule)
    }

    /// Count of `molecule`, or `0.0` if the compartment has never seen it.
    pub fn count_of(&self, molecule: &Molecule) -> f64 {
        self.find(molecule).map(|p| p.count).unwrap_or(0.0)
    }

    /// Removal is permitted only when count has fallen to or below a
    /// small epsilon, and only for mRNA/tRNA molecules (the degradation
    /// and charging sweeps, §4.2). This method trusts the caller to have
    /// already checked both conditions; it exists so the sweeps have one
    /// place to call instead of reaching into the map directly.
    pub fn remove_if_depleted(&mut self, molecule: &Molecule, epsilon: f64) {
        debug_assert!(
            matches!(molecule.chemical_type, ChemicalType::Mrna | ChemicalType::Trna),
            "compartment entries are only removed for mRNA/tRNA during degradation/charging sweeps"
        );
        if let Some(pop) = self.molecules.get(molecule) {
            if pop.count <= epsilon {
                self.molecules.remove(molecule);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Molecule, &Population)> {
        self.molecules.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Molecule, &mut Population)> {
        self.molecules.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::identifier::Identifier;

    #[test]
    fn get_or_create_inserts_zero_population() {
        let mut c = Compartment::new();
        let m = Molecule::new(Identifier::Atp, ChemicalType::Nucleotide);
        assert!(c.find(&m).is_none());
        let pop = c.get_or_create(m.clone());
        assert_eq!(pop.count, 0.0);
        assert!(c.find(&m).is_some());
    }

    #[test]
    fn find_is_none_for_absent_molecule() {
        let c = Compartment::new();
        let m = Molecule::new(Identifier::Atp, ChemicalType::Nucleotide);
        assert!(c.find(&m).is_none());
    }

    #[test]
    fn remove_if_depleted_only_removes_below_epsilon() {
        let mut c = Compartment::new();
        let m = Molecule::new(Identifier::Par1, ChemicalType::Mrna);
        c.get_or_create(m.clone()).count = 5.0;
        c.remove_if_depleted(&m, 1e-2);
        assert!(c.find(&m).is_some());

        c.find_mut(&m).unwrap().count = 0.001;
        c.remove_if_depleted(&m, 1e-2);
        assert!(c.find(&m).is_none());
    }
}
