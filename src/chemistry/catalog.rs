//! Read-only catalogs loaded once at startup: per-molecule metadata, the
//! tRNA demand of each gene's translation, and the ordered list of
//! interactions to run each tick (§4.2/§6).

use crate::chemistry::identifier::Identifier;
use crate::chemistry::molecule::Molecule;
use crate::error::{CatalogError, DataError};
use std::collections::HashMap;

/// Per-[`Molecule`] metadata (§3). Rates are non-negative; validated at
/// construction via [`MoleculeCatalog::insert`].
#[derive(Debug, Clone)]
pub struct MoleculeCatalogEntry {
    pub description: String,
    pub chemical_formula: String,
    pub molecular_weight: f64,
    pub classification: String,
    /// mRNA decay half-life in seconds. `0.0` means "does not decay".
    pub half_life_s: f64,
    pub translation_rate_per_s: f64,
    pub charging_rate_per_s: f64,
}

/// Molecule → metadata, built once from external data (§6, Molecule
/// Catalog Loader) and read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct MoleculeCatalog {
    entries: HashMap<Molecule, MoleculeCatalogEntry>,
}

impl MoleculeCatalog {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Validates the entry's rates are non-negative and finite before
    /// accepting it (§7 DataError, raised at load time).
    pub fn insert(
        &mut self,
        molecule: Molecule,
        entry: MoleculeCatalogEntry,
    ) -> Result<(), DataError> {
        for (field, value) in [
            ("half_life_s", entry.half_life_s),
            ("translation_rate_per_s", entry.translation_rate_per_s),
            ("charging_rate_per_s", entry.charging_rate_per_s),
        ] {
            if !value.is_finite() {
                return Err(DataError::NonFiniteParameter { molecule: molecule.identifier, field, value });
            }
            if value < 0.0 {
                return Err(DataError::NegativeRate { molecule: molecule.identifier, field, rate: value });
            }
        }
        self.entries.insert(molecule, entry);
        Ok(())
    }

    /// A missing entry for a molecule in use is a programming/data error
    /// at the lookup site (§3, §7): fatal, but the caller must be able to
    /// observe it rather than have it panic silently.
    pub fn get(&self, molecule: &Molecule) -> Result<&MoleculeCatalogEntry, CatalogError> {
        self.entries.get(molecule).ok_or_else(|| CatalogError::new(molecule.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One tRNA's demand per unit of protein produced (§3, Gene Catalog entry).
#[derive(Debug, Clone, Copy)]
pub struct TrnaDemand {
    pub trna: Identifier,
    pub count_per_protein: u32,
}

/// Gene identifier → ordered tRNA demand list. Absence of an entry means
/// the cognate mRNA cannot be translated.
#[derive(Debug, Clone, Default)]
pub struct GeneCatalog {
    entries: HashMap<Identifier, Vec<TrnaDemand>>,
}

impl GeneCatalog {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn insert(&mut self, gene: Identifier, demand: Vec<TrnaDemand>) {
        self.entries.insert(gene, demand);
    }

    pub fn demand_for(&self, gene: Identifier) -> Option<&[TrnaDemand]> {
        self.entries.get(&gene).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::molecule::ChemicalType;

    fn valid_entry() -> MoleculeCatalogEntry {
        MoleculeCatalogEntry {
            description: "test".into(),
            chemical_formula: "".into(),
            molecular_weight: 1.0,
            classification: "".into(),
            half_life_s: 60.0,
            translation_rate_per_s: 0.1,
            charging_rate_per_s: 0.2,
        }
    }

    #[test]
    fn get_missing_entry_is_catalog_error() {
        let catalog = MoleculeCatalog::new();
        let m = Molecule::new(Identifier::Par1, ChemicalType::Protein);
        let err = catalog.get(&m).unwrap_err();
        assert_eq!(err.molecule, m);
    }

    #[test]
    fn insert_rejects_negative_rate() {
        let mut catalog = MoleculeCatalog::new();
        let m = Molecule::new(Identifier::Par1, ChemicalType::Mrna);
        let mut entry = valid_entry();
        entry.translation_rate_per_s = -1.0;
        let err = catalog.insert(m, entry).unwrap_err();
        assert!(matches!(err, DataError::NegativeRate { field: "translation_rate_per_s", .. }));
    }

    #[test]
    fn insert_rejects_non_finite_rate() {
        let mut catalog = MoleculeCatalog::new();
        let m = Molecule::new(Identifier::Par1, ChemicalType::Mrna);
        let mut entry = valid_entry();
        entry.half_life_s = f64::NAN;
        let err = catalog.insert(m, entry).unwrap_err();
        assert!(matches!(err, DataError::NonFiniteParameter { field: "half_life_s", .. }));
    }

    #[test]
    fn gene_catalog_absence_means_not_translatable() {
        let catalog = GeneCatalog::new();
        assert!(catalog.demand_for(Identifier::Par1).is_none());
    }
}
