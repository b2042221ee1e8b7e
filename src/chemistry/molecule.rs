//! Molecule identity: an [`Identifier`] paired with a [`ChemicalType`] tag.

use crate::chemistry::identifier::{Identifier, IdentifierRegistry};
use std::hash::{Hash, Hasher};

/// Chemical classification of a molecule (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum ChemicalType {
    Protein,
    AminoAcid,
    Dna,
    Mrna,
    Trna,
    Nucleotide,
    Lipid,
    Ion,
    Other,
}

/// A molecule identity: `(Identifier, ChemicalType)`. This is the hash key
/// for all populations (§3).
///
/// A molecule with a known identifier takes its name from the identifier;
/// the rare free-form name (used only for molecules the registry has never
/// seen) does not participate in equality or hashing — two `Molecule`s with
/// the same `(identifier, chemical_type)` are the same key regardless of
/// what free-form name either was constructed with.
#[derive(Debug, Clone)]
pub struct Molecule {
    pub identifier: Identifier,
    pub chemical_type: ChemicalType,
    free_form_name: Option<Box<str>>,
}

/// The single shared ATP pool every interaction draws on (§4.4).
pub fn atp() -> Molecule {
    Molecule::new(Identifier::Atp, ChemicalType::Nucleotide)
}

impl Molecule {
    pub fn new(identifier: Identifier, chemical_type: ChemicalType) -> Self {
        Self { identifier, chemical_type, free_form_name: None }
    }

    /// Construct a molecule with an identifier unknown to the registry,
    /// carrying its own display name. Rare: used only when a collaborator
    /// hands the core a name it has never registered.
    pub fn with_free_form_name(chemical_type: ChemicalType, name: impl Into<String>) -> Self {
        Self {
            identifier: Identifier::Unknown,
            chemical_type,
            free_form_name: Some(name.into().into_boxed_str()),
        }
    }

    pub fn name<'a>(&'a self, registry: &'a IdentifierRegistry) -> &'a str {
        if self.identifier != Identifier::Unknown {
            registry.id_to_string(self.identifier)
        } else {
            self.free_form_name.as_deref().unwrap_or("UNKNOWN")
        }
    }
}

impl PartialEq for Molecule {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier && self.chemical_type == other.chemical_type
    }
}

impl Eq for Molecule {}

impl Hash for Molecule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.chemical_type.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_and_hash_ignore_free_form_name() {
        use std::collections::HashSet;
        let a = Molecule::new(Identifier::Atp, ChemicalType::Nucleotide);
        let mut b = Molecule::new(Identifier::Atp, ChemicalType::Nucleotide);
        // Smuggle a name onto b that differs from a's (both still Unknown-less here,
        // so this only matters once either carries a free-form name).
        b = Molecule { free_form_name: Some("something-else".into()), ..b };
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a.clone());
        assert!(set.contains(&b));
    }

    #[test]
    fn different_chemical_type_is_a_different_key() {
        let protein = Molecule::new(Identifier::Par1, ChemicalType::Protein);
        let mrna = Molecule::new(Identifier::Par1, ChemicalType::Mrna);
        assert_ne!(protein, mrna);
    }

    #[test]
    fn name_falls_back_to_free_form_for_unknown_identifier() {
        let registry = IdentifierRegistry::new();
        let m = Molecule::with_free_form_name(ChemicalType::Other, "Weird-Factor-X");
        assert_eq!(m.name(&registry), "Weird-Factor-X");
    }
}
