//! The closed enumeration of canonical molecule/organelle identifiers and
//! the bidirectional registry over it.
//!
//! The member list and relative ordering follow `StringDict::ID` in
//! `examples/original_source/src/chemistry/StringDict.h`: PAR polarity
//! proteins, cell-cycle kinases, centrosome proteins, a nucleotide, a
//! 25-entry tRNA gene set immediately followed by its 25-entry charged
//! counterpart (so `charged_variant` is just "+25" over that subrange),
//! cell-fate genes, ER molecules, phosphorylated PAR variants, PAR
//! complexes, and a contiguous organelle-kind subrange at the end.

use crate::error::ProgrammingError;
use std::collections::HashMap;

/// A canonical, closed-enumeration identifier. `UNKNOWN` is the
/// designated sentinel (§3) returned by `string_to_id` for unregistered
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum Identifier {
    Unknown = 0,

    // Polarity establishment
    Par1,
    Par2,
    Par3,
    Par6,
    Pkc3,

    // Cell cycle
    Cdk1,
    Cdk2,
    Cyb1,
    Cce1,
    Plk1,
    Plk4,

    // Centrosome
    GammaTubulin,
    Pericentrin,
    Ninein,

    // Nucleotides
    Atp,

    // Uncharged tRNA gene set (25 entries) — TRNA_UNCHARGED_START..=TRNA_UNCHARGED_END
    TrnaMetAtg,
    TrnaGlyGga,
    TrnaGlyGgt,
    TrnaAlaGca,
    TrnaAlaGcc,
    TrnaLeuCtg,
    TrnaLeuCtc,
    TrnaSerTca,
    TrnaSerTcg,
    TrnaValGtg,
    TrnaValGtc,
    TrnaProCca,
    TrnaThrAca,
    TrnaAspGac,
    TrnaGluGag,
    TrnaLysAag,
    TrnaArgCga,
    TrnaHisCac,
    TrnaPheTtc,
    TrnaTyrTac,
    TrnaCysTgc,
    TrnaTrpTgg,
    TrnaAsnAac,
    TrnaGlnCag,
    TrnaIleAtc,

    // Charged tRNA variants (25 entries, same order) — TRNA_CHARGED_START..=TRNA_CHARGED_END
    TrnaMetAtgCharged,
    TrnaGlyGgaCharged,
    TrnaGlyGgtCharged,
    TrnaAlaGcaCharged,
    TrnaAlaGccCharged,
    TrnaLeuCtgCharged,
    TrnaLeuCtcCharged,
    TrnaSerTcaCharged,
    TrnaSerTcgCharged,
    TrnaValGtgCharged,
    TrnaValGtcCharged,
    TrnaProCcaCharged,
    TrnaThrAcaCharged,
    TrnaAspGacCharged,
    TrnaGluGagCharged,
    TrnaLysAagCharged,
    TrnaArgCgaCharged,
    TrnaHisCacCharged,
    TrnaPheTtcCharged,
    TrnaTyrTacCharged,
    TrnaCysTgcCharged,
    TrnaTrpTggCharged,
    TrnaAsnAacCharged,
    TrnaGlnCagCharged,
    TrnaIleAtcCharged,

    // Cell fate specification
    Mex3,
    Skn1,
    Pal1,
    Pie1,

    // Endoplasmic reticulum
    ErProtein,
    ErLipid,

    // Phosphorylated PAR proteins
    Par1P,
    Par2P,
    Par3P,

    // Protein complexes
    Par3Par6,
    Par6Pkc3,
    Par1Cortex,
    Par2Cortex,
    Par3Cortex,

    // Organelle kinds — ORGANELLE_START..=ORGANELLE_END, must stay contiguous
    OrganelleNucleus,
    OrganelleMitochondrion,
    OrganelleEndoplasmicReticulum,
    OrganelleSpindle,
    OrganelleCentrosome,
    OrganelleCortex,
}

/// Number of variants in [`Identifier`]; used to size the `id_to_string`
/// lookup table.
const IDENTIFIER_COUNT: usize = Identifier::OrganelleCortex as usize + 1;

const TRNA_UNCHARGED_START: u16 = Identifier::TrnaMetAtg as u16;
const TRNA_UNCHARGED_END: u16 = Identifier::TrnaIleAtc as u16;
const TRNA_CHARGED_START: u16 = Identifier::TrnaMetAtgCharged as u16;
const TRNA_CHARGED_END: u16 = Identifier::TrnaIleAtcCharged as u16;
const TRNA_CHARGED_OFFSET: u16 = TRNA_CHARGED_START - TRNA_UNCHARGED_START;

const ORGANELLE_START: u16 = Identifier::OrganelleNucleus as u16;
const ORGANELLE_END: u16 = Identifier::OrganelleCortex as u16;

impl Identifier {
    /// Every variant, in declaration order, for building the registry and
    /// for tests that need to iterate the whole enumeration.
    pub const ALL: [Identifier; IDENTIFIER_COUNT] = [
        Identifier::Unknown,
        Identifier::Par1,
        Identifier::Par2,
        Identifier::Par3,
        Identifier::Par6,
        Identifier::Pkc3,
        Identifier::Cdk1,
        Identifier::Cdk2,
        Identifier::Cyb1,
        Identifier::Cce1,
        Identifier::Plk1,
        Identifier::Plk4,
        Identifier::GammaTubulin,
        Identifier::Pericentrin,
        Identifier::Ninein,
        Identifier::Atp,
        Identifier::TrnaMetAtg,
        Identifier::TrnaGlyGga,
        Identifier::TrnaGlyGgt,
        Identifier::TrnaAlaGca,
        Identifier::TrnaAlaGcc,
        Identifier::TrnaLeuCtg,
        Identifier::TrnaLeuCtc,
        Identifier::TrnaSerTca,
        Identifier::TrnaSerTcg,
        Identifier::TrnaValGtg,
        Identifier::TrnaValGtc,
        Identifier::TrnaProCca,
        Identifier::TrnaThrAca,
        Identifier::TrnaAspGac,
        Identifier::TrnaGluGag,
        Identifier::TrnaLysAag,
        Identifier::TrnaArgCga,
        Identifier::TrnaHisCac,
        Identifier::TrnaPheTtc,
        Identifier::TrnaTyrTac,
        Identifier::TrnaCysTgc,
        Identifier::TrnaTrpTgg,
        Identifier::TrnaAsnAac,
        Identifier::TrnaGlnCag,
        Identifier::TrnaIleAtc,
        Identifier::TrnaMetAtgCharged,
        Identifier::TrnaGlyGgaCharged,
        Identifier::TrnaGlyGgtCharged,
        Identifier::TrnaAlaGcaCharged,
        Identifier::TrnaAlaGccCharged,
        Identifier::TrnaLeuCtgCharged,
        Identifier::TrnaLeuCtcCharged,
        Identifier::TrnaSerTcaCharged,
        Identifier::TrnaSerTcgCharged,
        Identifier::TrnaValGtgCharged,
        Identifier::TrnaValGtcCharged,
        Identifier::TrnaProCcaCharged,
        Identifier::TrnaThrAcaCharged,
        Identifier::TrnaAspGacCharged,
        Identifier::TrnaGluGagCharged,
        Identifier::TrnaLysAagCharged,
        Identifier::TrnaArgCgaCharged,
        Identifier::TrnaHisCacCharged,
        Identifier::TrnaPheTtcCharged,
        Identifier::TrnaTyrTacCharged,
        Identifier::TrnaCysTgcCharged,
        Identifier::TrnaTrpTggCharged,
        Identifier::TrnaAsnAacCharged,
        Identifier::TrnaGlnCagCharged,
        Identifier::TrnaIleAtcCharged,
        Identifier::Mex3,
        Identifier::Skn1,
        Identifier::Pal1,
        Identifier::Pie1,
        Identifier::ErProtein,
        Identifier::ErLipid,
        Identifier::Par1P,
        Identifier::Par2P,
        Identifier::Par3P,
        Identifier::Par3Par6,
        Identifier::Par6Pkc3,
        Identifier::Par1Cortex,
        Identifier::Par2Cortex,
        Identifier::Par3Cortex,
        Identifier::OrganelleNucleus,
        Identifier::OrganelleMitochondrion,
        Identifier::OrganelleEndoplasmicReticulum,
        Identifier::OrganelleSpindle,
        Identifier::OrganelleCentrosome,
        Identifier::OrganelleCortex,
    ];

    /// Canonical (snake/screaming-case-free) name for this identifier, as
    /// would be loaded into the registry. Used to build the static table;
    /// not itself part of the public contract (use
    /// [`IdentifierRegistry::id_to_string`] instead).
    fn canonical_name(self) -> &'static str {
        use Identifier::*;
        match self {
            Unknown => "UNKNOWN",
            Par1 => "PAR-1",
            Par2 => "PAR-2",
            Par3 => "PAR-3",
            Par6 => "PAR-6",
            Pkc3 => "PKC-3",
            Cdk1 => "CDK-1",
            Cdk2 => "CDK-2",
            Cyb1 => "CYB-1",
            Cce1 => "CCE-1",
            Plk1 => "PLK-1",
            Plk4 => "PLK-4",
            GammaTubulin => "GAMMA-TUBULIN",
            Pericentrin => "PERICENTRIN",
            Ninein => "NINEIN",
            Atp => "ATP",
            TrnaMetAtg => "TRNA-MET-ATG",
            TrnaGlyGga => "TRNA-GLY-GGA",
            TrnaGlyGgt => "TRNA-GLY-GGT",
            TrnaAlaGca => "TRNA-ALA-GCA",
            TrnaAlaGcc => "TRNA-ALA-GCC",
            TrnaLeuCtg => "TRNA-LEU-CTG",
            TrnaLeuCtc => "TRNA-LEU-CTC",
            TrnaSerTca => "TRNA-SER-TCA",
            TrnaSerTcg => "TRNA-SER-TCG",
            TrnaValGtg => "TRNA-VAL-GTG",
            TrnaValGtc => "TRNA-VAL-GTC",
            TrnaProCca => "TRNA-PRO-CCA",
            TrnaThrAca => "TRNA-THR-ACA",
            TrnaAspGac => "TRNA-ASP-GAC",
            TrnaGluGag => "TRNA-GLU-GAG",
            TrnaLysAag => "TRNA-LYS-AAG",
            TrnaArgCga => "TRNA-ARG-CGA",
            TrnaHisCac => "TRNA-HIS-CAC",
            TrnaPheTtc => "TRNA-PHE-TTC",
            TrnaTyrTac => "TRNA-TYR-TAC",
            TrnaCysTgc => "TRNA-CYS-TGC",
            TrnaTrpTgg => "TRNA-TRP-TGG",
            TrnaAsnAac => "TRNA-ASN-AAC",
            TrnaGlnCag => "TRNA-GLN-CAG",
            TrnaIleAtc => "TRNA-ILE-ATC",
            TrnaMetAtgCharged => "TRNA-MET-ATG-CHARGED",
            TrnaGlyGgaCharged => "TRNA-GLY-GGA-CHARGED",
            TrnaGlyGgtCharged => "TRNA-GLY-GGT-CHARGED",
            TrnaAlaGcaCharged => "TRNA-ALA-GCA-CHARGED",
            TrnaAlaGccCharged => "TRNA-ALA-GCC-CHARGED",
            TrnaLeuCtgCharged => "TRNA-LEU-CTG-CHARGED",
            TrnaLeuCtcCharged => "TRNA-LEU-CTC-CHARGED",
            TrnaSerTcaCharged => "TRNA-SER-TCA-CHARGED",
            TrnaSerTcgCharged => "TRNA-SER-TCG-CHARGED",
            TrnaValGtgCharged => "TRNA-VAL-GTG-CHARGED",
            TrnaValGtcCharged => "TRNA-VAL-GTC-CHARGED",
            TrnaProCcaCharged => "TRNA-PRO-CCA-CHARGED",
            TrnaThrAcaCharged => "TRNA-THR-ACA-CHARGED",
            TrnaAspGacCharged => "TRNA-ASP-GAC-CHARGED",
            TrnaGluGagCharged => "TRNA-GLU-GAG-CHARGED",
            TrnaLysAagCharged => "TRNA-LYS-AAG-CHARGED",
            TrnaArgCgaCharged => "TRNA-ARG-CGA-CHARGED",
            TrnaHisCacCharged => "TRNA-HIS-CAC-CHARGED",
            TrnaPheTtcCharged => "TRNA-PHE-TTC-CHARGED",
            TrnaTyrTacCharged => "TRNA-TYR-TAC-CHARGED",
            TrnaCysTgcCharged => "TRNA-CYS-TGC-CHARGED",
            TrnaTrpTggCharged => "TRNA-TRP-TGG-CHARGED",
            TrnaAsnAacCharged => "TRNA-ASN-AAC-CHARGED",
            TrnaGlnCagCharged => "TRNA-GLN-CAG-CHARGED",
            TrnaIleAtcCharged => "TRNA-ILE-ATC-CHARGED",
            Mex3 => "MEX-3",
            Skn1 => "SKN-1",
            Pal1 => "PAL-1",
            Pie1 => "PIE-1",
            ErProtein => "ER-PROTEIN",
            ErLipid => "ER-LIPID",
            Par1P => "PAR-1~P",
            Par2P => "PAR-2~P",
            Par3P => "PAR-3~P",
            Par3Par6 => "PAR-3:PAR-6",
            Par6Pkc3 => "PAR-6:PKC-3",
            Par1Cortex => "PAR-1:CORTEX",
            Par2Cortex => "PAR-2:CORTEX",
            Par3Cortex => "PAR-3:CORTEX",
            OrganelleNucleus => "ORGANELLE-NUCLEUS",
            OrganelleMitochondrion => "ORGANELLE-MITOCHONDRION",
            OrganelleEndoplasmicReticulum => "ORGANELLE-ENDOPLASMIC-RETICULUM",
            OrganelleSpindle => "ORGANELLE-SPINDLE",
            OrganelleCentrosome => "ORGANELLE-CENTROSOME",
            OrganelleCortex => "ORGANELLE-CORTEX",
        }
    }

    /// True if this identifier falls in the contiguous organelle-kind
    /// subrange, i.e. "is this identifier an organelle kind" reduces to a
    /// bounds check (§4.1).
    pub fn is_organelle(self) -> bool {
        let v = self as u16;
        (ORGANELLE_START..=ORGANELLE_END).contains(&v)
    }

    /// True if this identifier is an uncharged tRNA (has a charged
    /// counterpart via [`Identifier::charged_variant`]).
    pub fn is_uncharged_trna(self) -> bool {
        let v = self as u16;
        (TRNA_UNCHARGED_START..=TRNA_UNCHARGED_END).contains(&v)
    }

    /// True if this identifier is the charged counterpart of some
    /// uncharged tRNA.
    pub fn is_charged_trna(self) -> bool {
        let v = self as u16;
        (TRNA_CHARGED_START..=TRNA_CHARGED_END).contains(&v)
    }

    /// The charged variant of an uncharged tRNA identifier. Total over
    /// the uncharged tRNA subrange; fails with [`ProgrammingError`] on
    /// any other identifier (§4.1).
    pub fn charged_variant(self) -> Result<Identifier, ProgrammingError> {
        if !self.is_uncharged_trna() {
            return Err(ProgrammingError::NotATRna(self));
        }
        let charged = self as u16 + TRNA_CHARGED_OFFSET;
        Ok(from_u16(charged).expect("charged tRNA subrange is contiguous with the uncharged one"))
    }
}

fn from_u16(v: u16) -> Option<Identifier> {
    Identifier::ALL.get(v as usize).copied()
}

/// A process-wide, bidirectional mapping between [`Identifier`] and its
/// human-readable name. Constructed once via [`IdentifierRegistry::new`]
/// (equivalent to the teacher-repo idiom of an explicitly-threaded value
/// rather than a re-initializable singleton, per §9's "Global state"
/// design note); `initialize` is provided as an idempotent convenience
/// for callers that do want process-wide shared state.
pub struct IdentifierRegistry {
    id_to_string: Vec<String>,
    string_to_id: HashMap<String, Identifier>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        let mut id_to_string = vec![String::new(); IDENTIFIER_COUNT];
        let mut string_to_id = HashMap::with_capacity(IDENTIFIER_COUNT);
        for id in Identifier::ALL {
            let name = id.canonical_name().to_string();
            string_to_id.insert(name.clone(), id);
            id_to_string[id as usize] = name;
        }
        Self { id_to_string, string_to_id }
    }

    /// Total over the enum: every [`Identifier`] has a name.
    pub fn id_to_string(&self, id: Identifier) -> &str {
        &self.id_to_string[id as usize]
    }

    /// Returns [`Identifier::Unknown`] for unregistered names (§4.1).
    pub fn string_to_id(&self, name: &str) -> Identifier {
        self.string_to_id.get(name).copied().unwrap_or(Identifier::Unknown)
    }
}

impl Default for IdentifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_to_string_total_over_enum() {
        let reg = IdentifierRegistry::new();
        for id in Identifier::ALL {
            assert!(!reg.id_to_string(id).is_empty());
        }
    }

    #[test]
    fn string_to_id_round_trips() {
        let reg = IdentifierRegistry::new();
        for id in Identifier::ALL {
            let name = reg.id_to_string(id).to_string();
            assert_eq!(reg.string_to_id(&name), id);
        }
    }

    #[test]
    fn string_to_id_returns_unknown_for_garbage() {
        let reg = IdentifierRegistry::new();
        assert_eq!(reg.string_to_id("not-a-real-molecule"), Identifier::Unknown);
    }

    #[test]
    fn organelle_subrange_is_a_bounds_check() {
        assert!(Identifier::OrganelleNucleus.is_organelle());
        assert!(Identifier::OrganelleCortex.is_organelle());
        assert!(!Identifier::Atp.is_organelle());
        assert!(!Identifier::Par1.is_organelle());
    }

    #[test]
    fn charged_variant_is_bijective_over_trna_subrange() {
        assert_eq!(Identifier::TrnaMetAtg.charged_variant().unwrap(), Identifier::TrnaMetAtgCharged);
        assert_eq!(Identifier::TrnaIleAtc.charged_variant().unwrap(), Identifier::TrnaIleAtcCharged);
        assert_eq!(Identifier::TrnaGlyGga.charged_variant().unwrap(), Identifier::TrnaGlyGgaCharged);
    }

    #[test]
    fn charged_variant_fails_on_non_trna() {
        assert!(Identifier::Atp.charged_variant().is_err());
        assert!(Identifier::TrnaMetAtgCharged.charged_variant().is_err());
        assert!(Identifier::OrganelleCortex.charged_variant().is_err());
    }
}
