//! Error taxonomy for the simulation core.
//!
//! Mirrors the failure semantics of the reaction scheduler and chemistry
//! state: `ProgrammingError` and `CatalogError` are non-recoverable at the
//! core level (the caller is expected to fix the catalog or the call site,
//! not retry), `DataError` is raised once at catalog-load time, and
//! `RuntimeBudgetAbort` is local to a single interaction's tick and never
//! escapes as a `Result` — the scheduler logs one at trace level whenever
//! the distributor rejects an interaction on the real pass.

use crate::chemistry::Molecule;
use thiserror::Error;

/// An invariant of the core's own contract was violated.
///
/// These indicate a bug in the caller (e.g. the scheduler or an
/// `Interaction` impl), not bad input data. The core logs the violation
/// and panics; there is no recovery path.
#[derive(Debug, Error)]
pub enum ProgrammingError {
    #[error("charged_variant called on non-tRNA identifier {0:?}")]
    NotATRna(crate::chemistry::Identifier),

    #[error("begin_real_run called with no pending dry run (real_run_id {real_run_id} >= dry_run_id {dry_run_id})")]
    RealRunWithoutDryRun { real_run_id: u64, dry_run_id: u64 },

    #[error("request() called for molecule {0:?} with non-positive amount {1}")]
    NonPositiveRequest(Molecule, f64),

    #[error("request() called for unregistered non-ATP molecule {0:?}; the compartment has never seen this resource")]
    RequestForUnknownResource(Molecule),
}

impl ProgrammingError {
    /// Log at error level and abort, per §7: ProgrammingError is
    /// non-recoverable at the core level.
    pub fn raise(self) -> ! {
        log::error!("programming error: {self}");
        panic!("programming error: {self}");
    }
}

/// A molecule was used in simulation but has no entry in the Molecule
/// Catalog. Surfaced at the lookup site so the caller can identify which
/// molecule and which identifier triggered it.
#[derive(Debug, Error)]
#[error("no catalog entry for molecule {molecule:?} (identifier {identifier:?})")]
pub struct CatalogError {
    pub molecule: Molecule,
    pub identifier: crate::chemistry::Identifier,
}

impl CatalogError {
    pub fn new(molecule: Molecule) -> Self {
        let identifier = molecule.identifier;
        log::error!("catalog miss: no entry for {molecule:?}");
        Self { molecule, identifier }
    }

    /// Log at error level and abort, per §7: CatalogError is
    /// non-recoverable at the core level.
    pub fn raise(self) -> ! {
        panic!("{self}");
    }
}

/// A loaded catalog entry is malformed. Raised at load time, never at
/// step time, and returned to the loader rather than panicking — the
/// loader is expected to reject or repair the offending entry.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("negative rate {rate} for molecule {molecule:?} field {field}")]
    NegativeRate {
        molecule: crate::chemistry::Identifier,
        field: &'static str,
        rate: f64,
    },

    #[error("non-finite parameter {value} for molecule {molecule:?} field {field}")]
    NonFiniteParameter {
        molecule: crate::chemistry::Identifier,
        field: &'static str,
        value: f64,
    },
}

/// Why an interaction's real-pass commit did not proceed this tick.
///
/// Not an error type returned to the caller — per §7 this is local to one
/// interaction per tick, and the simulation continues. The scheduler logs
/// one of these at trace level whenever `begin_interaction` rejects an
/// interaction on the real pass, so the reason is observable without the
/// interaction itself having to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeBudgetAbort {
    /// The distributor rejected the commit: either the interaction
    /// registered no demand during the paired dry run, the dry run is
    /// stale, or it requested an ATP amount the compartment has never
    /// seen, which the distributor marks with a zero scaling factor
    /// (§4.3). This is the only rejection path the real pass has — ATP
    /// is never allowed to go negative because the distributor scales
    /// every request down to what's available before a commit runs.
    SkippedByDistributor,
}
