//! Chemistry state and interaction model (§3/§4): molecule identity,
//! per-compartment populations, read-only catalogs, the fair-share
//! resource distributor, the four interaction variants, and the
//! scheduler that ties a tick together.

pub mod catalog;
pub mod compartment;
pub mod distributor;
pub mod identifier;
pub mod interactions;
pub mod molecule;
pub mod population;
pub mod scheduler;
pub mod sweeps;

pub use catalog::{GeneCatalog, MoleculeCatalog, MoleculeCatalogEntry, TrnaDemand};
pub use compartment::Compartment;
pub use distributor::{InteractionId, ResourceDistributor};
pub use identifier::{Identifier, IdentifierRegistry};
pub use interactions::{ComplexFormation, Dephosphorylation, Interaction, Mechanism, Phosphorylation, Translation};
pub use molecule::{atp, ChemicalType, Molecule};
pub use population::{BindingSurface, Population};
pub use scheduler::{InteractionCatalog, Scheduler};
