//! Soft-body cortex solver: per-vertex dynamic state, edge-spring and
//! edge-damping force generators, semi-implicit integration, and the
//! XPBD volume constraint that ties the mesh to the cell's target volume
//! (§3/§4.7).

pub mod forces;
pub mod integrator;
pub mod physics_mesh;
pub mod volume_constraint;

pub use forces::{EdgeDampingForce, EdgeSpringForce};
pub use integrator::PhysicsIntegrator;
pub use physics_mesh::{Node, PhysicsMesh};
pub use volume_constraint::{signed_volume, VolumeConstraintXpbd};
