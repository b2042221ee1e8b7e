//! Orchestrates one physics tick: force accumulation, semi-implicit
//! integration, then XPBD volume projection (§4.7).

use crate::physics::forces::{EdgeDampingForce, EdgeSpringForce};
use crate::physics::physics_mesh::PhysicsMesh;
use crate::physics::volume_constraint::VolumeConstraintXpbd;

/// Runs the cortex's force generators, the semi-implicit integrator, and
/// the volume constraint, in that order, every tick.
pub struct PhysicsIntegrator {
    spring: EdgeSpringForce,
    damping: EdgeDampingForce,
    volume_constraint: VolumeConstraintXpbd,
}

impl PhysicsIntegrator {
    pub fn new(spring: EdgeSpringForce, damping: EdgeDampingForce, volume_constraint: VolumeConstraintXpbd) -> Self {
        Self { spring, damping, volume_constraint }
    }

    pub fn set_target_volume(&mut self, target_volume: f64) {
        self.volume_constraint.set_target_volume(target_volume);
    }

    pub fn volume_constraint(&self) -> &VolumeConstraintXpbd {
        &self.volume_constraint
    }

    /// One tick with timestep `dt > 0` (§4.7):
    /// 1. the target volume is assumed already refreshed via [`Self::set_target_volume`];
    /// 2. zero every vertex force, then accumulate spring + damping;
    /// 3. semi-implicit integration of velocity and position;
    /// 4. XPBD volume projection.
    pub fn step(&mut self, mesh: &mut PhysicsMesh, dt: f64) {
        debug_assert!(dt > 0.0, "physics integrator requires a strictly positive timestep");

        for i in 0..mesh.vertex_count() {
            mesh.node_mut(i).force = glam::DVec3::ZERO;
        }

        self.spring.apply(mesh);
        self.damping.apply(mesh);

        for i in 0..mesh.vertex_count() {
            let inverse_mass = mesh.node(i).inverse_mass();
            let force = mesh.node(i).force;
            let velocity = mesh.node(i).velocity + force * inverse_mass * dt;
            mesh.node_mut(i).velocity = velocity;

            let new_position = mesh.position(i) + velocity * dt;
            mesh.set_position(i, new_position);
            mesh.node_mut(i).force = glam::DVec3::ZERO;
        }

        self.volume_constraint.project(mesh, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{sphere, EdgeCache};
    use crate::physics::volume_constraint::signed_volume;

    fn build(radius: f64, k: u32) -> (PhysicsMesh, Vec<crate::mesh::Edge>) {
        let mesh = sphere(radius as f32, k);
        let edge_cache = EdgeCache::new();
        let edges = edge_cache.get(&mesh).as_slice().to_vec();
        (PhysicsMesh::new(mesh), edges)
    }

    #[test]
    fn resting_sphere_with_matching_target_volume_stays_still() {
        let (physics_mesh, edges) = build(1.0, 2);
        let mut physics_mesh = physics_mesh;
        let target_volume = signed_volume(&physics_mesh);

        let spring = EdgeSpringForce::new(&physics_mesh, &edges, 1.0);
        let damping = EdgeDampingForce::new(&edges, 1.0);
        let volume_constraint = VolumeConstraintXpbd::new(target_volume, 0.0);
        let mut integrator = PhysicsIntegrator::new(spring, damping, volume_constraint);

        for _ in 0..10 {
            integrator.step(&mut physics_mesh, 1.0 / 60.0);
        }

        let end_volume = signed_volume(&physics_mesh);
        assert!((end_volume - target_volume).abs() / target_volume < 1e-3);
    }

    #[test]
    fn integrator_converges_volume_toward_a_larger_target() {
        let (physics_mesh, edges) = build(1.0, 2);
        let mut physics_mesh = physics_mesh;
        let start_volume = signed_volume(&physics_mesh);

        let spring = EdgeSpringForce::new(&physics_mesh, &edges, 5.0);
        let damping = EdgeDampingForce::new(&edges, 2.0);
        let volume_constraint = VolumeConstraintXpbd::new(start_volume * 1.3, 0.0);
        let mut integrator = PhysicsIntegrator::new(spring, damping, volume_constraint);

        for _ in 0..120 {
            integrator.step(&mut physics_mesh, 1.0 / 60.0);
        }

        let end_volume = signed_volume(&physics_mesh);
        assert!(end_volume > start_volume);
    }
}
