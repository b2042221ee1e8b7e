//! XPBD volume constraint: a single global scalar `C(x) = V(x) - V_target`
//! projected with a persistent Lagrange multiplier (§4.7 step 4).

use crate::physics::physics_mesh::PhysicsMesh;
use glam::DVec3;

/// Minimum denominator below which volume projection is skipped this
/// tick rather than dividing by a near-zero gradient norm (§4.7).
const MIN_DENOM: f64 = 1e-20;

/// Signed volume `V(x) = (1/6) * Σ_faces x_a . (x_b × x_c)`.
pub fn signed_volume(mesh: &PhysicsMesh) -> f64 {
    mesh.mesh()
        .triangles()
        .iter()
        .map(|&[a, b, c]| {
            let xa = mesh.position(a as usize);
            let xb = mesh.position(b as usize);
            let xc = mesh.position(c as usize);
            xa.dot(xb.cross(xc))
        })
        .sum::<f64>()
        / 6.0
}

/// The global signed-volume constraint, with a compliance parameter
/// (`0.0` for a hard constraint) and a Lagrange multiplier that persists
/// across ticks rather than resetting every tick (§4.7).
#[derive(Debug, Clone)]
pub struct VolumeConstraintXpbd {
    target_volume: f64,
    compliance: f64,
    lambda: f64,
}

impl VolumeConstraintXpbd {
    pub fn new(target_volume: f64, compliance: f64) -> Self {
        Self { target_volume, compliance, lambda: 0.0 }
    }

    pub fn set_target_volume(&mut self, target_volume: f64) {
        self.target_volume = target_volume;
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Projects the constraint once against `mesh`, mutating vertex
    /// positions and the persistent multiplier `lambda`.
    pub fn project(&mut self, mesh: &mut PhysicsMesh, dt: f64) {
        let volume = signed_volume(mesh);
        let constraint = volume - self.target_volume;

        let vertex_count = mesh.vertex_count();
        let mut gradients = vec![DVec3::ZERO; vertex_count];
        for &[a, b, c] in mesh.mesh().triangles() {
            let xa = mesh.position(a as usize);
            let xb = mesh.position(b as usize);
            let xc = mesh.position(c as usize);
            gradients[a as usize] += xb.cross(xc) / 6.0;
            gradients[b as usize] += xc.cross(xa) / 6.0;
            gradients[c as usize] += xa.cross(xb) / 6.0;
        }

        let denom: f64 = (0..vertex_count)
            .map(|i| mesh.node(i).inverse_mass() * gradients[i].length_squared())
            .sum();
        if denom <= MIN_DENOM {
            return;
        }

        let alpha_tilde = self.compliance / (dt * dt);
        let delta_lambda = (constraint - alpha_tilde * self.lambda) / (denom + alpha_tilde);
        self.lambda += delta_lambda;

        for i in 0..vertex_count {
            let w_i = mesh.node(i).inverse_mass();
            let correction = w_i * delta_lambda * gradients[i];
            let new_position = mesh.position(i) - correction;
            mesh.set_position(i, new_position);
        }
    }
}
