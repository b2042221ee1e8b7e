//! Barycentric coordinates of a point against a triangle (§4.6).

use glam::Vec3;

/// Weights `(w0, w1, w2)` with `w0 + w1 + w2 = 1`, clamped to `[0, 1]`
/// so the triangle interior is preserved. Degenerate triangles (zero
/// area) return `(1, 0, 0)`.
pub fn compute_barycentric(point: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> (f32, f32, f32) {
    let e0 = v1 - v0;
    let e1 = v2 - v0;
    let e2 = point - v0;

    let d00 = e0.dot(e0);
    let d01 = e0.dot(e1);
    let d11 = e1.dot(e1);
    let d20 = e2.dot(e0);
    let d21 = e2.dot(e1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < 1e-12 {
        return (1.0, 0.0, 0.0);
    }

    let w1 = (d11 * d20 - d01 * d21) / denom;
    let w2 = (d00 * d21 - d01 * d20) / denom;
    let w0 = 1.0 - w1 - w2;

    let clamp = |w: f32| w.clamp(0.0, 1.0);
    let (w0, w1, w2) = (clamp(w0), clamp(w1), clamp(w2));
    let sum = w0 + w1 + w2;
    if sum.abs() < 1e-12 {
        (1.0, 0.0, 0.0)
    } else {
        (w0 / sum, w1 / sum, w2 / sum)
    }
}
