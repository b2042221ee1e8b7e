//! Indexed vertex positions with a version counter and a lazily
//! invalidated bounding-box cache (§3).

use glam::Vec3;
use std::cell::Cell as ReadCell;

/// Indexed array of single-precision positions. Single precision is
/// acceptable for geometry (§3); physics state built on top of this
/// (velocity, force, mass) uses `f64` instead (§3 Physics Mesh).
#[derive(Debug, Clone)]
pub struct Vertices {
    positions: Vec<Vec3>,
    version: u64,
    bbox_cache: ReadCell<Option<(Vec3, Vec3, u64)>>,
}

impl Vertices {
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions, version: 0, bbox_cache: ReadCell::new(None) }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn position(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Bumps the version, invalidating the bounding-box cache.
    pub fn set_position(&mut self, index: usize, position: Vec3) {
        self.positions[index] = position;
        self.version += 1;
    }

    pub fn push(&mut self, position: Vec3) -> usize {
        self.positions.push(position);
        self.version += 1;
        self.positions.len() - 1
    }

    /// Axis-aligned bounding box of all vertices, `(min, max)`. Recomputed
    /// only when the version has advanced since the last call.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        if let Some((min, max, cached_version)) = self.bbox_cache.get() {
            if cached_version == self.version {
                return (min, max);
            }
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for &p in &self.positions {
            min = min.min(p);
            max = max.max(p);
        }
        if self.positions.is_empty() {
            min = Vec3::ZERO;
            max = Vec3::ZERO;
        }

        self.bbox_cache.set(Some((min, max, self.version)));
        (min, max)
    }
}
