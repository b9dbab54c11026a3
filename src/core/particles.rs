use super::constants::{PARTICLE_RADIUS_MIN_FACTOR, PARTICLE_RADIUS_SPAN_FACTOR};
use glam::Vec3;
use rand::Rng;

/// Decorative point cloud surrounding the heart. Immutable once sampled.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub points: Vec<Vec3>,
}

impl ParticleField {
    /// Sample `count` points on a jittered spherical shell around the origin.
    ///
    /// Inclination is drawn as `acos(2u - 1)` so points cover the sphere
    /// uniformly instead of clustering at the poles; the radius is
    /// `base_radius * (0.8 + 0.4u)`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, base_radius: f32) -> Self {
        let points = (0..count)
            .map(|_| {
                let theta = rng.gen::<f32>() * std::f32::consts::TAU;
                let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
                let radius = base_radius
                    * (PARTICLE_RADIUS_MIN_FACTOR + PARTICLE_RADIUS_SPAN_FACTOR * rng.gen::<f32>());
                Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                )
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Flattened xyz triples for upload as instance data.
    pub fn as_floats(&self) -> Vec<[f32; 3]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}
