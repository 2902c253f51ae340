use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// One floating dot in the hero background.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_percent: f64,
    pub top_percent: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub scale: f64,
    pub duration_ms: u32,
}

impl Particle {
    /// Inline style; the drift is read by the `float` keyframes through
    /// CSS custom properties.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --drift-x: {:.1}px; --drift-y: {:.1}px; --drift-scale: {:.2}; animation: float {}ms ease-in-out infinite alternate;",
            self.left_percent, self.top_percent, self.drift_x, self.drift_y, self.scale, self.duration_ms
        )
    }
}

/// Lay out `count` particles. The same seed always gives the same layout so
/// re-renders do not reshuffle the background.
pub fn scatter(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            left_percent: rng.gen_range(0.0..100.0),
            top_percent: rng.gen_range(0.0..100.0),
            drift_x: rng.gen_range(-50.0..50.0),
            drift_y: rng.gen_range(-50.0..50.0),
            scale: rng.gen_range(0.5..1.5),
            duration_ms: rng.gen_range(2000..5000),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_is_deterministic() {
        assert_eq!(scatter(20, 7), scatter(20, 7));
        assert_ne!(scatter(20, 7), scatter(20, 8));
    }

    #[test]
    fn test_particles_stay_in_range() {
        for p in scatter(200, 42) {
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!((0.0..100.0).contains(&p.top_percent));
            assert!((-50.0..50.0).contains(&p.drift_x));
            assert!((0.5..1.5).contains(&p.scale));
            assert!((2000..5000).contains(&p.duration_ms));
        }
    }
}
