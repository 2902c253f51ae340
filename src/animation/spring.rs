//! Spring easing.
//!
//! CSS transitions cannot run a physical spring, so the spring is simulated
//! once up front and baked into a `linear(...)` easing curve whose duration
//! is the time the spring takes to settle.

const STEP_SECONDS: f64 = 1.0 / 240.0;
const MAX_SETTLE_SECONDS: f64 = 3.0;
const REST_DISTANCE: f64 = 0.001;
const REST_VELOCITY: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: if mass > 0.0 { mass } else { 1.0 },
        }
    }

    /// Damping defaults to 10 and mass to 1 when only stiffness is given.
    pub fn with_stiffness(stiffness: f64) -> Self {
        Self::new(stiffness, 10.0, 1.0)
    }

    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Positions sampled every [`STEP_SECONDS`] moving from 0 to 1 until
    /// the spring comes to rest.
    fn simulate(&self) -> Vec<f64> {
        let mut position = 0.0_f64;
        let mut velocity = 0.0_f64;
        let mut samples = vec![position];
        let max_steps = (MAX_SETTLE_SECONDS / STEP_SECONDS) as usize;

        for _ in 0..max_steps {
            let force = -self.stiffness * (position - 1.0) - self.damping * velocity;
            velocity += force / self.mass * STEP_SECONDS;
            position += velocity * STEP_SECONDS;
            samples.push(position);
            if (position - 1.0).abs() < REST_DISTANCE && velocity.abs() < REST_VELOCITY {
                break;
            }
        }
        samples
    }

    pub fn settle_ms(&self) -> u32 {
        let steps = self.simulate().len().saturating_sub(1);
        (steps as f64 * STEP_SECONDS * 1000.0).round() as u32
    }

    /// `points` evenly spaced progress values, first 0 and last exactly 1.
    pub fn curve(&self, points: usize) -> Vec<f64> {
        let points = points.max(2);
        let samples = self.simulate();
        let last = samples.len() - 1;
        let mut curve: Vec<f64> = (0..points)
            .map(|i| {
                let index = (i * last) / (points - 1);
                samples[index]
            })
            .collect();
        curve[0] = 0.0;
        curve[points - 1] = 1.0;
        curve
    }

    /// CSS `linear()` easing function approximating this spring.
    pub fn css_easing(&self) -> String {
        let stops: Vec<String> = self
            .curve(24)
            .into_iter()
            .map(|v| format!("{:.3}", v))
            .collect();
        format!("linear({})", stops.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints() {
        let curve = SpringConfig::new(50.0, 15.0, 1.0).curve(16);
        assert_eq!(curve.len(), 16);
        assert_eq!(curve[0], 0.0);
        assert_eq!(curve[15], 1.0);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let spring = SpringConfig::with_stiffness(100.0);
        assert!(spring.is_underdamped());
        let peak = spring.curve(64).into_iter().fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_stiffer_springs_settle_faster() {
        let soft = SpringConfig::new(50.0, 15.0, 1.0);
        let stiff = SpringConfig::new(300.0, 20.0, 1.0);
        assert!(stiff.settle_ms() < soft.settle_ms());
        assert!(soft.settle_ms() <= (MAX_SETTLE_SECONDS * 1000.0) as u32);
    }

    #[test]
    fn test_css_easing_format() {
        let easing = SpringConfig::new(300.0, 20.0, 1.0).css_easing();
        assert!(easing.starts_with("linear(0.000, "));
        assert!(easing.ends_with("1.000)"));
    }

    #[test]
    fn test_non_positive_mass_falls_back() {
        assert_eq!(SpringConfig::new(100.0, 10.0, 0.0).mass, 1.0);
    }
}
