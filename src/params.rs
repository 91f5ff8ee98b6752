//! Tuning parameters of the car following models.

use rand::Rng;
use rand_distr::Distribution;

/// The parameters of a car following model.
///
/// Each simulated vehicle may carry its own parameters to model a
/// heterogeneous driver population. An instance is read-only during a
/// model evaluation; nothing a model computes is written back into it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelParams {
    /// The maximum acceleration in m/s^2.
    pub max_acc: f64,
    /// The comfortable deceleration, a positive number in m/s^2.
    pub comf_dec: f64,
    /// The gap maintained between stationary vehicles in m.
    pub min_gap: f64,
    /// The desired time gap to the vehicle ahead in s.
    pub time_headway: f64,
    /// The exponent shaping the approach to the desired velocity.
    pub free_acc_exp: f64,
    /// The most severe deceleration a model may command,
    /// a positive number in m/s^2.
    pub max_safe_dec: f64,
    /// The desired velocity adjustment factor, which is multiplied with
    /// the speed limit to obtain the driver's desired velocity.
    pub vel_adj: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            max_acc: 1.56,
            comf_dec: 2.09,
            min_gap: 3.0,
            time_headway: 1.2,
            free_acc_exp: 4.0,
            max_safe_dec: 6.0,
            vel_adj: 1.0,
        }
    }
}

impl ModelParams {
    /// Randomly perturbs the desired velocity adjustment factor, which is
    /// sampled from a normal distribution with a mean of 1 (no adjustment)
    /// and standard deviation of `stddev`.
    pub fn randomise_vel_adj<R: Rng>(&mut self, rng: &mut R, stddev: f64) {
        let distr = rand_distr::Normal::new(1.0, stddev).expect("Invalid standard deviation");
        self.vel_adj = distr.sample(rng).clamp(0.75, 1.25);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn defaults_are_physical() {
        let params = ModelParams::default();
        assert!(params.max_acc > 0.0);
        assert!(params.comf_dec > 0.0);
        assert!(params.min_gap > 0.0);
        assert!(params.time_headway > 0.0);
        assert!(params.max_safe_dec > 0.0 && params.max_safe_dec < 10.0);
    }

    #[test]
    fn randomised_vel_adj_stays_clamped() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let mut params = ModelParams::default();
            params.randomise_vel_adj(&mut rng, 0.5);
            assert!((0.75..=1.25).contains(&params.vel_adj));
        }
    }
}
