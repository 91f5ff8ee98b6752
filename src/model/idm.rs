use super::CarFollowingModel;
use crate::params::ModelParams;

/// The Intelligent Driver Model.
///
/// Combines an acceleration towards the desired velocity with a
/// quadratic penalty for gaps smaller than the desired gap. The two
/// terms are summed, which lets a large interaction penalty overshoot
/// into braking even when the free flow term is at its maximum.
#[derive(Clone, Copy, Debug)]
pub struct Idm {
    params: ModelParams,
}

impl Idm {
    /// Creates a new model with the given parameters.
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }

    /// The model's parameters.
    pub fn params(&self) -> &ModelParams {
        &self.params
    }
}

impl CarFollowingModel for Idm {
    fn max_safe_deceleration(&self) -> f64 {
        self.params.max_safe_dec
    }

    fn name(&self) -> &str {
        "IDM"
    }

    fn long_name(&self) -> &str {
        "Intelligent Driver Model"
    }

    fn acceleration(
        &self,
        vel: f64,
        max_vel: f64,
        leader_vel: f64,
        net_dist: f64,
        speed_limit: f64,
    ) -> f64 {
        let params = &self.params;
        if net_dist <= 0.0 {
            // The gap has fully closed; brake as hard as allowed.
            return -params.max_safe_dec;
        }
        let free = super::free_term(params, vel, max_vel, speed_limit);
        let gap = super::desired_gap(params, vel, leader_vel);
        let acc = params.max_acc * (free - (gap / net_dist).powi(2));
        super::clamp_acc(params, acc, vel, self.step_size())
    }
}
