use super::CarFollowingModel;
use crate::params::ModelParams;

/// The IDM+ variant of the Intelligent Driver Model.
///
/// Evaluates the free flow term and the gap interaction term separately
/// and commands the more restrictive of the two, which keeps the
/// braking reaction at small gaps bounded by the interaction term alone
/// rather than letting both terms stack.
#[derive(Clone, Copy, Debug)]
pub struct IdmPlus {
    params: ModelParams,
}

impl IdmPlus {
    /// Creates a new model with the given parameters.
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }

    /// The model's parameters.
    pub fn params(&self) -> &ModelParams {
        &self.params
    }
}

impl CarFollowingModel for IdmPlus {
    fn max_safe_deceleration(&self) -> f64 {
        self.params.max_safe_dec
    }

    fn name(&self) -> &str {
        "IDM+"
    }

    fn long_name(&self) -> &str {
        "Intelligent Driver Model+"
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
        let interaction = 1.0 - (gap / net_dist).powi(2);
        let acc = params.max_acc * f64::min(free, interaction);
        super::clamp_acc(params, acc, vel, self.step_size())
    }
}
