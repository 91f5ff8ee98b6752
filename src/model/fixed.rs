use super::CarFollowingModel;

/// The deceleration reported as maximum safe for scripted vehicles, in m/s^2.
const MAX_SAFE_DEC: f64 = 6.0;

/// A control law that ignores its inputs and commands a constant
/// acceleration for a fixed period. Used to script the motion of
/// vehicles in tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedAccelerationModel {
    /// The acceleration in m/s^2.
    acc: f64,
    /// The step duration in s.
    duration: f64,
}

impl FixedAccelerationModel {
    /// Creates a new fixed acceleration model.
    ///
    /// # Panics
    /// Panics if `duration` is not strictly positive.
    pub fn new(acc: f64, duration: f64) -> Self {
        assert!(
            duration > 0.0,
            "Step duration must be positive; got {}",
            duration
        );
        Self { acc, duration }
    }
}

impl CarFollowingModel for FixedAccelerationModel {
    fn max_safe_deceleration(&self) -> f64 {
        MAX_SAFE_DEC
    }

    fn step_size(&self) -> f64 {
        self.duration
    }

    fn name(&self) -> &str {
        "FIXED"
    }

    fn long_name(&self) -> &str {
        "Fixed acceleration model"
    }

    fn acceleration(
        &self,
        _vel: f64,
        _max_vel: f64,
        _leader_vel: f64,
        _net_dist: f64,
        _speed_limit: f64,
    ) -> f64 {
        self.acc
    }
}
