//! Acceleration results returned by the car following models.

/// An acceleration together with the period over which it may be applied.
///
/// Applying the acceleration past `valid_until` without recomputing it
/// is not permitted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccelerationStep {
    /// The acceleration in m/s^2.
    pub acc: f64,
    /// The simulation time in s at which the acceleration expires.
    pub valid_until: f64,
    /// The length of the step in s.
    pub duration: f64,
}

impl AccelerationStep {
    /// Creates a new acceleration step starting at `now`.
    pub fn new(acc: f64, now: f64, duration: f64) -> Self {
        Self {
            acc,
            valid_until: now + duration,
            duration,
        }
    }
}

/// The paired reactions of a vehicle and of its nearest follower to the
/// same spatial configuration.
///
/// The leader side is the reference vehicle's own acceleration; the
/// follower side is the acceleration of the vehicle behind it, computed
/// with the reference vehicle as its leader. Lane change evaluation
/// uses the pair to judge a move's effect on both parties.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualAccelerationStep {
    /// The reference vehicle's own acceleration step.
    leader: AccelerationStep,
    /// The following vehicle's acceleration step, if there is a follower.
    follower: Option<AccelerationStep>,
}

impl DualAccelerationStep {
    /// Creates a new dual acceleration step.
    pub(crate) fn new(leader: AccelerationStep, follower: Option<AccelerationStep>) -> Self {
        Self { leader, follower }
    }

    /// Creates the reaction to a vehicle overlapping another's body:
    /// both vehicles brake as hard as the model allows, and the result
    /// expires immediately so it is recomputed on the next evaluation.
    pub(crate) fn too_dangerous(max_safe_dec: f64, now: f64) -> Self {
        let step = AccelerationStep::new(-max_safe_dec, now, 0.0);
        Self {
            leader: step,
            follower: Some(step),
        }
    }

    /// The reference vehicle's own acceleration step.
    pub fn leader_step(&self) -> AccelerationStep {
        self.leader
    }

    /// The acceleration step of the vehicle behind the reference vehicle.
    ///
    /// # Panics
    /// Panics if no follower acceleration was computed; callers that are
    /// not certain a follower exists must check
    /// [`has_follower`](Self::has_follower) first.
    pub fn follower_step(&self) -> AccelerationStep {
        self.follower
            .expect("No follower acceleration was computed")
    }

    /// Whether a follower acceleration was computed.
    pub fn has_follower(&self) -> bool {
        self.follower.is_some()
    }

    /// The reference vehicle's own acceleration in m/s^2.
    pub fn leader_acc(&self) -> f64 {
        self.leader.acc
    }

    /// The follower's acceleration in m/s^2.
    /// Panics like [`follower_step`](Self::follower_step).
    pub fn follower_acc(&self) -> f64 {
        self.follower_step().acc
    }
}
