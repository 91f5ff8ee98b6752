//! The car following model capability and the operations derived from it.

use crate::debug::debug_dual_step;
use crate::headway::{Headway, HeadwayVehicle};
use crate::params::ModelParams;
use crate::step::{AccelerationStep, DualAccelerationStep};
use crate::vehicle::VehicleState;
use once_cell::sync::Lazy;

mod fixed;
mod idm;
mod idm_plus;

pub use fixed::FixedAccelerationModel;
pub use idm::Idm;
pub use idm_plus::IdmPlus;

/// The interval between two evaluations of a model, in s.
const DEFAULT_STEP_SIZE: f64 = 0.5;

/// The maximum number of bisection steps in the minimum headway search.
const MAX_BISECTIONS: usize = 64;

/// A shared IDM instance with default parameters.
pub static DEFAULT_IDM: Lazy<Idm> = Lazy::new(|| Idm::new(ModelParams::default()));

/// A shared IDM+ instance with default parameters.
pub static DEFAULT_IDM_PLUS: Lazy<IdmPlus> = Lazy::new(|| IdmPlus::new(ModelParams::default()));

/// A longitudinal control law.
///
/// Implementations compute the acceleration a vehicle commands from its
/// own kinematics and the state of the vehicle ahead. A model instance
/// is never mutated by an evaluation, so one instance may be shared
/// between any number of vehicles and the same inputs always produce
/// the same result.
pub trait CarFollowingModel {
    /// The most severe deceleration the model may command,
    /// as a positive number in m/s^2.
    fn max_safe_deceleration(&self) -> f64;

    /// The period for which a computed acceleration remains valid, in s.
    fn step_size(&self) -> f64 {
        DEFAULT_STEP_SIZE
    }

    /// The model's short name.
    fn name(&self) -> &str;

    /// The model's full name.
    fn long_name(&self) -> &str;

    /// Computes the acceleration a vehicle commands.
    ///
    /// # Parameters
    /// * `vel` - The vehicle's velocity in m/s.
    /// * `max_vel` - The maximum velocity the driver will not exceed in m/s.
    /// * `leader_vel` - The velocity of the vehicle ahead in m/s.
    /// * `net_dist` - The net gap to the vehicle ahead in m.
    /// * `speed_limit` - The speed limit in m/s.
    ///
    /// The result never decreases when `net_dist` grows, all else equal,
    /// and is finite for every gap; a gap of zero or less commands the
    /// maximum safe deceleration.
    fn acceleration(
        &self,
        vel: f64,
        max_vel: f64,
        leader_vel: f64,
        net_dist: f64,
        speed_limit: f64,
    ) -> f64;

    /// Finds the smallest gap to a leader driving at `leader_vel` at which
    /// the commanded acceleration reaches zero, to within `precision`.
    ///
    /// Returns `max_dist` when no such gap exists within it, which happens
    /// when the vehicle is at or above its desired velocity.
    ///
    /// # Panics
    /// Panics if `precision` is not strictly positive.
    fn minimum_headway(
        &self,
        vel: f64,
        leader_vel: f64,
        precision: f64,
        max_dist: f64,
        speed_limit: f64,
        max_vel: f64,
    ) -> f64 {
        assert!(
            precision > 0.0,
            "Precision must be positive; got {}",
            precision
        );

        // A zero gap always commands the hard brake, so the commanded
        // acceleration changes sign somewhere in [0, max_dist] unless it
        // is negative across the whole range.
        let mut lo = 0.0;
        let mut hi = max_dist;
        if self.acceleration(vel, max_vel, leader_vel, hi, speed_limit) < 0.0 {
            log::warn!(
                "No equilibrium gap within {} m at {} m/s; returning the range",
                max_dist,
                vel
            );
            return max_dist;
        }
        for _ in 0..MAX_BISECTIONS {
            if hi - lo < precision {
                break;
            }
            let mid = 0.5 * (lo + hi);
            if self.acceleration(vel, max_vel, leader_vel, mid, speed_limit) < 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        hi
    }

    /// Computes the acceleration step of a vehicle following a leader.
    ///
    /// # Parameters
    /// * `vehicle` - The vehicle's own state.
    /// * `leader_vel` - The velocity of the vehicle ahead in m/s.
    /// * `net_dist` - The net gap to the vehicle ahead in m.
    /// * `max_dist` - The perception range in m; larger gaps are treated as this.
    /// * `speed_limit` - The speed limit in m/s.
    /// * `now` - The current simulation time in s.
    fn acceleration_step(
        &self,
        vehicle: &VehicleState,
        leader_vel: f64,
        net_dist: f64,
        max_dist: f64,
        speed_limit: f64,
        now: f64,
    ) -> AccelerationStep {
        let net_dist = f64::min(net_dist, max_dist);
        let acc = self.acceleration(vehicle.vel, vehicle.max_vel, leader_vel, net_dist, speed_limit);
        AccelerationStep::new(acc, now, self.step_size())
    }

    /// Computes the acceleration step of a vehicle with no leader in
    /// sight, as if it were following its own shadow at the edge of the
    /// perception range.
    fn free_acceleration_step(
        &self,
        vehicle: &VehicleState,
        max_dist: f64,
        speed_limit: f64,
        now: f64,
    ) -> AccelerationStep {
        self.acceleration_step(vehicle, vehicle.vel, max_dist, max_dist, speed_limit, now)
    }

    /// Computes the accelerations of a vehicle and of its nearest
    /// follower from an unordered collection of perceived neighbors.
    ///
    /// Only the nearest vehicle ahead and the nearest vehicle behind
    /// influence the result, so neither the order of `neighbors` nor any
    /// farther entries matter. Entries describing the vehicle itself and
    /// entries without a meaningful relative position are ignored. Any
    /// neighbor overlapping the vehicle's own body produces maximal
    /// braking on both sides with immediate expiry, regardless of the
    /// remaining entries.
    fn dual_acceleration_step(
        &self,
        vehicle: &VehicleState,
        neighbors: &[HeadwayVehicle],
        max_dist: f64,
        speed_limit: f64,
        now: f64,
    ) -> DualAccelerationStep {
        let mut leader: Option<(f64, &HeadwayVehicle)> = None;
        let mut follower: Option<(f64, &HeadwayVehicle)> = None;

        for neighbor in neighbors {
            if neighbor.id() == vehicle.id {
                continue;
            }
            match neighbor.headway() {
                Headway::NotApplicable => {}
                Headway::Overlapping => {
                    log::trace!(
                        "Vehicle {:?} overlaps vehicle {:?}; braking hard",
                        neighbor.id(),
                        vehicle.id
                    );
                    return DualAccelerationStep::too_dangerous(self.max_safe_deceleration(), now);
                }
                Headway::Ahead(gap) => {
                    if leader.map_or(true, |(nearest, _)| gap < nearest) {
                        leader = Some((gap, neighbor));
                    }
                }
                Headway::Behind(gap) => {
                    if follower.map_or(true, |(nearest, _)| gap < nearest) {
                        follower = Some((gap, neighbor));
                    }
                }
            }
        }

        let leader_step = match leader {
            Some((gap, ahead)) => {
                self.acceleration_step(vehicle, ahead.vel(), gap, max_dist, speed_limit, now)
            }
            None => self.free_acceleration_step(vehicle, max_dist, speed_limit, now),
        };

        // The follower reacts to the reference vehicle as its leader.
        // When its desired velocity cannot be perceived, assume it obeys
        // the speed limit.
        let follower_step = follower.map(|(gap, behind)| {
            let state = VehicleState::new(
                behind.id(),
                behind.vel(),
                behind.max_vel().unwrap_or(speed_limit),
            );
            self.acceleration_step(&state, vehicle.vel, gap, max_dist, speed_limit, now)
        });

        debug_dual_step(vehicle, &leader_step, follower_step.as_ref());
        DualAccelerationStep::new(leader_step, follower_step)
    }
}

/// The free flow term: the fraction of the maximum acceleration that
/// remains available while approaching the desired velocity.
fn free_term(params: &ModelParams, vel: f64, max_vel: f64, speed_limit: f64) -> f64 {
    let des_vel = f64::min(params.vel_adj * speed_limit, max_vel);
    let term = 1.0 - (vel / des_vel).powf(params.free_acc_exp);
    if term.is_finite() {
        term
    } else {
        0.0
    }
}

/// The desired gap to the vehicle ahead in m, grown by the vehicle's own
/// velocity and by the rate at which it approaches its leader.
fn desired_gap(params: &ModelParams, vel: f64, leader_vel: f64) -> f64 {
    let appr = vel - leader_vel;
    let factor = 1.0 / (2.0 * (params.max_acc * params.comf_dec).sqrt());
    let gap = params.min_gap + vel * params.time_headway + vel * appr * factor;
    // The desired gap goes negative when the leader pulls away quickly.
    f64::max(gap, 0.0)
}

/// Bounds a raw commanded acceleration: never brake harder than the
/// maximum safe deceleration, and never brake so hard that the velocity
/// would drop below zero within one step.
fn clamp_acc(params: &ModelParams, acc: f64, vel: f64, step_size: f64) -> f64 {
    let acc = f64::max(acc, -params.max_safe_dec);
    f64::max(acc, -vel / step_size)
}
