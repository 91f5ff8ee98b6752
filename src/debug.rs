use crate::step::AccelerationStep;
use crate::vehicle::VehicleState;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

/// Records the outcome of a dual acceleration step evaluation.
#[allow(unused)]
pub fn debug_dual_step(
    vehicle: &VehicleState,
    leader: &AccelerationStep,
    follower: Option<&AccelerationStep>,
) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "dual_step",
            "vehicle": format!("{:?}", vehicle.id),
            "vel": vehicle.vel,
            "leader_acc": leader.acc,
            "follower_acc": follower.map(|step| step.acc),
            "valid_until": leader.valid_until,
        }))
    })
}

#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
