use crate::VehicleId;

/// A coarse classification of road users, carried by perception snapshots
/// for consumers that differentiate behaviour by vehicle class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    Car,
    Truck,
    Bus,
    Bicycle,
}

/// The longitudinal state of the vehicle an acceleration is computed for.
#[derive(Clone, Copy, Debug)]
pub struct VehicleState {
    /// The vehicle's ID.
    pub id: VehicleId,
    /// The velocity in m/s.
    pub vel: f64,
    /// The maximum velocity the vehicle's driver will not exceed in m/s.
    pub max_vel: f64,
}

impl VehicleState {
    /// Creates a new vehicle state.
    pub fn new(id: VehicleId, vel: f64, max_vel: f64) -> Self {
        Self { id, vel, max_vel }
    }
}
