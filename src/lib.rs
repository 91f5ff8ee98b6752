pub use headway::{Headway, HeadwayVehicle};
pub use model::{
    CarFollowingModel, FixedAccelerationModel, Idm, IdmPlus, DEFAULT_IDM, DEFAULT_IDM_PLUS,
};
pub use params::ModelParams;
use slotmap::new_key_type;
pub use slotmap::{Key, KeyData};
pub use step::{AccelerationStep, DualAccelerationStep};
pub use vehicle::{VehicleKind, VehicleState};

pub mod debug;
mod headway;
mod model;
mod params;
mod step;
mod vehicle;

new_key_type! {
    /// Unique ID of a simulated vehicle.
    pub struct VehicleId;
}
