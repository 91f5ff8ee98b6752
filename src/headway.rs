//! Perception snapshots of nearby vehicles.

use crate::vehicle::VehicleKind;
use crate::VehicleId;

/// The relative longitudinal position of a perceived vehicle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Headway {
    /// The vehicle is ahead, with the given net gap between the
    /// vehicles' bodies in m.
    Ahead(f64),
    /// The vehicle is behind, with the given net gap between the
    /// vehicles' bodies in m.
    Behind(f64),
    /// The vehicles' bodies occupy common longitudinal space.
    Overlapping,
    /// There is no meaningful longitudinal relation to the vehicle,
    /// e.g. the entry describes the perceiving vehicle itself.
    NotApplicable,
}

impl Headway {
    /// Classifies the signed distance between the centres of two vehicles,
    /// positive if the other vehicle is ahead.
    ///
    /// The net gap is the centre distance less both half lengths;
    /// a negative net gap means the vehicles' bodies overlap.
    pub fn between_centres(distance: f64, own_len: f64, other_len: f64) -> Self {
        let gap = distance.abs() - 0.5 * (own_len + other_len);
        if gap < 0.0 {
            Headway::Overlapping
        } else if distance >= 0.0 {
            Headway::Ahead(gap)
        } else {
            Headway::Behind(gap)
        }
    }
}

/// An immutable snapshot of a nearby vehicle, as perceived by another vehicle.
///
/// A snapshot is a value, not a reference: it cannot observe the live
/// vehicle after construction, and nothing done with it can influence
/// the vehicle it describes.
#[derive(Clone, Copy, Debug)]
pub struct HeadwayVehicle {
    /// The perceived vehicle's ID.
    id: VehicleId,
    /// The kind of vehicle.
    kind: VehicleKind,
    /// The relative longitudinal position of the vehicle.
    headway: Headway,
    /// The vehicle's length in m.
    length: f64,
    /// The vehicle's width in m.
    width: f64,
    /// The vehicle's velocity in m/s.
    vel: f64,
    /// The vehicle's acceleration in m/s^2, if it could be perceived.
    acc: Option<f64>,
    /// The maximum velocity the vehicle's driver will not exceed in m/s, if known.
    max_vel: Option<f64>,
}

impl HeadwayVehicle {
    /// Creates a new snapshot.
    ///
    /// # Panics
    /// Panics if the dimensions are not positive or the velocity is not
    /// finite; perception must not produce a physically impossible vehicle.
    pub fn new(
        id: VehicleId,
        kind: VehicleKind,
        headway: Headway,
        length: f64,
        width: f64,
        vel: f64,
    ) -> Self {
        assert!(
            length > 0.0 && width > 0.0,
            "Vehicle dimensions must be positive; got {}x{}",
            length,
            width
        );
        assert!(vel.is_finite(), "Vehicle velocity must be finite");
        Self {
            id,
            kind,
            headway,
            length,
            width,
            vel,
            acc: None,
            max_vel: None,
        }
    }

    /// Attaches the vehicle's perceived acceleration in m/s^2.
    pub fn with_acc(mut self, acc: f64) -> Self {
        self.acc = Some(acc);
        self
    }

    /// Attaches the vehicle's maximum velocity in m/s.
    pub fn with_max_vel(mut self, max_vel: f64) -> Self {
        self.max_vel = Some(max_vel);
        self
    }

    /// The perceived vehicle's ID.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// The kind of vehicle.
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// The relative longitudinal position of the vehicle.
    pub fn headway(&self) -> Headway {
        self.headway
    }

    /// The vehicle's length in m.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The vehicle's width in m.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The vehicle's velocity in m/s.
    pub fn vel(&self) -> f64 {
        self.vel
    }

    /// The vehicle's acceleration in m/s^2,
    /// or zero if it could not be perceived.
    pub fn acc(&self) -> f64 {
        self.acc.unwrap_or(0.0)
    }

    /// The maximum velocity the vehicle's driver will not exceed in m/s,
    /// if known.
    pub fn max_vel(&self) -> Option<f64> {
        self.max_vel
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use slotmap::SlotMap;

    fn id() -> VehicleId {
        let mut arena: SlotMap<VehicleId, ()> = SlotMap::with_key();
        arena.insert(())
    }

    #[test]
    fn classify_centre_distances() {
        // 4 m long vehicles: bodies span 2 m either side of the centre.
        assert_eq!(
            Headway::between_centres(50.0, 4.0, 4.0),
            Headway::Ahead(46.0)
        );
        assert_eq!(
            Headway::between_centres(-50.0, 4.0, 4.0),
            Headway::Behind(46.0)
        );
        assert_eq!(
            Headway::between_centres(3.0, 4.0, 4.0),
            Headway::Overlapping
        );
        assert_eq!(
            Headway::between_centres(-3.9, 4.0, 4.0),
            Headway::Overlapping
        );
        assert_eq!(
            Headway::between_centres(0.0, 4.0, 4.0),
            Headway::Overlapping
        );
        // Exactly touching bumpers is a zero gap, not an overlap.
        assert_eq!(Headway::between_centres(4.0, 4.0, 4.0), Headway::Ahead(0.0));
    }

    #[test]
    fn unknown_acceleration_reads_as_zero() {
        let veh = HeadwayVehicle::new(id(), VehicleKind::Car, Headway::Ahead(20.0), 4.5, 1.8, 13.9);
        assert_eq!(veh.acc(), 0.0);
        assert_eq!(veh.max_vel(), None);
        let veh = veh.with_acc(-1.5).with_max_vel(33.3);
        assert_eq!(veh.acc(), -1.5);
        assert_eq!(veh.max_vel(), Some(33.3));
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn rejects_non_positive_length() {
        HeadwayVehicle::new(id(), VehicleKind::Car, Headway::Ahead(20.0), 0.0, 1.8, 13.9);
    }

    #[test]
    #[should_panic(expected = "velocity must be finite")]
    fn rejects_non_finite_velocity() {
        HeadwayVehicle::new(
            id(),
            VehicleKind::Car,
            Headway::Ahead(20.0),
            4.5,
            1.8,
            f64::NAN,
        );
    }
}
