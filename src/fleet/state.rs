use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, span, trace, Level};

use crate::config::constant::{
    KM_PER_DEGREE, LANDMARK_LAT, LANDMARK_LON, MAX_SPEED_KMH, MIN_SPEED_KMH, WAYPOINT_RADIUS_KM,
};
use crate::domain::types::{Coordinate, Vehicle, VehicleView};
use crate::error::FleetError;
use crate::fixtures::profile_generator::generate_profile;
use crate::motion::geo::advance;

/// Uniform point in a square of half-width `radius_km / 111` degrees around `center`.
///
/// This is a box, not a disk; the corners sit about 7 km from the center.
pub fn random_nearby_location<R: Rng + ?Sized>(
    rng: &mut R,
    center: Coordinate,
    radius_km: f64,
) -> Coordinate {
    let radius_deg = radius_km / KM_PER_DEGREE;
    Coordinate {
        lat: center.lat + rng.gen_range(-radius_deg..radius_deg),
        lon: center.lon + rng.gen_range(-radius_deg..radius_deg),
    }
}

/// Ids for a fleet of `count` vehicles, 1-based. Ids are `u32`, so a fleet never exceeds `u32::MAX`.
fn fleet_ids(count: usize) -> RangeInclusive<u32> {
    1..=u32::try_from(count).unwrap_or(u32::MAX)
}

pub fn landmark() -> Coordinate {
    Coordinate::new(LANDMARK_LAT, LANDMARK_LON)
}

/// The one fleet of the process and the RNG every draw comes from.
#[derive(Debug)]
pub struct FleetState {
    vehicles: Vec<Vehicle>,
    rng: ChaCha8Rng,
}

impl FleetState {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            vehicles: Vec::new(),
            rng,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn random_waypoint(&mut self) -> Coordinate {
        random_nearby_location(&mut self.rng, landmark(), WAYPOINT_RADIUS_KM)
    }

    pub fn create_vehicle(&mut self, id: u32, now: i64) -> Vehicle {
        let location = self.random_waypoint();
        let target = self.random_waypoint();
        let speed = self.rng.gen_range(MIN_SPEED_KMH..MAX_SPEED_KMH);
        let profile = generate_profile(&mut self.rng);

        Vehicle {
            id,
            location,
            leg_start: location,
            target,
            speed,
            start_time: now,
            profile,
        }
    }

    /// Rebuild the whole fleet when the size differs.
    ///
    /// Nothing survives a resize: growing 30 -> 31 redraws all 31 vehicles,
    /// including ids 1..=30. Returns whether a rebuild happened.
    pub fn ensure_fleet_size(&mut self, count: usize, now: i64) -> bool {
        if self.vehicles.len() == count {
            return false;
        }

        info!(
            "Rebuilding fleet: {} -> {} vehicles",
            self.vehicles.len(),
            count
        );
        let vehicles = fleet_ids(count)
            .map(|id| self.create_vehicle(id, now))
            .collect();
        self.vehicles = vehicles;
        true
    }

    /// Move one vehicle to where it should be at `now`, recycling it onto a new leg on arrival.
    ///
    /// The position is measured from the leg's origin, so it depends only on
    /// `now` and not on how many times the vehicle was polled in between.
    pub fn advance_vehicle<R: Rng + ?Sized>(rng: &mut R, vehicle: &mut Vehicle, now: i64) {
        let elapsed_seconds = (now - vehicle.start_time) as f64 / 1000.0;
        let step = advance(vehicle.leg_start, vehicle.target, vehicle.speed, elapsed_seconds);

        vehicle.location = step.position;

        if step.arrived {
            let mut target = random_nearby_location(rng, landmark(), WAYPOINT_RADIUS_KM);
            while target == vehicle.location {
                target = random_nearby_location(rng, landmark(), WAYPOINT_RADIUS_KM);
            }
            trace!(
                "Vehicle {} arrived at ({:.6}, {:.6}), new target ({:.6}, {:.6})",
                vehicle.id,
                vehicle.location.lat,
                vehicle.location.lon,
                target.lat,
                target.lon
            );
            vehicle.leg_start = vehicle.location;
            vehicle.target = target;
            vehicle.start_time = now;
        }
    }

    pub fn list_all(&mut self, count: usize, now: i64) -> Vec<VehicleView> {
        let span = span!(Level::DEBUG, "list_all", count = count);
        let _guard = span.enter();

        self.ensure_fleet_size(count, now);

        let Self { vehicles, rng } = self;
        for vehicle in vehicles.iter_mut() {
            Self::advance_vehicle(rng, vehicle, now);
        }

        debug!("Advanced {} vehicles", vehicles.len());
        vehicles.iter().map(VehicleView::from).collect()
    }

    /// Look up and advance a single vehicle. Never creates or resizes the fleet.
    pub fn get_by_id(&mut self, id: u32, now: i64) -> Result<VehicleView, FleetError> {
        let span = span!(Level::DEBUG, "get_by_id", id = id);
        let _guard = span.enter();

        let Self { vehicles, rng } = self;
        let vehicle = vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(FleetError::NotFound(id))?;

        Self::advance_vehicle(rng, vehicle, now);
        Ok(VehicleView::from(&*vehicle))
    }
}
