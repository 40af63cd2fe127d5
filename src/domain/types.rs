use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub name: String,
    pub age: u32,
    pub license_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarData {
    pub brand: String,
    pub model: String,
    pub year: u32,
    pub color: String,
    pub plate_number: String,
}

/// Cosmetic data attached to a vehicle for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub driver: Driver,
    pub car_data: CarData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: u32,
    pub location: Coordinate,
    /// Where the current leg began; progress is always measured from here.
    pub leg_start: Coordinate,
    pub target: Coordinate,
    /// km/h, fixed at creation.
    pub speed: f64,
    /// Epoch millis at which the current leg began.
    pub start_time: i64,
    pub profile: Profile,
}

/// Public projection of a vehicle; `leg_start`, `target` and `start_time` stay internal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleView {
    pub id: u32,
    pub lat: f64,
    pub lon: f64,
    pub speed: f64,
    #[serde(flatten)]
    pub profile: Profile,
}

impl From<&Vehicle> for VehicleView {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            lat: vehicle.location.lat,
            lon: vehicle.location.lon,
            speed: vehicle.speed,
            profile: vehicle.profile.clone(),
        }
    }
}
