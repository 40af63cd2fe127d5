use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::domain::types::VehicleView;
use crate::error::FleetError;
use crate::fleet::service::FleetService;
use crate::utils::{parse_count, parse_vehicle_id};

pub type AppState = Arc<FleetService>;

/// `count` is kept as a raw string so malformed values fall back to the default instead of a 400.
#[derive(Debug, Default, Deserialize)]
pub struct LocationsQuery {
    pub count: Option<String>,
}

pub fn router(service: AppState) -> Router {
    Router::new()
        .route("/locations", get(list_locations))
        .route("/locations/:id", get(get_location))
        .with_state(service)
}

async fn list_locations(
    State(service): State<AppState>,
    Query(query): Query<LocationsQuery>,
) -> Result<Json<Vec<VehicleView>>, FleetError> {
    let count = parse_count(query.count.as_deref());
    let vehicles = service.list(count)?;
    debug!("GET /locations -> {} vehicles", vehicles.len());
    Ok(Json(vehicles))
}

async fn get_location(
    State(service): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<VehicleView>, FleetError> {
    // An unparsable id matches nothing; 0 is never assigned.
    let id = parse_vehicle_id(&raw_id).unwrap_or(0);
    let vehicle = service.get(id)?;
    debug!("GET /locations/{} -> ({:.6}, {:.6})", id, vehicle.lat, vehicle.lon);
    Ok(Json(vehicle))
}
