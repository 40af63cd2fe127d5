pub mod geo;

pub use geo::{advance, great_circle_distance_km, Advance};
