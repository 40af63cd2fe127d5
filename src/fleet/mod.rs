pub mod service;
pub mod state;

pub use service::FleetService;
pub use state::FleetState;
