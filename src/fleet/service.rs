use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{error, warn};

use crate::clock::Clock;
use crate::config::constant::DEFAULT_FLEET_SIZE;
use crate::config::ServerConfig;
use crate::domain::types::VehicleView;
use crate::error::FleetError;
use crate::fleet::state::FleetState;

/// Shared handle the HTTP layer calls into.
///
/// The whole ensure-size + advance + project sequence runs under one lock, so
/// a resize can never interleave with a single-vehicle read.
pub struct FleetService {
    state: Mutex<FleetState>,
    clock: Arc<dyn Clock>,
    max_fleet_size: Option<usize>,
}

impl FleetService {
    /// `max_fleet_size` of `None` leaves `count` uncapped.
    pub fn new(clock: Arc<dyn Clock>, seed: Option<u64>, max_fleet_size: Option<usize>) -> Self {
        let state = match seed {
            Some(seed) => FleetState::from_seed(seed),
            None => FleetState::from_entropy(),
        };
        Self {
            state: Mutex::new(state),
            clock,
            max_fleet_size,
        }
    }

    pub fn from_config(config: &ServerConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(clock, config.fleet_seed, config.max_fleet_size)
    }

    fn lock(&self) -> Result<MutexGuard<'_, FleetState>, FleetError> {
        self.state.lock().map_err(|_| {
            error!("Fleet state mutex poisoned");
            FleetError::StatePoisoned
        })
    }

    /// Positions of the whole fleet, rebuilding it first if `count` differs from its size.
    ///
    /// `None` means the default of 30. A negative count empties the fleet, so
    /// the listing is `[]` and every later lookup is a 404.
    pub fn list(&self, count: Option<i64>) -> Result<Vec<VehicleView>, FleetError> {
        let requested = match count {
            None => DEFAULT_FLEET_SIZE,
            Some(n) if n < 0 => 0,
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
        };
        let count = match self.max_fleet_size {
            Some(cap) if requested > cap => {
                warn!(
                    "Requested fleet of {} exceeds MAX_FLEET_SIZE, clamping to {}",
                    requested, cap
                );
                cap
            }
            _ => requested,
        };

        let now = self.clock.now_millis();
        let mut state = self.lock()?;
        Ok(state.list_all(count, now))
    }

    pub fn get(&self, id: u32) -> Result<VehicleView, FleetError> {
        let now = self.clock.now_millis();
        let mut state = self.lock()?;
        state.get_by_id(id, now)
    }

    pub fn fleet_size(&self) -> Result<usize, FleetError> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn service(max: Option<usize>) -> (FleetService, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        (FleetService::new(clock.clone(), Some(2024), max), clock)
    }

    #[test]
    fn default_count_is_thirty() {
        let (service, _) = service(None);
        assert_eq!(service.list(None).unwrap().len(), 30);
    }

    #[test]
    fn negative_count_empties_the_fleet() {
        let (service, _) = service(None);
        assert_eq!(service.list(Some(5)).unwrap().len(), 5);

        assert!(service.list(Some(-5)).unwrap().is_empty());
        assert_eq!(service.fleet_size().unwrap(), 0);
        assert_eq!(service.get(1), Err(FleetError::NotFound(1)));
    }

    #[test]
    fn count_is_clamped_only_when_a_cap_is_set() {
        let (capped, _) = service(Some(50));
        assert_eq!(capped.list(Some(51)).unwrap().len(), 50);
        assert_eq!(capped.fleet_size().unwrap(), 50);

        let (uncapped, _) = service(None);
        assert_eq!(uncapped.list(Some(10_001)).unwrap().len(), 10_001);
    }

    #[test]
    fn get_never_creates_a_fleet() {
        let (service, _) = service(None);
        assert_eq!(service.get(1), Err(FleetError::NotFound(1)));
        assert_eq!(service.fleet_size().unwrap(), 0);
    }

    #[test]
    fn vehicles_move_as_the_clock_advances() {
        let (service, clock) = service(None);
        let before = service.list(Some(5)).unwrap();
        clock.advance_secs(60);
        let after = service.list(Some(5)).unwrap();

        let moved = before
            .iter()
            .zip(&after)
            .filter(|(a, b)| (a.lat, a.lon) != (b.lat, b.lon))
            .count();
        assert_eq!(moved, 5);
    }

    #[test]
    fn get_matches_listing_at_same_instant() {
        let (service, _) = service(None);
        let listed = service.list(Some(5)).unwrap();
        let single = service.get(3).unwrap();
        assert_eq!(single, listed[2]);
    }

    #[test]
    fn service_is_shareable_across_threads() {
        let (service, _) = service(None);
        let service = Arc::new(service);
        service.list(Some(20)).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for id in 1..=20 {
                        service.get(id).unwrap();
                    }
                    service.list(Some(20 + i % 2)).unwrap().len()
                })
            })
            .collect();

        for handle in handles {
            let len = handle.join().unwrap();
            assert!(len == 20 || len == 21);
        }
    }
}
