//! The three entity registries plus a facade bundling them.

pub mod locations;
pub mod minerals;
pub mod workers;

pub use locations::LocationRegistry;
pub use minerals::MineralRegistry;
pub use workers::WorkerRegistry;

use crate::error::Result;
use crate::models::{Mineral, MineralId, WorkShift};

/// All three registries under one roof.
///
/// The registries are independent stores; only the operations below span two
/// of them, and they borrow in the fixed order location-registry first,
/// worker-registry second.
#[derive(Debug, Default)]
pub struct Registries {
    pub locations: LocationRegistry,
    pub minerals: MineralRegistry,
    pub workers: WorkerRegistry,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a worker's shift and link the worker at the shift's location.
    /// See [`WorkerRegistry::set_shift`].
    pub fn set_shift(
        &mut self,
        worker_id: &str,
        shift: WorkShift,
        replace_if_exists: bool,
    ) -> Result<Option<WorkShift>> {
        self.workers
            .set_shift(&mut self.locations, worker_id, shift, replace_if_exists)
    }

    /// Catalogue a mineral and link it at a location.
    /// See [`LocationRegistry::add_mineral_to`].
    pub fn add_mineral_to(&mut self, location_id: &str, mineral: Mineral) -> Result<MineralId> {
        self.locations
            .add_mineral_to(&mut self.minerals, location_id, mineral)
    }

    /// Link an already catalogued mineral at a location.
    pub fn link_mineral(&mut self, location_id: &str, mineral_id: MineralId) -> Result<()> {
        self.locations
            .link_mineral(&self.minerals, location_id, mineral_id)
    }
}
