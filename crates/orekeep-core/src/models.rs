pub mod location;
pub mod mineral;
pub mod shift;
pub mod worker;

pub use location::{Location, LocationId, LocationPatch};
pub use mineral::{Mineral, MineralFilter, MineralId};
pub use shift::{parse_time, parse_weekday, WorkShift};
pub use worker::{Worker, WorkerId};
