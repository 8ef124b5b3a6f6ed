//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Bounded timestep only
//! - Seeded RNG only
//! - Stable iteration order (roster / spawn order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod clock;
pub mod companion;
pub mod enemy;
pub mod goal;
pub mod level;
pub mod player;
pub mod rng;
pub mod scenery;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use clock::FrameClock;
pub use companion::{Companion, CompanionRole};
pub use enemy::{Enemy, EnemyPhase};
pub use goal::Hive;
pub use level::{CompanionKind, EnemyKind, FINAL_LEVEL, LevelConfig};
pub use player::{Facing, FlightState, Player};
pub use scenery::Scenery;
pub use snapshot::WorldSnapshot;
pub use state::{GameEvent, GameState, SessionError};
pub use tick::{TickInput, tick};
