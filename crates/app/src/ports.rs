//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod light;
pub mod notification;
pub mod override_reader;

pub use light::LightController;
pub use notification::{NotificationSource, StreamEvent};
pub use override_reader::OverrideReader;
