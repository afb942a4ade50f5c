pub mod config;
pub mod error;
pub mod qr;
pub mod simulator;
pub mod status;
pub mod store;

pub use config::{load_settings, KioskSettings};
pub use error::{ConfigError, QrError, SimulatorError, SinkClosed, StoreError};
pub use simulator::{OrderSimulator, RunOutcome, SimulatorTimings, StatusSink};
pub use status::{RunId, Status, StatusReport};
pub use store::{ConnectivityProbe, MongoProbe, StoreHandles};
