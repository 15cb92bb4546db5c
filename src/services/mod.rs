//! Service layer for the monitor loop
//!
//! Services encapsulate the business logic for alert evaluation and the
//! poll loop itself.

pub mod alert_service;
pub mod monitor;

pub use alert_service::AlertService;
pub use monitor::{Monitor, MonitorConfig};
