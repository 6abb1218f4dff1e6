pub mod config;
pub mod currency;
pub mod diagnosis;
pub mod error;
pub mod intake;
pub mod report;
pub mod telemetry;
