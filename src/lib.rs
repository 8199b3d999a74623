pub mod analytics;
pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod form;
pub mod provider;
pub mod startup;
pub mod subscription;
pub mod telemetry;
pub mod util;
