pub mod chart;
pub mod court;
pub mod data;
pub mod error;
pub mod models;
pub mod render;
pub mod report;
pub mod session;
pub mod shots;
pub mod stats;

pub use error::{Result, ShotChartError};
