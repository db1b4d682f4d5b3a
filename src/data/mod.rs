pub mod model;
pub mod navigator;
pub mod schedule;
pub mod week;
