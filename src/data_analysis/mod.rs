// src/data_analysis/mod.rs

pub mod linear_fit;
pub mod rolling_average;
pub mod series_transform;

// src/data_analysis/mod.rs
