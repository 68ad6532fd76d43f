// src/data_input/mod.rs

pub mod raw_series;
pub mod series_parser;

// src/data_input/mod.rs
