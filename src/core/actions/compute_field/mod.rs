pub mod compute_field;
pub mod compute_field_parallel_rayon;
pub mod compute_strategy;
pub mod ports;
