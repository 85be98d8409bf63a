pub mod complex;
pub mod iteration_field;
pub mod viewport;
