pub mod compute_escape_parallel;
pub mod compute_escape_serial;
pub mod escape_iteration;
