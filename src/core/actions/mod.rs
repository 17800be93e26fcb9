pub mod compute_escape;
pub mod recolour;
pub mod translate_selection;
