pub mod render_once;
