pub mod text;

pub use text::{render_summary, warning_lines};
