pub mod element;
pub mod escape;
pub mod query;
pub mod render;

pub use element::{Content, Element};
pub use escape::escape_html;
pub use render::render_to_string;
