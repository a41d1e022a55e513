pub mod render;
pub mod theme;
pub mod view;

pub use render::{render_result_box, wrap_result};
pub use theme::{Painter, Theme};
pub use view::{write_menu, write_response, write_startup};
