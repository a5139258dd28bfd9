mod config;
mod error;
mod field;
mod gui;
mod render;
mod session;

pub use config::Config;
pub use error::GridError;
pub use field::{step, Grid, Preset};
pub use gui::App;
pub use render::{render_into, render_to_pixels, ALIVE_RGBA, BYTES_IN_PIXEL, DEAD_RGBA};
pub use session::Session;
