mod app;
mod draw;
mod fps_limit;
mod style;

pub use app::App;
use fps_limit::FpsLimiter;
use style::Style;
