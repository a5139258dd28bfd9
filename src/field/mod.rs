mod grid;
mod preset;
mod step;

pub use grid::Grid;
pub use preset::Preset;
pub use step::step;
