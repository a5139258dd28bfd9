/// Fixed parameters of the simulation and its window.
pub struct Config;

impl Config {
    pub const APP_NAME: &'static str = "Web-GOF";

    pub const FIELD_WIDTH: usize = 64;
    pub const FIELD_HEIGHT: usize = 64;

    /// Size of one cell on screen, in pixels.
    pub const CELL_WIDTH: usize = 10;
    pub const CELL_HEIGHT: usize = 10;

    pub const WINDOW_WIDTH: usize = Self::FIELD_WIDTH * Self::CELL_WIDTH;
    pub const WINDOW_HEIGHT: usize = Self::FIELD_HEIGHT * Self::CELL_HEIGHT;

    /// Shows through the transparent pixels of live cells.
    pub const BACKGROUND_RGB: [u8; 3] = [0x80, 0xa0, 0xc0];

    pub const MAX_TPS: f64 = 60.;

    /// Cells forced alive after the startup preset.
    pub const INITIAL_CELLS: [(i64, i64); 1] = [(3, 2)];

    pub const RANDOM_FILL_RATE: f64 = 0.3;
}
