use crate::{render, step, Config, Grid, GridError, Preset};

/// State of a running simulation: the field, its scratch copy and display flags.
pub struct Session {
    grid: Grid,         // Current generation.
    scratch: Grid,      // Receives the next generation, then swapped with `grid`.
    is_paused: bool,    // Flag indicating whether ticks advance the simulation.
    hide_grid: bool,    // Flag indicating whether to hide grid lines between cells.
    generation: u64,    // Generations since the last reset.
    pixels: Vec<u8>,    // Last rendered frame, reused between frames.
}

impl Session {
    /// Paused session with a blank field.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let grid = Grid::new(width, height)?;
        Ok(Self {
            scratch: grid.clone(),
            grid,
            is_paused: true,
            hide_grid: false,
            generation: 0,
            pixels: vec![],
        })
    }

    /// Session in the state the visualizer starts with.
    pub fn startup() -> Result<Self, GridError> {
        let mut session = Self::new(Config::FIELD_WIDTH, Config::FIELD_HEIGHT)?;
        session.reset(Preset::StableSquares);
        for (x, y) in Config::INITIAL_CELLS {
            session.set_cell(x, y, true);
        }
        log::info!(
            "started {}x{} session with {} live cells",
            Config::FIELD_WIDTH,
            Config::FIELD_HEIGHT,
            session.population()
        );
        Ok(session)
    }

    /// Called once per frame. Advances one generation unless paused.
    ///
    /// Returns whether a generation was computed.
    pub fn on_tick(&mut self) -> bool {
        if self.is_paused {
            return false;
        }
        self.step_once();
        true
    }

    /// Advances one generation regardless of the pause flag.
    pub fn step_once(&mut self) {
        step(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        log::trace!("generation {}", self.generation);
    }

    /// Renders the current generation with the configured cell size.
    pub fn pixel_buffer(&mut self) -> &[u8] {
        render::render_into(
            &self.grid,
            Config::CELL_WIDTH,
            Config::CELL_HEIGHT,
            &mut self.pixels,
        );
        &self.pixels
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.is_paused != paused {
            log::debug!("{}", if paused { "paused" } else { "resumed" });
        }
        self.is_paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.is_paused);
    }

    pub fn hide_grid(&self) -> bool {
        self.hide_grid
    }

    pub fn set_hide_grid(&mut self, hide: bool) {
        self.hide_grid = hide;
    }

    /// Replaces the field with `preset` and restarts the generation counter.
    pub fn reset(&mut self, preset: Preset) {
        preset.apply(&mut self.grid);
        self.generation = 0;
        log::info!("field reset to preset {preset:?}");
    }

    /// Fills the field with random cells and restarts the generation counter.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<(), GridError> {
        self.grid.randomize(seed, fill_rate)?;
        self.generation = 0;
        log::info!("field randomized, fill rate {fill_rate}, seed {seed:?}");
        Ok(())
    }

    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        self.grid.set(x, y, alive);
        log::debug!("cell ({x}, {y}) set to {alive}");
    }

    pub fn toggle_cell(&mut self, x: i64, y: i64) {
        self.set_cell(x, y, !self.grid.get(x, y));
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_session_does_not_step() {
        let mut session = Session::new(8, 8).unwrap();
        session.set_cell(3, 3, true);
        assert!(session.is_paused());
        assert!(!session.on_tick());
        assert!(session.grid().get(3, 3));
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn running_session_steps_every_tick() {
        let mut session = Session::new(8, 8).unwrap();
        session.set_cell(3, 3, true);
        session.set_paused(false);
        assert!(session.on_tick());
        assert_eq!(session.population(), 0);
        assert!(session.on_tick());
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn step_once_ignores_pause() {
        let mut session = Session::new(8, 8).unwrap();
        for x in 2..5 {
            session.set_cell(x, 4, true);
        }
        session.step_once();
        assert!(session.is_paused());
        assert!(session.grid().get(3, 3) && session.grid().get(3, 5));
        assert!(!session.grid().get(2, 4));
    }

    #[test]
    fn reset_restarts_generation() {
        let mut session = Session::new(9, 9).unwrap();
        session.step_once();
        session.reset(Preset::StableSquares);
        assert_eq!(session.generation(), 0);
        assert_eq!(session.grid(), &Preset::StableSquares.seed(9, 9).unwrap());
    }

    #[test]
    fn toggles() {
        let mut session = Session::new(4, 4).unwrap();
        session.toggle_cell(-1, 0);
        assert!(session.grid().get(3, 0));
        session.toggle_cell(3, 0);
        assert_eq!(session.population(), 0);

        session.toggle_paused();
        assert!(!session.is_paused());
        session.set_hide_grid(true);
        assert!(session.hide_grid());
    }

    #[test]
    fn pixel_buffer_has_window_size() {
        let mut session = Session::new(Config::FIELD_WIDTH, Config::FIELD_HEIGHT).unwrap();
        let len = session.pixel_buffer().len();
        assert_eq!(len, Config::WINDOW_WIDTH * Config::WINDOW_HEIGHT * 4);
    }
}
