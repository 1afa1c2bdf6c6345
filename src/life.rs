//! The Game of Life engines.
//!
//! `LifeEngine` is the full simulation: besides the cell grid it keeps a
//! per-cell fate (what just happened to the cell) and age (how long it has
//! held its current state), which the renderer turns into glyphs and colors.
//! `FastLifeEngine` skips that bookkeeping for throughput and synthesizes
//! the same queries with reduced fidelity.

use crate::grid::{GridError, ToroidalGrid};
use rand::Rng;
use thiserror::Error;

/// Number of live neighbors needed for a dead cell to be born
const BIRTH_NEIGHBORS: u8 = 3;
/// Minimum live neighbors for a live cell to survive
const SURVIVE_MIN: u8 = 2;
/// Maximum live neighbors for a live cell to survive
const SURVIVE_MAX: u8 = 3;

/// Errors raised by engine construction and population
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("probability must be within [0.0, 1.0], got {0}")]
    InvalidProbability(f64),
}

/// What happened to a cell in the last generation transition.
///
/// A dead cell either stays dead or is born; a live cell survives, dies of
/// isolation, or dies of overcrowding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
    StayDead,
    Birth,
    Survive,
    DeathByIsolation,
    DeathByOvercrowding,
}

impl Fate {
    /// Whether this fate leaves the cell alive
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Fate::Birth | Fate::Survive)
    }

    /// Whether this fate kept the cell's previous state (no flip)
    #[inline]
    fn keeps_state(self) -> bool {
        matches!(self, Fate::StayDead | Fate::Survive)
    }
}

/// The full engine: cells plus fate and age grids, all toroidal and sized
/// identically for the engine's lifetime.
pub struct LifeEngine {
    cells: ToroidalGrid<bool>,
    fates: ToroidalGrid<Fate>,
    ages: ToroidalGrid<u64>,
    generation: u64,
}

impl LifeEngine {
    /// Create an engine with every cell dead, at generation 1
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        Ok(Self {
            cells: ToroidalGrid::new(width, height, false)?,
            // All dead with no live neighbors: StayDead is already correct
            fates: ToroidalGrid::new(width, height, Fate::StayDead)?,
            ages: ToroidalGrid::new(width, height, 0)?,
            generation: 1,
        })
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    /// Populate the grid at random, each cell independently alive with the
    /// given probability. Ages reset to 0 and fates are recomputed so the
    /// renderer can query them before the first advance.
    pub fn populate_random(
        &mut self,
        rng: &mut impl Rng,
        prob: f64,
    ) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&prob) {
            return Err(EngineError::InvalidProbability(prob));
        }
        for row in 0..self.height() as isize {
            for col in 0..self.width() as isize {
                self.cells.set(row, col, rng.gen_bool(prob));
            }
        }
        self.ages.fill(0);
        self.compute_fates();
        Ok(())
    }

    /// Reset the game: back to generation 1 with a fresh random population
    pub fn reset(&mut self, rng: &mut impl Rng, prob: f64) -> Result<(), EngineError> {
        self.generation = 1;
        self.populate_random(rng, prob)
    }

    /// Advance one generation: classify every cell from the current grid,
    /// then commit the results. Fates queried afterwards describe the
    /// transition that was just taken.
    pub fn advance(&mut self) {
        self.compute_fates();
        self.apply_fates();
        self.generation += 1;
    }

    /// Count live cells in the Moore neighborhood of a location
    fn live_neighbors(&self, row: isize, col: isize) -> u8 {
        let mut count = 0;
        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if (r, c) == (row, col) {
                    continue;
                }
                if *self.cells.get(r, c) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Classify every cell from the current grid into the fates grid.
    ///
    /// This is a full pass over a frozen snapshot: fates only ever depend on
    /// the grid as it stood at the start of the generation, never on a
    /// neighbor's already-updated next state.
    fn compute_fates(&mut self) {
        for row in 0..self.height() as isize {
            for col in 0..self.width() as isize {
                let neighbors = self.live_neighbors(row, col);
                let fate = if *self.cells.get(row, col) {
                    if neighbors < SURVIVE_MIN {
                        Fate::DeathByIsolation
                    } else if neighbors > SURVIVE_MAX {
                        Fate::DeathByOvercrowding
                    } else {
                        Fate::Survive
                    }
                } else if neighbors == BIRTH_NEIGHBORS {
                    Fate::Birth
                } else {
                    Fate::StayDead
                };
                self.fates.set(row, col, fate);
            }
        }
    }

    /// Commit the fates grid: kill and spawn cells, and update ages (a flip
    /// resets to 0, holding state adds a generation)
    fn apply_fates(&mut self) {
        for row in 0..self.height() as isize {
            for col in 0..self.width() as isize {
                let fate = *self.fates.get(row, col);
                self.cells.set(row, col, fate.is_alive());
                let age = if fate.keeps_state() {
                    *self.ages.get(row, col) + 1
                } else {
                    0
                };
                self.ages.set(row, col, age);
            }
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether there is a live cell at the location
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        *self.cells.get(row, col)
    }

    /// The fate of the cell at the location
    pub fn fate(&self, row: isize, col: isize) -> Fate {
        *self.fates.get(row, col)
    }

    /// How many consecutive generations the cell has held its current state
    pub fn age(&self, row: isize, col: isize) -> u64 {
        *self.ages.get(row, col)
    }
}

/// A reduced engine that keeps only the boolean cell grids.
///
/// One pass per generation into a back buffer, then a swap. There is no fate
/// or age bookkeeping: `fate` cannot distinguish births from survivals (or
/// the two death causes) and `age` always reports 0.
pub struct FastLifeEngine {
    cells: ToroidalGrid<bool>,
    next: ToroidalGrid<bool>,
    generation: u64,
}

impl FastLifeEngine {
    /// Create an engine with every cell dead, at generation 1
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        Ok(Self {
            cells: ToroidalGrid::new(width, height, false)?,
            next: ToroidalGrid::new(width, height, false)?,
            generation: 1,
        })
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    /// Populate the grid at random, each cell independently alive with the
    /// given probability
    pub fn populate_random(
        &mut self,
        rng: &mut impl Rng,
        prob: f64,
    ) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&prob) {
            return Err(EngineError::InvalidProbability(prob));
        }
        for row in 0..self.height() as isize {
            for col in 0..self.width() as isize {
                self.cells.set(row, col, rng.gen_bool(prob));
            }
        }
        Ok(())
    }

    /// Reset the game: back to generation 1 with a fresh random population
    pub fn reset(&mut self, rng: &mut impl Rng, prob: f64) -> Result<(), EngineError> {
        self.generation = 1;
        self.populate_random(rng, prob)
    }

    /// Advance one generation with a single pass into the back buffer
    pub fn advance(&mut self) {
        for row in 0..self.height() as isize {
            for col in 0..self.width() as isize {
                let mut neighbors = 0u8;
                for r in row - 1..=row + 1 {
                    for c in col - 1..=col + 1 {
                        if (r, c) != (row, col) && *self.cells.get(r, c) {
                            neighbors += 1;
                        }
                    }
                }
                let alive = if *self.cells.get(row, col) {
                    (SURVIVE_MIN..=SURVIVE_MAX).contains(&neighbors)
                } else {
                    neighbors == BIRTH_NEIGHBORS
                };
                self.next.set(row, col, alive);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether there is a live cell at the location
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        *self.cells.get(row, col)
    }

    /// Synthesized fate: Survive if alive, StayDead if dead
    pub fn fate(&self, row: isize, col: isize) -> Fate {
        if self.is_alive(row, col) {
            Fate::Survive
        } else {
            Fate::StayDead
        }
    }

    /// Always 0: this engine does not track ages
    pub fn age(&self, _row: isize, _col: isize) -> u64 {
        0
    }
}

/// Engine variant, selected at construction time
pub enum Engine {
    Full(LifeEngine),
    Fast(FastLifeEngine),
}

impl Engine {
    /// Create the requested engine variant with every cell dead
    pub fn new(width: usize, height: usize, fast: bool) -> Result<Self, EngineError> {
        Ok(if fast {
            Engine::Fast(FastLifeEngine::new(width, height)?)
        } else {
            Engine::Full(LifeEngine::new(width, height)?)
        })
    }

    pub fn width(&self) -> usize {
        match self {
            Engine::Full(e) => e.width(),
            Engine::Fast(e) => e.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Engine::Full(e) => e.height(),
            Engine::Fast(e) => e.height(),
        }
    }

    pub fn populate_random(
        &mut self,
        rng: &mut impl Rng,
        prob: f64,
    ) -> Result<(), EngineError> {
        match self {
            Engine::Full(e) => e.populate_random(rng, prob),
            Engine::Fast(e) => e.populate_random(rng, prob),
        }
    }

    pub fn reset(&mut self, rng: &mut impl Rng, prob: f64) -> Result<(), EngineError> {
        match self {
            Engine::Full(e) => e.reset(rng, prob),
            Engine::Fast(e) => e.reset(rng, prob),
        }
    }

    pub fn advance(&mut self) {
        match self {
            Engine::Full(e) => e.advance(),
            Engine::Fast(e) => e.advance(),
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            Engine::Full(e) => e.generation(),
            Engine::Fast(e) => e.generation(),
        }
    }

    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        match self {
            Engine::Full(e) => e.is_alive(row, col),
            Engine::Fast(e) => e.is_alive(row, col),
        }
    }

    pub fn fate(&self, row: isize, col: isize) -> Fate {
        match self {
            Engine::Full(e) => e.fate(row, col),
            Engine::Fast(e) => e.fate(row, col),
        }
    }

    pub fn age(&self, row: isize, col: isize) -> u64 {
        match self {
            Engine::Full(e) => e.age(row, col),
            Engine::Fast(e) => e.age(row, col),
        }
    }
}
