//! Conway's Game of Life on a toroidal grid.
//!
//! The library half of the crate: the wraparound grid, the simulation
//! engines, and the configuration handed over by the CLI. Rendering and
//! input live in the binary.

pub mod config;
pub mod grid;
pub mod life;

pub use config::SimConfig;
pub use grid::{GridError, ToroidalGrid};
pub use life::{Engine, EngineError, Fate, FastLifeEngine, LifeEngine};
