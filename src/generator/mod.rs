// Grid generation

pub mod grid;

pub use grid::{GridGenerator, PlacedGrid, PlacementError, DEFAULT_PLACEMENT_ATTEMPTS, GRID_SIZE};
