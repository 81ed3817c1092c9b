pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod layouts;
pub mod marker;
pub mod maze;
pub mod render;
pub mod search;
pub mod walk;
pub mod walls;

pub use crate::cell::Cell;
pub use crate::config::SimulationConfig;
pub use crate::direction::Direction;
pub use crate::error::{MazeError, Result};
pub use crate::marker::Marker;
pub use crate::maze::Maze;
pub use crate::search::{bfs, dfs, search, Route, SearchOutcome, Strategy};
pub use crate::walk::{simulate, walk, WalkOutcome, WalkStats};

// -----------------------------------------------------------------------------
// Coordonnées
// -----------------------------------------------------------------------------

/// Position `(x, y)` dans la grille augmentée ; `(0, 0)` est le coin sud-ouest.
pub type Location = (i32, i32);

/// Valeur réservée des extrémités : « ne pas placer ce point ».
pub const NO_LOC: Location = (-1, -1);
