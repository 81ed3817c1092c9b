//! Types d'erreurs du labyrinthe

use thiserror::Error;

use crate::Location;

/// Erreurs de construction et d'accès au labyrinthe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Texte de configuration ou d'extrémités vide ou mal formé
    #[error("invalid maze configuration: {0}")]
    Config(String),

    /// Coordonnée hors de la grille augmentée
    #[error("location {location:?} is outside the {columns}x{rows} grid")]
    OutOfBounds {
        location: Location,
        columns: usize,
        rows: usize,
    },

    /// Contrainte violée (coin de bordure, taille de ville, départ absent)
    #[error("constraint violated: {0}")]
    Constraint(String),
}

/// Result type for maze operations
pub type Result<T> = std::result::Result<T, MazeError>;
