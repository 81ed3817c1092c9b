use std::fmt;

use crate::error::Result;
use crate::marker::Marker;
use crate::walls::Walls;

/// Représente une cellule du labyrinthe.
///
/// Une cellule possède une configuration de murs et un contenu.
#[derive(Clone, PartialEq, Eq)]
pub struct Cell {
    /// Les murs délimitant la cellule.
    pub walls: Walls,
    /// Ce qui se trouve dans la cellule.
    pub content: Marker,
}

impl Cell {
    /// Crée une cellule vide à partir d'un chiffre hexadécimal de murs.
    pub fn new(config: char) -> Result<Self> {
        Ok(Self::with_walls(Walls::from_hex(config)?))
    }

    pub fn with_walls(walls: Walls) -> Self {
        Self {
            walls,
            content: Marker::Blank,
        }
    }
}

// Cell(nw, Blank) ; "x" quand il n'y a aucun mur
impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut walls = String::new();
        for (present, c) in [
            (self.walls.north, 'n'),
            (self.walls.east, 'e'),
            (self.walls.south, 's'),
            (self.walls.west, 'w'),
        ] {
            if present {
                walls.push(c);
            }
        }
        if walls.is_empty() {
            walls.push('x');
        }
        write!(f, "Cell({}, {:?})", walls, self.content)
    }
}
