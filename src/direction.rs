use std::fmt;

use serde::Serialize;

/// Représente une direction cardinale dans le labyrinthe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Ordre dans lequel on essaie les directions (n, s, e, w).
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Fait demi tour (par ex. North -> South )
    pub fn turn_back(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Déplacement unitaire (dx, dy). Le Nord fait croître `y`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Nouvelle position après un pas dans cette direction, sans tenir compte des murs.
    pub fn step(self, (x, y): (i32, i32)) -> (i32, i32) {
        let (dx, dy) = self.offset();
        (x + dx, y + dy)
    }

    /// Lettre utilisée dans les traces compactes ("n", "e", "s", "w").
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_back_is_an_involution() {
        for d in Direction::SEARCH_ORDER {
            assert_ne!(d.turn_back(), d);
            assert_eq!(d.turn_back().turn_back(), d);
        }
    }

    #[test]
    fn test_step_then_back_returns_home() {
        for d in Direction::SEARCH_ORDER {
            let there = d.step((3, 4));
            assert_ne!(there, (3, 4));
            assert_eq!(d.turn_back().step(there), (3, 4));
        }
    }

    #[test]
    fn test_letters_follow_search_order() {
        let trace: String = Direction::SEARCH_ORDER.iter().map(|d| d.letter()).collect();
        assert_eq!(trace, "nsew");
    }
}
