use crate::direction::Direction;
use crate::error::{MazeError, Result};

/// Ensemble des 4 murs d'une cellule.
///
/// `true` signifie qu'on heurte un mur en marchant dans cette direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Walls {
    /// Décode un chiffre hexadécimal : bit 0x8 = nord, 0x4 = est, 0x2 = sud, 0x1 = ouest.
    pub fn from_hex(digit: char) -> Result<Self> {
        let bits = digit
            .to_digit(16)
            .ok_or_else(|| MazeError::Config(format!("invalid wall digit {:?}", digit)))?;
        Ok(Self::from_bits(bits as u8))
    }

    pub fn from_bits(bits: u8) -> Self {
        Self {
            north: bits & 0x8 != 0,
            east: bits & 0x4 != 0,
            south: bits & 0x2 != 0,
            west: bits & 0x1 != 0,
        }
    }

    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, wall: bool) {
        match direction {
            Direction::North => self.north = wall,
            Direction::East => self.east = wall,
            Direction::South => self.south = wall,
            Direction::West => self.west = wall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digit_maps_msb_to_north() {
        let w = Walls::from_hex('9').unwrap();
        assert!(w.north && w.west);
        assert!(!w.east && !w.south);

        let w = Walls::from_hex('C').unwrap();
        assert!(w.north && w.east);
        assert_eq!(w, Walls::from_bits(0xc));
    }

    #[test]
    fn test_invalid_digit_is_a_config_error() {
        assert!(matches!(Walls::from_hex('g'), Err(MazeError::Config(_))));
    }

    #[test]
    fn test_set_then_get() {
        let mut w = Walls::default();
        w.set(Direction::South, true);
        assert!(w.get(Direction::South));
        assert_eq!(w, Walls::from_bits(0x2));
        let closed = Walls::from_bits(0xf);
        assert!(Direction::SEARCH_ORDER.iter().all(|&d| closed.get(d)));
    }
}
