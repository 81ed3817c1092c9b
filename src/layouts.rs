//! Labyrinthes prêts à l'emploi et grilles de ville.
//!
//! Les extrémités sont données en `(x,y)`, séparées par un espace, sans espace
//! à l'intérieur des parenthèses.

use crate::error::{MazeError, Result};
use crate::marker::Marker;
use crate::maze::Maze;
use crate::{Location, NO_LOC};

/// Un labyrinthe nommé : configuration des murs + extrémités.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    pub config: &'static str,
    pub endpoints: &'static str,
}

impl Layout {
    pub fn build(&self) -> Result<Maze> {
        Maze::new(self.config, self.endpoints)
    }
}

/// 4x2 sans entrée
pub const TEST: Layout = Layout {
    name: "test",
    config: "988c\n3226",
    endpoints: "(1,0) (0,1)",
};

/// 4x4 vide, sans entrée
pub const EMPTY: Layout = Layout {
    name: "empty",
    config: "988c\n1004\n1004\n3226",
    endpoints: "(1,5) (4,0)",
};

pub const BIG_EMPTY: Layout = Layout {
    name: "big-empty",
    config: "98888c\n100004\n100004\n100004\n322226",
    endpoints: "(0,1) (6,5)",
};

pub const BIG: Layout = Layout {
    name: "big",
    config: "98888c\n100704\n100000\n100004\n122226",
    endpoints: "(1,0) (7,3)",
};

pub const BLACKHOLE: Layout = Layout {
    name: "blackhole",
    config: "98888c\n104f14\n100800\n100004\n122226",
    endpoints: "(1,0) (7,3)",
};

pub const CITY_FENCE: Layout = Layout {
    name: "city-fence",
    config: "020202020\n4f5f5f5f1\n0a0a0a0a0\n4f5f5f5f1\n0a0a0a0a0\n4f5f5f5f1\n0a0a0a0a0\n4f5f5f5f1\n080808080",
    endpoints: "(5,5) (10,7)",
};

pub const CITY: Layout = Layout {
    name: "city",
    config: "f5f5f5f\na0a0a0a\nf5f5f5f\na0a0a0a\nf5f5f5f\na0a0a0a\nf5f5f5f",
    endpoints: "(4,4) (8,6)",
};

pub const MAP: Layout = Layout {
    name: "map",
    config: "dfdfdf9a8efd\n5f5f1a4f5ff5\n386f5f1a4ff5\nf5ff5f5f5ff5\nf3a86f5f3aa6\nfff5ff5fffff\nbaa6ff3aaaae",
    endpoints: "(1,1) (12,7)",
};

/// Même carte avec une rue à sens unique
pub const MAP_ONE_WAY: Layout = Layout {
    name: "map-1way",
    config: "dfdfdf9a8efd\n5f5f1acf5ff5\n386f5f1a4ff5\nf5ff5f5f5ff5\nf3a86f5f3aa6\nfff5ff5fffff\nbaa6ff3aaaae",
    endpoints: "(1,1) (12,7)",
};

pub const MAP_CS50AI: Layout = Layout {
    name: "map-cs50ai",
    config: "dfdfdfff9efd\n5f5f1acf5ff5\n386f5f1a4ff5\nf5ff5f5f5ff5\nf3a86f5f3aa6\nfff5ff5fffff\nbaa6ff3aaaae",
    endpoints: "(1,1) (12,7)",
};

/// Aucun chemin entre le départ et l'arrivée
pub const MAP_NO_SOLUTION: Layout = Layout {
    name: "map-nosoln",
    config: "dfdfdf9a8efd\n5f5f1a4f5ff5\n386f5f1a6ff5\nf5ff5f5fdff5\nf3a86f5f3aa6\nfff5ff5fffff\nbaa6ff3aaaae",
    endpoints: "(1,1) (12,7)",
};

pub const MAP_ALE04: Layout = Layout {
    name: "map-ale04",
    config: "dfdfd9aa8efd\n5f5f12cf5ff5\n386f5f1a4ff5\nf5ff5f5f5ff5\nf3a86f5f3aa6\nfff5ff5fffff\nbaa6ff3aaaae",
    endpoints: "(12,1) (1,7)",
};

pub const ALL: [Layout; 12] = [
    TEST,
    EMPTY,
    BIG_EMPTY,
    BIG,
    BLACKHOLE,
    CITY_FENCE,
    CITY,
    MAP,
    MAP_ONE_WAY,
    MAP_CS50AI,
    MAP_NO_SOLUTION,
    MAP_ALE04,
];

/// Retrouve un labyrinthe par son nom.
pub fn by_name(name: &str) -> Option<Layout> {
    ALL.iter().copied().find(|layout| layout.name == name)
}

pub const MIN_CITY_BLOCKS: usize = 2;
pub const MAX_CITY_BLOCKS: usize = 20;

fn check_city_blocks(blocks: usize) -> Result<()> {
    if blocks % 2 != 0 {
        return Err(MazeError::Constraint(format!(
            "city size must be an even number, got {}",
            blocks
        )));
    }
    if !(MIN_CITY_BLOCKS..=MAX_CITY_BLOCKS).contains(&blocks) {
        return Err(MazeError::Constraint(format!(
            "city size must be between {} and {} blocks, got {}",
            MIN_CITY_BLOCKS, MAX_CITY_BLOCKS, blocks
        )));
    }
    Ok(())
}

/// Configuration et extrémités d'une ville carrée de `blocks` pâtés de maisons
/// de côté. Le départ est l'intersection centrale, il n'y a pas d'arrivée.
pub fn city_config(blocks: usize) -> Result<(String, String)> {
    check_city_blocks(blocks)?;

    let buildings = format!("{}f", "f5".repeat(blocks - 1));
    let streets = format!("{}a", "a0".repeat(blocks - 1));
    let mut rows = Vec::with_capacity(2 * blocks - 1);
    for _ in 0..blocks - 1 {
        rows.push(buildings.clone());
        rows.push(streets.clone());
    }
    rows.push(buildings);

    let endpoints = format!("({},{}) ({},{})", blocks, blocks, NO_LOC.0, NO_LOC.1);
    Ok((rows.join("\n"), endpoints))
}

/// Coordonnées des immeubles : une case sur deux, sur les `x` et `y` impairs.
pub fn city_buildings(blocks: usize) -> Result<Vec<Location>> {
    check_city_blocks(blocks)?;
    let side = 2 * blocks as i32;
    let mut buildings = Vec::with_capacity(blocks * blocks);
    for x in (1..side).step_by(2) {
        for y in (1..side).step_by(2) {
            buildings.push((x, y));
        }
    }
    Ok(buildings)
}

/// Redessine les immeubles ; à rappeler après chaque `Maze::reset`.
pub fn draw_buildings(maze: &mut Maze, buildings: &[Location]) -> Result<()> {
    for &loc in buildings {
        maze.mark(loc, Marker::Obstacle)?;
    }
    Ok(())
}

/// Construit la ville et dessine ses immeubles.
pub fn city(blocks: usize) -> Result<Maze> {
    let (config, endpoints) = city_config(blocks)?;
    let mut maze = Maze::new(&config, &endpoints)?;
    draw_buildings(&mut maze, &city_buildings(blocks)?)?;
    Ok(maze)
}
