use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;

use rusty_maze::{bfs, dfs, Direction, Location, Marker, Maze};

fn config_from_digits(digits: &[u8], width: usize) -> String {
    digits
        .chunks(width)
        .map(|row| row.iter().map(|d| format!("{:x}", d)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Labyrinthe rectangulaire aléatoire (murs quelconques, sans extrémités).
fn arb_config() -> impl Strategy<Value = String> {
    (1usize..7, 1usize..7).prop_flat_map(|(width, height)| {
        proptest::collection::vec(0u8..16, width * height)
            .prop_map(move |digits| config_from_digits(&digits, width))
    })
}

/// Labyrinthe aléatoire avec deux points quelconques de la grille augmentée.
fn arb_maze_with_endpoints() -> impl Strategy<Value = (String, Location, Location)> {
    (1usize..7, 1usize..7).prop_flat_map(|(width, height)| {
        let columns = width as i32 + 2;
        let rows = height as i32 + 2;
        (
            proptest::collection::vec(0u8..16, width * height),
            (0..columns, 0..rows),
            (0..columns, 0..rows),
        )
            .prop_map(move |(digits, start, goal)| (config_from_digits(&digits, width), start, goal))
    })
}

fn is_corner(maze: &Maze, (x, y): Location) -> bool {
    let far_x = maze.columns() as i32 - 1;
    let far_y = maze.rows() as i32 - 1;
    (x == 0 || x == far_x) && (y == 0 || y == far_y)
}

/// Distance minimale calculée sans passer par les marqueurs du labyrinthe.
fn shortest_distance(maze: &Maze) -> Option<usize> {
    let start = maze.start()?;
    let goal = maze.goal()?;
    let mut dist: HashMap<Location, usize> = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(loc) = queue.pop_front() {
        if loc == goal {
            return dist.get(&loc).copied();
        }
        for d in Direction::SEARCH_ORDER {
            let next = maze.simulate_move(loc, d).unwrap();
            if next != loc && !dist.contains_key(&next) {
                dist.insert(next, dist[&loc] + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::SEARCH_ORDER.to_vec())
}

fn snapshot(maze: &Maze) -> Vec<Marker> {
    let mut marks = Vec::new();
    for x in 0..maze.columns() as i32 {
        for y in 0..maze.rows() as i32 {
            marks.push(maze.get_mark((x, y)).unwrap());
        }
    }
    marks
}

proptest! {
    #[test]
    fn contains_is_strict_interior(config in arb_config(), x in -2i32..10, y in -2i32..10) {
        let maze = Maze::new(&config, "(-1,-1) (-1,-1)").unwrap();
        let inside = x >= 1 && x <= maze.width() as i32 && y >= 1 && y <= maze.height() as i32;
        prop_assert_eq!(maze.contains((x, y)), inside);
    }

    #[test]
    fn uncommitted_move_is_pure_and_idempotent(
        config in arb_config(),
        x in 0i32..8,
        y in 0i32..8,
        direction in arb_direction(),
    ) {
        let mut maze = Maze::new(&config, "(-1,-1) (-1,-1)").unwrap();
        let loc = (x % maze.columns() as i32, y % maze.rows() as i32);
        maze.mark(loc, Marker::Agent).unwrap();
        let before = snapshot(&maze);

        let first = maze.make_move(loc, direction, false).unwrap();
        let second = maze.make_move(loc, direction, false).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(maze.simulate_move(loc, direction).unwrap(), first);
        prop_assert_eq!(snapshot(&maze), before);
    }

    #[test]
    fn possible_moves_agree_with_moves(config in arb_config(), x in 0i32..8, y in 0i32..8) {
        let maze = Maze::new(&config, "(-1,-1) (-1,-1)").unwrap();
        let loc = (x % maze.columns() as i32, y % maze.rows() as i32);
        let moves = maze.possible_moves(loc, Marker::Explored).unwrap();
        for direction in Direction::SEARCH_ORDER {
            let moved = maze.simulate_move(loc, direction).unwrap() != loc;
            prop_assert_eq!(moves.contains(&direction), moved);
        }
    }

    #[test]
    fn reset_restores_blank_grid(config in arb_config(), marks in proptest::collection::vec((0i32..8, 0i32..8), 0..20)) {
        let mut maze = Maze::new(&config, "(-1,-1) (-1,-1)").unwrap();
        let pristine = snapshot(&maze);
        for (x, y) in marks {
            let loc = (x % maze.columns() as i32, y % maze.rows() as i32);
            maze.mark(loc, Marker::Obstacle).unwrap();
        }
        maze.reset();
        prop_assert_eq!(snapshot(&maze), pristine);
    }

    #[test]
    fn searches_and_reset_with_random_endpoints((config, start, goal) in arb_maze_with_endpoints()) {
        let blank = Maze::new(&config, "(-1,-1) (-1,-1)").unwrap();
        prop_assume!(start != goal && !is_corner(&blank, start) && !is_corner(&blank, goal));

        let endpoints = format!("({},{}) ({},{})", start.0, start.1, goal.0, goal.1);
        let maze = Maze::new(&config, &endpoints).unwrap();

        let expected = shortest_distance(&maze);
        let mut by_bfs = maze.clone();
        let found = bfs(&mut by_bfs).unwrap();
        prop_assert_eq!(found.route().map(|r| r.len()), expected);

        let mut by_dfs = maze.clone();
        let outcome = dfs(&mut by_dfs).unwrap();
        prop_assert_eq!(outcome.route().is_some(), expected.is_some());
        if let Some(route) = outcome.route() {
            let cells = route.locations(&by_dfs).unwrap();
            prop_assert_eq!(cells.first(), Some(&start));
            prop_assert_eq!(cells.last(), Some(&goal));
            let distinct: HashSet<Location> = cells.iter().copied().collect();
            prop_assert_eq!(distinct.len(), cells.len());
        }

        by_dfs.reset();
        for x in 0..by_dfs.columns() as i32 {
            for y in 0..by_dfs.rows() as i32 {
                let expected = if (x, y) == start {
                    Marker::Start
                } else if (x, y) == goal {
                    Marker::Goal
                } else {
                    Marker::Blank
                };
                prop_assert_eq!(by_dfs.get_mark((x, y)).unwrap(), expected);
            }
        }
    }
}
