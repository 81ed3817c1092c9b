//! Recherche d'itinéraire en largeur (BFS) et en profondeur (DFS).
//!
//! Les deux variantes partagent le même arbre de recherche : une arène de
//! nœuds adressés par indice, chaque nœud retenant son parent et l'action qui
//! y mène. Seule la discipline de la frontière change (FIFO ou LIFO).

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, info};

use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::marker::Marker;
use crate::maze::Maze;
use crate::Location;

/// Discipline de la frontière.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// On sort l'entrée la plus ancienne : chemin le plus court garanti.
    BreadthFirst,
    /// On sort l'entrée la plus récente.
    DepthFirst,
}

/// Un nœud de l'arbre de recherche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub state: Location,
    pub parent: Option<usize>,
    /// `None` pour la racine.
    pub action: Option<Direction>,
}

/// Arène des nœuds explorés.
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<TreeNode>,
}

impl SearchTree {
    fn push(&mut self, state: Location, parent: Option<usize>, action: Option<Direction>) -> usize {
        self.nodes.push(TreeNode {
            state,
            parent,
            action,
        });
        self.nodes.len() - 1
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: usize) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Remonte les parents depuis `id` jusqu'à la racine et renvoie les
    /// actions dans l'ordre de la racine vers `id`.
    pub fn directions_to(&self, id: usize) -> Vec<Direction> {
        let mut directions = Vec::new();
        let mut current = self.nodes.get(id);
        while let Some(node) = current {
            if let Some(action) = node.action {
                directions.push(action);
            }
            current = node.parent.and_then(|p| self.nodes.get(p));
        }
        directions.reverse();
        directions
    }
}

/// Itinéraire trouvé : point de départ et une direction par arête.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub start: Location,
    pub directions: Vec<Direction>,
    /// Nombre de cases explorées pendant la recherche (départ compris).
    pub explored: usize,
}

impl Route {
    /// Nombre d'arêtes.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Trace compacte, une lettre par pas (par ex. "ssseee").
    pub fn trace(&self) -> String {
        self.directions.iter().map(|d| d.letter()).collect()
    }

    /// Rejoue l'itinéraire sur `maze` sans le modifier et renvoie les cases
    /// traversées, départ compris. Un pas bloqué par un mur est une erreur.
    pub fn locations(&self, maze: &Maze) -> Result<Vec<Location>> {
        let mut loc = self.start;
        let mut visited = Vec::with_capacity(self.directions.len() + 1);
        visited.push(loc);
        for &direction in &self.directions {
            let next = maze.simulate_move(loc, direction)?;
            if next == loc {
                return Err(MazeError::Constraint(format!(
                    "route step {} from {:?} is blocked",
                    direction, loc
                )));
            }
            visited.push(next);
            loc = next;
        }
        Ok(visited)
    }
}

/// Résultat d'une recherche. L'absence de solution n'est pas une erreur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Route),
    NoSolution { explored: usize },
}

impl SearchOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NoSolution { .. } => None,
        }
    }
}

/// Moteur de recherche ; garde l'arbre de la dernière recherche.
#[derive(Debug, Clone)]
pub struct Searcher {
    strategy: Strategy,
    tree: SearchTree,
}

impl Searcher {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            tree: SearchTree::default(),
        }
    }

    /// Arbre construit par le dernier appel à `run`.
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Cherche un chemin du départ à l'arrivée de `maze`.
    ///
    /// Les cases explorées sont marquées `Explored`, celles en attente
    /// `Frontier`. Une case déjà explorée ou déjà dans la frontière n'y est
    /// jamais ajoutée deux fois.
    pub fn run(&mut self, maze: &mut Maze) -> Result<SearchOutcome> {
        let start = maze
            .start()
            .ok_or_else(|| MazeError::Constraint("search needs a start location".to_string()))?;
        let goal = maze.goal();

        self.tree = SearchTree::default();
        let mut frontier: VecDeque<usize> = VecDeque::new();

        maze.mark(start, Marker::Explored)?;
        let mut current = self.tree.push(start, None, None);
        let mut explored = 1;

        while Some(self.tree.nodes[current].state) != goal {
            let here = self.tree.nodes[current].state;

            for direction in maze.possible_moves(here, Marker::Explored)? {
                let next = maze.simulate_move(here, direction)?;
                if maze.get_mark(next)? == Marker::Frontier {
                    continue;
                }
                let id = self.tree.push(next, Some(current), Some(direction));
                frontier.push_back(id);
                maze.mark(next, Marker::Frontier)?;
            }
            debug!(?here, frontier = frontier.len(), "expanded");

            let picked = match self.strategy {
                Strategy::BreadthFirst => frontier.pop_front(),
                Strategy::DepthFirst => frontier.pop_back(),
            };
            let Some(next) = picked else {
                info!(strategy = ?self.strategy, explored, "no solution");
                return Ok(SearchOutcome::NoSolution { explored });
            };

            maze.mark(self.tree.nodes[next].state, Marker::Explored)?;
            explored += 1;
            current = next;
        }

        let route = Route {
            start,
            directions: self.tree.directions_to(current),
            explored,
        };
        info!(strategy = ?self.strategy, steps = route.len(), explored, "route found");
        Ok(SearchOutcome::Found(route))
    }
}

/// Recherche avec la stratégie donnée.
pub fn search(maze: &mut Maze, strategy: Strategy) -> Result<SearchOutcome> {
    Searcher::new(strategy).run(maze)
}

/// Recherche en largeur : itinéraire au plus petit nombre d'arêtes.
pub fn bfs(maze: &mut Maze) -> Result<SearchOutcome> {
    search(maze, Strategy::BreadthFirst)
}

/// Recherche en profondeur : un itinéraire valide, pas forcément le plus court.
pub fn dfs(maze: &mut Maze) -> Result<SearchOutcome> {
    search(maze, Strategy::DepthFirst)
}
