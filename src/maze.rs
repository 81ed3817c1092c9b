/*!
 * # Module du labyrinthe
 *
 * Un labyrinthe est une grille 2D de cellules, entourée d'un anneau de bordure
 * synthétisé à la construction. Les coordonnées sont cartésiennes : `(0, 0)` est
 * le coin sud-ouest de la grille augmentée, `x` croît vers l'est et `y` vers le
 * nord. Le coin nord-est est `(width + 1, height + 1)`.
 *
 * Le texte de configuration liste les rangées du nord au sud : sa première
 * ligne est la rangée `y = height`, sa dernière la rangée `y = 1`.
 *
 * Les murs de deux cellules voisines ne sont pas forcés d'être d'accord, ce qui
 * permet des passages à sens unique.
 */

use tracing::debug;

use crate::cell::Cell;
use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::marker::Marker;
use crate::walls::Walls;
use crate::{Location, NO_LOC};

/// Carte du labyrinthe, stockée dans une grille dense `grid[x][y]`.
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    grid: Vec<Vec<Cell>>,
    start: Option<Location>,
    goal: Option<Location>,
}

/// Murs par défaut d'une cellule de bordure : seul le mur tourné vers
/// l'intérieur est posé, les quatre coins n'en ont aucun.
pub(crate) fn border_template(x: usize, y: usize, width: usize, height: usize) -> Walls {
    let west = x == 0;
    let east = x == width + 1;
    let south = y == 0;
    let north = y == height + 1;

    if (west || east) && (south || north) {
        return Walls::default();
    }
    Walls {
        north: south,
        east: west,
        south: north,
        west: east,
    }
}

/// Découpe la configuration en rangées rectangulaires.
fn parse_rows(config: &str) -> Result<Vec<Vec<char>>> {
    if config.is_empty() {
        return Err(MazeError::Config("empty wall configuration".to_string()));
    }
    let rows: Vec<Vec<char>> = config.lines().map(|line| line.chars().collect()).collect();

    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(MazeError::Config("first configuration row is empty".to_string()));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(MazeError::Config(format!(
            "row {} has {} cells, expected {}",
            i,
            row.len(),
            width
        )));
    }
    Ok(rows)
}

/// Lit un point "(x,y)" ; `(-1,-1)` signifie « pas de point ».
fn parse_location(token: &str) -> Result<Option<Location>> {
    let bad = || MazeError::Config(format!("malformed endpoint {:?}, expected (x,y)", token));

    let inner = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(bad)?;
    let (x, y) = inner.split_once(',').ok_or_else(bad)?;
    let x: i32 = x.parse().map_err(|_| bad())?;
    let y: i32 = y.parse().map_err(|_| bad())?;

    if (x, y) == NO_LOC {
        Ok(None)
    } else {
        Ok(Some((x, y)))
    }
}

impl Maze {
    /// Construit un labyrinthe à partir de la configuration des murs et des
    /// extrémités, par ex. `"(1,5) (4,0)"`.
    ///
    /// La construction est tout-ou-rien : aucune erreur ne laisse de labyrinthe
    /// partiellement construit.
    pub fn new(config: &str, endpoints: &str) -> Result<Self> {
        let rows = parse_rows(config)?;
        let height = rows.len();
        let width = rows[0].len();

        let mut grid = Vec::with_capacity(width + 2);
        for x in 0..width + 2 {
            let mut column = Vec::with_capacity(height + 2);
            for y in 0..height + 2 {
                let interior = (1..=width).contains(&x) && (1..=height).contains(&y);
                let cell = if interior {
                    Cell::new(rows[height - y][x - 1])?
                } else {
                    Cell::with_walls(border_template(x, y, width, height))
                };
                column.push(cell);
            }
            grid.push(column);
        }

        let mut maze = Self {
            width,
            height,
            grid,
            start: None,
            goal: None,
        };
        maze.reconcile_border();
        maze.place_endpoints(endpoints)?;

        debug!(width, height, start = ?maze.start, goal = ?maze.goal, "maze built");
        Ok(maze)
    }

    /// Aligne le mur intérieur de chaque cellule de bordure sur le mur
    /// extérieur de la cellule de bord correspondante.
    pub(crate) fn reconcile_border(&mut self) {
        let (w, h) = (self.width, self.height);
        let mut edges = Vec::with_capacity(2 * (w + h));
        for x in 1..=w {
            edges.push(((x, 0), Direction::North));
            edges.push(((x, h + 1), Direction::South));
        }
        for y in 1..=h {
            edges.push(((0, y), Direction::East));
            edges.push(((w + 1, y), Direction::West));
        }

        for ((x, y), inward) in edges {
            let (dx, dy) = inward.offset();
            let ix = (x as i32 + dx) as usize;
            let iy = (y as i32 + dy) as usize;
            let outward = self.grid[ix][iy].walls.get(inward.turn_back());
            self.grid[x][y].walls.set(inward, outward);
        }
    }

    fn place_endpoints(&mut self, endpoints: &str) -> Result<()> {
        // exactement une espace entre les deux points, aucune autre
        let (start, goal) = endpoints.split_once(' ').ok_or_else(|| {
            MazeError::Config(format!(
                "expected two endpoints like \"(1,5) (4,0)\", got {:?}",
                endpoints
            ))
        })?;
        self.start = parse_location(start)?;
        self.goal = parse_location(goal)?;

        for loc in [self.start, self.goal].into_iter().flatten() {
            self.check_endpoint(loc)?;
        }
        if let Some(loc) = self.start {
            self.mark(loc, Marker::Start)?;
        }
        if let Some(loc) = self.goal {
            self.mark(loc, Marker::Goal)?;
        }
        Ok(())
    }

    fn check_endpoint(&self, loc: Location) -> Result<()> {
        self.index(loc)?;
        let (x, y) = loc;
        let far_x = self.width as i32 + 1;
        let far_y = self.height as i32 + 1;
        if (x == 0 || x == far_x) && (y == 0 || y == far_y) {
            return Err(MazeError::Constraint(format!(
                "endpoint {:?} sits on a border corner",
                loc
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Option<Location> {
        self.start
    }

    pub fn goal(&self) -> Option<Location> {
        self.goal
    }

    /// Nombre de colonnes de la grille augmentée (bordure comprise).
    pub fn columns(&self) -> usize {
        self.width + 2
    }

    /// Nombre de rangées de la grille augmentée (bordure comprise).
    pub fn rows(&self) -> usize {
        self.height + 2
    }

    /// Vrai si `loc` est strictement à l'intérieur, bordure exclue.
    pub fn contains(&self, (x, y): Location) -> bool {
        x > 0 && x <= self.width as i32 && y > 0 && y <= self.height as i32
    }

    fn index(&self, loc: Location) -> Result<(usize, usize)> {
        let (x, y) = loc;
        if x < 0 || y < 0 || x as usize >= self.columns() || y as usize >= self.rows() {
            return Err(MazeError::OutOfBounds {
                location: loc,
                columns: self.columns(),
                rows: self.rows(),
            });
        }
        Ok((x as usize, y as usize))
    }

    /// Récupère une cellule en lecture seule.
    pub fn cell(&self, loc: Location) -> Result<&Cell> {
        let (x, y) = self.index(loc)?;
        Ok(&self.grid[x][y])
    }

    /// Pose `marker` dans la cellule `loc`.
    pub fn mark(&mut self, loc: Location, marker: Marker) -> Result<()> {
        let (x, y) = self.index(loc)?;
        self.grid[x][y].content = marker;
        Ok(())
    }

    /// Contenu de la cellule `loc`.
    pub fn get_mark(&self, loc: Location) -> Result<Marker> {
        Ok(self.cell(loc)?.content)
    }

    /// Vide toutes les cellules puis replace le départ et l'arrivée.
    ///
    /// Les murs ne sont pas touchés. Les marqueurs permanents posés après la
    /// construction (obstacles, etc.) disparaissent : c'est à l'appelant de les
    /// redessiner.
    pub fn reset(&mut self) {
        for cell in self.grid.iter_mut().flatten() {
            cell.content = Marker::Blank;
        }
        if let Some((x, y)) = self.start {
            self.grid[x as usize][y as usize].content = Marker::Start;
        }
        if let Some((x, y)) = self.goal {
            self.grid[x as usize][y as usize].content = Marker::Goal;
        }
    }

    /// Voisin atteint depuis `loc` dans `direction`, ou `None` si un mur
    /// bloque ou si le pas sortirait de la grille augmentée.
    fn neighbor(&self, loc: Location, direction: Direction) -> Result<Option<Location>> {
        if self.cell(loc)?.walls.get(direction) {
            return Ok(None);
        }
        let next = direction.step(loc);
        Ok(self.index(next).ok().map(|_| next))
    }

    /// Directions possibles depuis `loc` : pas de mur, et la destination ne
    /// porte pas déjà `visited`. Ordre fixe : nord, sud, est, ouest.
    pub fn possible_moves(&self, loc: Location, visited: Marker) -> Result<Vec<Direction>> {
        let mut moves = Vec::with_capacity(4);
        for direction in Direction::SEARCH_ORDER {
            if let Some(next) = self.neighbor(loc, direction)? {
                if self.get_mark(next)? != visited {
                    moves.push(direction);
                }
            }
        }
        Ok(moves)
    }

    /// Destination d'un pas depuis `loc` ; si un mur bloque, on reste sur place.
    ///
    /// Avec `commit`, le contenu de `loc` est déplacé vers la destination
    /// (la destination est écrasée, l'origine vidée). Sans `commit`, rien n'est
    /// modifié.
    pub fn make_move(&mut self, loc: Location, direction: Direction, commit: bool) -> Result<Location> {
        let next = self.neighbor(loc, direction)?.unwrap_or(loc);
        if commit {
            let content = self.get_mark(loc)?;
            self.mark(loc, Marker::Blank)?;
            self.mark(next, content)?;
        }
        Ok(next)
    }

    /// `make_move` sans effet de bord.
    pub fn simulate_move(&self, loc: Location, direction: Direction) -> Result<Location> {
        Ok(self.neighbor(loc, direction)?.unwrap_or(loc))
    }
}
