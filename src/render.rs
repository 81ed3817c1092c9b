/*!
 * # Module de visualisation du labyrinthe
 *
 * Ce module convertit un `Maze` en représentation ASCII, bordure comprise.
 *
 * Chaque rangée produit deux lignes : le contenu des cellules entrecoupé des
 * murs est, puis la ligne des murs sud. Quand deux cellules voisines ne sont pas
 * d'accord sur leur mur commun, un glyphe asymétrique est utilisé :
 * - `<` : seule la cellule de gauche voit un mur
 * - `>` : seule la cellule de droite voit un mur
 * - `^` : seule la cellule du dessus voit un mur
 * - `v` : seule la cellule du dessous voit un mur
 */

use std::fmt;

use crate::marker::Marker;
use crate::maze::Maze;

impl Marker {
    /// Glyphe utilisé pour afficher ce contenu.
    pub fn glyph(self) -> char {
        match self {
            Marker::Blank => ' ',
            Marker::Start => 's',
            Marker::Goal => 'g',
            Marker::Obstacle => '#',
            Marker::Explored => '*',
            Marker::Frontier => 'f',
            Marker::Agent => '@',
        }
    }
}

/// Glyphe du mur vertical entre deux cellules voisines (gauche, droite).
///
/// # Arguments
///
/// * `left_east` - la cellule de gauche a un mur à l'est.
/// * `right_west` - la cellule de droite a un mur à l'ouest.
pub fn vertical_wall_glyph(left_east: bool, right_west: bool) -> char {
    match (left_east, right_west) {
        (true, true) => '|',
        (true, false) => '<',
        (false, true) => '>',
        (false, false) => ' ',
    }
}

/// Glyphe du mur horizontal entre deux cellules voisines (dessus, dessous).
///
/// # Arguments
///
/// * `upper_south` - la cellule du dessus a un mur au sud.
/// * `lower_north` - la cellule du dessous a un mur au nord.
pub fn horizontal_wall_glyph(upper_south: bool, lower_north: bool) -> char {
    match (upper_south, lower_north) {
        (true, true) => '-',
        (true, false) => '^',
        (false, true) => 'v',
        (false, false) => ' ',
    }
}

/// Génère la représentation ASCII d'une rangée `y` (et de son mur sud, sauf
/// pour la bordure sud).
fn render_row(maze: &Maze, y: usize, out: &mut String) -> fmt::Result {
    let last = maze.columns() - 1;
    let cell = |x: usize, y: usize| maze.cell((x as i32, y as i32)).map_err(|_| fmt::Error);

    for x in 0..last {
        let here = cell(x, y)?;
        let east = cell(x + 1, y)?;
        out.push(here.content.glyph());
        out.push(vertical_wall_glyph(here.walls.east, east.walls.west));
    }
    out.push(cell(last, y)?.content.glyph());
    out.push('\n');

    if y == 0 {
        return Ok(());
    }

    for x in 0..last {
        let here = cell(x, y)?;
        let below = cell(x, y - 1)?;
        out.push(horizontal_wall_glyph(here.walls.south, below.walls.north));
        out.push('+');
    }
    out.push_str(" \n");
    Ok(())
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        // Du nord (en haut) vers le sud
        for y in (0..self.rows()).rev() {
            render_row(self, y, &mut out)?;
        }
        f.write_str(&out)
    }
}
