/// Contenu sémantique d'une cellule.
///
/// Les glyphes d'affichage ne sont choisis qu'au moment du rendu (voir `render`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    #[default]
    Blank,
    Start,
    Goal,
    Obstacle,
    Explored,
    Frontier,
    Agent,
}

/// Odeur laissée par le marcheur aléatoire.
pub const SCENT: Marker = Marker::Explored;
