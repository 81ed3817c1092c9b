//! Marche aléatoire auto-évitante et estimation du taux d'impasses.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{MazeError, Result};
use crate::marker::{Marker, SCENT};
use crate::maze::Maze;
use crate::Location;

/// Issue d'une marche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Le marcheur a quitté l'intérieur par `exit`.
    Escaped { steps: usize, exit: Location },
    /// Plus aucune case voisine sans odeur depuis `at`.
    DeadEnd { steps: usize, at: Location },
}

impl WalkOutcome {
    pub fn escaped(&self) -> bool {
        matches!(self, WalkOutcome::Escaped { .. })
    }

    pub fn steps(&self) -> usize {
        match *self {
            WalkOutcome::Escaped { steps, .. } | WalkOutcome::DeadEnd { steps, .. } => steps,
        }
    }
}

/// Statistiques agrégées sur plusieurs marches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    pub trials: usize,
    pub dead_ends: usize,
    /// Somme des pas des marches réussies.
    pub escape_steps: usize,
}

impl WalkStats {
    pub fn record(&mut self, outcome: &WalkOutcome) {
        self.trials += 1;
        match outcome {
            WalkOutcome::Escaped { steps, .. } => self.escape_steps += steps,
            WalkOutcome::DeadEnd { .. } => self.dead_ends += 1,
        }
    }

    /// Impasses / essais ; 0 sans essai.
    pub fn dead_end_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.dead_ends as f64 / self.trials as f64
    }

    /// Pourcentage entier (tronqué) d'impasses.
    pub fn dead_end_percent(&self) -> usize {
        if self.trials == 0 {
            return 0;
        }
        100 * self.dead_ends / self.trials
    }
}

/// Fait marcher un agent au hasard depuis le départ de `maze` jusqu'à ce qu'il
/// sorte de l'intérieur ou tombe dans une impasse.
///
/// L'agent emporte son marqueur `Agent` à chaque pas et laisse l'odeur
/// (`SCENT`) derrière lui ; il ne revient jamais sur une case odorante.
pub fn walk<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) -> Result<WalkOutcome> {
    let mut loc = maze
        .start()
        .ok_or_else(|| MazeError::Constraint("walk needs a start location".to_string()))?;
    maze.mark(loc, Marker::Agent)?;
    let mut steps = 0;

    while maze.contains(loc) {
        let moves = maze.possible_moves(loc, SCENT)?;
        let Some(&direction) = moves.choose(rng) else {
            debug!(at = ?loc, steps, "dead end");
            return Ok(WalkOutcome::DeadEnd { steps, at: loc });
        };

        let next = maze.make_move(loc, direction, true)?;
        maze.mark(loc, SCENT)?;
        loc = next;
        steps += 1;
    }

    debug!(exit = ?loc, steps, "escaped");
    Ok(WalkOutcome::Escaped { steps, exit: loc })
}

/// Lance `trials` marches indépendantes sur `maze`.
///
/// Avant chaque essai le labyrinthe est remis à zéro puis `redraw` est appelé
/// pour replacer les éléments permanents (immeubles, etc.) que `reset` efface.
pub fn simulate<R, F>(maze: &mut Maze, trials: usize, rng: &mut R, mut redraw: F) -> Result<WalkStats>
where
    R: Rng + ?Sized,
    F: FnMut(&mut Maze) -> Result<()>,
{
    let mut stats = WalkStats::default();
    for trial in 0..trials {
        maze.reset();
        redraw(maze)?;
        let outcome = walk(maze, rng)?;
        debug!(trial, ?outcome, "trial done");
        stats.record(&outcome);
    }
    info!(
        trials = stats.trials,
        dead_ends = stats.dead_ends,
        percent = stats.dead_end_percent(),
        "simulation done"
    );
    Ok(stats)
}
