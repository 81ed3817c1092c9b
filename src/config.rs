//! Configuration de la simulation de marche dans une ville

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MazeError, Result};
use crate::layouts;
use crate::maze::Maze;
use crate::walk::{self, WalkStats};

/// Paramètres de la simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Pâtés de maisons par côté (pair, entre 2 et 20)
    pub blocks: usize,
    /// Nombre de marches
    pub trials: usize,
    /// Graine fixe ; sinon le générateur du thread
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            blocks: 4,
            trials: 20,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Lit une configuration JSON ; les champs absents prennent leur valeur par défaut.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| MazeError::Config(format!("simulation config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            warn!("rejected simulation config with zero trials");
            return Err(MazeError::Constraint("trials must be positive".to_string()));
        }
        layouts::city_config(self.blocks).map(|_| ())
    }

    /// Construit la ville et lance les marches, en redessinant les immeubles
    /// avant chaque essai.
    pub fn run(&self) -> Result<WalkStats> {
        self.validate()?;
        let mut city = layouts::city(self.blocks)?;
        let buildings = layouts::city_buildings(self.blocks)?;
        let redraw = |maze: &mut Maze| layouts::draw_buildings(maze, &buildings);

        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                walk::simulate(&mut city, self.trials, &mut rng, redraw)
            }
            None => walk::simulate(&mut city, self.trials, &mut rand::rng(), redraw),
        }
    }
}
