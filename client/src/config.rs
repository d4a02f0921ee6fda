use std::{fs, path::Path, time::Duration};

use anyhow::{Context, ensure};
use liblife::BoardSize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub display_width: u32,  // Window width in pixels.
    pub display_height: u32, // Window height in pixels.
    pub cell_size: u32,      // Side of one cell in pixels, grid line included.
    pub speed: u32,          // Generations per second.
    pub target_fps: u64,
    pub seed: Option<u64>,
    pub randomize: bool,
    pub parallel: bool, // Step on the rayon pool instead of the calling thread.
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_width: 640,
            display_height: 480,
            cell_size: 10,
            speed: 10,
            target_fps: 30,
            seed: None,
            randomize: true,
            parallel: false,
        }
    }
}

impl Config {
    pub fn load<P>(path: Option<P>) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config = match path {
            Some(path) => {
                let path = path.as_ref();
                let config_serialized = fs::read(path)
                    .with_context(|| format!("Reading config {}", path.display()))?;
                serde_json::from_slice(&config_serialized)
                    .with_context(|| format!("Deserializing config {}", path.display()))?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be at least 1");
        ensure!(self.speed > 0, "speed must be at least 1 generation per second");
        ensure!(self.target_fps > 0, "target_fps must be at least 1");
        Ok(())
    }

    pub fn board_size(&self) -> anyhow::Result<BoardSize> {
        BoardSize::from_display(self.display_width, self.display_height, self.cell_size)
            .context("Computing board size")
    }
}

pub fn tick_interval(speed: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(speed.max(1)))
}
