use crate::systems::{Glicko, Glicko2, RatingSystem};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug)]
pub struct SystemParams {
    pub method: String,
    pub params: Vec<f64>,
}

#[derive(Deserialize, Debug)]
pub struct SystemConfig {
    pub system: SystemParams,
}

impl SystemConfig {
    pub fn from_file(source: impl AsRef<Path>) -> Self {
        // Use json5 instead of serde_json to correctly parse f64::INFINITY
        let params_json = std::fs::read_to_string(source).expect("Failed to read parameters file");
        json5::from_str(&params_json).expect("Failed to parse params as JSON")
    }

    /// Builds the configured engine, falling back to each system's
    /// defaults when `params` is empty.
    pub fn rating_system(&self) -> Result<Box<dyn RatingSystem + Send>, String> {
        tracing::info!("Loading rating system:\n{:?}", self);
        match self.system.method.as_str() {
            "glicko" => Ok(Box::new(match self.system.params.first() {
                Some(&c) => Glicko { c },
                None => Glicko::default(),
            })),
            "glicko2" => Ok(Box::new(match self.system.params.first() {
                Some(&tau) => Glicko2 { tau },
                None => Glicko2::default(),
            })),
            name => Err(format!(
                "{} is not a valid rating system. Must be one of: glicko, glicko2",
                name
            )),
        }
    }
}
