//! Planning inputs stored as a TOML or JSON document

use std::fs;
use std::path::{Path, PathBuf};

use haulcalc_domain::model::PlanInputs;
use haulcalc_domain::repository::PlanRepository;
use haulcalc_types::{Error, Result};

use crate::FileFormat;

/// File holding `vehicleConfig`, `requests` and `routeDistances`
pub struct FilePlanRepository {
    path: PathBuf,
    format: FileFormat,
}

impl FilePlanRepository {
    pub fn new(path: PathBuf) -> Result<Self> {
        let format = FileFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, inputs: &PlanInputs) -> Result<()> {
        let content = match self.format {
            FileFormat::Toml => toml::to_string_pretty(inputs)?,
            FileFormat::Json => serde_json::to_string_pretty(inputs)?,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

pub(crate) fn parse_plan(content: &str, format: FileFormat) -> Result<PlanInputs> {
    Ok(match format {
        FileFormat::Toml => toml::from_str(content)?,
        FileFormat::Json => serde_json::from_str(content)?,
    })
}

impl PlanRepository for FilePlanRepository {
    fn load_plan(&self) -> Result<PlanInputs> {
        if !self.path.exists() {
            return Err(Error::FileNotFound(self.path.display().to_string()));
        }
        let content = fs::read_to_string(&self.path)?;
        let inputs = parse_plan(&content, self.format)?;
        tracing::debug!(
            path = %self.path.display(),
            requests = inputs.requests.len(),
            routes = inputs.route_distances.len(),
            "loaded planning inputs"
        );
        Ok(inputs)
    }
}
