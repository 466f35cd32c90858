//! Repository adapters for persistence layer

use std::path::PathBuf;

use haulcalc_infra::persistence::{CsvRequestRepository, FilePlanRepository};
use haulcalc_types::Result;

use crate::config::Config;

/// Open the planning fixture from the configured fixtures directory
pub fn open_plan_repo(config: &Config) -> Result<FilePlanRepository> {
    FilePlanRepository::new(config.plan_fixture_path())
}

/// Open a planning fixture at a custom path (TOML or JSON)
pub fn open_plan_repo_at(path: PathBuf) -> Result<FilePlanRepository> {
    FilePlanRepository::new(path)
}

/// Open transport requests from CSV
pub fn open_request_repo(csv_path: PathBuf) -> CsvRequestRepository {
    CsvRequestRepository::new(csv_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_plan_repo_follows_fixtures_dir() {
        let config = Config {
            fixtures_dir: Some(PathBuf::from("/srv/haulcalc")),
            ..Config::default()
        };
        let repo = open_plan_repo(&config).unwrap();
        assert_eq!(repo.path(), Path::new("/srv/haulcalc/topographic.toml"));
    }

    #[test]
    fn test_plan_repo_rejects_unknown_extension() {
        assert!(open_plan_repo_at(PathBuf::from("plan.yaml")).is_err());
    }
}
