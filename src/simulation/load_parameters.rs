// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde_yaml::from_reader;

use crate::config::Scenario;
use crate::math::Result;

/// シナリオの読み込み
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario> {
    let file = File::open(path)?;
    let scenario: Scenario = from_reader(file)?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldConfig, Scheme};
    use crate::math::SimError;

    #[test]
    fn test_load_bundled_scenario() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/scenario.yaml");
        let scenario = load_scenario(path).unwrap();
        assert!(scenario.dt > 0.0);
        assert_eq!(scenario.scheme, Scheme::AdamsBashforth);
        assert!(matches!(scenario.field, FieldConfig::Rotation { .. }));
        assert_eq!(
            scenario.initial_conditions.x.len(),
            scenario.initial_conditions.y.len()
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_scenario("config/does_not_exist.yaml").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let path = std::env::temp_dir().join(format!("trajsim_bad_{}.yaml", std::process::id()));
        std::fs::write(&path, "dt: [not a number\n").unwrap();
        let err = load_scenario(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, SimError::Yaml(_)));
    }
}
