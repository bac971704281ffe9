//! Loading board data from JSON or TOML files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::conflict::Conflict;
use crate::error::{CrewCheckError, CrewCheckResult};
use crate::event::{BenchStaff, Event};
use crate::schedule::Schedule;

/// Mock board shipped with the crate.
static BUNDLED_DATASET: &str = include_str!("../fixtures/mock_data.json");

/// On-disk layout of a board dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub events: Vec<Event>,
    #[serde(default)]
    pub conflicts: Vec<Conflict>,
    /// Staff available to cover a conflict
    #[serde(default)]
    pub bench: Vec<BenchStaff>,
}

impl Dataset {
    /// The mock dataset compiled into the crate.
    pub fn bundled() -> CrewCheckResult<Self> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// Load a dataset, picking the format from the file extension.
    pub fn load(path: &Path) -> CrewCheckResult<Self> {
        if !path.exists() {
            return Err(CrewCheckError::DatasetNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let content = std::fs::read_to_string(path)?;
        let dataset = match extension.as_str() {
            "json" => Self::from_json_str(&content)?,
            "toml" => Self::from_toml_str(&content)?,
            other => return Err(CrewCheckError::UnsupportedFormat(other.to_string())),
        };

        debug!(
            path = %path.display(),
            events = dataset.events.len(),
            conflicts = dataset.conflicts.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn from_json_str(content: &str) -> CrewCheckResult<Self> {
        serde_json::from_str(content).map_err(|e| CrewCheckError::Parse(e.to_string()))
    }

    pub fn from_toml_str(content: &str) -> CrewCheckResult<Self> {
        toml::from_str(content).map_err(|e| CrewCheckError::Parse(e.to_string()))
    }

    /// Build the queryable schedule, logging any data defects.
    pub fn into_schedule(self) -> Schedule {
        let schedule = Schedule::new(self.events, self.conflicts).with_bench(self.bench);
        for issue in schedule.validate() {
            warn!("{issue}");
        }
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dataset_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let dataset = Dataset::bundled().expect("bundled dataset should parse");
        assert!(!dataset.events.is_empty());
        assert!(!dataset.conflicts.is_empty());

        let schedule = dataset.into_schedule();
        for conflict in schedule.conflicts() {
            assert!(
                schedule.contains(&conflict.event1),
                "dangling {}",
                conflict.event1
            );
            assert!(
                schedule.contains(&conflict.event2),
                "dangling {}",
                conflict.event2
            );
        }
    }

    #[test]
    fn test_load_toml_dataset() {
        let file = dataset_file(
            ".toml",
            r#"
[[events]]
id = 1
name = "Launch"
time = "09:00 - 10:00"
company = "Tech Corp"
staff = [{ name = "Sam", position = "Host" }]

[[events]]
id = "2"
name = "Gala"
time = "09:30 - 11:00"
company = "Retail Co"

[[conflicts]]
event1 = 1
event2 = "2"
person = "Sam"
"#,
        );

        let schedule = Dataset::load(file.path()).unwrap().into_schedule();
        let gala = schedule.event(&EventId::new("2")).unwrap();
        assert_eq!(schedule.events().len(), 2);
        assert_eq!(schedule.conflict_count(&gala.id), 1);
        assert!(gala.staff.is_empty());
    }

    #[test]
    fn test_load_json_dataset() {
        let file = dataset_file(
            ".json",
            r#"{
                "events": [
                    {
                        "id": 1,
                        "name": "Launch",
                        "time": "09:00 - 10:00",
                        "company": "Tech Corp",
                        "staff": []
                    }
                ]
            }"#,
        );

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.events.len(), 1);
        assert!(dataset.conflicts.is_empty());
        assert!(dataset.bench.is_empty());
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = dataset_file(".csv", "id,name\n");
        assert!(matches!(
            Dataset::load(file.path()),
            Err(CrewCheckError::UnsupportedFormat(ext)) if ext == "csv"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Dataset::load(&missing),
            Err(CrewCheckError::DatasetNotFound(_))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            Dataset::from_json_str("{\"events\": 3}"),
            Err(CrewCheckError::Parse(_))
        ));
    }
}
