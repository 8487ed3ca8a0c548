//! Golden availability scenarios from test-fixtures/golden/availability.

use chrono::{DateTime, Utc};
use rapport_core::models::{AgentContext, DataQuality, MissingField};
use rapport_validation::DataAvailabilityValidator;
use serde::Deserialize;
use test_fixtures::{list_fixtures, load_fixture};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Expected {
    data_quality: DataQuality,
    confidence_adjustment: f64,
    has_sufficient_data: bool,
    missing_fields: Vec<MissingField>,
}

#[derive(Deserialize)]
struct Scenario {
    description: String,
    now: DateTime<Utc>,
    context: AgentContext,
    expected: Expected,
}

#[test]
fn every_availability_scenario_matches() {
    let files = list_fixtures("golden/availability");
    assert!(files.len() >= 5, "expected availability scenarios, found {}", files.len());

    let validator = DataAvailabilityValidator::default();
    for file in files {
        let relative = format!(
            "golden/availability/{}",
            file.file_name().unwrap().to_string_lossy()
        );
        let scenario: Scenario = load_fixture(&relative);
        let report = validator.validate_at(&scenario.context, scenario.now);

        assert_eq!(report.data_quality, scenario.expected.data_quality, "{}", scenario.description);
        assert_eq!(
            report.confidence_adjustment, scenario.expected.confidence_adjustment,
            "{}",
            scenario.description
        );
        assert_eq!(
            report.has_sufficient_data, scenario.expected.has_sufficient_data,
            "{}",
            scenario.description
        );
        assert_eq!(report.missing_fields, scenario.expected.missing_fields, "{}", scenario.description);
    }
}
