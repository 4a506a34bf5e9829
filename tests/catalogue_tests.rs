//! Catalogue construction tests
//!
//! End-to-end: configuration → engine → manifest of declared operations →
//! catalogue with per-entry visibility.

use apimask::catalogue::{Catalogue, OperationDescriptor};
use apimask::config::load_config_from_str;
use apimask::error::VisibilityError;
use apimask::visibility::VisibilityEngine;

const MANIFEST: &str = r#"
[
    { "group": "User", "name": "GetUser", "method": "GET", "path": "/users/{id}" },
    { "group": "User", "name": "SetUser", "method": "PUT", "path": "/users/{id}" },
    { "group": "WeatherForecast", "name": "GetWeatherForecast", "method": "GET", "path": "/weather" },
    { "group": "WeatherForecast", "name": "DeleteWeatherForecast", "method": "DELETE", "path": "/weather" },
    { "group": "Health" }
]
"#;

fn manifest() -> Vec<OperationDescriptor> {
    serde_json::from_str(MANIFEST).unwrap()
}

#[test]
fn test_manifest_parses() {
    let operations = manifest();
    assert_eq!(operations.len(), 5);
    assert_eq!(operations[0].group, "User");
    assert_eq!(operations[0].method.as_deref(), Some("GET"));
    // The health probe has no friendly name
    assert!(operations[4].name.is_none());
}

#[test]
fn test_catalogue_with_allow_list() {
    let config = load_config_from_str(
        r#"
[catalogue]
visible_items = ["User.*", "WeatherForecast.Get*"]
"#,
    )
    .unwrap();
    let engine = VisibilityEngine::from_config(&config.catalogue);

    let catalogue = Catalogue::build(&engine, manifest()).unwrap();

    assert_eq!(catalogue.len(), 5);
    assert_eq!(catalogue.visible_count(), 3);

    let hidden: Vec<_> = catalogue
        .hidden()
        .map(|entry| {
            (
                entry.operation.group.as_str(),
                entry.operation.name.as_deref(),
            )
        })
        .collect();
    assert_eq!(
        hidden,
        vec![
            ("WeatherForecast", Some("DeleteWeatherForecast")),
            ("Health", None),
        ]
    );
}

#[test]
fn test_catalogue_with_deny_list() {
    let engine = VisibilityEngine::new(Vec::<String>::new(), ["WeatherForecast.Delete*"]);
    let catalogue = Catalogue::build(&engine, manifest()).unwrap();

    assert_eq!(catalogue.visible_count(), 4);
    let hidden: Vec<_> = catalogue.hidden().collect();
    assert_eq!(
        hidden[0].operation.name.as_deref(),
        Some("DeleteWeatherForecast")
    );
}

#[test]
fn test_unnamed_operation_hidden_by_group_scoped_mask() {
    // Health has no operation name; a deny mask with an operation half
    // still hides it through the group-only fallback
    let engine = VisibilityEngine::new(Vec::<String>::new(), ["Health.Get*"]);
    let catalogue = Catalogue::build(&engine, manifest()).unwrap();

    let hidden: Vec<_> = catalogue.hidden().collect();
    assert_eq!(hidden.len(), 1);
    assert_eq!(hidden[0].operation.group, "Health");
}

#[test]
fn test_catalogue_build_aborts_on_contract_violation() {
    let engine = VisibilityEngine::allow_all();
    let operations = vec![
        OperationDescriptor::new("User").with_name("GetUser"),
        OperationDescriptor::new(""),
    ];

    assert!(matches!(
        Catalogue::build(&engine, operations),
        Err(VisibilityError::MissingGroupName)
    ));
}

#[test]
fn test_catalogue_serializes_with_visibility_flags() {
    let engine = VisibilityEngine::new(["User.*"], Vec::<String>::new());
    let catalogue = Catalogue::build(&engine, manifest()).unwrap();

    let json = serde_json::to_value(&catalogue).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["group"], "User");
    assert_eq!(entries[0]["visible"], true);
    assert_eq!(entries[2]["visible"], false);
    // Absent optional fields are omitted from the output
    assert!(entries[4].get("name").is_none());
}
