//! Integration tests for host environment resolution

use chart_embed::core::types::{EnvironmentLabel, HostContext, HostName};
use chart_embed::host::resolve;

#[test]
fn test_full_label_catalog() {
    let cases: Vec<(HostContext, EnvironmentLabel)> = vec![
        (HostContext::standalone(true), EnvironmentLabel::LocalSharePoint),
        (HostContext::standalone(false), EnvironmentLabel::SharePoint),
        (
            HostContext::embedded(HostName::Office, true),
            EnvironmentLabel::LocalOffice,
        ),
        (
            HostContext::embedded(HostName::Office, false),
            EnvironmentLabel::Office,
        ),
        (
            HostContext::embedded(HostName::Outlook, true),
            EnvironmentLabel::LocalOutlook,
        ),
        (
            HostContext::embedded(HostName::Outlook, false),
            EnvironmentLabel::Outlook,
        ),
        (
            HostContext::embedded(HostName::Teams, true),
            EnvironmentLabel::LocalTeams,
        ),
        (
            HostContext::embedded(HostName::Teams, false),
            EnvironmentLabel::Teams,
        ),
        (
            HostContext::embedded(HostName::TeamsModern, true),
            EnvironmentLabel::LocalTeams,
        ),
        (
            HostContext::embedded(HostName::TeamsModern, false),
            EnvironmentLabel::Teams,
        ),
        (
            HostContext::embedded(HostName::Other("Kiosk".to_string()), false),
            EnvironmentLabel::Unknown,
        ),
        (
            HostContext::embedded(HostName::Other("Kiosk".to_string()), true),
            EnvironmentLabel::Unknown,
        ),
    ];

    for (context, expected) in cases {
        assert_eq!(resolve(&context), expected, "context {:?}", context);
    }
}

#[test]
fn test_labels_round_trip_through_json() {
    let labels = [
        EnvironmentLabel::LocalSharePoint,
        EnvironmentLabel::SharePoint,
        EnvironmentLabel::LocalOffice,
        EnvironmentLabel::Office,
        EnvironmentLabel::LocalOutlook,
        EnvironmentLabel::Outlook,
        EnvironmentLabel::LocalTeams,
        EnvironmentLabel::Teams,
        EnvironmentLabel::Unknown,
    ];

    for label in labels {
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, format!("\"{}\"", label.as_str()));

        let parsed: EnvironmentLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, label);
    }
}

#[test]
fn test_every_label_has_a_description() {
    let labels = [
        EnvironmentLabel::LocalSharePoint,
        EnvironmentLabel::SharePoint,
        EnvironmentLabel::LocalOffice,
        EnvironmentLabel::Office,
        EnvironmentLabel::LocalOutlook,
        EnvironmentLabel::Outlook,
        EnvironmentLabel::LocalTeams,
        EnvironmentLabel::Teams,
        EnvironmentLabel::Unknown,
    ];

    for label in labels {
        assert!(label.description().starts_with("The app is running"));
    }
}

#[test]
fn test_host_context_deserializes_from_host_payload() {
    // Shape the hosting shell hands over after its environment query
    let json = r#"{"host": "TeamsModern", "is_localhost": false}"#;
    let context: HostContext = serde_json::from_str(json).unwrap();
    assert_eq!(resolve(&context), EnvironmentLabel::Teams);

    let json = r#"{"host": null, "is_localhost": true}"#;
    let context: HostContext = serde_json::from_str(json).unwrap();
    assert_eq!(resolve(&context), EnvironmentLabel::LocalSharePoint);
}

#[test]
fn test_resolution_never_affects_validation() {
    use chart_embed::config::{validate_settings, EmbedSettings};

    let settings = EmbedSettings::new("acme.us", "abc", "3fa85f64-5717-4562-b3fc-2c963f66afa6", "obj1");
    let before = validate_settings(&settings);

    // Resolving any number of contexts between validation calls changes nothing
    let _ = resolve(&HostContext::standalone(true));
    let _ = resolve(&HostContext::embedded(HostName::Other("X".to_string()), false));

    let after = validate_settings(&settings);
    assert_eq!(before, after);
}
