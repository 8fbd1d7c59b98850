use crate::helpers::*;
use pipegen::core::{ConfigRecord, SimpleDeployRecord};
use pipegen::template::{self, target_var};

#[test]
fn test_value_with_placeholder_syntax_is_not_expanded() {
    let mut record = acme_simple();
    record.set_field("dockerImage", "{{ awsRegion }}").unwrap();

    let document = template::render(&record);
    assert_has_line(document.as_str(), r#"DOCKER_HUB_IMAGE = "{{ awsRegion }}""#);
}

#[test]
fn test_value_with_pipeline_reference_is_inserted_verbatim() {
    let mut record = acme_simple();
    record.set_field("appDir", "${HOME}/app").unwrap();

    let document = template::render(&record);
    assert_has_line(document.as_str(), r#"YOMU_APP_DIR = "${HOME}/app""#);
}

#[test]
fn test_pipeline_references_survive_any_input() {
    let hostile = SimpleDeployRecord {
        docker_image: "}}${".to_string(),
        aws_region: "{{".to_string(),
        ..acme_simple()
    };
    let baseline = template::render(&SimpleDeployRecord::default());
    let document = template::render(&hostile);

    let references = |text: &str| text.matches(&target_var("env.BUILD_NUMBER")).count();
    assert_eq!(references(document.as_str()), references(baseline.as_str()));
    assert!(references(baseline.as_str()) > 0);
}

#[test]
fn test_values_are_not_trimmed_or_escaped() {
    let mut record = acme_simple();
    record.set_field("logGroupName", "  spaced \"quoted\"  ").unwrap();

    let document = template::render(&record);
    assert!(document.as_str().contains("  spaced \"quoted\"  "));
}
