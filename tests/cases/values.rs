use crate::helpers::*;
use pipegen::core::{BlueGreenRecord, InputCollector, SimpleDeployRecord};
use pipegen::template;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_values_file_then_overrides() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "dockerImage: acme/app").unwrap();
    writeln!(file, "awsRegion: us-east-1").unwrap();

    let overrides = vec![("awsRegion".to_string(), "eu-west-1".to_string())];
    let record = InputCollector::<SimpleDeployRecord>::new()
        .with_file(file.path())
        .unwrap()
        .with_overrides(&overrides)
        .unwrap()
        .finish();

    assert_eq!(record.docker_image, "acme/app");
    assert_eq!(record.aws_region, "eu-west-1");
    assert_eq!(record.app_dir, "");
}

#[test]
fn test_json_values_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"coverage": 80, "awsRegion": "eu-central-1"}}"#).unwrap();

    let record = InputCollector::<BlueGreenRecord>::new()
        .with_file(file.path())
        .unwrap()
        .finish();

    let document = template::render(&record);
    assert_has_line(document.as_str(), "COVERAGE_THRESHOLD = '80'");
    assert_has_line(document.as_str(), "AWS_REGION         = 'eu-central-1'");
}

#[test]
fn test_unknown_key_in_values_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "coverage: 80").unwrap();

    let result = InputCollector::<SimpleDeployRecord>::new().with_file(file.path());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("coverage"), "unexpected error: {}", message);
}

#[test]
fn test_missing_values_file_is_an_error() {
    let result = InputCollector::<SimpleDeployRecord>::new().with_file("/nonexistent/values.yaml");
    assert!(result.is_err());
}

#[test]
fn test_partial_values_render_with_empty_fields() {
    let record: SimpleDeployRecord = record_from_yaml("dockerImage: acme/app\n");
    let document = template::render(&record);

    assert_has_line(document.as_str(), r#"DOCKER_HUB_IMAGE = "acme/app""#);
    assert_has_line(document.as_str(), r#"AWS_REGION = """#);
}
