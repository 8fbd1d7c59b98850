use crate::helpers::*;
use pipegen::core::{ConfigRecord, SimpleDeployRecord};
use pipegen::template::{self, builtin};
use std::collections::BTreeSet;

#[test]
fn test_region_change_only_touches_region_lines() {
    let base = acme_simple();
    let mut changed = base.clone();
    changed.set_field("awsRegion", "ap-south-1").unwrap();

    let before = template::render(&base);
    let after = template::render(&changed);
    let lines = differing_lines(before.as_str(), after.as_str());

    assert!(!lines.is_empty());
    let after_lines: Vec<&str> = after.as_str().lines().collect();
    for line in lines {
        assert!(
            after_lines[line - 1].contains("ap-south-1"),
            "Line {} changed without containing the region",
            line
        );
    }
}

#[test]
fn test_each_simple_field_reaches_the_output() {
    let base = acme_simple();
    for spec in SimpleDeployRecord::FIELDS {
        let mut changed = base.clone();
        changed.set_field(spec.name, "zz-marker-zz").unwrap();
        let document = template::render(&changed);
        assert!(
            document.as_str().contains("zz-marker-zz"),
            "Field {} never appears in the output",
            spec.name
        );
    }
}

#[test]
fn test_each_blue_green_template_field_reaches_the_output() {
    let base = acme_blue_green();
    let used: BTreeSet<&str> = builtin::BLUE_GREEN.field_names().collect();
    for name in ["dockerImage", "pythonAgent", "awsRegion", "dockerCreds", "sshCreds"] {
        assert!(used.contains(name), "{} is not in the template", name);
    }

    for name in used {
        let mut changed = base.clone();
        changed.set_field(name, "zz-marker-zz").unwrap();
        let document = template::render(&changed);
        assert!(
            document.as_str().contains("zz-marker-zz"),
            "Field {} never appears in the output",
            name
        );
    }
}

#[test]
fn test_coverage_change_only_touches_coverage_line() {
    let base = acme_blue_green();
    let mut changed = base.clone();
    changed.set_field("coverage", "95").unwrap();

    let lines = differing_lines(
        template::render(&base).as_str(),
        template::render(&changed).as_str(),
    );
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_collected_only_fields_do_not_change_output() {
    let base = acme_blue_green();
    let mut changed = base.clone();
    changed.set_field("blueIp", "192.168.0.1").unwrap();
    changed.set_field("albDns", "other.example.com").unwrap();

    assert_eq!(template::render(&base), template::render(&changed));
}
