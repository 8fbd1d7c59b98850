//! Test utility functions for pipegen

#![allow(dead_code)]

use async_trait::async_trait;
use pipegen::core::{BlueGreenRecord, ConfigRecord, InputCollector, SimpleDeployRecord};
use pipegen::sink::{Clipboard, ClipboardError, OutputSink};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Clipboard that remembers every write
#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    /// The current clipboard content
    pub fn last(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always refuses
#[derive(Default)]
pub struct FailingClipboard {
    attempts: AtomicUsize,
}

impl FailingClipboard {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Clipboard for FailingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ClipboardError::Unsupported)
    }
}

/// Sink wired to a recording clipboard
pub fn recording_sink() -> (OutputSink, Arc<RecordingClipboard>) {
    let clipboard = Arc::new(RecordingClipboard::new());
    let sink = OutputSink::new(Some(clipboard.clone() as Arc<dyn Clipboard>));
    (sink, clipboard)
}

/// Read a golden file from tests/fixtures
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Build a record from YAML, panicking on bad test input
pub fn record_from_yaml<R: ConfigRecord>(yaml: &str) -> R {
    InputCollector::<R>::new()
        .with_yaml(yaml)
        .expect("test values should parse")
        .finish()
}

/// The Simple Deploy input used by the golden file
pub fn acme_simple() -> SimpleDeployRecord {
    record_from_yaml(
        r#"
dockerImage: "acme/app"
dockerCredsId: "dh-creds"
sshCredsId: "ssh-creds"
awsRegion: "us-east-1"
ssmSecretPath: "/app/secret/"
ssmConfigPath: "/app/config/"
appDir: "/srv/app"
logGroupName: "/aws/ec2/app"
"#,
    )
}

/// The Blue/Green Deploy input used by the golden file
pub fn acme_blue_green() -> BlueGreenRecord {
    record_from_yaml(
        r#"
dockerImage: "acme/api"
pythonAgent: "acme/python-agent:3.12"
coverage: "80"
awsRegion: "eu-central-1"
ssmPrefix: "/acme/prod"
albListenerArn: "arn:aws:elasticloadbalancing:eu-central-1:123456789012:listener/app/acme/abc/def"
albRuleArn: "arn:aws:elasticloadbalancing:eu-central-1:123456789012:listener-rule/app/acme/abc/def/ghi"
blueTgArn: "arn:aws:elasticloadbalancing:eu-central-1:123456789012:targetgroup/acme-blue/111"
greenTgArn: "arn:aws:elasticloadbalancing:eu-central-1:123456789012:targetgroup/acme-green/222"
blueIp: "10.0.1.10"
blueInstanceId: "i-0blue"
greenIp: "10.0.2.20"
greenInstanceId: "i-0green"
dockerCreds: "dockerhub"
sshCreds: "deploy-key"
slackCreds: "slack-webhook"
albDns: "acme-alb.eu-central-1.elb.amazonaws.com"
"#,
    )
}

/// Line numbers (1-based) where two documents differ
pub fn differing_lines(a: &str, b: &str) -> Vec<usize> {
    assert_eq!(
        a.lines().count(),
        b.lines().count(),
        "Documents should have the same number of lines"
    );
    a.lines()
        .zip(b.lines())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Assert that `document` has a line whose trimmed text is `expected`
pub fn assert_has_line(document: &str, expected: &str) {
    assert!(
        document.lines().any(|line| line.trim() == expected),
        "Expected a line '{}' in document",
        expected
    );
}
