use crate::helpers::*;
use pipegen::core::config::Settings;
use pipegen::sink::{Clipboard, CopyOutcome, OutputSink};
use pipegen::template;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_copy_puts_exact_text_on_clipboard() {
    let (mut sink, clipboard) = recording_sink();
    let shown = sink.show(template::render(&acme_simple())).clone();

    assert_eq!(sink.copy_to_clipboard().await, CopyOutcome::Copied);
    assert_eq!(clipboard.last().as_deref(), Some(shown.as_str()));
    assert_eq!(clipboard.last().unwrap(), fixture("simple_acme.Jenkinsfile"));
}

#[tokio::test]
async fn test_render_copy_twice_is_idempotent() {
    let (mut sink, clipboard) = recording_sink();
    let record = acme_blue_green();

    sink.show(template::render(&record));
    sink.copy_to_clipboard().await;
    sink.show(template::render(&record));
    sink.copy_to_clipboard().await;

    let writes = clipboard.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], writes[1]);
}

#[tokio::test]
async fn test_reset_empties_copy_and_download() {
    let (mut sink, clipboard) = recording_sink();
    let dir = TempDir::new().unwrap();

    sink.show(template::render(&acme_simple()));
    sink.reset();
    assert_eq!(sink.text(), "");

    assert_eq!(sink.copy_to_clipboard().await, CopyOutcome::Copied);
    assert_eq!(clipboard.last().as_deref(), Some(""));

    let path = sink.download_as_file(dir.path()).await.unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "");
}

#[tokio::test]
async fn test_download_writes_jenkinsfile() {
    let mut sink = OutputSink::new(None);
    let dir = TempDir::new().unwrap();
    sink.show(template::render(&acme_blue_green()));

    let path = sink.download_as_file(dir.path()).await.unwrap();
    assert_eq!(path, dir.path().join("Jenkinsfile"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        fixture("bluegreen_acme.Jenkinsfile")
    );
}

#[tokio::test]
async fn test_download_overwrites_and_creates_dirs() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("out").join("pipelines");
    let mut sink = OutputSink::new(None).with_filename("Jenkinsfile.simple");

    sink.show(template::render(&acme_simple()));
    sink.download_as_file(&nested).await.unwrap();
    sink.show(template::render(&pipegen::core::SimpleDeployRecord::default()));
    let path = sink.download_as_file(&nested).await.unwrap();

    assert_eq!(path, nested.join("Jenkinsfile.simple"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        fixture("simple_empty.Jenkinsfile")
    );
}

#[tokio::test]
async fn test_clipboard_failure_is_reported_not_raised() {
    let clipboard = Arc::new(FailingClipboard::default());
    let mut sink = OutputSink::new(Some(clipboard.clone() as Arc<dyn Clipboard>));
    sink.show(template::render(&acme_simple()));

    assert_eq!(sink.copy_to_clipboard().await, CopyOutcome::Failed);
    assert_eq!(clipboard.attempts(), 1);
    // The document is still there after a failed copy
    assert_eq!(sink.text(), fixture("simple_acme.Jenkinsfile"));
}

#[tokio::test]
async fn test_sink_from_settings_without_clipboard() {
    let settings = Settings::from_yaml("clipboard:\n  enabled: false\n").unwrap();
    let mut sink = OutputSink::from_settings(&settings);
    sink.show(template::render(&acme_simple()));

    assert!(!sink.can_copy());
    assert_eq!(sink.copy_to_clipboard().await, CopyOutcome::Unavailable);
}
