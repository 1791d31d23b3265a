use promptpix::config::Settings;
use promptpix::download::download_image;
use promptpix::error::{PromptpixError, Result};
use promptpix::fetch::ImageFetcher;
use promptpix::history::{HistoryEntry, HistoryStore};
use promptpix::store::{FileStore, KeyValueStore};
use url::Url;

fn settings(dir: &std::path::Path) -> Settings {
    Settings::new().with_data_dir(dir)
}

#[test]
fn missing_file_is_an_empty_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings(dir.path());
    let history = HistoryStore::open(FileStore::new(&settings.data_dir), &settings);
    assert!(history.is_empty());
}

#[test]
fn corrupted_file_is_discarded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings(dir.path());
    std::fs::write(dir.path().join("promptHistory.json"), "[{\"prompt\": ").expect("write");

    let mut history = HistoryStore::open(FileStore::new(&settings.data_dir), &settings);
    assert!(history.is_empty());

    // recording over a corrupted file replaces it with valid data
    history
        .record(HistoryEntry::now("fresh start", "https://example.org/a"))
        .expect("record");
    let reloaded = HistoryStore::open(FileStore::new(&settings.data_dir), &settings);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn clear_removes_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings(dir.path());
    let mut history = HistoryStore::open(FileStore::new(&settings.data_dir), &settings);
    history
        .record(HistoryEntry::now("temporary", "https://example.org/b"))
        .expect("record");
    assert!(dir.path().join("promptHistory.json").exists());

    history.clear().expect("clear");
    assert!(!dir.path().join("promptHistory.json").exists());
    assert!(history.load().is_empty());
}

#[test]
fn custom_key_and_limit_are_honoured() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings(dir.path()).with_history("shortHistory", 3);
    let mut history = HistoryStore::open(FileStore::new(&settings.data_dir), &settings);
    for n in 0..5 {
        history
            .record(HistoryEntry::now(format!("p{n}"), format!("https://example.org/{n}")))
            .expect("record");
    }
    assert_eq!(history.len(), 3);

    let store = history.into_store();
    let raw = store
        .get("shortHistory")
        .expect("read")
        .expect("persisted under the custom key");
    let persisted: Vec<HistoryEntry> = serde_json::from_str(&raw).expect("json");
    let prompts: Vec<&str> = persisted.iter().map(|e| e.prompt.as_str()).collect();
    assert_eq!(prompts, vec!["p4", "p3", "p2"]);
}

/// Serves a fixed PNG signature for any URL and remembers what was asked for.
#[derive(Default)]
struct RecordingFetcher {
    requested: std::sync::Mutex<Vec<String>>,
}

impl ImageFetcher for RecordingFetcher {
    async fn probe(&self, _url: &Url) -> Result<()> {
        Ok(())
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(url.to_string());
        }
        Ok(b"\x89PNG\r\n\x1a\n".to_vec())
    }
}

#[tokio::test]
async fn download_without_url_uses_the_newest_entry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings(dir.path());
    let mut history = HistoryStore::open(FileStore::new(&settings.data_dir), &settings);
    history
        .record(HistoryEntry::now("older", "https://example.org/older"))
        .expect("record");
    history
        .record(HistoryEntry::now("newer", "https://example.org/newer"))
        .expect("record");

    let reopened = HistoryStore::open(FileStore::new(&settings.data_dir), &settings);
    let url = reopened.latest_image_url().expect("latest url");
    assert_eq!(url.as_str(), "https://example.org/newer");

    let fetcher = RecordingFetcher::default();
    let out = dir.path().join("downloads");
    let path = download_image(&fetcher, &settings, &url, &out)
        .await
        .expect("download");
    assert!(path.starts_with(&out));
    let requested = fetcher.requested.lock().expect("lock").clone();
    assert_eq!(requested, vec!["https://example.org/newer".to_string()]);
}

#[test]
fn empty_history_has_nothing_to_download() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings(dir.path());
    let history = HistoryStore::open(FileStore::new(&settings.data_dir), &settings);
    assert!(matches!(
        history.latest_image_url(),
        Err(PromptpixError::NothingToDownload)
    ));
}
