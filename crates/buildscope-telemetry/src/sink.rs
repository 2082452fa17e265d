//! Event sink adapters
//!
//! - `JsonFileSink` writes every event as a JSON file to a local directory
//!   (`~/.local/share/buildscope/events/` by default) for later upload.
//! - `MemorySink` keeps events in memory for embedding hosts and tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use buildscope_core::domain::TelemetryEvent;
use buildscope_core::ports::IEventSink;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event as persisted by [`JsonFileSink`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub id: String,
    pub timestamp: String,
    pub version: String,
    pub payload: TelemetryEvent,
}

impl EventEnvelope {
    pub fn new(event: TelemetryEvent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            payload: event,
        }
    }
}

/// Entry in the local event directory
#[derive(Debug, Clone)]
pub struct EventEntry {
    pub id: String,
    pub event_name: String,
    pub date: String,
    pub path: PathBuf,
}

/// Writes events to `<events_dir>/<event-name>-<date>-<uuid8>.json`.
pub struct JsonFileSink {
    events_dir: PathBuf,
}

impl JsonFileSink {
    /// Creates a sink writing into `events_dir`. The directory is created on first write.
    pub fn new(events_dir: PathBuf) -> Self {
        Self { events_dir }
    }

    /// Persist one event and return the path of the written file.
    pub fn save(&self, event: &TelemetryEvent) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.events_dir)?;

        let envelope = EventEnvelope::new(event.clone());
        let date = Utc::now().format("%Y%m%d");
        let short_id = &envelope.id[..8];
        let filename = format!("{}-{date}-{short_id}.json", event.name());
        let path = self.events_dir.join(filename);

        let json = serde_json::to_string_pretty(&envelope)?;
        std::fs::write(&path, json)?;

        Ok(path)
    }

    /// List all stored events, newest date first.
    pub fn list(&self) -> anyhow::Result<Vec<EventEntry>> {
        if !self.events_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.events_dir)? {
            let path = entry?.path();
            if !path.extension().is_some_and(|e| e == "json") {
                continue;
            }

            let stem = path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            if let Some((event_name, date, id)) = parse_event_filename(&stem) {
                entries.push(EventEntry {
                    id,
                    event_name,
                    date,
                    path,
                });
            }
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Read a stored event back.
    pub fn read(&self, entry: &EventEntry) -> anyhow::Result<EventEnvelope> {
        let content = std::fs::read_to_string(&entry.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Returns the events directory path.
    pub fn events_dir(&self) -> &Path {
        &self.events_dir
    }
}

impl IEventSink for JsonFileSink {
    fn send(&self, event: &TelemetryEvent) -> anyhow::Result<()> {
        let path = self.save(event)?;
        tracing::debug!(path = %path.display(), event = %event, "Event written");
        Ok(())
    }
}

/// Parse a file stem like `scene_view_info-20260207-a1b2c3d4` into (name, date, id).
///
/// Event names use underscores only, so splitting on `-` is unambiguous.
fn parse_event_filename(stem: &str) -> Option<(String, String, String)> {
    let mut parts = stem.splitn(3, '-');
    let name = parts.next()?;
    let date = parts.next()?;
    let id = parts.next()?;
    Some((name.to_string(), date.to_string(), id.to_string()))
}

/// Keeps every sent event in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events sent so far, oldest first.
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Removes and returns all recorded events.
    pub fn take(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

impl IEventSink for MemorySink {
    fn send(&self, event: &TelemetryEvent) -> anyhow::Result<()> {
        self.events
            .lock()
            .map_err(|_| anyhow::anyhow!("memory sink lock poisoned"))?
            .push(event.clone());
        Ok(())
    }
}
