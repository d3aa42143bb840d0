//! JSONL transcript writer.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying `type`,
//! `timestamp` and the event payload. The file is opened in append mode so
//! one transcript can span several runs of the portal.

use belajar_application::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Transcript logger that appends one JSON object per line.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the transcript at `path`.
    ///
    /// Returns `None` and logs a warning if the file cannot be opened; the
    /// caller then runs without a transcript.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create transcript directory {}: {}", parent.display(), e);
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn to_record(event: ConversationEvent, timestamp: String) -> Value {
    let mut record = match event.payload {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    record.insert("type".to_string(), Value::String(event.event_type.to_string()));
    record.insert("timestamp".to_string(), Value::String(timestamp));
    Value::Object(record)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let Ok(line) = serde_json::to_string(&to_record(event, timestamp)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcripts").join("fadel.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "session_started",
            json!({ "level": "SD", "grade": 4, "subject": "pjok" }),
        ));
        logger.log(ConversationEvent::new(
            "user_message",
            json!({ "id": 2, "text": "Apa itu lari estafet?", "has_image": false }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "session_started");
        assert_eq!(lines[0]["subject"], "pjok");
        assert_eq!(lines[1]["type"], "user_message");
        assert_eq!(lines[1]["text"], "Apa itu lari estafet?");
        assert!(lines.iter().all(|l| l["timestamp"].is_string()));
    }

    #[test]
    fn test_appends_across_openings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fadel.jsonl");

        for reply in ["Halo!", "Sampai jumpa!"] {
            let logger = JsonlConversationLogger::new(&path).unwrap();
            logger.log(ConversationEvent::new("assistant_reply", json!({ "text": reply })));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["text"], "Sampai jumpa!");
    }

    #[test]
    fn test_scalar_payload_is_wrapped() {
        let record = to_record(
            ConversationEvent::new("request_failed", json!("timeout")),
            "2026-01-01T00:00:00.000+07:00".to_string(),
        );
        assert_eq!(record["type"], "request_failed");
        assert_eq!(record["data"], "timeout");
    }
}
