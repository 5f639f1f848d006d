//! Optional JSON-lines record of outbound state messages.
//!
//! Best effort: the first write error closes the log for the rest of the run.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::protocol::BotStateMessage;

#[derive(Debug)]
pub struct WireLog {
    out: Option<BufWriter<File>>,
}

#[derive(Serialize)]
struct Record<'a> {
    /// Count of fully written messages, starting at 1.
    seq: u64,
    #[serde(flatten)]
    msg: &'a BotStateMessage,
}

impl WireLog {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
        })
    }

    pub fn is_open(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, seq: u64, msg: &BotStateMessage) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        if let Err(e) = write_record(out, &Record { seq, msg }) {
            tracing::warn!(error = %e, "bot wire log disabled after write error");
            self.out = None;
        }
    }
}

fn write_record(out: &mut BufWriter<File>, record: &Record<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn records_one_json_object_per_line() {
        let name = format!("snake-wire-log-{}.jsonl", std::process::id());
        let path = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&path);

        {
            let mut log = WireLog::open(&path).unwrap();
            let (head, apple) = (Position::new(2, 1), Position::new(0, 0));
            let msg = BotStateMessage::new(5, 5, head, apple, 1, 0, false, false);
            log.record(1, &msg);
            log.record(2, &msg);
            assert!(log.is_open());
        }

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["seq"], 1);
        assert_eq!(lines[1]["head_y"], 1);
        assert_eq!(lines[1]["magic"], 0x534E4B42u32);

        let _ = std::fs::remove_file(&path);
    }
}
