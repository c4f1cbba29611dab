//! Logger writing to stderr and to a capped ring buffer persisted in the
//! key-value store, shown by `liftplan log`.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use liftplan_storage::{FileKv, Kv, keys};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

const CAPACITY: usize = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    pub level: String,
    pub message: String,
}

static SINK: Mutex<Option<Arc<FileKv>>> = Mutex::new(None);
static LOGGER: Logger = Logger;

pub fn init(kv: Arc<FileKv>) -> Result<(), SetLoggerError> {
    if let Ok(mut sink) = SINK.lock() {
        *sink = Some(kv);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

pub fn read_entries(kv: &FileKv) -> Vec<Entry> {
    kv.get::<Vec<Entry>>(keys::LOG)
        .unwrap_or_default()
        .unwrap_or_default()
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if record.level() <= Level::Warn {
            eprintln!("{}: {}", record.level(), record.args());
        }
        let Ok(sink) = SINK.lock() else {
            return;
        };
        let Some(kv) = sink.as_ref() else {
            return;
        };
        let mut entries: VecDeque<Entry> = kv
            .get::<Vec<Entry>>(keys::LOG)
            .unwrap_or_default()
            .unwrap_or_default()
            .into();
        entries.push_back(Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level().to_string(),
            message: record.args().to_string(),
        });
        while entries.len() > CAPACITY {
            entries.pop_front();
        }
        // persisting the log is best-effort; failures cannot be logged
        let _ = kv.set(keys::LOG, &entries.iter().collect::<Vec<_>>());
    }

    fn flush(&self) {}
}
