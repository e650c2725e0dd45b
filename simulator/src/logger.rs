//! ----- LOGGER MODULE -----
//! Buffering logger keeping only the most recent records, so the
//! display can show a scrolling log panel next to the shaft without
//! writing through it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record};

pub const LOG_CAPACITY: usize = 21;

pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

struct BufferLogger {
    buffer: LogBuffer,
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return
        }
        let mut buffer = self.buffer.lock().unwrap();
        if buffer.len() == LOG_CAPACITY {
            buffer.pop_front();
        }
        buffer.push_back(format!("{}", record.args()));
    }

    fn flush(&self) {}
}

pub fn init() -> LogBuffer {
    let buffer: LogBuffer = Arc::new(Mutex::new(VecDeque::with_capacity(LOG_CAPACITY)));
    let logger = BufferLogger {
        buffer: buffer.clone(),
    };
    log::set_boxed_logger(Box::new(logger)).unwrap();
    log::set_max_level(LevelFilter::Debug);
    buffer
}
