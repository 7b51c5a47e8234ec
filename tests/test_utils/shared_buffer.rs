//! Shared in-memory writer for capturing warning output in tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Thread-safe byte buffer that can be handed to a `WarningHandler` while the
/// test keeps a clone for inspection.
#[derive(Clone, Default)]
pub struct SharedBuf {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuf {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the captured output as UTF-8.
    pub fn contents(&self) -> String {
        read_output(&self.buffer)
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("SharedBuf mutex poisoned")
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[allow(dead_code)]
pub fn read_output(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buffer.lock().expect("Buffer mutex poisoned").clone())
        .expect("Buffer contains invalid UTF-8")
}
