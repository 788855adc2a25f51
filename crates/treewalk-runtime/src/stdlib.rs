//! Standard library: the print side effect and its output sinks

use crate::value::{EvalResult, RuntimeError, Value};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shared destination for print output
pub type OutputWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writer that forwards to the process stdout
pub fn stdout_writer() -> OutputWriter {
    Arc::new(Mutex::new(Box::new(io::stdout())))
}

/// In-memory print buffer that can be read back after a run
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    /// Everything printed so far
    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => String::from_utf8_lossy(&buffer).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }

    /// Printed lines, one per print call
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "capture buffer poisoned"))?;
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Create a writer whose output lands in the returned capture buffer
pub fn capture_writer() -> (OutputWriter, CapturedOutput) {
    let captured = CapturedOutput::default();
    let writer: OutputWriter = Arc::new(Mutex::new(Box::new(captured.clone())));
    (writer, captured)
}

/// Print a value followed by a newline
pub fn print(output: &OutputWriter, value: &Value) -> EvalResult<()> {
    let mut writer = output.lock().map_err(|_| RuntimeError::Output {
        message: "output writer poisoned".to_string(),
    })?;
    writeln!(writer, "{}", value).map_err(|e| RuntimeError::Output {
        message: e.to_string(),
    })
}
