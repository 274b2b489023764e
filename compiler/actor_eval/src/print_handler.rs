//! Destination of program output.
//!
//! `print` and `println` write through a [`SharedPrintHandler`]. Hosts pick
//! stdout, tests and embedders capture into a buffer, and the silent
//! handler drops everything. Output written before an error stays written.

use parking_lot::Mutex;
use std::sync::Arc;

/// Output sink, dispatched by enum rather than trait object.
pub enum PrintHandler {
    /// Write straight to the process's stdout.
    Stdout,
    /// Accumulate output for later inspection.
    Buffer(Mutex<String>),
    /// Discard output.
    Silent,
}

impl PrintHandler {
    pub fn print(&self, text: &str) {
        match self {
            Self::Stdout => print!("{text}"),
            Self::Buffer(buffer) => buffer.lock().push_str(text),
            Self::Silent => {}
        }
    }

    pub fn println(&self, text: &str) {
        match self {
            Self::Stdout => println!("{text}"),
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(text);
                buffer.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured output so far; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Captured output, leaving the buffer empty.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => std::mem::take(&mut *buffer.lock()),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Handler shared between the host and the interpreter.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
mod tests {
    use super::{buffer_handler, silent_handler, stdout_handler};
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_print_and_println() {
        let handler = buffer_handler();
        handler.print("hello");
        handler.print(" ");
        handler.println("world");
        assert_eq!(handler.output(), "hello world\n");
    }

    #[test]
    fn take_output_drains_the_buffer() {
        let handler = buffer_handler();
        handler.println("once");
        assert_eq!(handler.take_output(), "once\n");
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn clear_empties_the_buffer() {
        let handler = buffer_handler();
        handler.println("hello");
        handler.clear();
        assert!(handler.output().is_empty());
    }

    #[test]
    fn silent_and_stdout_capture_nothing() {
        let silent = silent_handler();
        silent.println("dropped");
        assert_eq!(silent.output(), "");
        assert_eq!(stdout_handler().take_output(), "");
    }
}
