use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Output message captured by MockOutput for testing
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum OutputMessage {
    Secret(String),
    Info(String),
    Error(String),
    Usage(String),
}

/// Trait for terminal output operations to enable testing with mocks
pub trait Output: Send + Sync {
    /// Write the secret payload to stdout exactly as given
    fn secret(&self, value: &str) -> io::Result<()>;

    /// Print an informational message to stdout
    fn info(&self, message: &str) -> io::Result<()>;

    /// Print an error message to stderr
    fn error(&self, message: &str);

    /// Print usage or reminder text to stderr
    fn usage(&self, text: &str);
}

/// Real terminal output implementation using the output module
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn secret(&self, value: &str) -> io::Result<()> {
        crate::output::raw(value)
    }

    fn info(&self, message: &str) -> io::Result<()> {
        crate::output::info(message)
    }

    fn error(&self, message: &str) {
        crate::output::error(message);
    }

    fn usage(&self, text: &str) {
        crate::output::usage(text);
    }
}

/// Mock output implementation for testing (captures output)
#[allow(dead_code)]
pub struct MockOutput {
    messages: Mutex<Vec<OutputMessage>>,
    fail_stdout: AtomicBool,
}

#[allow(dead_code)]
impl MockOutput {
    /// Create new mock output
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail_stdout: AtomicBool::new(false),
        }
    }

    /// Mock output whose stdout writes fail as if the pipe were closed
    pub fn broken_stdout() -> Self {
        let output = Self::new();
        output.fail_stdout.store(true, Ordering::SeqCst);
        output
    }

    fn check_stdout(&self) -> io::Result<()> {
        if self.fail_stdout.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
        }
        Ok(())
    }

    /// Get all captured messages
    pub fn get_messages(&self) -> Vec<OutputMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Everything that would have reached stdout, concatenated
    pub fn stdout(&self) -> String {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| match m {
                OutputMessage::Secret(s) => Some(s.clone()),
                OutputMessage::Info(s) => Some(format!("{}\n", s)),
                _ => None,
            })
            .collect()
    }

    /// Everything that would have reached stderr, one message per line
    pub fn stderr(&self) -> String {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| match m {
                OutputMessage::Error(s) | OutputMessage::Usage(s) => Some(s.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if any error message was output
    pub fn has_error(&self) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|m| matches!(m, OutputMessage::Error(_)))
    }

    /// Get all error messages
    pub fn get_errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| {
                if let OutputMessage::Error(msg) = m {
                    Some(msg.clone())
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Default for MockOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for MockOutput {
    fn secret(&self, value: &str) -> io::Result<()> {
        self.check_stdout()?;
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Secret(value.to_string()));
        Ok(())
    }

    fn info(&self, message: &str) -> io::Result<()> {
        self.check_stdout()?;
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Info(message.to_string()));
        Ok(())
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Error(message.to_string()));
    }

    fn usage(&self, text: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Usage(text.to_string()));
    }
}
