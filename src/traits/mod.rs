pub mod environment;
pub mod output;

pub use environment::{Environment, ProcessEnvironment};
pub use output::{Output, TerminalOutput};

#[cfg(test)]
pub use environment::MockEnvironment;
#[cfg(test)]
pub use output::MockOutput;
