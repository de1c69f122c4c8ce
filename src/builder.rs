//! Builder
//!
//! Separates step-by-step construction of a `tail` command line from its
//! final string form. The builder is non-consuming: every step takes
//! `&mut self` and returns `&mut Self` for chaining, and [`build`] only
//! borrows, so one builder can be finalized more than once.
//!
//! The builder is never reset by [`build`]. Reusing it for a second command
//! keeps every argument added so far; call [`reset`] to start over.
//!
//! A builder has a single owner at a time. There is no internal locking.
//!
//! [`build`]: TailCommandBuilder::build
//! [`reset`]: TailCommandBuilder::reset

use crate::error::BuildError;

const COMMAND: &str = "tail";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TailCommandBuilder {
    arguments: Vec<String>,
    file_path: Option<String>,
}

impl TailCommandBuilder {
    pub fn new() -> Self {
        TailCommandBuilder::default()
    }

    pub fn with_last_lines(&mut self, lines: u32) -> &mut Self {
        self.arguments.push(format!("--lines {}", lines));
        self
    }

    pub fn with_follow(&mut self) -> &mut Self {
        self.arguments.push("--follow".to_string());
        self
    }

    pub fn with_verbose(&mut self) -> &mut Self {
        self.arguments.push("--verbose".to_string());
        self
    }

    /// Sets the required file path. The last call wins.
    pub fn with_file_path(&mut self, file_path: impl Into<String>) -> &mut Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Serializes the accumulated state. Arguments keep insertion order.
    pub fn build(&self) -> Result<String, BuildError> {
        let file_path = self.file_path.as_deref().ok_or(BuildError::FilePathNotSet)?;

        let mut command = COMMAND.to_string();
        if !self.arguments.is_empty() {
            command.push(' ');
            command.push_str(&self.arguments.join(" "));
        }
        command.push(' ');
        command.push_str(file_path);

        Ok(command)
    }

    pub fn reset(&mut self) {
        self.arguments.clear();
        self.file_path = None;
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }
}

/// Canned construction recipes. Configures a builder but never builds it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TailCommandDirector;

impl TailCommandDirector {
    pub fn build_with_follow<'a>(
        &self,
        builder: &'a mut TailCommandBuilder,
        file_path: impl Into<String>,
    ) -> &'a mut TailCommandBuilder {
        builder.with_follow().with_file_path(file_path)
    }

    pub fn build_with_follow_and_verbose<'a>(
        &self,
        builder: &'a mut TailCommandBuilder,
        file_path: impl Into<String>,
    ) -> &'a mut TailCommandBuilder {
        builder.with_follow().with_verbose().with_file_path(file_path)
    }
}
