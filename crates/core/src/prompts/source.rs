//! Where prompt text comes from.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A store of prompt text addressed by identifier.
pub trait PromptSource {
    fn exists(&self, id: &str) -> bool;
    fn read_to_string(&self, id: &str) -> io::Result<String>;
}

/// Files on disk; identifiers are paths, optionally relative to a root.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    root: Option<PathBuf>,
}

impl FsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self { root: Some(root.into()) }
    }

    pub fn resolve(&self, id: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(id),
            None => PathBuf::from(id),
        }
    }
}

impl PromptSource for FsSource {
    fn exists(&self, id: &str) -> bool {
        self.resolve(id).is_file()
    }

    fn read_to_string(&self, id: &str) -> io::Result<String> {
        fs::read_to_string(self.resolve(id))
    }
}

/// Prompts held in memory, e.g. bundled with a binary.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(id.into(), content.into());
    }

    #[must_use]
    pub fn with(mut self, id: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(id, content);
        self
    }
}

impl PromptSource for MemorySource {
    fn exists(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn read_to_string(&self, id: &str) -> io::Result<String> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no prompt named {id}")))
    }
}
