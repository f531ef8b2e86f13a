use serde::{Deserialize, Serialize};
use std::fmt;

/// The object under construction: parts in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a part. No dedup, no validation.
    pub fn add_part(&mut self, name: impl Into<String>) {
        self.parts.push(name.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// e.g. `Product parts: PartA1, PartB1`
    pub fn describe_parts(&self) -> String {
        format!("Product parts: {}", self.parts.join(", "))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe_parts())
    }
}
