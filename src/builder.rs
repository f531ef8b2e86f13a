//! The Builder capability and the two builder families shipped with the crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;
use tracing::debug;

use crate::error::BuildError;
use crate::product::Product;

// =============================================================================
// Steps
// =============================================================================

/// One construction step, as named in recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStep", into = "RawStep")]
pub enum Step {
    PartA,
    PartB,
    PartC,
    Extra(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::PartA => f.write_str("A"),
            Step::PartB => f.write_str("B"),
            Step::PartC => f.write_str("C"),
            Step::Extra(name) => write!(f, "extra({name})"),
        }
    }
}

// On-disk shape: `"A"` / `"PartB"` / `{ extra = "Spoiler" }`
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawStep {
    Name(String),
    Extra { extra: String },
}

impl TryFrom<RawStep> for Step {
    type Error = String;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        match raw {
            RawStep::Name(name) => match name.to_ascii_lowercase().as_str() {
                "a" | "parta" => Ok(Step::PartA),
                "b" | "partb" => Ok(Step::PartB),
                "c" | "partc" => Ok(Step::PartC),
                _ => Err(format!(
                    "unknown step '{name}', expected A, B, C or {{ extra = \"...\" }}"
                )),
            },
            RawStep::Extra { extra } => Ok(Step::Extra(extra)),
        }
    }
}

impl From<Step> for RawStep {
    fn from(step: Step) -> Self {
        match step {
            Step::PartA => RawStep::Name("A".to_string()),
            Step::PartB => RawStep::Name("B".to_string()),
            Step::PartC => RawStep::Name("C".to_string()),
            Step::Extra(extra) => RawStep::Extra { extra },
        }
    }
}

// =============================================================================
// Capability
// =============================================================================

/// Construction steps a builder must support.
///
/// The three part steps are required, so a builder missing one of them does
/// not compile. Parts beyond A/B/C go through [`Builder::produce_extra_part`],
/// which a builder opts into by overriding it.
#[cfg_attr(test, mockall::automock)]
pub trait Builder {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);

    /// Extension step. Fails with `NotImplemented` unless overridden.
    fn produce_extra_part(&mut self, name: &str) -> Result<(), BuildError> {
        Err(BuildError::not_implemented(format!(
            "produce_extra_part({name})"
        )))
    }

    /// Runs a single recipe step against this builder.
    fn apply(&mut self, step: &Step) -> Result<(), BuildError> {
        match step {
            Step::PartA => self.produce_part_a(),
            Step::PartB => self.produce_part_b(),
            Step::PartC => self.produce_part_c(),
            Step::Extra(name) => return self.produce_extra_part(name),
        }
        Ok(())
    }
}

// =============================================================================
// ConcreteBuilder
// =============================================================================

/// Builds [`Product`]s whose part names carry the builder's family number
/// (`PartA1`, `PartB1`, ... for the default family).
#[derive(Debug)]
pub struct ConcreteBuilder {
    family: u32,
    product: Product,
}

impl ConcreteBuilder {
    pub fn new() -> Self {
        Self::with_family(1)
    }

    pub fn with_family(family: u32) -> Self {
        Self {
            family,
            product: Product::new(),
        }
    }

    pub fn family(&self) -> u32 {
        self.family
    }

    /// Throws away the product in progress and starts an empty one.
    pub fn reset(&mut self) {
        self.product = Product::new();
    }

    /// Hands the finished product to the caller and resets the builder.
    ///
    /// The builder keeps nothing of the returned product: the next step call
    /// goes into a fresh, empty one.
    pub fn get_product(&mut self) -> Product {
        let product = mem::take(&mut self.product);
        debug!(family = self.family, parts = product.len(), "product retrieved");
        product
    }

    /// Parts added since the last reset.
    pub fn current_parts(&self) -> &[String] {
        self.product.parts()
    }

    fn push(&mut self, part: &str) {
        let name = format!("{part}{}", self.family);
        debug!(part = %name, "produced part");
        self.product.add_part(name);
    }
}

impl Default for ConcreteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for ConcreteBuilder {
    fn produce_part_a(&mut self) {
        self.push("PartA");
    }

    fn produce_part_b(&mut self) {
        self.push("PartB");
    }

    fn produce_part_c(&mut self) {
        self.push("PartC");
    }

    fn produce_extra_part(&mut self, name: &str) -> Result<(), BuildError> {
        if name.trim().is_empty() {
            return Err(BuildError::InvalidPart(
                "extra part name must not be empty".to_string(),
            ));
        }
        self.push(name.trim());
        Ok(())
    }
}

// =============================================================================
// ManualBuilder
// =============================================================================

/// Assembly instructions matching a product built from the same steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manual {
    lines: Vec<String>,
}

impl Manual {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Manual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, line)?;
        }
        Ok(())
    }
}

/// Second builder family: writes one manual line per step instead of
/// collecting parts. Only knows parts A, B and C.
#[derive(Debug, Default)]
pub struct ManualBuilder {
    manual: Manual,
}

impl ManualBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.manual = Manual::default();
    }

    /// Same contract as [`ConcreteBuilder::get_product`].
    pub fn get_manual(&mut self) -> Manual {
        mem::take(&mut self.manual)
    }

    fn write(&mut self, line: &str) {
        debug!(line = %line, "manual line written");
        self.manual.lines.push(line.to_string());
    }
}

impl Builder for ManualBuilder {
    fn produce_part_a(&mut self) {
        self.write("Mount part A on the base");
    }

    fn produce_part_b(&mut self) {
        self.write("Attach part B to part A");
    }

    fn produce_part_c(&mut self) {
        self.write("Fit part C and tighten all fasteners");
    }
}
