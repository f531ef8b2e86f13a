use tracing::info;

use crate::builder::{Builder, Step};
use crate::error::BuildError;
use crate::recipe::Recipe;

/// Runs construction recipes against a borrowed builder.
///
/// The director never owns the builder: it holds a mutable borrow that the
/// caller can swap with [`Director::set_builder`]. Products are always
/// retrieved from the builder itself once the director is done with it.
#[derive(Default)]
pub struct Director<'a> {
    builder: Option<&'a mut dyn Builder>,
}

impl<'a> Director<'a> {
    pub fn new() -> Self {
        Self { builder: None }
    }

    pub fn with_builder(builder: &'a mut dyn Builder) -> Self {
        Self {
            builder: Some(builder),
        }
    }

    /// Replaces the held builder. Later recipes act on the new one only.
    pub fn set_builder(&mut self, builder: &'a mut dyn Builder) {
        self.builder = Some(builder);
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Part A only.
    pub fn build_minimal_viable_product(&mut self) -> Result<(), BuildError> {
        let builder = self.builder()?;
        info!(recipe = "minimal", "building product");
        builder.produce_part_a();
        Ok(())
    }

    /// Parts A, B and C, in that order.
    pub fn build_full_featured_product(&mut self) -> Result<(), BuildError> {
        let builder = self.builder()?;
        info!(recipe = "full", "building product");
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
        Ok(())
    }

    /// Applies every step of `recipe` in order.
    ///
    /// Stops at the first failing step; steps that already ran stay in the
    /// builder's product.
    pub fn build(&mut self, recipe: &Recipe) -> Result<(), BuildError> {
        let builder = self.builder()?;
        info!(recipe = %recipe.name, steps = recipe.steps.len(), "building product");
        for step in &recipe.steps {
            builder.apply(step)?;
        }
        Ok(())
    }

    /// Applies an ad-hoc list of steps, same semantics as [`Director::build`].
    pub fn build_steps(&mut self, steps: &[Step]) -> Result<(), BuildError> {
        let builder = self.builder()?;
        steps.iter().try_for_each(|step| builder.apply(step))
    }

    fn builder(&mut self) -> Result<&mut (dyn Builder + 'a), BuildError> {
        self.builder.as_deref_mut().ok_or_else(BuildError::no_builder)
    }
}
