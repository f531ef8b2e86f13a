//! Named step lists for the [`Director`](crate::Director), built in or loaded
//! from TOML.
//!
//! ```toml
//! [[recipe]]
//! name = "deluxe"
//! description = "full set plus a spoiler"
//! steps = ["A", "B", "C", { extra = "Spoiler" }]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::builder::Step;
use crate::error::BuildError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub steps: Vec<Step>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            description: None,
            steps,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Same steps as [`Director::build_minimal_viable_product`](crate::Director::build_minimal_viable_product).
    pub fn minimal() -> Self {
        Recipe::new("minimal", vec![Step::PartA]).with_description("part A only")
    }

    /// Same steps as [`Director::build_full_featured_product`](crate::Director::build_full_featured_product).
    pub fn full() -> Self {
        Recipe::new("full", vec![Step::PartA, Step::PartB, Step::PartC])
            .with_description("parts A, B and C")
    }

    fn validate(&self) -> Result<(), BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::config("recipe name must not be empty"));
        }
        if self.steps.is_empty() {
            return Err(BuildError::config(format!(
                "recipe '{}' has no steps",
                self.name
            )));
        }
        let blank_extra = self
            .steps
            .iter()
            .any(|step| matches!(step, Step::Extra(name) if name.trim().is_empty()));
        if blank_extra {
            return Err(BuildError::config(format!(
                "recipe '{}' has an extra step with an empty name",
                self.name
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RecipeFile {
    #[serde(default, rename = "recipe")]
    recipes: Vec<Recipe>,
}

/// Recipes by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// `minimal` and `full`.
    pub fn builtin() -> Self {
        let mut book = Self::new();
        book.insert(Recipe::minimal());
        book.insert(Recipe::full());
        book
    }

    /// Parses a recipe file on its own, without the builtins.
    pub fn from_toml_str(content: &str) -> Result<Self, BuildError> {
        let file: RecipeFile = toml::from_str(content)?;

        let mut seen = HashSet::new();
        for recipe in &file.recipes {
            recipe.validate()?;
            if !seen.insert(recipe.name.as_str()) {
                return Err(BuildError::config(format!(
                    "recipe '{}' is defined more than once",
                    recipe.name
                )));
            }
        }

        let mut book = Self::new();
        for recipe in file.recipes {
            book.insert(recipe);
        }
        Ok(book)
    }

    /// Builtins with the recipes from `path` merged over them.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let content = fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = Self::from_toml_str(&content)?;
        info!(path = %path.display(), recipes = loaded.len(), "loaded recipe file");

        let mut book = Self::builtin();
        book.merge(loaded);
        Ok(book)
    }

    /// Adds a recipe, replacing any recipe with the same name in place.
    pub fn insert(&mut self, recipe: Recipe) {
        match self.recipes.iter_mut().find(|r| r.name == recipe.name) {
            Some(existing) => {
                debug!(recipe = %recipe.name, "replacing recipe");
                *existing = recipe;
            }
            None => self.recipes.push(recipe),
        }
    }

    pub fn merge(&mut self, other: RecipeBook) {
        for recipe in other.recipes {
            self.insert(recipe);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ConcreteBuilder;
    use crate::director::Director;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DELUXE: &str = r#"
[[recipe]]
name = "deluxe"
description = "full set plus a spoiler"
steps = ["A", "B", "C", { extra = "Spoiler" }]

[[recipe]]
name = "minimal"
steps = ["C"]
"#;

    #[test]
    fn test_builtin_recipes() {
        let book = RecipeBook::builtin();
        assert_eq!(book.names().collect::<Vec<_>>(), ["minimal", "full"]);
        assert_eq!(book.get("full").unwrap().steps.len(), 3);
        assert!(book.get("deluxe").is_none());
    }

    #[test]
    fn test_parse_recipe_file() {
        let book = RecipeBook::from_toml_str(DELUXE).unwrap();
        let deluxe = book.get("deluxe").unwrap();

        assert_eq!(deluxe.description.as_deref(), Some("full set plus a spoiler"));
        assert_eq!(deluxe.steps.last(), Some(&Step::Extra("Spoiler".into())));
        assert_eq!(book.get("minimal").unwrap().steps, vec![Step::PartC]);
    }

    #[test]
    fn test_empty_file_is_empty_book() {
        let book = RecipeBook::from_toml_str("").unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_rejects_invalid_recipes() {
        let no_steps = "[[recipe]]\nname = \"hollow\"\nsteps = []\n";
        assert!(matches!(
            RecipeBook::from_toml_str(no_steps),
            Err(BuildError::Config(_))
        ));

        let blank_name = "[[recipe]]\nname = \" \"\nsteps = [\"A\"]\n";
        assert!(matches!(
            RecipeBook::from_toml_str(blank_name),
            Err(BuildError::Config(_))
        ));

        let duplicate = "[[recipe]]\nname = \"x\"\nsteps = [\"A\"]\n\n[[recipe]]\nname = \"x\"\nsteps = [\"B\"]\n";
        let err = RecipeBook::from_toml_str(duplicate).unwrap_err();
        assert!(err.to_string().contains("more than once"));

        let blank_extra = "[[recipe]]\nname = \"x\"\nsteps = [\"A\", { extra = \"\" }]\n";
        let err = RecipeBook::from_toml_str(blank_extra).unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
        assert!(err.to_string().contains("empty name"));

        let unknown_step = "[[recipe]]\nname = \"x\"\nsteps = [\"Z\"]\n";
        assert!(matches!(
            RecipeBook::from_toml_str(unknown_step),
            Err(BuildError::Config(_))
        ));
    }

    #[test]
    fn test_load_merges_over_builtins() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", DELUXE).unwrap();

        let book = RecipeBook::load(file.path()).unwrap();
        assert_eq!(
            book.names().collect::<Vec<_>>(),
            ["minimal", "full", "deluxe"]
        );
        assert_eq!(book.get("minimal").unwrap().steps, vec![Step::PartC]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RecipeBook::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }

    #[test]
    fn test_loaded_recipe_drives_builder_in_order() {
        let book = RecipeBook::from_toml_str(DELUXE).unwrap();
        let mut builder = ConcreteBuilder::new();
        let mut director = Director::with_builder(&mut builder);
        director.build(book.get("deluxe").unwrap()).unwrap();
        drop(director);

        assert_eq!(
            builder.get_product().parts(),
            ["PartA1", "PartB1", "PartC1", "Spoiler1"]
        );
    }

    #[test]
    fn test_builtin_recipes_match_director_methods() {
        let mut by_recipe = ConcreteBuilder::new();
        let mut by_method = ConcreteBuilder::new();

        Director::with_builder(&mut by_recipe)
            .build(&Recipe::full())
            .unwrap();
        Director::with_builder(&mut by_method)
            .build_full_featured_product()
            .unwrap();

        assert_eq!(by_recipe.get_product(), by_method.get_product());
    }
}
