//! # Builder Pattern
//!
//! A `Director` drives a `Builder` through named recipes to assemble a
//! `Product` one part at a time.
//!
//! ## Roles
//!
//! 1. **Product** - ordered list of parts, in the order the steps ran
//! 2. **Builder** - trait with one method per construction step
//! 3. **ConcreteBuilder** - owns the product under construction, hands it
//!    out with `get_product()` and starts over with an empty one
//! 4. **Director** - borrows any builder and runs the recipes against it
//!
//! A second family, [`ManualBuilder`], writes assembly instructions for the
//! same recipes. Extra recipes can be loaded from TOML with [`RecipeBook`].
//!
//! ## Running the client
//!
//! ```bash
//! cargo run --bin client
//! cargo run --bin client -- --recipes recipes.toml --recipe deluxe --json
//! ```
//!
//! ## Quick start
//!
//! ```
//! use builder_pattern::{ConcreteBuilder, Director};
//!
//! let mut builder = ConcreteBuilder::new();
//! let mut director = Director::with_builder(&mut builder);
//! director.build_full_featured_product().unwrap();
//! drop(director);
//!
//! assert_eq!(builder.get_product().parts(), ["PartA1", "PartB1", "PartC1"]);
//! ```

pub mod builder;
pub mod director;
pub mod error;
pub mod logging;
pub mod product;
pub mod recipe;

pub use builder::{Builder, ConcreteBuilder, Manual, ManualBuilder, Step};
pub use director::Director;
pub use error::BuildError;
pub use product::Product;
pub use recipe::{Recipe, RecipeBook};
