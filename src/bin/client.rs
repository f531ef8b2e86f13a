use anyhow::{bail, Context};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use tracing::warn;

use builder_pattern::{
    logging, BuildError, Builder, ConcreteBuilder, Director, Manual, ManualBuilder, RecipeBook,
};

/* ============================================================
 * Command line
 * ============================================================
 */

/// Builder pattern demo: a director assembling products part by part.
#[derive(Parser, Debug)]
#[command(name = "client", version)]
struct Cli {
    /// TOML file with extra recipes (merged over `minimal` and `full`)
    #[arg(long)]
    recipes: Option<PathBuf>,

    /// Run only this recipe instead of the standard demo
    #[arg(long)]
    recipe: Option<String>,

    /// Product family number used as the part suffix
    #[arg(long, default_value_t = 1)]
    family: u32,

    /// Write assembly manuals instead of products (manuals have no family)
    #[arg(long, conflicts_with = "family")]
    manual: bool,

    /// Print products as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

/* ============================================================
 * Building helpers
 * ============================================================
 */

/// Lends `builder` to a fresh director for one recipe run.
fn direct<B, F>(builder: &mut B, recipe: F) -> Result<(), BuildError>
where
    B: Builder,
    F: FnOnce(&mut Director<'_>) -> Result<(), BuildError>,
{
    let mut director = Director::with_builder(builder);
    recipe(&mut director)
}

fn show_product(label: &str, builder: &mut ConcreteBuilder, json: bool) -> anyhow::Result<()> {
    let product = builder.get_product();
    println!("{}", label.bold().cyan());
    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
    } else {
        println!("{}", product.describe_parts().green());
    }
    println!();
    Ok(())
}

/* ============================================================
 * Demo (cargo run --bin client)
 * ============================================================
 */

fn run_products(cli: &Cli, book: &RecipeBook) -> anyhow::Result<()> {
    let mut builder = ConcreteBuilder::with_family(cli.family);

    if let Some(name) = &cli.recipe {
        let Some(recipe) = book.get(name) else {
            let known: Vec<_> = book.names().collect();
            bail!("unknown recipe '{name}' (known: {})", known.join(", "));
        };
        direct(&mut builder, |d| d.build(recipe))?;
        return show_product(&format!("Recipe '{name}':"), &mut builder, cli.json);
    }

    direct(&mut builder, |d| d.build_minimal_viable_product())?;
    show_product("Standard basic product:", &mut builder, cli.json)?;

    direct(&mut builder, |d| d.build_full_featured_product())?;
    show_product("Standard full featured product:", &mut builder, cli.json)?;

    // Without a director: the client drives the steps itself.
    builder.produce_part_a();
    builder.produce_part_c();
    show_product("Custom product:", &mut builder, cli.json)
}

/// Writes a manual per recipe. Recipes the manual builder cannot follow
/// are skipped with a warning.
fn collect_manuals(book: &RecipeBook, names: &[&str]) -> anyhow::Result<Vec<(String, Manual)>> {
    let mut builder = ManualBuilder::new();
    let mut manuals = Vec::new();

    for &name in names {
        let recipe = book
            .get(name)
            .with_context(|| format!("unknown recipe '{name}'"))?;
        if let Err(err) = direct(&mut builder, |d| d.build(recipe)) {
            warn!(recipe = name, error = %err, "skipping recipe without a manual");
            builder.reset();
            continue;
        }
        manuals.push((name.to_string(), builder.get_manual()));
    }
    Ok(manuals)
}

fn run_manuals(cli: &Cli, book: &RecipeBook) -> anyhow::Result<()> {
    let names: Vec<&str> = match &cli.recipe {
        Some(name) => vec![name.as_str()],
        None => book.names().collect(),
    };

    for (name, manual) in collect_manuals(book, &names)? {
        println!("{}", format!("Manual for '{name}':").bold().cyan());
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&manual)?);
        } else {
            print!("{manual}");
        }
        println!();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let book = match &cli.recipes {
        Some(path) => RecipeBook::load(path)?,
        None => RecipeBook::builtin(),
    };

    if cli.manual {
        run_manuals(&cli, &book)
    } else {
        run_products(&cli, &book)
    }
}

/* ============================================================
 * Tests (cargo test)
 * ============================================================
 */
