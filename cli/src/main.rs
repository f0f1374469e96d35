mod capabilities;
mod render;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ladle_core::export::printable_document;
use ladle_core::{
    share_payload, share_via, App, AppError, RecipeForm, RecipeStore, RecipeType, ShareCapability,
    ShareOutcome, View,
};

#[derive(Parser)]
#[command(name = "ladle")]
#[command(about = "A local recipe catalog", long_about = None)]
struct Cli {
    /// Recipe store file (default: ~/.ladle/recipes.json)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, best-rated first
    List {
        /// Case-insensitive title search
        #[arg(long)]
        search: Option<String>,
        /// Keep only this difficulty (Easy, Medium, Hard)
        #[arg(long)]
        difficulty: Option<String>,
        /// Keep recipes needing at most this much prep time, in minutes
        #[arg(long)]
        max_prep_time: Option<f64>,
        /// Keep only "Veg" or "Non-Veg" recipes
        #[arg(long = "type")]
        recipe_type: Option<String>,
    },
    /// Show one recipe in full
    Show {
        id: String,
    },
    /// Add a new recipe
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Easy, Medium, or Hard
        #[arg(long, default_value = "")]
        difficulty: String,
        /// "Veg" or "Non-Veg"
        #[arg(long = "type", default_value = "")]
        recipe_type: String,
        /// Prep time in minutes
        #[arg(long, default_value = "")]
        prep_time: String,
        /// Cook time in minutes
        #[arg(long, default_value = "")]
        cook_time: String,
        #[arg(long, default_value = "")]
        image_url: String,
        #[arg(long, default_value = "")]
        video_url: String,
        /// One ingredient per flag, in order
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// One step per flag, in order
        #[arg(long = "step")]
        steps: Vec<String>,
    },
    /// Edit an existing recipe; omitted flags keep their current value
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long = "type")]
        recipe_type: Option<String>,
        #[arg(long)]
        prep_time: Option<String>,
        #[arg(long)]
        cook_time: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        video_url: Option<String>,
        /// Replaces the full ingredient list when given
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// Replaces the full step list when given
        #[arg(long = "step")]
        steps: Vec<String>,
    },
    /// Delete a recipe
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Rate a recipe, optionally with review text
    Review {
        id: String,
        /// Star rating, 1 to 5
        #[arg(long)]
        stars: Option<u8>,
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Write a printable HTML document for a recipe
    Export {
        id: String,
        /// Output file (default: derived from the recipe title)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Share a recipe as plain text
    Share {
        id: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let store = RecipeStore::new(
        cli.data_file
            .clone()
            .unwrap_or_else(RecipeStore::default_path),
    );
    let mut app = App::new(store).context("Failed to open the recipe store")?;

    match cli.command {
        Commands::List {
            search,
            difficulty,
            max_prep_time,
            recipe_type,
        } => {
            if let Some(search) = &search {
                app.set_search(search);
            }
            app.set_difficulty_filter(difficulty);
            app.set_max_prep_time(max_prep_time);
            app.set_type_filter(parse_type_filter(recipe_type.as_deref())?);
            render::print_cards(&app.list_view());
        }
        Commands::Show { id } => {
            if !app.open_detail(&id) {
                bail!("No recipe with id {id}");
            }
            let Some(detail) = app.detail_view() else {
                bail!("No recipe with id {id}");
            };
            render::print_detail(&detail);
        }
        Commands::Add {
            title,
            description,
            difficulty,
            recipe_type,
            prep_time,
            cook_time,
            image_url,
            video_url,
            ingredients,
            steps,
        } => {
            app.open_add_form();
            let form = RecipeForm {
                id: None,
                title,
                description,
                difficulty,
                recipe_type,
                prep_time,
                cook_time,
                image_url,
                video_url,
                ingredients: ingredients.join("\n"),
                steps: steps.join("\n"),
            };
            submit(&mut app, &form)?;
            println!(
                "Added \"{}\" ({})",
                app.recipes()[0].title,
                app.recipes()[0].id
            );
        }
        Commands::Edit {
            id,
            title,
            description,
            difficulty,
            recipe_type,
            prep_time,
            cook_time,
            image_url,
            video_url,
            ingredients,
            steps,
        } => {
            if !app.open_detail(&id) {
                bail!("No recipe with id {id}");
            }
            if !app.open_edit_form() {
                bail!("No recipe with id {id}");
            }
            let View::Form { form } = app.view() else {
                bail!("No recipe with id {id}");
            };
            let mut form = form.clone();
            apply_override(&mut form.title, title);
            apply_override(&mut form.description, description);
            apply_override(&mut form.difficulty, difficulty);
            apply_override(&mut form.recipe_type, recipe_type);
            apply_override(&mut form.prep_time, prep_time);
            apply_override(&mut form.cook_time, cook_time);
            apply_override(&mut form.image_url, image_url);
            apply_override(&mut form.video_url, video_url);
            if !ingredients.is_empty() {
                form.ingredients = ingredients.join("\n");
            }
            if !steps.is_empty() {
                form.steps = steps.join("\n");
            }
            submit(&mut app, &form)?;
            println!("Updated {id}");
        }
        Commands::Delete { id, yes } => {
            if !app.open_detail(&id) {
                bail!("No recipe with id {id}");
            }
            if !yes && !confirm("Delete this recipe?")? {
                println!("Kept.");
                return Ok(());
            }
            if app.delete_current().context("Failed to save the store")? {
                println!("Deleted {id}");
            }
        }
        Commands::Review { id, stars, text } => {
            match app.submit_review(&id, stars.unwrap_or(0), &text) {
                Ok(()) => {
                    if let Some(recipe) = app.find(&id) {
                        println!(
                            "Thanks! {} now has {} rating{} averaging {:.1}.",
                            recipe.title,
                            recipe.rating_count,
                            if recipe.rating_count == 1 { "" } else { "s" },
                            recipe.rating,
                        );
                    }
                }
                Err(AppError::NoRatingSelected) => {
                    bail!("{}", AppError::NoRatingSelected);
                }
                Err(err) => return Err(err).context("Failed to save the review"),
            }
        }
        Commands::Export { id, output } => {
            let Some(recipe) = app.find(&id) else {
                bail!("No recipe with id {id}");
            };
            let document = printable_document(recipe);
            let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.html", slugify(&recipe.title))));
            fs::write(&path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Wrote printable recipe to {}. Open it in a browser and print to save as PDF.",
                path.display()
            );
        }
        Commands::Share { id } => {
            let Some(recipe) = app.find(&id) else {
                bail!("No recipe with id {id}");
            };
            let payload = share_payload(recipe, &format!("ladle://recipes/{id}"));
            let chain = capabilities::clipboard_chain();
            let capabilities: Vec<&dyn ShareCapability> =
                chain.iter().map(|c| c as &dyn ShareCapability).collect();
            match share_via(&capabilities, &payload) {
                ShareOutcome::Shared | ShareOutcome::Cancelled => {}
                ShareOutcome::Copied => {
                    println!(
                        "Recipe details copied to clipboard. You can paste and share it anywhere!"
                    );
                }
                ShareOutcome::Presented(text) => {
                    println!("Here is the recipe you can share:\n\n{text}");
                }
            }
        }
    }

    Ok(())
}

/// Submit the form, echoing every validation message before failing.
fn submit(app: &mut App, form: &RecipeForm) -> Result<()> {
    match app.submit_form(form) {
        Ok(()) => Ok(()),
        Err(AppError::Validation(messages)) => {
            for message in &messages {
                eprintln!("  - {message}");
            }
            bail!("Recipe not saved; fix the problems above and try again");
        }
        Err(err) => Err(err).context("Failed to save the recipe"),
    }
}

fn apply_override(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn parse_type_filter(raw: Option<&str>) -> Result<Option<RecipeType>> {
    match raw {
        None => Ok(None),
        Some(s) => match RecipeType::parse(s) {
            Some(t) => Ok(Some(t)),
            None => bail!("Unknown recipe type {s:?}; expected \"Veg\" or \"Non-Veg\""),
        },
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn slugify(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "recipe".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Ahmed's Special Chicken Noodles"), "ahmed-s-special-chicken-noodles");
        assert_eq!(slugify("Toast"), "toast");
        assert_eq!(slugify("!!!"), "recipe");
    }

    #[test]
    fn test_parse_type_filter() {
        assert_eq!(parse_type_filter(None).unwrap(), None);
        assert_eq!(
            parse_type_filter(Some("Non-Veg")).unwrap(),
            Some(RecipeType::NonVeg)
        );
        assert!(parse_type_filter(Some("vegan")).is_err());
    }
}
