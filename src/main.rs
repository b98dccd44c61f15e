use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use log::{debug, warn};
use recipe_finder::config::load_config;
use recipe_finder::{
    search_by_category_name, search_by_ingredients, search_by_name, search_by_raw_filters,
    Dataset, Recipe,
};

#[derive(Parser, Debug)]
#[command(
    name = "recipe-finder",
    version,
    about = "Suggest recipes and search a recipe dataset"
)]
struct Cli {
    /// Configuration file to use instead of ./recipe-finder.toml
    #[arg(short, long, value_name = "FILE", env = "RECIPE_FINDER_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Recipe CSV file (overrides the configured dataset path)
    #[arg(short, long, value_name = "CSV")]
    dataset: Option<Utf8PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a handful of random recipes
    Suggest {
        /// How many recipes to show (default: configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Find recipes whose name contains the query
    Name { query: String },
    /// Find recipes using up to three comma-separated ingredients
    Ingredients { list: String },
    /// Browse a category: "Easy Dinner", "Under 30 Minutes", "Chicken", "Breakfast", "Desserts"
    Category { label: String },
    /// Filter by difficulty, diet, meal and cuisine at once
    Filter {
        #[arg(long, default_value = "Under 1 Hour")]
        difficulty: String,
        #[arg(long, default_value = "Vegetarian")]
        diet: String,
        #[arg(long)]
        meal: String,
        #[arg(long)]
        cuisine: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let dataset_path = cli.dataset.unwrap_or(config.dataset.path);
    debug!("Using dataset {}", dataset_path);

    let dataset = Dataset::load(&dataset_path)?;

    let results = match &cli.command {
        Command::Suggest { count } => {
            let requested = count.unwrap_or(config.suggestions.count);
            let count = if requested > dataset.len() {
                warn!(
                    "Only {} recipes available, showing all of them",
                    dataset.len()
                );
                dataset.len()
            } else {
                requested
            };
            dataset.sample(count)?
        }
        Command::Name { query } => search_by_name(&dataset, query),
        Command::Ingredients { list } => search_by_ingredients(&dataset, list),
        Command::Category { label } => search_by_category_name(&dataset, label),
        Command::Filter {
            difficulty,
            diet,
            meal,
            cuisine,
        } => search_by_raw_filters(&dataset, difficulty, diet, meal, cuisine),
    };

    render(&results, cli.json)?;
    Ok(())
}

fn render(results: &[&Recipe], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }

    for recipe in results {
        let time = match recipe.total_time_minutes() {
            Some(minutes) => format!("{} min", minutes),
            None => "time unknown".to_string(),
        };
        println!(
            "{} ({}) - {}, {}",
            recipe.name(),
            time,
            recipe.cuisine(),
            recipe.diet()
        );
        println!("    {}", recipe.image_url());
    }
    Ok(())
}
