mod bank;
mod importer;

use clap::Parser;
use importer::{ImportStats, import_categories, import_questions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "seed", about = "Seed the trivia database from a question bank")]
struct Args {
    /// Path to a question bank JSON file
    #[arg(short, long)]
    file: PathBuf,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Maximum number of questions to import
    #[arg(short, long)]
    limit: Option<usize>,

    /// Clear existing questions before import
    #[arg(long)]
    clear: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Connecting to database...");
    let options = SqliteConnectOptions::from_str(&args.database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    // Run migrations to ensure schema exists
    sqlx::migrate!("../../migrations").run(&pool).await?;

    if args.clear {
        println!("Clearing existing questions...");
        sqlx::query("DELETE FROM questions").execute(&pool).await?;
    }

    println!("Parsing question bank: {:?}", args.file);
    let bank = bank::parse_bank(&args.file)?;
    println!(
        "Found {} categories and {} questions",
        bank.categories.len(),
        bank.questions.len()
    );

    let mut stats = ImportStats::default();

    println!("Importing categories...");
    import_categories(&pool, &bank.categories, &mut stats).await?;

    println!("Importing questions...");
    import_questions(&pool, bank.questions, args.limit, &mut stats).await?;

    println!();
    println!("Import complete:");
    println!("  Categories upserted:          {}", stats.categories);
    println!("  Filtered (passed all checks): {}", stats.filtered);
    println!("  Inserted into database:       {}", stats.inserted);
    println!("  Skipped (blank/out of range): {}", stats.skipped);

    Ok(())
}
