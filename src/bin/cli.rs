use anyhow::Context;
use campus::cli::{SeedConfig, clear_seeded_data, seed_database};
use campus::state::AppState;
use campus_config::{CorsConfig, DatabaseConfig};
use campus_db::{PgPool, init_db_pool};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campus-cli")]
#[command(about = "Campus CLI - Administrative tools for the Campus API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Seed the database with fake records
    Seed {
        /// Number of students to create
        #[arg(short = 's', long, default_value = "50")]
        students: usize,

        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "10")]
        teachers: usize,

        /// Number of guardians to create
        #[arg(short = 'g', long, default_value = "40")]
        guardians: usize,

        /// Number of courses to create
        #[arg(short = 'c', long, default_value = "12")]
        courses: usize,
    },
    /// Delete every record created by the seeder
    ClearSeed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Seed {
            students,
            teachers,
            guardians,
            courses,
        } => {
            let config = SeedConfig {
                students,
                teachers,
                guardians,
                courses,
            };
            handle_seed(pool, config).await
        }
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    println!("✅ Migrations applied");

    Ok(())
}

async fn handle_seed(pool: PgPool, config: SeedConfig) -> anyhow::Result<()> {
    let state = AppState::new(pool, CorsConfig::default());
    let summary = seed_database(&state, config).await?;

    println!("   Students: {}", summary.students);
    println!("   Teachers: {}", summary.teachers);
    println!("   Guardians: {}", summary.guardians);
    println!("   Courses: {}", summary.courses);
    println!("   Student guardians: {}", summary.student_guardians);

    Ok(())
}

async fn handle_clear_seed(pool: &PgPool) -> anyhow::Result<()> {
    println!("🗑️  Clearing seeded data...");

    let removed = clear_seeded_data(pool)
        .await
        .context("Failed to clear seeded data")?;

    println!("✅ Removed {} seeded records", removed);

    Ok(())
}
