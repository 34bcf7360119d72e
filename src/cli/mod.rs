pub mod seeder;

pub use seeder::{SEEDER_ID, SeedConfig, SeedSummary, clear_seeded_data, seed_database};
