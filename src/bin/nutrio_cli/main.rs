// ABOUTME: Nutrio CLI - conversational meal logging and daily summaries from the terminal
// ABOUTME: Chat REPL, daily summary rendering, and limit management against the REST backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project
//!
//! Usage:
//! ```bash
//! # Interactive meal-logging chat against the configured backend
//! nutrio-cli chat
//!
//! # Chat against an in-memory store seeded with a demo catalog
//! nutrio-cli chat --offline
//!
//! # Daily summary for today or a given date
//! nutrio-cli summary
//! nutrio-cli summary --date 2026-08-29
//!
//! # Show or update the daily nutrient limits
//! nutrio-cli limits
//! nutrio-cli limits --calories 1800 --fat 60
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use nutrio::assistant::Assistant;
use nutrio::config::AppConfig;
use nutrio::logging::LoggingConfig;
use nutrio::ChatSession;
use nutrio_core::formatters::format_nutrient;
use nutrio_core::models::{DailyLimits, FoodItem, NewFood};
use nutrio_intelligence::{assess_day, Progress, Severity};
use nutrio_providers::{
    FoodLookup, MemoryStore, NutritionStore, RestLookup, RestStore, ScriptedLookup,
};

#[derive(Parser)]
#[command(
    name = "nutrio-cli",
    about = "Nutrio meal logging CLI",
    long_about = "Conversational meal logging, daily nutrient summaries, and limit management."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Use an in-memory store with a demo catalog instead of the backend
    #[arg(long, global = true)]
    offline: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Interactive meal-logging chat
    Chat,

    /// Print the daily nutrient summary
    Summary {
        /// Date to summarize (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show or update the daily nutrient limits
    Limits {
        /// New daily calorie limit (kcal)
        #[arg(long)]
        calories: Option<f64>,

        /// New daily fat limit (grams)
        #[arg(long)]
        fat: Option<f64>,

        /// New daily carbohydrate limit (grams)
        #[arg(long)]
        carbohydrate: Option<f64>,

        /// New daily protein limit (grams)
        #[arg(long)]
        protein: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = AppConfig::from_env();
    let (store, lookup) = build_collaborators(&config, cli.offline)?;

    match cli.command {
        Command::Chat => run_chat(store, lookup).await,
        Command::Summary { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            print_summary(&*store, date).await
        }
        Command::Limits {
            calories,
            fat,
            carbohydrate,
            protein,
        } => manage_limits(&*store, calories, fat, carbohydrate, protein).await,
    }
}

fn build_collaborators(
    config: &AppConfig,
    offline: bool,
) -> Result<(Arc<dyn NutritionStore>, Arc<dyn FoodLookup>)> {
    if offline {
        let store = MemoryStore::with_catalog(demo_catalog());
        let lookup = ScriptedLookup::with_products(Vec::new());
        Ok((Arc::new(store), Arc::new(lookup)))
    } else {
        let store = RestStore::new(config.rest_config())
            .context("failed to build the nutrition store client")?;
        let lookup = RestLookup::new(config.lookup_config())
            .context("failed to build the food lookup client")?;
        Ok((Arc::new(store), Arc::new(lookup)))
    }
}

/// Starter catalog for offline runs
fn demo_catalog() -> Vec<NewFood> {
    let food = |name: &str, calories, fat, carbohydrate, protein, sodium, portion| NewFood {
        name: name.to_owned(),
        calories,
        fat,
        carbohydrate,
        protein,
        sodium,
        base_portion_weight: portion,
    };
    vec![
        food("huevo", 78.0, 5.3, 0.6, 6.3, 62.0, 50.0),
        food("pan integral", 247.0, 3.4, 41.0, 13.0, 400.0, 100.0),
        food("manzana", 52.0, 0.2, 14.0, 0.3, 1.0, 100.0),
        food("arroz blanco", 130.0, 0.3, 28.0, 2.7, 1.0, 100.0),
        food("pechuga de pollo", 165.0, 3.6, 0.0, 31.0, 74.0, 100.0),
    ]
}

async fn run_chat(store: Arc<dyn NutritionStore>, lookup: Arc<dyn FoodLookup>) -> Result<()> {
    let assistant = Assistant::new(store, lookup);
    let mut session = ChatSession::new();

    println!("Nutrio — contame qué comiste (\"salir\" para terminar)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "salir" | "exit" | "quit") {
            println!("¡Hasta luego!");
            break;
        }

        let today = Local::now().date_naive();
        session = assistant.handle_turn(session, input, today).await;
        if let Some(reply) = session.last_reply() {
            println!("{reply}");
        }
    }

    Ok(())
}

async fn print_summary(store: &dyn NutritionStore, date: NaiveDate) -> Result<()> {
    let summary = store
        .summarize(date)
        .await
        .context("failed to fetch the daily summary")?;
    let limits = store
        .get_limits()
        .await
        .context("failed to fetch the daily limits")?;
    let entries = store
        .list_entries(date)
        .await
        .context("failed to fetch the day's entries")?;
    let foods = store
        .list_foods()
        .await
        .context("failed to fetch the food catalog")?;
    let catalog: HashMap<i64, &FoodItem> = foods.iter().map(|f| (f.id, f)).collect();

    println!("Resumen del {date}");
    for slot_totals in &summary.per_slot {
        let t = &slot_totals.totals;
        if t.calories == 0.0 && t.protein == 0.0 && t.carbohydrate == 0.0 && t.fat == 0.0 {
            continue;
        }
        println!(
            "  {:10} {} kcal | grasas {}g | carbos {}g | proteínas {}g",
            slot_totals.slot.label(),
            format_nutrient(t.calories),
            format_nutrient(t.fat),
            format_nutrient(t.carbohydrate),
            format_nutrient(t.protein),
        );
        for entry in entries.iter().filter(|e| e.slot == slot_totals.slot) {
            if let Some(food) = catalog.get(&entry.food_id) {
                println!("    - {}: {}", food.name, entry.describe_quantity(food));
            }
        }
    }

    let assessment = assess_day(&summary.total, &limits);
    println!("Total del día:");
    print_progress("calorías", &assessment.calories, "kcal");
    print_progress("grasas", &assessment.fat, "g");
    print_progress("carbohidratos", &assessment.carbohydrate, "g");
    print_progress("proteínas", &assessment.protein, "g");

    Ok(())
}

fn print_progress(label: &str, progress: &Progress, unit: &str) {
    let marker = match progress.severity {
        Severity::Nominal => "",
        Severity::Warning => "  ← cerca del límite",
        Severity::Critical => "  ← límite superado",
    };
    println!(
        "  {:14} {} / {} {} ({}%){}",
        label,
        format_nutrient(progress.actual),
        format_nutrient(progress.limit),
        unit,
        format_nutrient(progress.percent),
        marker
    );
}

async fn manage_limits(
    store: &dyn NutritionStore,
    calories: Option<f64>,
    fat: Option<f64>,
    carbohydrate: Option<f64>,
    protein: Option<f64>,
) -> Result<()> {
    let current = store
        .get_limits()
        .await
        .context("failed to fetch the daily limits")?;

    let updated = DailyLimits {
        calories: calories.unwrap_or(current.calories),
        fat: fat.unwrap_or(current.fat),
        carbohydrate: carbohydrate.unwrap_or(current.carbohydrate),
        protein: protein.unwrap_or(current.protein),
    };

    if updated != current {
        store
            .update_limits(&updated)
            .await
            .context("failed to update the daily limits")?;
        println!("Límites actualizados:");
    } else {
        println!("Límites diarios:");
    }
    println!("  calorías      {} kcal", format_nutrient(updated.calories));
    println!("  grasas        {} g", format_nutrient(updated.fat));
    println!("  carbohidratos {} g", format_nutrient(updated.carbohydrate));
    println!("  proteínas     {} g", format_nutrient(updated.protein));

    Ok(())
}
