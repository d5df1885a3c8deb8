//src/main.rs
mod cli;
mod plan;

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::io::stdout;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wod_builder_lib::{decode_records, AppService, Catalog, Workout};

fn main() -> Result<()> {
    // --- Check for completion generation request FIRST ---
    let cli_args = cli::parse_args();

    let filter = if cli_args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let cli::Commands::GenerateCompletion { shell } = cli_args.command {
        let mut cmd = cli::build_cli_command();
        let bin_name = cmd.get_name().to_string();

        eprintln!("Generating completion script for {}...", shell); // Print to stderr
        clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout());
        return Ok(());
    }

    let mut service =
        AppService::initialize().context("Failed to initialize application service")?;
    let header_color = wod_builder_lib::parse_color(&service.config.theme.header_color)
        .map(Color::from)
        .unwrap_or(Color::Blue); // Fallback

    match cli_args.command {
        cli::Commands::GenerateCompletion { .. } => {
            unreachable!("Completion generation should have exited already");
        }
        cli::Commands::Catalog {
            category,
            url,
            records,
        } => {
            let catalog = match records {
                Some(path) => {
                    let body = std::fs::read(&path)
                        .with_context(|| format!("Failed to read records file {path:?}"))?;
                    decode_records(&body)
                        .with_context(|| format!("Error grouping records from {path:?}"))?
                }
                None => fetch_catalog(&service, url.as_deref())?,
            };

            if let Some(name) = category.as_deref() {
                if catalog.category(name).is_none() {
                    bail!("Category '{}' not found in catalog", name);
                }
            }
            if catalog.is_empty() {
                println!("The catalog is empty.");
            } else {
                print_catalog_table(&catalog, category.as_deref(), header_color);
            }
        }
        cli::Commands::Compose { plan, table } => {
            let source = std::fs::read_to_string(&plan)
                .with_context(|| format!("Failed to read plan file {plan:?}"))?;
            let builder = plan::compose(&source)?;
            if table {
                print_workout_table(builder.workout(), header_color);
            } else {
                print!("{}", builder.export());
            }
        }
        cli::Commands::ConfigPath => {
            println!("{}", service.get_config_path().display());
        }
        cli::Commands::ShowConfig => {
            let api_url = service
                .api_base_url()
                .unwrap_or_else(|_| "(not set)".to_string());
            println!("Config file:        {}", service.get_config_path().display());
            println!("Catalog API URL:    {}", api_url);
            println!(
                "Superset presets:   {}",
                service.superset_preset_labels().join(", ")
            );
            println!(
                "Sets & reps:        {}",
                service.config.sets_reps_presets.join(", ")
            );
            println!(
                "Timer presets:      {}",
                service.config.timer_presets.join(", ")
            );
            println!("Toolbar preset:     {}", service.config.toolbar_preset_count);
            println!("Header color:       {}", service.config.theme.header_color);
        }
        cli::Commands::SetApiUrl { url } => {
            if url.trim().is_empty() {
                bail!("API URL cannot be empty.");
            }
            service.set_api_url(&url)?;
            println!(
                "Catalog API URL set to {} (saved to {:?}).",
                url.trim(),
                service.get_config_path()
            );
        }
    }

    Ok(())
}

fn fetch_catalog(service: &AppService, url: Option<&str>) -> Result<Catalog> {
    let client = service.catalog_client(url)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime
        .block_on(client.fetch())
        .with_context(|| format!("Error fetching catalog from {}", client.endpoint()))
}

fn print_catalog_table(catalog: &Catalog, only: Option<&str>, header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").fg(header_color),
            Cell::new("#").fg(header_color),
            Cell::new("Exercises").fg(header_color),
        ]);

    for category in catalog
        .categories()
        .iter()
        .filter(|c| only.map_or(true, |name| c.name == name))
    {
        table.add_row(vec![
            Cell::new(&category.name),
            Cell::new(category.exercises.len().to_string()),
            Cell::new(category.exercises.join("\n")),
        ]);
    }
    println!("{table}");
}

fn print_workout_table(workout: &Workout, header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(header_color),
            Cell::new("Group").fg(header_color),
            Cell::new("Pos").fg(header_color),
            Cell::new("Exercise").fg(header_color),
            Cell::new("Sets & Reps").fg(header_color),
        ]);

    let grouped = workout.supersets().iter().enumerate().flat_map(|(n, g)| {
        g.exercises
            .iter()
            .enumerate()
            .map(move |(pos, item)| (format!("{n}: {}", g.label), pos, item))
    });
    let flat = workout
        .selected()
        .iter()
        .enumerate()
        .map(|(pos, item)| ("-".to_string(), pos, item));

    for (group, pos, item) in grouped.chain(flat) {
        let text = if item.is_divider() {
            "────────".to_string()
        } else {
            item.text.clone()
        };
        table.add_row(vec![
            Cell::new(item.id.to_string()),
            Cell::new(group),
            Cell::new(pos.to_string()),
            Cell::new(text),
            Cell::new(item.sets_reps.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{table}");
}
