use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dashboard::{ChartKind, ChartSpec, Dashboard, DashboardConfig, MIN_AGE_BIN_WIDTH, Presentation};
use data_loader::RatingsTable;
use pipeline::{FilterOptions, FilterSpec};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Movie Ratings Dashboard
#[derive(Parser)]
#[command(name = "movie-dashboard")]
#[command(about = "Filter a movie ratings dataset and show its summary views", long_about = None)]
struct Cli {
    /// Path to the ratings CSV
    #[arg(short, long, default_value = "data/cleaned_movie_ratings.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard for one filter selection
    Show {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Print the presentation as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also print the first rows of the filtered data
        #[arg(long)]
        sample: bool,
    },

    /// List the values the filters accept
    Options {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Release year, or "All"
    #[arg(long, default_value = "All")]
    year: String,

    /// Genre, or "All"
    #[arg(long, default_value = "All")]
    genre: String,

    /// Lowest rating to include (default: lowest observed)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Highest rating to include (default: highest observed)
    #[arg(long)]
    max_rating: Option<f64>,
}

#[derive(Args)]
struct LayoutArgs {
    /// Genres in the satisfaction ranking
    #[arg(long, default_value_t = DashboardConfig::default().top_genres)]
    top_genres: usize,

    /// Titles in each top-rated list
    #[arg(long, default_value_t = DashboardConfig::default().top_movies)]
    top_movies: usize,

    /// Minimum ratings for the broader top-rated list
    #[arg(long, default_value_t = DashboardConfig::default().broad_threshold)]
    broad_threshold: usize,

    /// Minimum ratings for the stricter top-rated list
    #[arg(long, default_value_t = DashboardConfig::default().strict_threshold)]
    strict_threshold: usize,

    /// Width of an age histogram bin, in years
    #[arg(
        long,
        default_value_t = DashboardConfig::default().age_bin_width,
        value_parser = parse_bin_width
    )]
    age_bin_width: f64,
}

impl LayoutArgs {
    fn into_config(self) -> DashboardConfig {
        DashboardConfig {
            top_genres: self.top_genres,
            top_movies: self.top_movies,
            broad_threshold: self.broad_threshold,
            strict_threshold: self.strict_threshold,
            age_bin_width: self.age_bin_width,
            ..DashboardConfig::default()
        }
    }
}

/// Parse `--age-bin-width`: a finite number of years, not too narrow
fn parse_bin_width(s: &str) -> std::result::Result<f64, String> {
    let width: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !width.is_finite() || width < MIN_AGE_BIN_WIDTH {
        return Err(format!(
            "bin width must be a finite number of at least {MIN_AGE_BIN_WIDTH} years"
        ));
    }
    Ok(width)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the canonical table once
    let start = Instant::now();
    let table = Arc::new(
        RatingsTable::load_from_file(&cli.data)
            .with_context(|| format!("Failed to load ratings from {}", cli.data.display()))?,
    );
    eprintln!(
        "{} Loaded {} ratings in {:?}",
        "✓".green(),
        table.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Show {
            filters,
            layout,
            json,
            sample,
        } => handle_show(table, filters, layout.into_config(), json, sample)?,
        Commands::Options { json } => handle_options(&FilterOptions::from_table(&table), json)?,
    }

    Ok(())
}

/// Handle the 'show' command
fn handle_show(
    table: Arc<RatingsTable>,
    filters: FilterArgs,
    config: DashboardConfig,
    json: bool,
    sample: bool,
) -> Result<()> {
    let dashboard = Dashboard::new(table, config);
    let options = dashboard.filter_options();
    let spec = build_spec(&options, &filters)?;

    let presentation = dashboard.render(&spec);

    if json {
        println!("{}", serde_json::to_string_pretty(&presentation)?);
    } else {
        print_presentation(&presentation, sample);
    }
    Ok(())
}

/// Turn the filter flags into a validated selection.
///
/// Selections outside the dataset's domain are rejected here, before they
/// reach the pipeline.
fn build_spec(options: &FilterOptions, filters: &FilterArgs) -> Result<FilterSpec> {
    let (domain_min, domain_max) = options.rating_domain;
    let spec = FilterSpec::new(
        filters.min_rating.unwrap_or(domain_min),
        filters.max_rating.unwrap_or(domain_max),
    )
    .with_year(options.select_year(&filters.year)?)
    .with_genre(options.select_genre(&filters.genre)?);

    spec.validate(options).context("Invalid filter selection")?;
    Ok(spec)
}

/// Handle the 'options' command
fn handle_options(options: &FilterOptions, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(options)?);
        return Ok(());
    }

    println!("{}", "Filter options".bold().blue());
    println!("{}Years: {}", "• ".green(), options.year_choices().join(", "));
    println!("{}Genres: {}", "• ".green(), options.genre_choices().join(", "));
    println!(
        "{}Rating range: {} to {}",
        "• ".green(),
        options.rating_domain.0,
        options.rating_domain.1
    );
    Ok(())
}

/// Print the dashboard as text
fn print_presentation(presentation: &Presentation, sample: bool) {
    println!("{}", "Movie Ratings Dashboard".bold().blue());
    for metric in &presentation.metrics {
        println!("{}{}: {}", "• ".cyan(), metric.label, metric.value.bold());
    }

    for chart in &presentation.charts {
        println!();
        print_chart(chart);
    }

    if sample {
        println!();
        println!("{}", "Raw data sample".bold().blue());
        for row in &presentation.sample {
            println!(
                "  {} | {} | {} | {} | {:.1} | {} | {}",
                row.user_id,
                row.title,
                row.genre,
                row.year,
                row.rating,
                row.timestamp,
                row.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
            );
        }
    }
}

fn print_chart(chart: &ChartSpec) {
    println!("{}", chart.title.bold());

    if let Some(notice) = &chart.notice {
        println!("  {}", notice.yellow());
        return;
    }
    if chart.rows.is_empty() {
        println!("  {}", "(no data)".dimmed());
        return;
    }

    let max = chart.rows.iter().map(|r| r.value).fold(0.0_f64, f64::max);
    let width = chart.rows.iter().map(|r| r.category.len()).max().unwrap_or(0);
    for (rank, row) in chart.rows.iter().enumerate() {
        let bar_len = if max > 0.0 {
            ((row.value / max) * 30.0).round() as usize
        } else {
            0
        };
        let prefix = match chart.kind {
            ChartKind::Line | ChartKind::Histogram => "  ".to_string(),
            ChartKind::Bar => format!("{}. ", rank + 1),
        };
        println!(
            "  {}{:<width$} {} {}",
            prefix.green(),
            row.category,
            "█".repeat(bar_len),
            row.label
        );
    }
}
