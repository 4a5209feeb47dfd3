use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use hotel_metrics::{
    cache::MetricsCache,
    config::{AppConfig, load_config},
    dashboard, export,
    input::{DailyInput, ScenarioInput},
    kpi,
    models::DailyMetric,
    store::{SqliteStore, UpsertFeedback},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about = "Hotel Insights: daily RevPAR tracking and yield simulation")]
struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Create the schema and seed synthetic history into an empty store
    Init,

    /// Record (or replace) the figures for one day
    Record {
        /// Day in YYYY-MM-DD format (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Rooms available (defaults to the configured room count)
        #[arg(long)]
        rooms: Option<i32>,

        /// Occupancy in percent (0-100)
        #[arg(long, default_value = "60")]
        occupancy: f64,

        /// Own average daily rate
        #[arg(long, default_value = "220")]
        adr: f64,

        /// Competitor average daily rate
        #[arg(long, default_value = "215")]
        competitor: f64,
    },

    /// Print every stored day, oldest first
    List,

    /// Headline KPIs for the last N days (7-30)
    Dashboard {
        #[arg(long, default_value = "30")]
        days: usize,
    },

    /// Project revenue for a planned rate without touching the store
    Simulate {
        /// Planned daily rate
        #[arg(long, default_value = "250")]
        adr: f64,

        /// Estimated occupancy in percent (0-100)
        #[arg(long, default_value = "50")]
        occupancy: f64,

        /// Rooms to project for (defaults to the configured room count)
        #[arg(long)]
        rooms: Option<i32>,
    },

    /// Export the full history as CSV
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

/// Initialized store plus the read cache every command goes through.
struct Session {
    store: SqliteStore,
    cache: MetricsCache,
}

impl Session {
    fn open(cfg: &AppConfig) -> Result<Self> {
        let mut store = SqliteStore::open(&cfg.database_url).with_context(|| {
            format!(
                "critical error while initializing the database: cannot open {}",
                cfg.database_url
            )
        })?;
        let report = store
            .initialize(&cfg.seed_config(), Local::now().date_naive(), &mut rand::rng())
            .context("critical error while initializing the database")?;
        info!(
            rows = report.rows,
            seeded = report.seeded,
            migrations = report.migrations_applied,
            "store ready"
        );
        Ok(Self {
            store,
            cache: MetricsCache::new(cfg.cache_ttl()),
        })
    }

    fn rows(&mut self) -> Result<Arc<Vec<DailyMetric>>> {
        self.cache
            .load_through(&mut self.store)
            .context("failed to load data")
    }

    fn record(&mut self, input: &DailyInput) -> UpsertFeedback {
        UpsertFeedback::from(&self.cache.upsert_and_invalidate(&mut self.store, input))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_metrics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.cmd {
        Cmd::Init => {
            let mut session = Session::open(&cfg)?;
            let stored = session.rows()?.len();
            println!("{stored} day(s) stored in {}", cfg.database_url);
        }
        Cmd::Record {
            date,
            rooms,
            occupancy,
            adr,
            competitor,
        } => {
            let mut session = Session::open(&cfg)?;
            let input = DailyInput::new(
                date.unwrap_or_else(|| Local::now().date_naive()),
                rooms.unwrap_or(cfg.default_rooms),
                occupancy,
                adr,
                competitor,
            );
            let feedback = session.record(&input);
            if !feedback.success {
                bail!(feedback.message);
            }
            println!("{}", feedback.message);
        }
        Cmd::List => {
            let rows = Session::open(&cfg)?.rows()?;
            println!(
                "{:<10}  {:>5}  {:>6}  {:>8}  {:>8}  {:>8}  {:>10}",
                "date", "rooms", "occ%", "adr", "comp", "revpar", "revenue"
            );
            for r in rows.iter() {
                println!(
                    "{:<10}  {:>5}  {:>6.1}  {:>8.2}  {:>8.2}  {:>8.2}  {:>10.2}",
                    r.date,
                    r.rooms_total,
                    r.occupancy_pct,
                    r.adr,
                    r.competitor_adr,
                    r.revpar,
                    r.revenue
                );
            }
        }
        Cmd::Dashboard { days } => {
            let rows = Session::open(&cfg)?.rows()?;
            let Some(summary) = dashboard::summarize(&rows, days) else {
                println!("no data recorded yet");
                return Ok(());
            };
            let h = summary.headline;
            println!("Window:      last {} day(s), ending {}", summary.window_days, h.date);
            println!("Occupancy:   {:.1}%", h.occupancy_pct);
            println!("ADR:         {:.2}", h.adr);
            println!("Competitor:  {:.2} ({:+.2} vs market)", h.competitor_adr, h.market_delta);
            println!("RevPAR:      {:.2}", h.revpar);
            println!("Revenue:     {:.2} over the window", summary.window_revenue);
        }
        Cmd::Simulate {
            adr,
            occupancy,
            rooms,
        } => {
            let input = ScenarioInput {
                planned_adr: adr,
                estimated_occupancy_pct: occupancy,
                rooms_total: rooms.unwrap_or(cfg.default_rooms),
            };
            input.validate().context("invalid scenario")?;
            let s = kpi::simulate(
                input.planned_adr,
                input.estimated_occupancy_pct,
                input.rooms_total,
            );
            println!("Projected revenue: {:.2}", s.projected_revenue);
            println!("RevPAR:            {:.2}", s.revpar);
            println!("Demand:            {} - {}", s.demand, s.demand.advice());
        }
        Cmd::Export { out } => {
            let rows = Session::open(&cfg)?.rows()?;
            match out {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    export::write_csv(&rows, BufWriter::new(file))?;
                    eprintln!("exported {} row(s) to {}", rows.len(), path.display());
                }
                None => export::write_csv(&rows, io::stdout().lock())?,
            }
        }
    }

    Ok(())
}
