#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use planning::{
    io,
    scheduler::{ConflictKind, Scheduler},
    storage,
    summary::{render_summary, TextSummary},
    PlanningConfig,
};
use rand::rngs::StdRng;
use std::path::Path;
use rand::SeedableRng;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration (jours, shifts, plafond, seuil, renforts)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// CSV des préférences: `Name,Monday,...,Sunday`
    #[arg(long, default_value = "input.csv")]
    input: String,

    /// CSV du planning produit
    #[arg(long, default_value = "output.csv")]
    output: String,

    /// Export JSON du planning (optionnel)
    #[arg(long)]
    json: Option<String>,

    /// Graine pour un résultat reproductible
    #[arg(long)]
    seed: Option<u64>,

    /// Plafond de jours travaillés par personne
    #[arg(long)]
    max_shifts: Option<u32>,

    /// Seuil minimal de personnes par shift
    #[arg(long)]
    min_per_shift: Option<usize>,

    /// Affiche le récapitulatif par jour
    #[arg(long)]
    summary: bool,

    /// Code de sortie 2 si un shift reste en sous-effectif
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Écrire la configuration par défaut en JSON
    InitConfig {
        #[arg(long, default_value = "planning.json")]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut config = match &cli.config {
        Some(path) => PlanningConfig::load(path)?,
        None => PlanningConfig::default(),
    };

    let code = match cli.cmd {
        Some(Commands::InitConfig { out }) => {
            storage::write_atomic(Path::new(&out), config.to_json_pretty()?.as_bytes())
                .with_context(|| format!("writing config {out}"))?;
            println!("Configuration written to {out}");
            0
        }
        None => run(&mut config, cli.run)?,
    };

    std::process::exit(code);
}

fn run(config: &mut PlanningConfig, args: RunArgs) -> Result<i32> {
    if let Some(max) = args.max_shifts {
        config.max_shifts_per_employee = max;
    }
    if let Some(min) = args.min_per_shift {
        config.min_employees_per_shift = min;
    }
    config.validate()?;

    let report = io::import_employees_csv(&args.input, config)?;
    if report.skipped_rows > 0 {
        eprintln!("Skipped {} malformed row(s) in {}", report.skipped_rows, args.input);
    }

    let mut scheduler = Scheduler::with_roster(config.clone(), report.into_roster());
    scheduler.augment_with_backup_pool();

    let schedule = match args.seed {
        Some(seed) => scheduler.assign_week(&mut StdRng::seed_from_u64(seed)),
        None => scheduler.assign_week(&mut rand::rng()),
    };

    io::export_schedule_csv(&args.output, scheduler.roster(), config)?;
    if let Some(path) = &args.json {
        io::export_schedule_json(path, &schedule, config.min_employees_per_shift)?;
    }

    if args.summary {
        print!(
            "{}",
            render_summary(&schedule, config.min_employees_per_shift, &TextSummary)
        );
    }
    println!("Final schedule written to {}", args.output);

    let understaffed = scheduler
        .detect_conflicts(&schedule, config.assign_options())
        .into_iter()
        .filter(|c| c.kind == ConflictKind::Understaffed)
        .count();
    if understaffed == 0 {
        return Ok(0);
    }
    eprintln!("{understaffed} shift(s) below {} employee(s)", config.min_employees_per_shift);
    // Code 2 = WARNING/INCOMPLETE
    Ok(if args.strict { 2 } else { 0 })
}
