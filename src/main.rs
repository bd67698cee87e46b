use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use type_matchups::{
    check_chart_data, compiled_chart_source, compute_attack_effectiveness,
    compute_attack_multiplier_by_name, compute_attack_multiplier_lenient,
    compute_defense_effectiveness, parse_chart_data, ChartFormat, EffectivenessBucket,
    EffectivenessGroups, PokemonType, TypeChartRegistry, TypeMap,
};

const LABEL_WIDTH: usize = 10;

#[derive(Parser)]
#[command(
    name = "type-matchups",
    about = "Inspect and validate per-generation type effectiveness charts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the compiled charts
    Charts,

    /// Multiplier of one attacking type against a one- or two-typed defender
    Multiplier(MultiplierArgs),

    /// Group every attacking type by how it fares against the given defender
    Defense(GroupArgs),

    /// Group every defending type by how it fares against the given attack type(s)
    Attack(GroupArgs),

    /// Run the offline validation pass over chart files (.ron or .json)
    Validate(ValidateArgs),
}

#[derive(Args)]
struct MultiplierArgs {
    /// Chart identifier (gen1, gen2to5, gen6plus)
    #[arg(long, short, default_value = "gen6plus")]
    chart: String,

    /// Treat unrecognized type names as neutral instead of failing
    #[arg(long)]
    lenient: bool,

    attack: String,

    #[arg(num_args = 1..=2, required = true)]
    defenders: Vec<String>,
}

#[derive(Args)]
struct GroupArgs {
    /// Chart identifier (gen1, gen2to5, gen6plus)
    #[arg(long, short, default_value = "gen6plus")]
    chart: String,

    #[arg(num_args = 1..=2, required = true)]
    types: Vec<String>,
}

#[derive(Args)]
struct ValidateArgs {
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Charts => {
            let registry = TypeChartRegistry::global()?;
            for chart in registry.charts() {
                println!(
                    "{:<LABEL_WIDTH$} : {} types ({})",
                    chart.id().as_str(),
                    chart.type_names().len(),
                    compiled_chart_source(chart.id()).unwrap_or("unknown source")
                );
            }
            Ok(())
        }
        Commands::Multiplier(args) => {
            let type_map = TypeChartRegistry::global()?.type_map_for(&args.chart)?;
            let defenders: Vec<&str> = args.defenders.iter().map(String::as_str).collect();

            if args.lenient {
                let result = compute_attack_multiplier_lenient(&args.attack, &defenders, type_map)?;
                if result.is_exact() {
                    println!("{}", result.multiplier);
                } else {
                    println!(
                        "{} (assumed neutral for: {})",
                        result.multiplier,
                        result.unknown_types.join(", ")
                    );
                }
            } else {
                let multiplier =
                    compute_attack_multiplier_by_name(&args.attack, &defenders, type_map)?;
                println!("{}", multiplier);
            }
            Ok(())
        }
        Commands::Defense(args) => {
            let type_map = TypeChartRegistry::global()?.type_map_for(&args.chart)?;
            let (first, second) = resolve_pair(type_map, &args.types)?;
            let groups = compute_defense_effectiveness(first, second, type_map)?;
            print_groups(&format!("Attacking types against {}", describe(first, second)), &groups);
            Ok(())
        }
        Commands::Attack(args) => {
            let type_map = TypeChartRegistry::global()?.type_map_for(&args.chart)?;
            let (first, second) = resolve_pair(type_map, &args.types)?;
            let groups = compute_attack_effectiveness(first, second, type_map)?;
            print_groups(&format!("Defending types against {}", describe(first, second)), &groups);
            Ok(())
        }
        Commands::Validate(args) => validate_files(&args.files),
    }
}

fn resolve_pair(
    type_map: &TypeMap,
    names: &[String],
) -> Result<(PokemonType, Option<PokemonType>), Box<dyn Error>> {
    let first = names.first().ok_or("expected at least one type")?;
    let second = names
        .get(1)
        .map(|name| type_map.resolve(name))
        .transpose()?;
    Ok((type_map.resolve(first)?, second))
}

fn describe(first: PokemonType, second: Option<PokemonType>) -> String {
    match second {
        Some(second) => format!("{} / {}", first, second),
        None => first.to_string(),
    }
}

fn print_groups(title: &str, groups: &EffectivenessGroups) {
    println!("{}", title);
    println!("--------------------");
    for bucket in EffectivenessBucket::ALL {
        let entries: Vec<String> = groups
            .bucket(bucket)
            .iter()
            .map(|matchup| format!("{} ({})", matchup.pokemon_type, matchup.multiplier))
            .collect();
        let label = format!("{:?}", bucket);
        if entries.is_empty() {
            println!("{:<LABEL_WIDTH$} : -", label);
        } else {
            println!("{:<LABEL_WIDTH$} : {}", label, entries.join(", "));
        }
    }
}

fn validate_files(files: &[PathBuf]) -> Result<(), Box<dyn Error>> {
    let mut failed = 0;

    for path in files {
        let format = ChartFormat::from_path(path)
            .ok_or_else(|| format!("{}: expected a .ron or .json file", path.display()))?;
        let content = fs::read_to_string(path)?;

        let errors = match parse_chart_data(&content, format) {
            Ok(data) => check_chart_data(&data),
            Err(e) => vec![e],
        };

        if errors.is_empty() {
            println!("{}: ok", path.display());
        } else {
            failed += 1;
            println!("{}: {} issue(s)", path.display(), errors.len());
            for error in &errors {
                println!("  - {}", error);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} chart file(s) failed validation", failed).into());
    }
    Ok(())
}
