use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use outbreak::config::ScenarioConfig;
use outbreak::log::{info, set_log_level, LevelFilter};
use outbreak::population::Population;
use outbreak::report::write_time_series;
use outbreak::runner::run_simulation;

/// Discrete-time stochastic agent-based epidemic simulator.
#[derive(Parser, Debug)]
#[command(name = "outbreak", version, about)]
struct Cli {
    /// Number of people in the population
    #[arg(short, long)]
    population: Option<usize>,

    /// Number of people infected on day zero
    #[arg(short, long)]
    initial_infected: Option<usize>,

    /// Number of simulated days, including day zero
    #[arg(short, long)]
    days: Option<u32>,

    /// Daily probability that an eligible case is detected
    #[arg(short, long)]
    efficiency: Option<f64>,

    /// Random seed
    #[arg(short, long)]
    random_seed: Option<u64>,

    /// Optional path to a JSON scenario file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Optional path for the CSV time-series report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "off")]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    set_log_level(cli.log_level);

    let mut scenario = match &cli.config {
        Some(path) => ScenarioConfig::from_file(path)?,
        None => ScenarioConfig::default(),
    };
    if let Some(population) = cli.population {
        scenario.population = population;
    }
    if let Some(initial_infected) = cli.initial_infected {
        scenario.initial_infected = initial_infected;
    }
    if let Some(days) = cli.days {
        scenario.days = days;
    }
    if let Some(efficiency) = cli.efficiency {
        scenario.discovery_efficiency = efficiency;
    }
    if let Some(random_seed) = cli.random_seed {
        scenario.random_seed = random_seed;
    }

    let mut rng = StdRng::seed_from_u64(scenario.random_seed);
    let mut population = Population::new(scenario.population, scenario.initial_infected, &mut rng)?;
    let series = run_simulation(
        &mut population,
        scenario.days,
        scenario.discovery_efficiency,
        0,
        &mut rng,
    )?;

    match &cli.output {
        Some(path) => {
            write_time_series(&series, path)?;
            info!("wrote report to {}", path.display());
        }
        None => {
            println!("day,infected,discovered,healed,dead");
            for row in series.rows() {
                println!(
                    "{},{},{},{},{}",
                    row.day, row.infected, row.discovered, row.healed, row.dead
                );
            }
        }
    }

    Ok(())
}
