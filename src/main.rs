use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use windload::draw::{VizConfig, write_svg};
use windload::io::report::{Report, to_report_string, write_report};
use windload::{CalculatorConfig, Scenario, WindLoadInputs};

/// Wind load on a tilted solar panel
#[derive(Parser)]
#[command(name = "windload")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wind load calculator for tilted solar panels", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Reject negative or non-numeric inputs
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate from explicit inputs
    Calc(CalcArgs),
    /// Calculate a named scenario
    Scenario(ScenarioArgs),
    /// List the scenarios
    Scenarios,
}

#[derive(Args)]
struct CalcArgs {
    /// Wind speed [m/s]
    #[arg(short, long, allow_hyphen_values = true)]
    wind_speed: Option<f64>,

    /// Air density [kg/m³]
    #[arg(short = 'd', long, allow_hyphen_values = true)]
    air_density: Option<f64>,

    /// Panel area [m²]
    #[arg(short, long, allow_hyphen_values = true)]
    area: Option<f64>,

    /// Installation angle [°]
    #[arg(short = 't', long, allow_hyphen_values = true)]
    angle: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct ScenarioArgs {
    /// residential, commercial, typhoon or flatroof
    name: Scenario,

    /// Air density [kg/m³]
    #[arg(short = 'd', long, allow_hyphen_values = true)]
    air_density: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the report as JSON to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write the panel schematic as SVG to this file
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn load_config(path: Option<&Path>, strict: bool) -> Result<CalculatorConfig> {
    let mut config = match path {
        Some(p) => {
            log::info!("Loading config from {}", p.display());
            windload::config::read_config(p)?
        }
        None => CalculatorConfig::default(),
    };
    config.strict |= strict;
    Ok(config)
}

fn run(
    inputs: WindLoadInputs,
    scenario: Option<Scenario>,
    config: &CalculatorConfig,
    output: &OutputArgs,
) -> Result<()> {
    if config.strict {
        inputs.validate()?;
    }
    let report = Report::new(inputs, scenario);

    if output.json {
        println!("{}", to_report_string(&report)?);
    } else {
        if let Some(s) = scenario {
            println!("Scenario          {s}");
        }
        println!(
            "Inputs            v = {} m/s, rho = {} kg/m³, A = {} m², theta = {}°",
            inputs.wind_speed, inputs.air_density, inputs.panel_area, inputs.install_angle
        );
        println!("{}", report.readout);
    }

    if let Some(path) = &output.report {
        write_report(path, &report)?;
        log::info!("Wrote report to {}", path.display());
    }
    if let Some(path) = &output.svg {
        let mut rng = rand::thread_rng();
        write_svg(path, &inputs, &report.result, &VizConfig::new(), &mut rng)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    windload::logger::init_logging(cli.log_level.as_deref())?;

    let config = load_config(cli.config.as_deref(), cli.strict)?;
    let defaults = config.defaults;

    match &cli.command {
        Commands::Calc(args) => {
            let inputs = WindLoadInputs::new(
                args.wind_speed.unwrap_or(defaults.wind_speed),
                args.air_density.unwrap_or(defaults.air_density),
                args.area.unwrap_or(defaults.panel_area),
                args.angle.unwrap_or(defaults.install_angle),
            );
            run(inputs, None, &config, &args.output)
        }
        Commands::Scenario(args) => {
            let air_density = args.air_density.unwrap_or(defaults.air_density);
            run(args.name.inputs(air_density), Some(args.name), &config, &args.output)
        }
        Commands::Scenarios => {
            println!("{:<12} {:>8} {:>8} {:>8}", "name", "v [m/s]", "A [m²]", "θ [°]");
            for s in Scenario::ALL {
                let p = s.preset();
                println!(
                    "{:<12} {:>8} {:>8} {:>8}",
                    s.name(),
                    p.wind_speed,
                    p.panel_area,
                    p.install_angle
                );
            }
            Ok(())
        }
    }
}
