use artillery_engine::atmosphere::atmosphere_ceiling;
use artillery_engine::{
    default_fan_angles, find_optimal_angle, trajectory_fan, AngleSweep, BallisticsError, DragLaw,
    FlightSummary, PhysicalParams, Trajectory, TrajectorySolver, Wind,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "range-cli")]
#[command(version)]
#[command(about = "Long-range artillery trajectory and launch-angle optimizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with physical parameters (missing fields use defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Integration time step (seconds)
    #[arg(short = 't', long, global = true, default_value = "0.1")]
    time_step: f64,

    /// Drag speed formula: quadratic or doubled
    #[arg(long, global = true, value_parser = parse_drag_law)]
    drag_law: Option<DragLaw>,

    /// Drag constant B (kg/m)
    #[arg(short = 'b', long, global = true)]
    drag_coefficient: Option<f64>,

    /// Projectile mass (kg)
    #[arg(short = 'm', long, global = true)]
    mass: Option<f64>,

    /// Muzzle velocity (m/s)
    #[arg(long, global = true)]
    velocity: Option<f64>,

    /// Horizontal wind along the firing direction (m/s)
    #[arg(long, global = true)]
    wind_x: Option<f64>,

    /// Vertical wind, positive upwards (m/s)
    #[arg(long, global = true)]
    wind_y: Option<f64>,

    /// Increase log verbosity (repeat for debug and trace output)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep launch angles and report the one with maximum range
    Optimize {
        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Calculate a single trajectory
    Trajectory {
        /// Launch angle (degrees)
        #[arg(short = 'a', long)]
        angle: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every trajectory point in table output
        #[arg(long)]
        full: bool,
    },

    /// Trajectories for a set of launch angles (overlay chart data)
    Fan {
        /// Launch angles in degrees, comma separated (default 30,35,...,70)
        #[arg(short = 'a', long, value_delimiter = ',')]
        angles: Option<Vec<f64>>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display the active physical parameters
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

fn parse_drag_law(s: &str) -> Result<DragLaw, String> {
    DragLaw::from_str(s)
        .ok_or_else(|| format!("unknown drag law '{s}' (expected quadratic or doubled)"))
}

#[derive(Debug, Serialize)]
struct TrajectoryReport<'a> {
    angle_deg: f64,
    summary: FlightSummary,
    trajectory: &'a Trajectory,
}

impl<'a> TrajectoryReport<'a> {
    fn new(angle_deg: f64, trajectory: &'a Trajectory) -> Result<Self, BallisticsError> {
        Ok(Self {
            angle_deg,
            summary: trajectory.summary()?,
            trajectory,
        })
    }
}

#[derive(Debug, Serialize)]
struct OptimizeReport<'a> {
    params: &'a PhysicalParams,
    time_step: f64,
    optimal_angle_deg: f64,
    max_range_m: f64,
    sweep: &'a AngleSweep,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let params = build_params(&cli)?;
    let solver = TrajectorySolver::new(params).with_time_step(cli.time_step);
    solver.validate()?;

    match cli.command {
        Commands::Optimize { output } => {
            let sweep = find_optimal_angle(&solver)?;
            display_sweep(&solver, &sweep, output)?;
        }

        Commands::Trajectory { angle, output, full } => {
            let trajectory = solver.solve(angle)?;
            let report = TrajectoryReport::new(angle, &trajectory)?;
            display_trajectory(&report, output, full)?;
        }

        Commands::Fan { angles, output } => {
            let angles = angles.unwrap_or_else(default_fan_angles);
            let fan = trajectory_fan(&solver, &angles)?;
            display_fan(&fan, output)?;
        }

        Commands::Info => display_params(&solver),
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn build_params(cli: &Cli) -> Result<PhysicalParams, Box<dyn Error>> {
    let mut params = match &cli.config {
        Some(path) => PhysicalParams::from_json_file(path)?,
        None => PhysicalParams::default(),
    };

    if let Some(law) = cli.drag_law {
        params.drag_law = law;
    }
    if let Some(b) = cli.drag_coefficient {
        params.drag_coefficient = b;
    }
    if let Some(mass) = cli.mass {
        params.mass = mass;
    }
    if let Some(velocity) = cli.velocity {
        params.muzzle_velocity = velocity;
    }
    if cli.wind_x.is_some() || cli.wind_y.is_some() {
        params.wind = Wind::new(
            cli.wind_x.unwrap_or(params.wind.horizontal),
            cli.wind_y.unwrap_or(params.wind.vertical),
        );
    }

    params.validate()?;
    Ok(params)
}

fn display_sweep(
    solver: &TrajectorySolver,
    sweep: &AngleSweep,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let report = OptimizeReport {
                params: solver.params(),
                time_step: solver.time_step(),
                optimal_angle_deg: sweep.best_angle(),
                max_range_m: sweep.best_range(),
                sweep,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        OutputFormat::Csv => {
            println!("angle_deg,range_m");
            for s in &sweep.coarse {
                println!("{:.1},{:.2}", s.angle_deg, s.range_m);
            }
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         ANGLE OPTIMIZATION             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Optimal Angle:     {:>8.2} °          ║", sweep.best_angle());
            println!("║ Max Range:         {:>8.2} km         ║", sweep.best_range() / 1000.0);
            println!("║ Coarse Optimum:    {:>8.2} °          ║", sweep.coarse_best.angle_deg);
            println!("║ Drag Law:          {:>9}          ║", solver.params().drag_law);
            println!("║ Time Step:         {:>8.3} s          ║", solver.time_step());
            println!("╚════════════════════════════════════════╝");

            println!("\nRange vs Launch Angle:");
            println!("┌──────────┬──────────────┐");
            println!("│ Angle(°) │  Range (km)  │");
            println!("├──────────┼──────────────┤");
            for s in &sweep.coarse {
                println!("│ {:>8.1} │ {:>12.3} │", s.angle_deg, s.range_m / 1000.0);
            }
            println!("└──────────┴──────────────┘");
        }
    }

    Ok(())
}

fn display_trajectory(
    report: &TrajectoryReport<'_>,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    let TrajectoryReport {
        angle_deg: angle,
        summary,
        trajectory,
    } = *report;
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }

        OutputFormat::Csv => {
            println!("time,x,y");
            for (i, (x, y)) in trajectory.points().enumerate() {
                let t = (i + 1) as f64 * trajectory.time_step;
                println!("{:.3},{:.2},{:.2}", t, x, y);
            }
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         TRAJECTORY RESULTS             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Launch Angle:      {:>8.2} °          ║", angle);
            println!("║ Range:             {:>8.2} km         ║", summary.range_m / 1000.0);
            println!("║ Max Height:        {:>8.2} km         ║", summary.max_height_m / 1000.0);
            println!("║ Time of Flight:    {:>8.2} s          ║", summary.time_of_flight_s);
            println!("║ Samples:           {:>8}            ║", summary.samples);
            println!("╚════════════════════════════════════════╝");

            let step = if full { 1 } else { (trajectory.len() / 10).max(1) };
            println!("\nTrajectory Points:");
            println!("┌──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (km)  │  Y (km)  │");
            println!("├──────────┼──────────┼──────────┤");
            let last = trajectory.len().saturating_sub(1);
            for (i, (x, y)) in trajectory.points().enumerate() {
                if i % step == 0 || i == last {
                    let t = (i + 1) as f64 * trajectory.time_step;
                    println!("│ {:>8.2} │ {:>8.3} │ {:>8.3} │", t, x / 1000.0, y / 1000.0);
                }
            }
            println!("└──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}

fn display_fan(fan: &[(f64, Trajectory)], format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let reports = fan
                .iter()
                .map(|(angle, trajectory)| TrajectoryReport::new(*angle, trajectory))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }

        OutputFormat::Csv => {
            println!("angle_deg,x,y");
            for (angle, trajectory) in fan {
                for (x, y) in trajectory.points() {
                    println!("{:.1},{:.2},{:.2}", angle, x, y);
                }
            }
        }

        OutputFormat::Table => {
            println!("Projectile trajectories by launch angle:");
            println!("┌──────────┬────────────┬────────────┬──────────┐");
            println!("│ Angle(°) │ Range (km) │ Apex (km)  │ Time (s) │");
            println!("├──────────┼────────────┼────────────┼──────────┤");
            for (angle, trajectory) in fan {
                let s = trajectory.summary()?;
                println!(
                    "│ {:>8.1} │ {:>10.3} │ {:>10.3} │ {:>8.2} │",
                    angle,
                    s.range_m / 1000.0,
                    s.max_height_m / 1000.0,
                    s.time_of_flight_s
                );
            }
            println!("└──────────┴────────────┴────────────┴──────────┘");
        }
    }

    Ok(())
}

fn display_params(solver: &TrajectorySolver) {
    let p = solver.params();
    println!("╔════════════════════════════════════════╗");
    println!("║         PHYSICAL PARAMETERS            ║");
    println!("╠════════════════════════════════════════╣");
    println!("║ Gravity:           {:>10.4} m/s²     ║", p.gravity);
    println!("║ Drag B:            {:>10.2e} kg/m     ║", p.drag_coefficient);
    println!("║ Mass:              {:>10.2} kg       ║", p.mass);
    println!("║ Muzzle Velocity:   {:>10.1} m/s      ║", p.muzzle_velocity);
    println!("║ Density Exponent:  {:>10.2}          ║", p.density_exponent);
    println!("║ Lapse Rate:        {:>10.2e} K/m      ║", p.lapse_rate);
    println!("║ Sea-level Temp:    {:>10.1} K        ║", p.sea_level_temperature);
    println!("║ Wind (x, y):   {:>6.1}, {:>6.1} m/s     ║", p.wind.horizontal, p.wind.vertical);
    println!("║ Drag Law:          {:>10}          ║", p.drag_law);
    let ceiling_km = atmosphere_ceiling(p.lapse_rate, p.sea_level_temperature) / 1000.0;
    println!("║ Atmosphere Top:    {:>10.2} km       ║", ceiling_km);
    println!("║ Time Step:         {:>10.3} s        ║", solver.time_step());
    println!("║ Max Steps:         {:>10}          ║", solver.max_steps());
    println!("╚════════════════════════════════════════╝");
}
