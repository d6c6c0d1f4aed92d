//! drillbook - Main entry point
//!
//! Parses the command line, turns the chosen subcommand into a typed drill and
//! prints its output. Logs go to stderr so stdout only carries drill output.

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use drillbook::cli::{CipherCommands, Cli, Commands, ExerciseCommands, ProjectCommands};
use drillbook::config_file::DrillConfig;
use drillbook::drill::Drill;
use drillbook::drills::exercises::{
    BstArgs, CaesarArgs, EquationArgs, ExpensesArgs, HanoiArgs, LuhnArgs, MergeSortArgs,
    PasswordArgs, ProjectileArgs, ShortestPathArgs, SnakeCaseArgs, SudokuArgs, VectorArgs,
    VigenereArgs, DEMO_BST_KEYS,
};
use drillbook::drills::projects::{
    ArithmeticArgs, BudgetArgs, ProbabilityArgs, ShapesArgs, TimeArgs,
};
use drillbook::text::password::PasswordPolicy;

/// Initialize tracing with appropriate settings
fn init_logger(verbose: bool) {
    let default_level = if verbose { "drillbook=debug" } else { "drillbook=info" };
    // RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed");

    if let Commands::Validate { config } = &cli.command {
        info!("Validating configuration file: {:?}", config);
        match DrillConfig::load_from_file(config).and_then(|c| c.validate().map(|_| c)) {
            Ok(config) => {
                info!("Configuration validation successful");
                println!("✓ Configuration file is valid: {:?}", config);
            }
            Err(e) => {
                error!("Configuration validation failed: {:#}", e);
                eprintln!("✗ Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let config = DrillConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load drill defaults")?;
    debug!(?config, "drill defaults loaded");

    let result = match cli.command {
        Commands::Exercise { exercise } => run_exercise(exercise, &config),
        Commands::Project { project } => run_project(project, &config),
        Commands::Validate { .. } => Ok(()),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Dispatch an exercise subcommand
fn run_exercise(exercise: ExerciseCommands, config: &DrillConfig) -> drillbook::Result<()> {
    match exercise {
        ExerciseCommands::Cipher { cipher } => match cipher {
            CipherCommands::Caesar { message, offset } => execute_drill(&CaesarArgs { message, offset }),
            CipherCommands::Vigenere {
                message,
                key,
                direction,
            } => execute_drill(&VigenereArgs {
                message,
                key,
                direction,
            }),
        },
        ExerciseCommands::Luhn { card_number } => execute_drill(&LuhnArgs { card_number }),
        ExerciseCommands::SnakeCase { input } => execute_drill(&SnakeCaseArgs { input }),
        ExerciseCommands::Password {
            length,
            digits,
            symbols,
            uppercase,
            lowercase,
            seed,
        } => {
            let defaults = config.password;
            let policy = PasswordPolicy {
                length: length.unwrap_or(defaults.length),
                digits: digits.unwrap_or(defaults.digits),
                symbols: symbols.unwrap_or(defaults.symbols),
                uppercase: uppercase.unwrap_or(defaults.uppercase),
                lowercase: lowercase.unwrap_or(defaults.lowercase),
            };
            execute_drill(&PasswordArgs { policy, seed })
        }
        ExerciseCommands::Expenses { ledger } => execute_drill(&ExpensesArgs {
            ledger: ledger.or_else(|| config.expenses_ledger.clone()),
        }),
        ExerciseCommands::ShortestPath { graph, start, target } => {
            execute_drill(&ShortestPathArgs { graph, start, target })
        }
        ExerciseCommands::Hanoi { disks } => execute_drill(&HanoiArgs {
            disks: disks.unwrap_or(config.hanoi_disks),
        }),
        ExerciseCommands::MergeSort { values } => execute_drill(&MergeSortArgs { values }),
        ExerciseCommands::Sudoku { puzzle } => execute_drill(&SudokuArgs { puzzle }),
        ExerciseCommands::Bst { keys, search, delete } => {
            let args = if keys.is_empty() && search.is_empty() && delete.is_empty() {
                BstArgs::default()
            } else {
                BstArgs {
                    keys: if keys.is_empty() { DEMO_BST_KEYS.to_vec() } else { keys },
                    search,
                    delete,
                }
            };
            execute_drill(&args)
        }
        ExerciseCommands::Vector { first, second, scalar } => {
            execute_drill(&VectorArgs { first, second, scalar })
        }
        ExerciseCommands::Equation { coefficients } => execute_drill(&EquationArgs { coefficients }),
        ExerciseCommands::Projectile { speed, height, angle } => {
            let defaults = &config.projectile;
            execute_drill(&ProjectileArgs {
                speed: speed.unwrap_or(defaults.speed),
                height: height.unwrap_or(defaults.height),
                angle: angle.unwrap_or(defaults.angle),
            })
        }
    }
}

/// Dispatch a project subcommand
fn run_project(project: ProjectCommands, config: &DrillConfig) -> drillbook::Result<()> {
    match project {
        ProjectCommands::Arithmetic { problems, show_answers } => {
            execute_drill(&ArithmeticArgs { problems, show_answers })
        }
        ProjectCommands::Shapes { width, height, side } => execute_drill(&ShapesArgs { width, height, side }),
        ProjectCommands::Probability {
            balls,
            expected,
            draws,
            experiments,
            seed,
        } => {
            let sample = ProbabilityArgs::default();
            let args = ProbabilityArgs {
                hat: if balls.is_empty() { sample.hat } else { balls },
                expected: if expected.is_empty() { sample.expected } else { expected },
                draws,
                experiments: experiments.unwrap_or(config.probability.experiments),
                seed: seed.or(config.probability.seed),
            };
            execute_drill(&args)
        }
        ProjectCommands::Time { start, duration, day } => execute_drill(&TimeArgs { start, duration, day }),
        ProjectCommands::Budget { ledger, save } => execute_drill(&BudgetArgs { ledger, save }),
    }
}

/// Execute a drill using its typed arguments.
fn execute_drill<T: Drill>(args: &T) -> drillbook::Result<()> {
    let name = args.name();
    info!("Running drill: {}", name);

    let output = args.run()?;
    if !output.is_empty() {
        println!("{}", output);
    }

    debug!("Drill {} finished", name);
    Ok(())
}
