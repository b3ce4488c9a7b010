mod config;
mod logging;

use std::process::ExitCode;

use mintprep_adapters::{present_planned_record, present_report, JsonFileSink, WalkdirAssetSource};
use mintprep_application::{
    ApplicationService, GenerateMetadataCommand, PlanCollectionCommand,
};
use mintprep_domain::CollectionConfig;

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();

    let service = build_application_service();
    match run_command(parse_command(&args), &service) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service() -> ApplicationService {
    ApplicationService::new(Box::new(WalkdirAssetSource), Box::new(JsonFileSink))
}

#[derive(Debug, Clone)]
enum Command {
    Generate {
        config: CollectionConfig,
        input_dir: String,
        output_dir: String,
    },
    Plan {
        config: CollectionConfig,
        input_dir: String,
    },
    Presets,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Err(CommandError::Usage("missing command".to_string()));
    }

    match args[1].as_str() {
        "generate" => {
            if args.len() < 5 {
                return Err(CommandError::Usage(
                    "generate needs <preset> <input_dir> <output_dir>".to_string(),
                ));
            }
            Ok(Command::Generate {
                config: resolve_preset(&args[2])?,
                input_dir: args[3].clone(),
                output_dir: args[4].clone(),
            })
        }
        "plan" => {
            if args.len() < 4 {
                return Err(CommandError::Usage(
                    "plan needs <preset> <input_dir>".to_string(),
                ));
            }
            Ok(Command::Plan {
                config: resolve_preset(&args[2])?,
                input_dir: args[3].clone(),
            })
        }
        "presets" => Ok(Command::Presets),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn resolve_preset(name: &str) -> Result<CollectionConfig, CommandError> {
    config::preset(name)
        .ok_or_else(|| CommandError::Usage(format!("unknown preset: {name}")))
}

fn run_command(
    command: Result<Command, CommandError>,
    service: &ApplicationService,
) -> Result<(), CommandError> {
    match command? {
        Command::Generate {
            config,
            input_dir,
            output_dir,
        } => {
            tracing::info!(
                input_dir = %input_dir,
                output_dir = %output_dir,
                "generating collection metadata"
            );
            let report = service
                .generate_metadata(GenerateMetadataCommand {
                    input_dir,
                    output_dir,
                    config,
                })
                .map_err(|error| CommandError::Runtime(format!("generate failed: {error}")))?;
            println!("{}", present_report(&report));
            Ok(())
        }
        Command::Plan { config, input_dir } => {
            let plan = service
                .plan_collection(PlanCollectionCommand { input_dir, config })
                .map_err(|error| CommandError::Runtime(format!("plan failed: {error}")))?;
            if plan.is_empty() {
                println!("nothing to generate");
                return Ok(());
            }
            for planned in &plan {
                println!("{}", present_planned_record(planned));
            }
            Ok(())
        }
        Command::Presets => {
            for name in config::PRESET_NAMES {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  mintprep generate <preset> <input_dir> <output_dir>");
    println!("  mintprep plan <preset> <input_dir>");
    println!("  mintprep presets");
}
