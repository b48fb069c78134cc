pub mod cli;
pub mod command;
pub mod error;
pub mod standards;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use cli::Args;
use command::ComplexCommand;
use command::parser::parse_spec;
use standards::schema::SchemaRegistry;

#[derive(Serialize)]
struct Plan<'a> {
    command_count: usize,
    commands: &'a [ComplexCommand],
}

/// Run the command-plan inspector. Returns the exit code: 0 = parsed clean,
/// 1 = parse error reported on stderr.
pub fn run(args: Args) -> Result<i32> {
    if args.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // --list-families: print all registered schema names and exit
    if args.list_families {
        let registry = SchemaRegistry::default_registry();
        let mut names = registry.names();
        names.sort();
        for name in names {
            println!("{name}");
        }
        return Ok(0);
    }

    let spec = match (&args.file, &args.spec) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, Some(spec)) => spec.clone(),
        (None, None) => bail!("no command specification given; pass a spec string or --file"),
    };

    match parse_spec(&spec) {
        Ok(commands) => {
            tracing::debug!(commands = commands.len(), "specification parsed");
            if args.format == "json" {
                let plan = Plan {
                    command_count: commands.len(),
                    commands: &commands,
                };
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&commands);
            }
            Ok(0)
        }
        Err(e) => {
            eprintln!("parse error: {e}");
            Ok(1)
        }
    }
}

fn print_plan(commands: &[ComplexCommand]) {
    for (i, command) in commands.iter().enumerate() {
        println!("{}: {}", i + 1, command.command);
        for (pattern, response) in command.action_map.iter() {
            println!("   action '{pattern}' -> '{response}'");
        }
        for (pattern, message) in command.error_map.iter() {
            println!("   error  '{pattern}' -> '{message}'");
        }
    }
}
