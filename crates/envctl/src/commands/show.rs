//! Show command - Prints the configuration in the frontend's JSON shape.

use environment::{EnvResult, Environment};

use crate::cli::args::ShowArgs;

/// Execute the show command
pub fn execute(args: ShowArgs, environment: &Environment) -> EnvResult<()> {
    println!("{}", render(&args, environment)?);
    Ok(())
}

fn render(args: &ShowArgs, environment: &Environment) -> EnvResult<String> {
    if args.compact {
        environment.to_json()
    } else {
        environment.to_json_pretty()
    }
}
