//! URL commands - Print derived login and backend URLs.

use environment::{EnvResult, Environment};

use crate::cli::args::EndpointArgs;

/// Execute the login-url command
pub fn login_url(environment: &Environment) -> EnvResult<()> {
    println!("{}", environment.auth0.authorize_url()?);
    Ok(())
}

/// Execute the endpoint command
pub fn endpoint(args: EndpointArgs, environment: &Environment) -> EnvResult<()> {
    println!("{}", environment.api_url(&args.path)?);
    Ok(())
}
