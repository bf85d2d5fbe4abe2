//! Check command - Validates the configuration and logs a summary.

use environment::{EnvResult, Environment};

/// Execute the check command
pub fn execute(environment: &Environment) -> EnvResult<()> {
    environment.validate()?;

    tracing::info!(
        production = environment.is_production(),
        api_server_url = %environment.api_server_url,
        auth0_domain = %environment.auth0.domain(),
        audience = %environment.auth0.audience,
        "Configuration is valid"
    );

    if production_over_plain_http(environment)? {
        tracing::warn!("Production build talks to the API server over plain http");
    }

    Ok(())
}

fn production_over_plain_http(environment: &Environment) -> EnvResult<bool> {
    Ok(environment.is_production() && environment.api_server()?.scheme() != "https")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_accepts_development() {
        assert!(execute(&Environment::development()).is_ok());
    }

    #[test]
    fn test_execute_rejects_invalid_record() {
        let mut environment = Environment::development();
        environment.auth0.client_id = " ".to_string();

        assert_eq!(execute(&environment).unwrap_err().code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_plain_http_flagged_only_in_production() {
        let mut environment = Environment::development();
        assert!(!production_over_plain_http(&environment).unwrap());

        environment.production = true;
        assert!(production_over_plain_http(&environment).unwrap());
        assert!(execute(&environment).is_ok());

        environment.api_server_url = "https://api.example.com".to_string();
        assert!(!production_over_plain_http(&environment).unwrap());
    }
}
