use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use concierge_application::{
    DEFAULT_ALLOWED_SYSTEM_IDS, DEFAULT_BUSINESS_UNIT_PREFIX, RoleRequestPolicy,
};
use concierge_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub role_policy: RoleRequestPolicy,
    pub seed_demo_users: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_source(|name| env::var(name).ok())
    }

    fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = lookup("API_PORT")
            .map(|value| {
                value.trim().parse::<u16>().map_err(|error| {
                    AppError::Validation(format!("invalid API_PORT '{value}': {error}"))
                })
            })
            .transpose()?
            .unwrap_or(3001);

        let allowed_system_ids = lookup("ROLE_ALLOWED_SYSTEM_IDS")
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.split(',').map(str::to_owned).collect::<Vec<_>>())
            .unwrap_or_else(|| {
                DEFAULT_ALLOWED_SYSTEM_IDS
                    .iter()
                    .map(|value| (*value).to_owned())
                    .collect()
            });
        let business_unit_prefix = lookup("BUSINESS_UNIT_ID_PREFIX")
            .unwrap_or_else(|| DEFAULT_BUSINESS_UNIT_PREFIX.to_owned());
        let role_policy = RoleRequestPolicy::new(allowed_system_ids, business_unit_prefix)
            .map_err(|error| AppError::Validation(format!("invalid role policy: {error}")))?;

        let seed_demo_users = lookup("DEV_SEED_USERS")
            .unwrap_or_else(|| "true".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            api_host,
            api_port,
            role_policy,
            seed_demo_users,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use concierge_core::AppError;

    use super::ApiConfig;

    fn load(values: &[(&str, &str)]) -> Result<ApiConfig, AppError> {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_source(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = load(&[]).unwrap_or_else(|_| unreachable!());

        assert_eq!(config.api_port, 3001);
        assert!(config.seed_demo_users);
        assert_eq!(config.role_policy.business_unit_prefix(), "BU-");
        assert!(
            config
                .role_policy
                .allowed_system_ids()
                .any(|system_id| system_id == "supply-chain-system")
        );
        assert!(config.socket_address().is_ok());
    }

    #[test]
    fn allow_list_is_read_from_comma_separated_value() {
        let config = load(&[
            ("ROLE_ALLOWED_SYSTEM_IDS", "pos-system, spa-booking-system"),
            ("BUSINESS_UNIT_ID_PREFIX", "HOTEL-"),
            ("DEV_SEED_USERS", "false"),
        ])
        .unwrap_or_else(|_| unreachable!());

        assert_eq!(
            config.role_policy.allowed_system_ids().collect::<Vec<_>>(),
            vec!["pos-system", "spa-booking-system"]
        );
        assert_eq!(config.role_policy.business_unit_prefix(), "HOTEL-");
        assert!(!config.seed_demo_users);
    }

    #[test]
    fn blank_prefix_is_rejected() {
        let result = load(&[("BUSINESS_UNIT_ID_PREFIX", " ")]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = load(&[("API_PORT", "eighty")]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn invalid_host_is_reported_on_bind() {
        let config = load(&[("API_HOST", "not-an-ip")]).unwrap_or_else(|_| unreachable!());
        assert!(config.socket_address().is_err());
    }
}
