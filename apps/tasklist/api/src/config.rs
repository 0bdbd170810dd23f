use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_tasklist::RegisterConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub registers: RegisterConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            registers: RegisterConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_reports_this_binary() {
        temp_env::with_vars_unset(["PORT", "TASKLIST_FIRST_ID"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "tasklist_api");
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.registers.first_id, 1);
        });
    }

    #[test]
    fn test_bad_port_fails() {
        temp_env::with_var("PORT", Some("http"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
