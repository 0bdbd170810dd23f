use core_config::FromEnv;
use domain_tasklist::RegisterConfig;

pub use core_config::Environment;

/// Console configuration, read from the environment
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub registers: RegisterConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            environment: Environment::from_env(),
            registers: RegisterConfig::from_env()?,
        })
    }

    /// Command-line values win over the environment
    pub fn with_first_id(mut self, first_id: Option<u64>) -> Self {
        if let Some(first_id) = first_id {
            self.registers.first_id = first_id;
        }
        self
    }
}
