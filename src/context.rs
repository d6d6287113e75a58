use crate::config::Config;
use crate::errors::Result;
use crate::launcher::Launcher;
use crate::logging::{LogTarget, Logger};
use crate::plugin::DylibLoader;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
}

impl AppContext {
    /// Loads `greeter.json` from the working directory when present.
    pub fn from_working_dir() -> Result<Self> {
        Ok(Self::with_config(Config::load_default()?))
    }

    pub fn with_config(config: Config) -> Self {
        let logger = Logger::from_config(&config);
        if let Some(path) = logger.log_path() {
            logger.info(
                format!("session log at {}", path.display()),
                LogTarget::ConsoleAndFile,
            );
        }
        if let Some(path) = config.path() {
            logger.info(
                format!("configuration read from {}", path.display()),
                LogTarget::FileOnly,
            );
        }
        for (key, _, value) in config.rows() {
            logger.info(format!("{key} = {value}"), LogTarget::FileOnly);
        }

        Self { config, logger }
    }

    pub fn into_launcher(self) -> Launcher<DylibLoader> {
        Launcher::new(self.config, self.logger, DylibLoader::new())
    }
}
