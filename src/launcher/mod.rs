
use std::io::Write;

use crate::cli::Selection;
use crate::config::Config;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::plugin::{LoadedModule, ModuleLoader};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Picks a greeting module from the command line, loads it and prints its greeting.
#[derive(Debug)]
pub struct Launcher<L> {
    config: Config,
    logger: Logger,
    loader: L,
}

impl<L: ModuleLoader> Launcher<L> {
    pub fn new(config: Config, logger: Logger, loader: L) -> Self {
        Self {
            config,
            logger,
            loader,
        }
    }

    /// Prints the greeting, or the reason there is none, to `out`.
    pub fn run<I, S, W>(&self, args: I, out: &mut W) -> i32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        W: Write,
    {
        // The module stays mapped until its greeting has been written.
        let loaded = self.load_module(args);
        let (line, code) = match &loaded {
            Ok(module) => (module.greeting().to_owned(), EXIT_SUCCESS),
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleAndFile);
                (err.to_string(), EXIT_FAILURE)
            }
        };
        if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            self.logger
                .error(format!("failed to write output: {err}"), LogTarget::ConsoleAndFile);
            return EXIT_FAILURE;
        }
        code
    }

    /// Selection, path resolution, load, lookup and type check, without printing.
    pub fn greeting<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.load_module(args).map(LoadedModule::into_greeting)
    }

    pub fn load_module<I, S>(&self, args: I) -> Result<LoadedModule>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selection = Selection::from_args(args, self.config.default_language());
        if selection.is_default() {
            self.logger.info(
                format!("no single selector given; using {}", self.config.default_language()),
                LogTarget::ConsoleAndFile,
            );
        }
        let language = selection.language()?;

        let path = self.config.module_path(language);
        self.logger.info(
            format!("loading {language} module from {}", path.display()),
            LogTarget::ConsoleAndFile,
        );

        let module = self.loader.load(path)?;
        self.logger.info(
            format!("{} greeted with {} byte(s)", module.path().display(), module.greeting().len()),
            LogTarget::FileOnly,
        );
        Ok(module)
    }
}
