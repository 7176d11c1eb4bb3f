use crate::catalog::TrickCatalog;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Shared state for one CLI invocation: resolved config plus the loaded
/// catalog. The catalog is loaded once and treated as immutable.
pub struct AppContext {
    pub config: Config,
    pub catalog: TrickCatalog,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
        let catalog = match catalog_path {
            Some(path) => TrickCatalog::load(&path)?,
            None => TrickCatalog::builtin()?,
        };

        Ok(Self {
            config,
            catalog,
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    #[must_use]
    pub fn robot(&self) -> bool {
        self.output_format == OutputFormat::Json
    }
}
