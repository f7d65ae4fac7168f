//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_CONFIG_FILES: [&str; 2] = ["sos-dispatch.toml", ".sos-dispatch.toml"];
const ENV_PREFIX: &str = "SOS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SOS_` environment variables (`SOS_DISPATCH__MAX_CONCURRENCY=4`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./sos-dispatch.toml` or `./.sos-dispatch.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/sos-dispatch/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/sos-dispatch/config.toml if set,
    /// otherwise falls back to the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sos-dispatch").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {}* variables", ENV_PREFIX);

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./sos-dispatch.toml or ./.sos-dispatch.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotifierKind;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.dispatch.max_concurrency, 8);
        assert_eq!(config.notifier.kind, NotifierKind::Log);
        assert!(config.journal.path.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("sos-dispatch"));
    }

    /// Run `f` in a scratch cwd with no global config visible
    fn isolated(f: impl FnOnce(&mut Jail) -> figment::error::Result<()>) {
        Jail::expect_with(|jail| {
            let scratch = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", scratch.display());
            f(jail)
        });
    }

    #[test]
    fn test_explicit_file_merges_over_defaults() {
        isolated(|jail| {
            jail.create_file(
                "custom.toml",
                "[dispatch]\nmax_concurrency = 2\n\n[notifier]\nkind = \"outbox\"\n",
            )?;

            let config = ConfigLoader::load(Some(&PathBuf::from("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.dispatch.max_concurrency, 2);
            assert_eq!(config.dispatch.send_timeout_ms, 10_000);
            assert_eq!(config.notifier.kind, NotifierKind::Outbox);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_reports_bad_types() {
        isolated(|jail| {
            jail.create_file("bad.toml", "[dispatch]\nmax_concurrency = \"lots\"\n")?;

            assert!(ConfigLoader::load(Some(&PathBuf::from("bad.toml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_every_file() {
        isolated(|jail| {
            jail.create_file("sos-dispatch.toml", "[dispatch]\nmax_concurrency = 2\n")?;
            jail.create_file("custom.toml", "[dispatch]\nmax_concurrency = 4\n")?;
            jail.set_env("SOS_DISPATCH__MAX_CONCURRENCY", 3);

            let config = ConfigLoader::load(Some(&PathBuf::from("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.dispatch.max_concurrency, 3);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        isolated(|jail| {
            jail.create_file("sos-dispatch.toml", "[dispatch]\nmax_concurrency = 2\n")?;
            jail.create_file("custom.toml", "[dispatch]\nmax_concurrency = 4\n")?;

            let config = ConfigLoader::load(Some(&PathBuf::from("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.dispatch.max_concurrency, 4);
            Ok(())
        });
    }
}
