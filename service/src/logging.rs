use crate::config::Config;
use log::{LevelFilter, SetLoggerError};
use simplelog::{self, ConfigBuilder};

/// Modules to filter out from logging when not in Trace mode.
/// These are typically verbose dependencies that clutter normal log output.
const FILTERED_MODULES: &[&str] = &["tokio", "mio", "dotenvy"];

pub struct Logger {}

impl Logger {
    /// Initializes the global logger with configuration based on the provided Config.
    ///
    /// Log lines always go to stderr so that stdout stays reserved for the report a
    /// binary prints (a credential, a seed summary) and can be piped safely.
    /// When the log level is set to Trace, dependency logs are shown as well.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let apply_filters = Self::should_filter_dependencies(config.log_level_filter);
        let log_config = Self::build_log_config(apply_filters);

        simplelog::TermLogger::init(
            config.log_level_filter,
            log_config,
            simplelog::TerminalMode::Stderr,
            Self::color_choice(config),
        )
    }

    /// Production output usually lands in a collector, so colours are switched off there.
    fn color_choice(config: &Config) -> simplelog::ColorChoice {
        if config.is_production() {
            simplelog::ColorChoice::Never
        } else {
            simplelog::ColorChoice::Auto
        }
    }

    fn should_filter_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn build_log_config(apply_filters: bool) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if apply_filters {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_modules_contains_runtime_dependencies() {
        for module in ["tokio", "mio", "dotenvy"] {
            assert!(
                FILTERED_MODULES.contains(&module),
                "{module} should be filtered"
            );
        }
    }

    #[test]
    fn test_filtered_modules_never_hide_workspace_crates() {
        for crate_name in ["teamhub", "domain", "entity_api", "service"] {
            assert!(
                !FILTERED_MODULES.contains(&crate_name),
                "{crate_name} logs must stay visible"
            );
        }
    }

    #[test]
    fn test_trace_level_disables_filtering() {
        assert!(!Logger::should_filter_dependencies(LevelFilter::Trace));
    }

    #[test]
    fn test_other_levels_enable_filtering() {
        for level in [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
        ] {
            assert!(
                Logger::should_filter_dependencies(level),
                "{level} should enable filtering"
            );
        }
    }

    #[test]
    fn test_production_disables_colours() {
        let config = Config::from_args(["teamhub", "--runtime-env", "production"]).unwrap();
        assert!(matches!(
            Logger::color_choice(&config),
            simplelog::ColorChoice::Never
        ));

        let config = Config::from_args(["teamhub", "--runtime-env", "development"]).unwrap();
        assert!(matches!(
            Logger::color_choice(&config),
            simplelog::ColorChoice::Auto
        ));
    }

    #[test]
    fn test_build_log_config_does_not_panic() {
        let _filtered = Logger::build_log_config(true);
        let _unfiltered = Logger::build_log_config(false);
    }
}
