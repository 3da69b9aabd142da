use std::sync::Once;

use env_logger::WriteStyle;

/// How Vellum's log output is filtered and styled.
///
/// The scene graph logs membership changes at `debug` and bounds recomputes
/// at `trace` under the `vellum_graphics` target, so a filter such as
/// `"info,vellum_graphics=debug"` follows the scene without per-frame noise.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives. When set, `RUST_LOG` is ignored.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: WriteStyle::Auto }
    }
}

impl LoggingConfig {
    /// Pins the filter to `directives` regardless of the environment.
    pub fn with_filter(directives: impl Into<String>) -> Self {
        Self { env_filter: Some(directives.into()), ..Self::default() }
    }

    /// Directives to install: the pinned filter, else `env`, else `None`
    /// for the `info` fallback.
    fn directives(&self, env: Option<String>) -> Option<String> {
        self.env_filter.clone().or(env)
    }
}

static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the `log` facade, once per process.
///
/// If the host already installed a global logger, that logger is kept and
/// this call only leaves a `debug` record behind.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.directives(std::env::var("RUST_LOG").ok()) {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(log::LevelFilter::Info),
        };
        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            log::debug!("a global logger is already installed; keeping it");
        } else {
            log::debug!("vellum logging initialized");
        }
    });
}
