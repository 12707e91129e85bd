use clap::ValueEnum;
use is_terminal::IsTerminal;

pub const NO_PAGER_ENV: &str = "NO_PAGER";
pub const NO_COLOR_ENV: &str = "NO_COLOR";
pub const LOG_ENV: &str = "DEVKIT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Runtime configuration resolved once from flags and environment, then
/// handed to every command through the toolbox.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub colorize: bool,
    pub use_pager: bool,
}

impl Settings {
    pub fn resolve(color: ColorMode, no_pager: bool) -> Self {
        let stdout_is_terminal = std::io::stdout().is_terminal();

        Self::from_parts(
            color,
            no_pager,
            stdout_is_terminal,
            std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()),
            std::env::var_os(NO_PAGER_ENV).is_some(),
        )
    }

    pub fn from_parts(
        color: ColorMode,
        no_pager: bool,
        stdout_is_terminal: bool,
        no_color_env: bool,
        no_pager_env: bool,
    ) -> Self {
        let colorize = match color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_is_terminal && !no_color_env,
        };

        Self {
            colorize,
            use_pager: stdout_is_terminal && !no_pager && !no_pager_env,
        }
    }
}
