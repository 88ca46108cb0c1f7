use std::path::Path;

use crate::{
    domain::shell_state::{LayoutPolicy, ShellState},
    infra::{
        self,
        config::FileConfigAdapter,
        contracts::ConfigAdapter,
        error::AppError,
        fixtures::FixtureClientSource,
        logging::{LogSink, LoggingGuard},
        storage_layout::StorageLayout,
        system::{SystemClipboard, SystemOpener},
    },
    usecases::{
        client_directory::load_directory, context::AppContext,
        contracts::ShellOrchestrator, shell::DefaultShellOrchestrator,
    },
};

/// Where the process sends its log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Interactive console: the terminal is taken, logs go to a rolling file.
    StateDir,
    /// One-shot commands print to stdout, logs go to stderr.
    Stderr,
}

pub struct Bootstrapped {
    pub context: AppContext,
    pub logging: LoggingGuard,
}

pub fn bootstrap(
    config_path: Option<&Path>,
    target: LogTarget,
) -> Result<Bootstrapped, AppError> {
    let context = build_context(config_path)?;

    let logging = match target {
        LogTarget::Stderr => infra::logging::init(&context.config.logging, LogSink::Stderr)?,
        LogTarget::StateDir => {
            let layout = StorageLayout::resolve()?;
            layout.ensure_dirs()?;
            infra::logging::init(
                &context.config.logging,
                LogSink::File {
                    dir: &layout.log_dir,
                },
            )?
        }
    };

    tracing::info!(
        clients = context.clients.len(),
        level = %context.config.logging.level,
        "console context ready"
    );

    Ok(Bootstrapped { context, logging })
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;
    let clients = load_directory(&FixtureClientSource)?;

    Ok(AppContext::new(config, clients))
}

/// Fresh console state seeded from the context.
pub fn initial_state(context: &AppContext) -> ShellState {
    ShellState::new(
        context.clients.clone(),
        context.config.chat.reply_delay(),
        LayoutPolicy {
            compact_width: context.config.layout.compact_width,
        },
    )
}

pub fn compose_shell(context: &AppContext) -> Box<dyn ShellOrchestrator> {
    Box::new(DefaultShellOrchestrator::new(
        initial_state(context),
        context.config.assessment.phase_duration(),
        SystemOpener,
        SystemClipboard::connect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shell_state::Screen;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        assert_eq!(context.config, crate::infra::config::AppConfig::default());
        assert_eq!(context.clients.len(), 7);
    }

    #[test]
    fn initial_state_uses_configured_layout() {
        let mut context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");
        context.config.layout.compact_width = 90;

        let state = initial_state(&context);

        assert_eq!(state.screen(), &Screen::Login);
        assert!(state.layout().sidebar_collapsed(89));
        assert!(!state.layout().sidebar_collapsed(90));
    }
}
