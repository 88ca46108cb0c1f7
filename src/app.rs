use std::io::{self, Write};

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{
        self,
        bootstrap::{self, LogTarget},
        commands::{self, ClientsRequest},
        context::AppContext,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command_or_default();
    let target = match command {
        Command::Run => LogTarget::StateDir,
        Command::Clients(_) | Command::Ask { .. } => LogTarget::Stderr,
    };

    let bootstrap::Bootstrapped {
        context,
        logging: _logging,
    } = bootstrap::bootstrap(cli.config.as_deref(), target)?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match command {
        Command::Run => {
            let mut shell = bootstrap::compose_shell(&context);
            let mut event_source = ui::CrosstermEventSource::default();
            ui::shell::start(&context, &mut event_source, shell.as_mut())?;
        }
        one_shot => {
            let stdout = io::stdout();
            run_one_shot(one_shot, &context, &mut stdout.lock())?;
        }
    }

    Ok(())
}

fn run_one_shot(command: Command, context: &AppContext, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Run => {}
        Command::Clients(args) => {
            let request = ClientsRequest::from(args);
            let page = commands::run_clients(&context.clients, &request);
            out.write_all(commands::render_client_page(&page).as_bytes())?;
        }
        Command::Ask { text } => {
            let reply = commands::ask(&text.join(" "));
            writeln!(out, "{reply}")?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::{infra::config::AppConfig, test_support::sample_clients};

    fn context() -> AppContext {
        AppContext::new(AppConfig::default(), sample_clients())
    }

    fn output_of(args: &[&str]) -> String {
        let cli = Cli::parse_from(args);
        let mut out = Vec::new();
        run_one_shot(cli.command_or_default(), &context(), &mut out)
            .expect("one-shot command should succeed");
        String::from_utf8(out).expect("output is utf-8")
    }

    #[test]
    fn clients_command_prints_filtered_page() {
        let output = output_of(&["everly", "clients", "--score", "high"]);

        assert!(output.contains("David Martinez"));
        assert!(output.contains("Mike Chen"));
        assert!(!output.contains("John Smith"));
        assert!(output.ends_with("Showing 1-2 of 2 clients\n"));
    }

    #[test]
    fn ask_command_prints_matching_reply() {
        let output = output_of(&["everly", "ask", "what", "is", "a", "protection", "score?"]);

        assert!(output.starts_with("A protection score is a percentage"));
    }
}
