use clap::Parser;
use miette::Result;
use ftr::cli::{Cli, Commands, Session};
use ftr::core::{Config, IoConsole};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    let (mut config, skipped) = Config::load(global.config.as_deref())?;
    global.apply(&mut config);

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_env("RUST_LOG")
        .init();
    for err in &skipped {
        log::warn!("ignoring global config: {err}");
    }
    log::debug!("effective configuration: {config:?}");

    if !config.color() {
        console::set_colors_enabled(false);
    }

    match cli.command {
        Some(Commands::Completions(args)) => ftr::cli::commands::completions::run(args),
        None => {
            let mut console = IoConsole::stdio();
            Session::from_config(&config).run(&mut console)?;
            Ok(())
        }
    }
}
