use clap::Parser;
use eyre::Result;

use lumos_cli::cli::{Cli, Command};
use lumos_cli::{commands, config, session};

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let settings = config::load_settings()?;

    match cli.command {
        Command::Export {
            tokens,
            out,
            stdout,
            dialog,
        } => commands::export(&settings, &tokens.assignments, out.as_deref(), stdout, dialog),
        Command::Preview { tokens, out, json } => {
            commands::preview(&settings, &tokens.assignments, out.as_deref(), json)
        }
        Command::Session { out } => {
            let store = commands::build_store(&settings, &[])?;
            let dir = out.unwrap_or_else(|| settings.output_dir());
            let delivery = std::rc::Rc::new(lumos_export::DirectoryDelivery::new(dir));
            let mut session = session::Session::new(store, delivery);
            let stdin = std::io::stdin().lock();
            session.run(stdin, &mut std::io::stdout())
        }
        Command::Fields => commands::fields(&mut std::io::stdout()),
        Command::Fonts => commands::fonts(&mut std::io::stdout()),
        Command::Settings {
            output_dir,
            font_css_base,
            prefetch_fonts,
        } => commands::settings(output_dir, font_css_base, prefetch_fonts),
    }
}

/// Logs go to stderr so stylesheet output on stdout stays clean.
/// `LUMOS_LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("LUMOS_LOG_FORMAT").is_ok_and(|f| f == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}
