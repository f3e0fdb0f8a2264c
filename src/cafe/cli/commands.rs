use super::render::render_menu;
use super::session::Session;
use super::setup::{Cli, Commands, OutputFormat};
use cafe::api::CafeApi;
use cafe::config::CafeConfig;
use cafe::error::Result;
use cafe::logging;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;

struct AppContext {
    api: CafeApi,
    config: CafeConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Menu { output }) => handle_menu(&ctx, output),
        Some(Commands::Config) => handle_config(&ctx),
        Some(Commands::Session) | None => handle_session(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir(cli) {
        Some(dir) => CafeConfig::load(dir)?,
        None => {
            tracing::warn!("could not determine a config directory, using defaults");
            CafeConfig::default()
        }
    };
    let api = CafeApi::from_config(&config)?;

    Ok(AppContext { api, config })
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Some(dir.clone());
    }
    ProjectDirs::from("com", "cafe", "cafe").map(|dirs| dirs.config_dir().to_path_buf())
}

fn handle_menu(ctx: &AppContext, output: OutputFormat) -> Result<()> {
    let items = ctx.api.list_menu();
    let mut stdout = io::stdout().lock();
    match output {
        OutputFormat::Text => write!(
            stdout,
            "{}",
            render_menu(items, &ctx.config.currency_symbol)
        )?,
        OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(items)?)?,
    }
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    Ok(())
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Session::new(&mut ctx.api, &ctx.config, stdin, stdout).run()
}
