//! # CLI Layer
//!
//! The only place in kudos that:
//! - Knows about stdout, stderr and stdin
//! - Installs the log subscriber
//! - Handles argument parsing
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns arguments into [`Commands`]
//! 2. **Context Setup**: resolve the data directory, load config, open the jar
//! 3. **Dispatch**: one API call per click subcommand
//! 4. **Output Formatting**: everything goes through [`Renderer`]

use super::render::Renderer;
use super::session;
use super::setup::{Cli, Commands};
use clap::Parser;
use kudosapp::api::CmdResult;
use kudosapp::config::KudosConfig;
use kudosapp::error::Result;
use kudosapp::init::{initialize, resolve_data_dir, KudosContext};
use kudosapp::store::CookieJar;
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = !cli.no_color && io::stdout().is_terminal();
    let renderer = Renderer::new(cli.output, use_color)?;
    let data_dir = resolve_data_dir(None)?;

    // Naked `kudos` is `kudos show`.
    let command = cli.command.unwrap_or(Commands::Show);
    debug!(?command, data_dir = %data_dir.display(), "dispatch");

    // Config only reads; it must not seed cookies.
    if command == Commands::Config {
        let config = KudosConfig::load(&data_dir)?;
        return handle_config(&renderer, &data_dir, &config);
    }

    let mut ctx = initialize(data_dir)?;
    match command {
        Commands::Show => handle_show(&ctx, &renderer),
        Commands::Like => {
            let result = ctx.api.like();
            print_click(&ctx, &renderer, &result)
        }
        Commands::Dislike => {
            let result = ctx.api.dislike();
            print_click(&ctx, &renderer, &result)
        }
        Commands::Comment { words } => {
            ctx.api.set_input(words.join(" "));
            let result = ctx.api.submit_comment();
            print_click(&ctx, &renderer, &result)
        }
        Commands::Reset => {
            let result = ctx.api.reset();
            print_click(&ctx, &renderer, &result)
        }
        Commands::Session => handle_session(&mut ctx, &renderer),
        Commands::Cookies => handle_cookies(&ctx),
        Commands::Config => handle_config(&renderer, &ctx.data_dir, &ctx.config),
    }
}

/// Logs go to stderr so they never mix with rendered output. `--verbose`
/// forces `debug`; otherwise `RUST_LOG` applies, defaulting to `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn handle_show(ctx: &KudosContext, renderer: &Renderer) -> Result<()> {
    println!("{}", renderer.view(&ctx.api.render())?);
    Ok(())
}

fn print_click(ctx: &KudosContext, renderer: &Renderer, result: &CmdResult) -> Result<()> {
    println!("{}", renderer.click(result, &ctx.api.render())?);
    Ok(())
}

fn handle_session(ctx: &mut KudosContext, renderer: &Renderer) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    session::run(&mut ctx.api, renderer, stdin.lock(), &mut stdout, prompt)
}

/// What `document.cookie` would show for this jar.
fn handle_cookies(ctx: &KudosContext) -> Result<()> {
    println!("{}", ctx.api.store().jar().cookie_header()?);
    Ok(())
}

fn handle_config(renderer: &Renderer, data_dir: &Path, config: &KudosConfig) -> Result<()> {
    println!("{}", renderer.config(data_dir, config)?);
    Ok(())
}
