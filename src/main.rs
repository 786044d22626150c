//! boxmenu demo
//!
//! Draws a sample menu and loops on selection until `X` or end of input.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use boxmenu::config::UiConfig;
use boxmenu::menu::{Menu, SelectionOption};
use boxmenu::palette::ColorToken;
use boxmenu::render::MenuRenderer;
use boxmenu::select::read_selection;
use boxmenu::status::StatusQueue;
use boxmenu::terminal::current_width;
use boxmenu::{MenuError, Result};

/// Key that leaves the demo loop, compared after case folding.
const EXIT_KEY: &str = "x";

#[derive(Parser)]
#[command(name = "boxmenu")]
#[command(about = "Demo of box-framed console menus")]
#[command(version)]
struct Cli {
    /// Render at a fixed width instead of querying the terminal
    #[arg(long)]
    width: Option<u16>,

    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not clear the screen between renders
    #[arg(long)]
    no_clear: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout belongs to the menu.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => UiConfig::load(path)?,
        None => UiConfig::load_or_default()?,
    };

    let mut renderer = MenuRenderer::from_config(io::stdout(), &config)?;
    if cli.no_clear {
        renderer = renderer.with_clear_screen(false);
    }

    let menu = sample_menu();
    let mut queue = StatusQueue::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let width = cli
            .width
            .unwrap_or_else(|| current_width(config.fallback_width));
        renderer.render(&menu, queue.drain(), width)?;

        let selection = match read_selection(&menu, &mut input) {
            Ok(selection) => selection,
            Err(MenuError::InputClosed) => {
                println!();
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match selection.choice {
            Some(choice) if choice == EXIT_KEY => return Ok(()),
            Some(choice) => queue.push_success(format!("You chose \"{}\"", choice)),
            None => queue.extend_errors(selection.errors),
        }
    }
}

fn sample_menu() -> Menu {
    let mut menu = Menu::new();
    menu.set_title("Main Menu", ColorToken::Title);
    menu.add_line("This is a test line");
    menu.add_line("This is a second test line");
    menu.add_colored_line(
        "This is a much longer, much more AWESOME, third line!",
        ColorToken::Weak,
    );
    menu.add_selections([
        SelectionOption::new("A", "Awesomesauce!").with_color(ColorToken::SuccessMessage),
        SelectionOption::new("B", "Bawesome!").with_color(ColorToken::Title),
        SelectionOption::new("C", "Coolio!"),
        SelectionOption::new("X", "Exit"),
    ]);
    menu
}
