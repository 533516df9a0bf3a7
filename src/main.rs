use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use wellchat::app::App;
use wellchat::config::{self, Config};
use wellchat::example_list::ExampleList;
use wellchat::logging;
use wellchat::terminal::{disable_mouse_capture, enable_mouse_capture};

/// Pick an example question about wellbore data
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Read configuration from FILE instead of ~/.config/wellchat/config.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the example questions and exit
    #[arg(short, long)]
    list: bool,

    /// Print the examples as JSON (with --list)
    #[arg(long, requires = "list")]
    json: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    if cli.list {
        return print_examples(&config.build_example_list(), cli.json);
    }

    logging::init();

    let picked = run_tui(&config)?;

    // Terminal is restored by now, so stdout is free for the result
    if let Some(query) = picked {
        println!("{}", query);
    }

    Ok(())
}

fn run_tui(config: &Config) -> Result<Option<String>> {
    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = enable_mouse_capture(&mut io::stdout())
        .map_err(color_eyre::Report::from)
        .and_then(|()| run(terminal, App::new(config)));

    let teardown = disable_mouse_capture(&mut io::stdout());
    ratatui::restore();

    let picked = result?;
    teardown?;
    Ok(picked)
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<Option<String>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_event(event::read()?);

        if app.should_quit() {
            break;
        }
    }

    Ok(app.take_picked())
}

fn print_examples(list: &ExampleList, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut stdout, list.examples())?;
        writeln!(stdout)?;
    } else {
        for example in list.examples() {
            writeln!(stdout, "{}", example.value)?;
        }
    }

    Ok(())
}
