//! qa-menu: terminal front-end for the menu-driven Q&A API.
//! Prints the chat log and the numbered options panel to stdout and reads
//! the user's selection from stdin, one line per selection.

use clap::Parser;
use qa_menu_client::{config, Client, MenuController};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "qa-menu", version, about = "Browse subjects and questions, get answers")]
struct Args {
    /// Config file (defaults to ~/.qa-menu/config.yaml)
    #[arg(long, env = "QA_MENU_CONFIG")]
    config: Option<PathBuf>,

    /// API base URL, overrides the config file
    #[arg(long, env = "QA_MENU_BASE_URL")]
    base_url: Option<String>,
}

const NO_SUBJECTS_NOTICE: &str = "No subjects are available right now.";

/// What the user typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Pick(usize),
    Invalid,
}

fn parse_input(line: &str, choices: usize) -> Input {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=choices).contains(&n) => Input::Pick(n),
        _ => Input::Invalid,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print the chat messages appended since `cursor`; returns the new cursor.
fn flush_chat(out: &mut impl Write, controller: &MenuController, cursor: usize) -> io::Result<usize> {
    for message in controller.chat().since(cursor) {
        writeln!(out, "{}", message)?;
    }
    Ok(controller.chat().len())
}

async fn run(controller: &mut MenuController, greeting: &str) -> io::Result<i32> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    controller.say(greeting);
    controller.load_main_menu().await;
    let mut cursor = 0;

    loop {
        cursor = flush_chat(&mut out, controller, cursor)?;
        if controller.menu_failed() {
            out.flush()?;
            return Ok(1);
        }
        let panel = controller.panel();
        writeln!(out)?;
        write!(out, "{}", panel)?;
        if panel.is_empty() {
            writeln!(out, "{}", NO_SUBJECTS_NOTICE)?;
            out.flush()?;
            return Ok(0);
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(0);
        }
        let action = match parse_input(&line, panel.choices.len()) {
            Input::Quit => return Ok(0),
            Input::Pick(n) => match panel.choice(n) {
                Some(choice) => choice.action.clone(),
                None => continue,
            },
            Input::Invalid => {
                writeln!(
                    out,
                    "Please enter a number between 1 and {}, or q to quit.",
                    panel.choices.len()
                )?;
                continue;
            }
        };
        controller.activate(action).await;
    }
}

fn main() {
    let args = Args::parse();
    init_logging();

    let cfg = match config::load_or_default(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: failed to load config: {}", e);
            process::exit(1);
        }
    };

    let base_url = args.base_url.as_deref().unwrap_or_else(|| cfg.base_url());
    let client = match Client::new(base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to create runtime: {}", e);
            process::exit(1);
        });

    let mut controller = MenuController::new(client);
    let code = rt.block_on(run(&mut controller, cfg.greeting())).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        1
    });
    process::exit(code);
}
