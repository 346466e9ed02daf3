mod app;
mod audio;
mod command;
mod config;
mod consts;
mod game;
mod tick;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use lexopt::prelude::*;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

static HELP: &str = concat!(
    "Usage: sidewinder [options]\n",
    "\n",
    "Options:\n",
    "  -c, --config <PATH>  Read configuration from <PATH>\n",
    "      --no-sound       Disable audio cues\n",
    "  -h, --help           Show this help and exit\n",
    "  -V, --version        Show the program version and exit",
);

fn main() -> ExitCode {
    let args = match Args::parse_env() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sidewinder: {e}");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("sidewinder: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match args.config {
        Some(ref path) => Config::load(path, false)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::load(&Config::default_path()?, true)?,
    };
    if args.no_sound {
        config.sound = false;
    }
    let terminal = ratatui::init();
    let _ = execute!(io::stdout(), EnableMouseCapture);
    let r = App::new(config).run(terminal);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    r.map_err(Into::into)
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    no_sound: bool,
}

impl Args {
    /// Parse command-line arguments.  Returns `Ok(None)` if the program
    /// should exit immediately (`--help`/`--version`).
    fn parse_env() -> Result<Option<Args>, lexopt::Error> {
        let mut args = Args::default();
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Long("no-sound") => args.no_sound = true,
                Short('h') | Long("help") => {
                    println!("{HELP}");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }
}
