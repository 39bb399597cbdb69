use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use taskline_core::{FileTaskStore, Session, GREETING};

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "A chatty line-oriented task tracker", long_about = None)]
struct Cli {
    /// Directory holding the task file (defaults to ~/.taskline)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

const DIVIDER: &str = "____________________________________________________________";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = FileTaskStore::new(cli.data_dir)?;
    let (mut session, warning) = Session::start(store);

    println!("{}", DIVIDER);
    println!("{}", GREETING);
    if let Some(warning) = warning {
        println!("{}", warning);
    }
    println!("{}", DIVIDER);

    for line in io::stdin().lock().lines() {
        let line = line?;
        println!("{}", DIVIDER);
        println!("{}", session.handle_line(&line));
        println!("{}", DIVIDER);
        if session.is_exited() {
            break;
        }
    }

    Ok(())
}
