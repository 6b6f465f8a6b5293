use cidr_tools::cli::{self, Cli};
use cidr_tools::config::{self, Settings};
use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io::{BufWriter, ErrorKind, IsTerminal, Write};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    config::init_logging(&settings)?;

    let stdout = std::io::stdout();
    if !stdout.is_terminal() {
        colored::control::set_override(false);
    }

    let args = Cli::parse();
    let mut out = BufWriter::new(stdout.lock());
    let result = cli::run(&args, &settings, &mut out).and_then(|()| Ok(out.flush()?));
    match result {
        Ok(()) => Ok(()),
        // reader went away, e.g. `cidr-tools expand ... | head`
        Err(e) if is_broken_pipe(&*e) => Ok(()),
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "ERROR".on_red());
            std::process::exit(1);
        }
    }
}

fn is_broken_pipe(e: &(dyn Error + 'static)) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == ErrorKind::BrokenPipe)
}
