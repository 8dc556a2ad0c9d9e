//! recordtable REPL
//!
//! Interactive shell over a single table.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use recordtable::config::{StoreValidation, SyncStrategy, DEFAULT_CAPACITY};
use recordtable::{Config, Outcome, Session, Table};
use tracing_subscriber::{fmt, EnvFilter};

/// recordtable REPL
#[derive(Parser, Debug)]
#[command(name = "recordtable-repl")]
#[command(about = "Interactive shell for a fixed-capacity record table")]
#[command(version)]
struct Args {
    /// Store file to bind at startup (in-memory if omitted)
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Maximum number of records
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Reject stores with a trailing partial record
    #[arg(long)]
    strict: bool,

    /// Skip fsync after flush
    #[arg(long)]
    no_sync: bool,
}

fn main() {
    // Logs go to stderr so they never interleave with query output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,recordtable=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("recordtable REPL v{}", recordtable::VERSION);

    let mut builder = Config::builder()
        .capacity(args.capacity)
        .store_validation(if args.strict {
            StoreValidation::Strict
        } else {
            StoreValidation::Lenient
        })
        .sync_strategy(if args.no_sync {
            SyncStrategy::Never
        } else {
            SyncStrategy::EveryFlush
        });
    if let Some(store) = &args.store {
        tracing::info!("Store: {}", store.display());
        builder = builder.store_path(store);
    }

    let table = match Table::open(builder.build()) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Failed to open table: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = Session::new(table);
    if let Err(e) = run(&mut session) {
        tracing::error!("REPL error: {}", e);
        std::process::exit(1);
    }
}

fn run(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "db > ")?;
        stdout.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                // EOF behaves like .exit, but never loops on a failed flush
                writeln!(stdout)?;
                if let Err(e) = session.execute(".exit", &mut stdout) {
                    writeln!(stdout, "Error: {}", e)?;
                }
                return Ok(());
            }
        };

        match session.execute(&line, &mut stdout) {
            Ok(Outcome::Exit) => return Ok(()),
            Ok(Outcome::Continue) => {}
            Err(e) => writeln!(stdout, "Error: {}", e)?,
        }
    }
}
