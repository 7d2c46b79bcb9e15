// minic: MiniC scanner and syntax checker

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use minic::config::{self, Args};
use minic::history::ScanHistory;
use minic::parser::{ConsoleReporter, Parser, Scanner, StrSource, TokenKind};
use minic::ui::App;

#[derive(Debug, Error)]
enum DriverError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    config::init_logging(&args);

    let result = if args.tokens {
        dump_tokens(&args)
    } else if args.interactive {
        run_interactive(&args)
    } else {
        check_syntax(&args)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn read_source(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the file, reporting the first syntax error on stderr.
fn check_syntax(args: &Args) -> Result<bool, DriverError> {
    let source = StrSource::from_path(&args.file).map_err(|source| DriverError::Read {
        path: args.file.clone(),
        source,
    })?;

    let mut scanner = Scanner::new(source);
    if args.verbose {
        scanner.enable_debugging();
    }

    let mut parser = Parser::new(scanner, ConsoleReporter::stderr());
    parser.parse();

    let accepted = parser.reporter().num_errors() == 0;
    if accepted {
        println!("{}: syntax OK", args.file.display());
    } else {
        println!("{}: rejected", args.file.display());
    }
    Ok(accepted)
}

/// Print every token with its position, then the lexical warnings.
fn dump_tokens(args: &Args) -> Result<bool, DriverError> {
    let source = read_source(&args.file)?;

    let mut scanner = Scanner::from_text(&source);
    if args.verbose {
        scanner.enable_debugging();
    }

    let mut clean = true;
    loop {
        let token = scanner.scan();
        println!("{:<14} {}", token.pos.to_string(), token);
        clean &= token.kind != TokenKind::Error;
        if token.kind == TokenKind::Eof {
            break;
        }
    }

    for warning in scanner.take_warnings() {
        println!("WARNING: {warning}");
    }
    Ok(clean)
}

/// Step through the recorded token stream in the terminal UI.
fn run_interactive(args: &Args) -> Result<bool, DriverError> {
    let source = read_source(&args.file)?;
    let history = ScanHistory::record_with(&source, args.verbose);
    let accepted = history.outcome().is_accepted();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(history, source);
    let res = app.run(&mut terminal);

    // Restore terminal before surfacing any error from the event loop
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(accepted)
}
