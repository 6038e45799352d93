#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! csvcol — print selected columns of a comma-delimited file.

mod cli;
mod commands;
mod logging;
mod select;
mod types;

use std::io::{self, Write};

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use logging::{LogConfig, init_logging};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("warning: {err:#}");
    }

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    let stdout = io::stdout();
    if let Err(err) = commands::select::run(&cli, &ctx, stdout.lock()) {
        tracing::debug!(error = ?err, "run failed");
        let _ = io::stdout().flush();
        write_error(&ErrorOutput::from_select_error(&err), ctx.format);
        std::process::exit(err.exit_code());
    }
}
