//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::ContentQueryArgs;
use crate::error::Result;

/// Render a result as JSON, pretty-printed when requested.
pub fn format_json<T: Serialize>(result: &T, args: &ContentQueryArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Write a result as JSON to stdout.
pub fn output_json<T: Serialize>(result: &T, args: &ContentQueryArgs) -> Result<()> {
    let json = format_json(result, args)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
