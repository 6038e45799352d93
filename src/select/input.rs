/// Opening the input source: a named file, or standard input for `-`.
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::debug;

use super::errors::SelectError;

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// A readable input source.
pub enum Input {
    Stdin(io::Stdin),
    File(File),
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read(buf),
            Input::File(file) => file.read(buf),
        }
    }
}

/// Open `path` for line-by-line reading.
///
/// The handle lives as long as the returned reader and is closed on drop.
///
/// # Errors
///
/// Returns `SelectError::FileAccess` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<BufReader<Input>, SelectError> {
    if path.as_os_str() == STDIN_PATH {
        debug!("reading from standard input");
        return Ok(BufReader::new(Input::Stdin(io::stdin())));
    }

    let file = File::open(path).map_err(|source| SelectError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened input file");
    Ok(BufReader::new(Input::File(file)))
}
