use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str = "cost, twenties, tens, fives, ones";

/// Writes a purchases CSV with the standard header followed by `rows`.
pub fn purchases_file(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}
