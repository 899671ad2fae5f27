use std::io::{self, Write};

/// The line announcing which file is being served.
pub fn render(path: &str) -> String {
    format!("Serving file: {}", path)
}

/// Write the report line for `path` to `out`.
///
/// Nothing is read from disk; `path` is only printed.
pub fn report<W: Write>(out: &mut W, path: &str) -> io::Result<()> {
    writeln!(out, "{}", render(path))?;
    out.flush()
}
