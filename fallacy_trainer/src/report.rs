//! Summary output.

use std::io::{self, Write};

use fallacy_catalog::Catalog;

/// Write the catalog summary, one line per count, ending with a newline.
pub fn write_summary<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "{}", catalog.summary())?;
    out.flush()
}
