//! Directory tree reporting
//!
//! Walks the working directory top-down and prints each directory followed
//! by the files directly inside it, indented by depth.

mod walk;

pub use walk::{DirListing, DirWalk};

use std::io::{self, Write};
use std::path::Path;

/// Spaces added per depth level
pub const INDENT_WIDTH: usize = 4;

/// Prints the tree rooted at `root` to `out`
///
/// # Returns
///
/// * `Ok(usize)` - Number of directories visited
/// * `Err(io::Error)` - Failed to write to `out`
pub fn print_tree<W: Write>(root: &Path, out: &mut W) -> io::Result<usize> {
    let mut visited = 0;

    for listing in DirWalk::new(root) {
        write_listing(&listing, out)?;
        visited += 1;
    }

    tracing::debug!("Visited {} directories under {}", visited, root.display());
    Ok(visited)
}

/// Writes one directory and its files at the listing's depth
pub fn write_listing<W: Write>(listing: &DirListing, out: &mut W) -> io::Result<()> {
    let indent = " ".repeat(INDENT_WIDTH * listing.depth);
    writeln!(out, "{}{}/", indent, listing.name())?;

    let subindent = " ".repeat(INDENT_WIDTH * (listing.depth + 1));
    for file in &listing.files {
        writeln!(out, "{}{}", subindent, file)?;
    }
    Ok(())
}
