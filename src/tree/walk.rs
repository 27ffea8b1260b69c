use std::fs;
use std::path::{Path, PathBuf};

/// One visited directory and the files directly inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    /// Full path of the directory
    pub path: PathBuf,

    /// Distance from the walk root (root is 0)
    pub depth: usize,

    /// Names of subdirectories, including links to directories, sorted
    pub dirs: Vec<String>,

    /// Entries of `dirs` that are symbolic links and are not descended into
    pub linked_dirs: Vec<String>,

    /// Names of non-directory entries, sorted
    pub files: Vec<String>,
}

impl DirListing {
    /// Final path component, or the full path for roots like `/`
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Lazy top-down directory walk
///
/// Each call to `next` reads exactly one directory. A symbolic link to a
/// directory is listed among `dirs` but never followed, so it is neither
/// printed as a file nor walked, every real directory is visited once, and
/// the walk always terminates. Other links, including broken ones, count as
/// files. Directories that cannot be read are logged and skipped.
#[derive(Debug)]
pub struct DirWalk {
    pending: Vec<(PathBuf, usize)>,
}

impl DirWalk {
    pub fn new(root: &Path) -> Self {
        Self {
            pending: vec![(root.to_path_buf(), 0)],
        }
    }
}

impl Iterator for DirWalk {
    type Item = DirListing;

    fn next(&mut self) -> Option<DirListing> {
        while let Some((path, depth)) = self.pending.pop() {
            match read_listing(&path, depth) {
                Ok(listing) => {
                    // Reverse so the first subdirectory is popped first
                    for dir in listing.dirs.iter().rev() {
                        if !listing.linked_dirs.contains(dir) {
                            self.pending.push((path.join(dir), depth + 1));
                        }
                    }
                    return Some(listing);
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable directory {}: {}", path.display(), e);
                }
            }
        }
        None
    }
}

fn read_listing(path: &Path, depth: usize) -> std::io::Result<DirListing> {
    let mut dirs = Vec::new();
    let mut linked_dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            dirs.push(name);
        } else if file_type.is_symlink() && entry.path().is_dir() {
            linked_dirs.push(name.clone());
            dirs.push(name);
        } else {
            files.push(name);
        }
    }

    dirs.sort();
    linked_dirs.sort();
    files.sort();

    Ok(DirListing {
        path: path.to_path_buf(),
        depth,
        dirs,
        linked_dirs,
        files,
    })
}
