use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::page::{convert, Lang};

/// The directories under the site root that hold pages, one per language.
const PAGE_DIRS: [&str; 2] = ["pt", "en"];

#[derive(Clone, Debug)]
pub struct Options {
    /// Title for legacy pages without a `<title>`.
    pub default_title: String,
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_title: "Untitled".to_owned(),
            dry_run: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("listing {}: {source}", path.display())]
    List { path: PathBuf, source: io::Error },
    #[error("reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// The `.html` pages under `root`, sorted. Missing language directories are
/// skipped.
pub fn page_paths(root: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();

    for dir in PAGE_DIRS {
        let dir = root.join(dir);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(source) => return Err(Error::List { path: dir, source }),
        };

        for entry in entries {
            let path = entry
                .map_err(|source| Error::List {
                    path: dir.clone(),
                    source,
                })?
                .path();

            if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
                paths.push(path);
            }
        }
    }

    paths.sort();
    Ok(paths)
}

/// Convert the page at `path`, returning whether it changed.
pub fn convert_file(path: &Path, options: &Options) -> Result<bool, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    let raw = String::from_utf8_lossy(&bytes);
    let lang = Lang::from_dir_name(
        path.parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str()),
    );

    let Some(converted) = convert(&raw, lang, &options.default_title) else {
        debug!(path = %path.display(), "unchanged");
        return Ok(false);
    };

    if options.dry_run {
        info!(path = %path.display(), "would convert");
    } else {
        fs::write(path, converted).map_err(|source| Error::Write {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), %lang, "converted");
    }

    Ok(true)
}

/// Convert every page under `root`, returning how many changed.
pub fn convert_site(root: &Path, options: &Options) -> Result<usize, Error> {
    let mut changed = 0;

    for path in page_paths(root)? {
        if convert_file(&path, options)? {
            changed += 1;
        }
    }

    Ok(changed)
}
