// SPDX-FileCopyrightText: 2018-2026 John L. Villalovos and the print-certs contributors
// SPDX-License-Identifier: Apache-2.0

use crate::error::CertError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const CERT_FILE: &str = "cert.pem";

/// DSM keeps replaced certificates here, below the certificate root
pub const ARCHIVE_DIR: &str = "_archive";

/// Top-level directory under a certificate root, owned by one service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub path: PathBuf,
}

/// Directory which directly contains a `cert.pem`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertLocation {
    pub package: String,
    pub dir: PathBuf,
}

impl CertLocation {
    #[must_use]
    pub fn cert_path(&self) -> PathBuf {
        self.dir.join(CERT_FILE)
    }

    /// True if any path component below `root` is the archive directory
    #[must_use]
    pub fn is_archived(&self, root: &Path) -> bool {
        self.dir.strip_prefix(root).is_ok_and(|rel| {
            rel.components()
                .any(|component| component.as_os_str() == ARCHIVE_DIR)
        })
    }
}

/// List package directories of `root`, sorted by name.
/// Plain files and other non-directories are skipped.
///
/// # Errors
/// * `RootNotFound` if `root` isn't an existing directory
/// * `ReadDir` if listing fails
pub fn packages(root: &Path) -> Result<Vec<Package>, CertError> {
    if !root.is_dir() {
        return Err(CertError::RootNotFound(root.to_path_buf()));
    }
    let read_dir_err = |source: std::io::Error| CertError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(read_dir_err)? {
        names.push(entry.map_err(read_dir_err)?.file_name());
    }
    names.sort();

    let mut packages = Vec::with_capacity(names.len());
    for name in names {
        let path = root.join(&name);
        if !path.is_dir() {
            warn!(path = %path.display(), "not a directory, skipping");
            continue;
        }
        packages.push(Package {
            name: name.to_string_lossy().into_owned(),
            path,
        });
    }
    Ok(packages)
}

impl Package {
    /// Walk package subtree depth-first, parents before children.
    /// Symlinked directories below the package itself are not descended.
    pub fn locations(self) -> impl Iterator<Item = Result<CertLocation, CertError>> {
        debug!(package = %self.name, path = %self.path.display(), "walking package");
        let Package { name, path } = self;
        WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Err(err) => Some(Err(err.into())),
                Ok(entry) if entry.depth() == 0 || entry.file_type().is_dir() => {
                    if entry.path().join(CERT_FILE).is_file() {
                        Some(Ok(CertLocation {
                            package: name.clone(),
                            dir: entry.into_path(),
                        }))
                    } else {
                        None
                    }
                }
                Ok(_) => None,
            })
    }
}

/// Lazily find every certificate directory below `root`.
/// Packages come in sorted order, the root itself is never reported.
///
/// # Errors
/// Fails upfront if `root` can't be listed, later items carry walk errors
pub fn locate(
    root: &Path,
) -> Result<impl Iterator<Item = Result<CertLocation, CertError>>, CertError> {
    let packages = packages(root)?;
    debug!(root = %root.display(), count = packages.len(), "found packages");
    Ok(packages.into_iter().flat_map(Package::locations))
}
