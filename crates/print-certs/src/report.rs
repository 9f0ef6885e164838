// SPDX-FileCopyrightText: 2018-2026 John L. Villalovos and the print-certs contributors
// SPDX-License-Identifier: Apache-2.0

use crate::error::CertError;
use crate::locate::{locate, CertLocation};
use crate::subject::SubjectReader;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One line of the report: `host::dir::package`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertRecord {
    pub host: String,
    pub dir: PathBuf,
    pub package: String,
}

impl fmt::Display for CertRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.host, self.dir.display(), self.package)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Filter {
    /// Print only certificates with exactly this common name
    pub target: Option<String>,
    /// Don't look into `_archive` at all
    pub skip_archive: bool,
}

impl Filter {
    fn wants_location(&self, root: &Path, location: &CertLocation) -> bool {
        !(self.skip_archive && location.is_archived(root))
    }

    fn wants_host(&self, host: &str) -> bool {
        self.target.as_deref().is_none_or(|target| target == host)
    }
}

/// Walk `root` and write one line per certificate into `out`, as soon as it is found.
/// Returns number of printed lines.
///
/// # Errors
/// First walk, inspection or write error stops the report, lines already written stay
pub fn print_certificates<W: Write>(
    root: &Path,
    reader: &dyn SubjectReader,
    filter: &Filter,
    out: &mut W,
) -> Result<usize, CertError> {
    let mut printed = 0;
    for location in locate(root)? {
        let location = location?;
        if !filter.wants_location(root, &location) {
            debug!(dir = %location.dir.display(), "skipping archived certificate");
            continue;
        }

        let host = reader.common_name(&location.cert_path())?;
        if !filter.wants_host(&host) {
            debug!(host = %host, dir = %location.dir.display(), "not a target");
            continue;
        }

        let record = CertRecord {
            host,
            dir: location.dir,
            package: location.package,
        };
        writeln!(out, "{record}")?;
        printed += 1;
    }
    out.flush()?;
    Ok(printed)
}
