// SPDX-FileCopyrightText: 2018-2026 John L. Villalovos and the print-certs contributors
// SPDX-License-Identifier: Apache-2.0

use crate::error::CertError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use strum::{Display, EnumString};
use tracing::debug;
use x509_parser::pem::parse_x509_pem;

/// Marker preceding the host name in `openssl x509 -subject` output.
/// DSM 6 produced `subject=CN = host`, DSM 7 puts more RDNs before the CN.
pub const CN_MARKER: &str = "CN =";

pub trait SubjectReader {
    /// Subject common name of the certificate stored in `cert`
    ///
    /// # Errors
    /// Any failure to read or inspect the certificate
    fn common_name(&self, cert: &Path) -> Result<String, CertError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Inspector {
    /// Run `openssl x509` and parse its text output
    #[default]
    Openssl,
    /// Parse PEM in-process
    Native,
}

impl Inspector {
    #[must_use]
    pub fn reader(self, openssl: PathBuf) -> Box<dyn SubjectReader> {
        match self {
            Self::Openssl => Box::new(OpensslReader::new(openssl)),
            Self::Native => Box::new(NativeReader),
        }
    }
}

/// Pure parser for `openssl x509 -noout -subject` output
#[must_use]
pub fn parse_subject(output: &str) -> Option<String> {
    output
        .split_once(CN_MARKER)
        .map(|(_, host)| host.trim().to_string())
}

#[derive(Clone, Debug)]
pub struct OpensslReader {
    program: PathBuf,
}

impl OpensslReader {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OpensslReader {
    fn default() -> Self {
        Self::new("openssl")
    }
}

impl SubjectReader for OpensslReader {
    fn common_name(&self, cert: &Path) -> Result<String, CertError> {
        debug!(program = %self.program.display(), cert = %cert.display(), "inspecting");
        let output = Command::new(&self.program)
            .args(["x509", "-noout", "-subject", "-in"])
            .arg(cert)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CertError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CertError::Inspect {
                path: cert.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_subject(&stdout).ok_or_else(|| CertError::MissingCommonName {
            path: cert.to_path_buf(),
            output: stdout.into_owned(),
        })
    }
}

/// Reads the first PEM block with `x509-parser`, no external tools involved
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeReader;

impl SubjectReader for NativeReader {
    fn common_name(&self, cert: &Path) -> Result<String, CertError> {
        debug!(cert = %cert.display(), "parsing");
        let data = fs::read(cert).map_err(|source| CertError::Read {
            path: cert.to_path_buf(),
            source,
        })?;
        let (_rem, pem) = parse_x509_pem(&data).map_err(|err| CertError::Pem {
            path: cert.to_path_buf(),
            reason: err.to_string(),
        })?;
        let x509 = pem.parse_x509().map_err(|err| CertError::X509 {
            path: cert.to_path_buf(),
            reason: err.to_string(),
        })?;

        let subject = x509.subject();
        let host = subject
            .iter_common_name()
            .find_map(|cn| cn.as_str().ok())
            .map(str::to_string)
            .ok_or_else(|| CertError::MissingCommonName {
                path: cert.to_path_buf(),
                output: subject.to_string(),
            });
        host
    }
}
