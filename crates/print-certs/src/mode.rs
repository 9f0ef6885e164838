// SPDX-FileCopyrightText: 2018-2026 John L. Villalovos and the print-certs contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use strum::{Display, EnumString};

/// Certificates used by NGINX (DSM web UI, reverse proxy)
pub const NGINX_CERTS_DIR: &str = "/usr/syno/etc/certificate";
/// Certificates deployed to installed packages
pub const PACKAGES_CERTS_DIR: &str = "/usr/local/etc/certificate";

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Nginx,
    Packages,
}

impl Mode {
    #[must_use]
    pub fn root(self) -> &'static Path {
        match self {
            Self::Nginx => Path::new(NGINX_CERTS_DIR),
            Self::Packages => Path::new(PACKAGES_CERTS_DIR),
        }
    }
}
