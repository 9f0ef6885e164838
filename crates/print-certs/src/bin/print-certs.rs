// SPDX-FileCopyrightText: 2018-2026 John L. Villalovos and the print-certs contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use print_certs::{print_certificates, Filter, Inspector, Mode};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "print-certs")]
#[command(
    about = "Print certificates deployed on a Synology DiskStation as host::dir::package",
    long_about = None,
    version
)]
struct Cli {
    /// Mode limiting certificate search path
    #[arg(value_enum)]
    mode: Mode,

    /// Target CN to find, there may be multiple certificates on a single host
    #[arg(short, long, env = "PRINT_CERTS_TARGET")]
    target: Option<String>,

    /// Don't report certificates kept in `_archive`. Archived certificates are
    /// listed by default, the former `-a/--allcerts` opt-in flag is gone
    #[arg(long, env = "PRINT_CERTS_NO_ARCHIVE")]
    no_archive: bool,

    #[arg(
        long,
        env = "PRINT_CERTS_ROOT",
        help = "Search this directory instead of the mode's certificate directory"
    )]
    root: Option<PathBuf>,

    #[arg(long, value_enum, env = "PRINT_CERTS_INSPECTOR", default_value_t = Inspector::Openssl)]
    inspector: Inspector,

    #[arg(long, env = "PRINT_CERTS_OPENSSL", default_value = "openssl")]
    openssl: PathBuf,
}

fn main() -> anyhow::Result<()> {
    print_certs::trace_init()?;

    let cli = Cli::parse();
    debug!("CLI is {:#?}", cli);

    let root = cli.root.as_deref().unwrap_or_else(|| cli.mode.root());
    debug!(root = %root.display(), mode = %cli.mode, "searching certificates");

    let reader = cli.inspector.reader(cli.openssl.clone());
    let filter = Filter {
        target: cli.target.clone(),
        skip_archive: cli.no_archive,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let printed = print_certificates(root, reader.as_ref(), &filter, &mut out)
        .with_context(|| format!("Listing {} certificates", cli.mode))?;
    info!(printed, "done");
    Ok(())
}
