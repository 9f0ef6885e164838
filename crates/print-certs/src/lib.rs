// SPDX-FileCopyrightText: 2018-2026 John L. Villalovos and the print-certs contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;

pub mod error;
pub mod locate;
pub mod mode;
pub mod report;
pub mod subject;


pub use error::CertError;
pub use locate::{CertLocation, CERT_FILE};
pub use mode::Mode;
pub use report::{print_certificates, CertRecord, Filter};
pub use subject::{Inspector, NativeReader, OpensslReader, SubjectReader};

/// Init logging
///
/// Everything goes to stderr, stdout is reserved for the certificate report.
///
/// # Errors
///
/// Will return `Err` if failed to initialize logging
pub fn trace_init() -> anyhow::Result<()> {
    use std::env;
    use tracing::Level;
    use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, EnvFilter, Layer};

    let env_filter =
        EnvFilter::try_from_env("PRINT_CERTS_LOG").unwrap_or_else(|_| EnvFilter::from("warn"));
    let is_debug_log_level = env_filter
        .max_level_hint()
        .is_some_and(|level| level >= Level::DEBUG);

    let output = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(is_debug_log_level)
        .with_file(is_debug_log_level)
        .with_line_number(is_debug_log_level);

    // journald only when started by systemd, e.g. from a DSM scheduled task unit
    let journald = match env::var("INVOCATION_ID") {
        Err(_) => None,
        Ok(_) => tracing_journald::layer().ok(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(journald.with_filter(LevelFilter::INFO))
        .with(output.with_filter(env_filter));

    tracing::subscriber::set_global_default(subscriber)
        .context("tracing shouldn't already have been set up")?;
    Ok(())
}
