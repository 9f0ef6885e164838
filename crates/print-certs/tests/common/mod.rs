use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

const FAKE_OPENSSL: &str = r#"#!/bin/sh
content=$(cat "$5") || exit 1
case "$content" in
  corrupt*) echo 'unable to load certificate' >&2; exit 1 ;;
esac
printf 'subject=CN = %s\n' "$content"
"#;

static TOOLS: OnceLock<TempDir> = OnceLock::new();

/// Written once, before the first spawn, to keep exec away from open write fds
pub fn fake_openssl() -> PathBuf {
    let dir = TOOLS.get_or_init(|| {
        let dir = TempDir::new().expect("create tools dir");
        let path = dir.path().join("openssl");
        fs::write(&path, FAKE_OPENSSL).expect("write fake openssl");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("make fake openssl executable");
        }
        dir
    });
    dir.path().join("openssl")
}

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("certificate");
        fs::create_dir_all(&root).expect("create certificate root");
        Self { _tmp: tmp, root }
    }

    /// Put `cert.pem` with `content` into `root/dir`
    pub fn cert(&self, dir: &str, content: &str) -> &Self {
        let dir = self.root.join(dir);
        fs::create_dir_all(&dir).expect("create cert dir");
        fs::write(dir.join("cert.pem"), content).expect("write cert");
        self
    }

    pub fn line(&self, host: &str, dir: &str, package: &str) -> String {
        format!("{host}::{}::{package}", self.root.join(dir).display())
    }

    pub fn cmd(&self) -> Command {
        cmd_with_root(&self.root)
    }
}

pub fn cmd_with_root(root: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("print-certs");
    cmd.env_remove("PRINT_CERTS_TARGET")
        .env_remove("PRINT_CERTS_NO_ARCHIVE")
        .env_remove("PRINT_CERTS_INSPECTOR")
        .env_remove("PRINT_CERTS_LOG")
        .env("PRINT_CERTS_ROOT", root)
        .env("PRINT_CERTS_OPENSSL", fake_openssl());
    cmd
}
