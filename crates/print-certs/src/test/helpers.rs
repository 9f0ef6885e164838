use std::path::PathBuf;
use std::sync::OnceLock;
use tempfile::TempDir;

/// Stand-ins for `openssl`, invoked as `<script> x509 -noout -subject -in <path>`.
/// `echo` reports the file content as CN, unless it starts with `corrupt`.
const SCRIPTS: &[(&str, &str)] = &[
    (
        "echo",
        r#"#!/bin/sh
content=$(cat "$5") || exit 1
case "$content" in
  corrupt*) echo 'unable to load certificate' >&2; exit 1 ;;
esac
printf 'subject=C = TW, O = Synology Inc., CN = %s\n' "$content"
"#,
    ),
    (
        "fail",
        "#!/bin/sh\necho 'unable to load certificate' >&2\nexit 1\n",
    ),
    ("no-cn", "#!/bin/sh\necho 'subject=O = Nobody'\n"),
];

static SCRIPTS_DIR: OnceLock<TempDir> = OnceLock::new();

/// Path of a fake openssl. All scripts get written at once, before anything
/// is spawned from them, otherwise exec may race with a still open write fd.
pub fn fake_openssl(name: &str) -> PathBuf {
    let dir = SCRIPTS_DIR.get_or_init(|| {
        let dir = TempDir::new().unwrap();
        for (name, body) in SCRIPTS {
            let path = dir.path().join(name);
            std::fs::write(&path, body).unwrap();
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            }
        }
        dir
    });
    dir.path().join(name)
}

/// PEM encoded self signed certificate with a DSM-like subject
pub fn self_signed_pem(common_name: &str) -> anyhow::Result<String> {
    let mut params = rcgen::CertificateParams::new(vec![common_name.to_string()])?;
    params.distinguished_name = rcgen::DistinguishedName::new();
    params
        .distinguished_name
        .push(rcgen::DnType::CountryName, "TW");
    params
        .distinguished_name
        .push(rcgen::DnType::OrganizationName, "Synology Inc.");
    params
        .distinguished_name
        .push(rcgen::DnType::CommonName, common_name);
    let key = rcgen::KeyPair::generate()?;
    let cert = params.self_signed(&key)?;
    Ok(cert.pem())
}
