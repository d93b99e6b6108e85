//! Shared helpers for scaffolding integration tests

#![allow(dead_code)]

use camino::Utf8PathBuf;
use flate2::write::GzEncoder;
use flate2::Compression;
use payload_templates_core::config::{InstallConfig, SourceConfig};
use payload_templates_core::RuntimeConfig;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OWNER: &str = "Lotus015";
pub const REPO: &str = "payload-templates";
pub const ARCHIVE_PATH: &str = "/Lotus015/payload-templates/tar.gz/HEAD";

pub const MODERN_MANIFEST: &str =
    r#"{"name":"modern","version":"1.0.0","private":true,"scripts":{"dev":"next dev","seed":"tsx scripts/seed.ts"}}"#;

/// Build a gzipped tarball the way repository archive endpoints lay it out
pub fn repo_tarball(entries: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (entry_path, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        builder
            .append_data(
                &mut header,
                format!("payload-templates-0a1b2c3/{}", entry_path),
                content.as_bytes(),
            )
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

/// Archive holding all four templates
pub fn standard_tarball() -> Vec<u8> {
    repo_tarball(&[
        ("README.md", "# payload-templates"),
        ("cli/package.json", r#"{"name":"payload-templates"}"#),
        ("templates/premium/package.json", r#"{"name":"premium"}"#),
        ("templates/traditional/package.json", r#"{"name":"traditional"}"#),
        ("templates/modern/package.json", MODERN_MANIFEST),
        ("templates/modern/.env.example", "DATABASE_URL=\nPAYLOAD_SECRET=\n"),
        ("templates/modern/pnpm-lock.yaml", "lockfileVersion: '9.0'\n"),
        ("templates/modern/app/(frontend)/page.tsx", "export default function Page() {}"),
        ("templates/boutique/package.json", r#"{"name":"boutique"}"#),
    ])
}

/// Serve `body` at the archive path, expecting exactly `times` requests
pub async fn mock_archive(server: &MockServer, body: Vec<u8>, times: u64) {
    Mock::given(method("GET"))
        .and(path(ARCHIVE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Runtime config pointing at a mock archive server
pub fn config_for(server: &MockServer) -> RuntimeConfig {
    RuntimeConfig {
        source: SourceConfig {
            repo_owner: OWNER.to_string(),
            repo_name: REPO.to_string(),
            reference: "HEAD".to_string(),
            archive_base_url: server.uri(),
        },
        install: InstallConfig::default(),
    }
}

/// Temporary working directory as a UTF-8 path
pub fn temp_cwd() -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let cwd = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path");
    (temp, cwd)
}
