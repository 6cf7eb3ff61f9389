//! End-to-end resolution tests against a mocked GitHub API

use std::collections::HashMap;
use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};

use winget_src::catalog::error::ResolveError;
use winget_src::catalog::provider::{ProviderDispatch, ProviderKind, ReleaseProvider};
use winget_src::catalog::providers::GitHubProvider;
use winget_src::catalog::types::{Architecture, PackageListEntry};
use winget_src::manifest::error::ManifestError;
use winget_src::manifest::repository::ManifestRepository;
use winget_src::manifest::service::ManifestService;

fn foo_package() -> PackageListEntry {
    PackageListEntry {
        provider: "github".to_string(),
        id: "foo".to_string(),
        name: "MyApp".to_string(),
        publisher: "acme".to_string(),
        description: "My application".to_string(),
        installer_type: "zip-portable".to_string(),
        ..Default::default()
    }
}

fn create_service(server: &ServerGuard) -> ManifestService {
    let mut providers: HashMap<ProviderKind, Arc<dyn ReleaseProvider>> = HashMap::new();
    providers.insert(
        ProviderKind::GitHub,
        Arc::new(GitHubProvider::new(&server.url())),
    );

    ManifestService::new(ManifestRepository::new(
        vec![foo_package()],
        ProviderDispatch::new(providers),
    ))
}

async fn mock_releases(server: &mut ServerGuard, checksum_body: &str) -> (Mock, Mock) {
    let releases = server
        .mock("GET", "/repos/acme/MyApp/releases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"[
                {{
                    "name": "2.0",
                    "assets": [
                        {{"name": "MyApp-windows-x64.zip", "browser_download_url": "https://dl/2.0/MyApp-windows-x64.zip", "content_type": "application/zip"}},
                        {{"name": "MyApp-windows-arm64.zip", "browser_download_url": "https://dl/2.0/MyApp-windows-arm64.zip", "content_type": "application/zip"}},
                        {{"name": "checksums.txt", "browser_download_url": "{url}/2.0/checksums.txt", "content_type": "text/plain"}}
                    ]
                }},
                {{
                    "name": "1.5-linux-only",
                    "assets": [
                        {{"name": "MyApp-linux-x64.tar.gz", "browser_download_url": "https://dl/1.5/MyApp-linux-x64.tar.gz", "content_type": "application/gzip"}}
                    ]
                }},
                {{
                    "name": "1.0",
                    "assets": [
                        {{"name": "MyApp-windows-386.zip", "browser_download_url": "https://dl/1.0/MyApp-windows-386.zip", "content_type": "application/zip"}},
                        {{"name": "MyApp-windows-x86.zip", "browser_download_url": "https://dl/1.0/MyApp-windows-x86.zip", "content_type": "application/zip"}}
                    ]
                }}
            ]"#,
            url = server.url()
        ))
        .create_async()
        .await;

    let checksums = server
        .mock("GET", "/2.0/checksums.txt")
        .with_status(200)
        .with_body(checksum_body)
        .create_async()
        .await;

    (releases, checksums)
}

#[tokio::test]
async fn package_manifests_resolves_installers_from_github_releases() {
    let mut server = Server::new_async().await;
    let (releases, checksums) = mock_releases(
        &mut server,
        "abc123 MyApp-windows-x64.zip\nDEF456 MyApp-windows-arm64.zip\n",
    )
    .await;

    let manifests = create_service(&server)
        .package_manifests("foo", None)
        .await
        .unwrap();

    releases.assert_async().await;
    checksums.assert_async().await;

    let versions: Vec<_> = manifests
        .versions
        .iter()
        .map(|v| v.package_version.as_str())
        .collect();
    assert_eq!(versions, vec!["2.0", "1.0"]);

    let latest = &manifests.versions[0];
    assert_eq!(latest.default_locale.short_description, "My application");
    assert_eq!(latest.installers.len(), 2);
    assert_eq!(latest.installers[0].architecture, Architecture::X64);
    assert_eq!(latest.installers[0].installer_sha256, "abc123");
    assert_eq!(latest.installers[1].architecture, Architecture::Arm64);
    assert_eq!(latest.installers[1].installer_sha256, "def456");

    let oldest = &manifests.versions[1];
    assert_eq!(oldest.installers.len(), 1);
    assert_eq!(oldest.installers[0].architecture, Architecture::X86);
    assert_eq!(
        oldest.installers[0].installer_url,
        "https://dl/1.0/MyApp-windows-x86.zip"
    );
    assert_eq!(oldest.installers[0].installer_sha256, "");
}

#[tokio::test]
async fn package_manifests_returns_version_not_found_for_unpublished_version() {
    let mut server = Server::new_async().await;
    let _mocks = mock_releases(&mut server, "abc123 MyApp-windows-x64.zip\n").await;

    let result = create_service(&server)
        .package_manifests("foo", Some("9.9.9"))
        .await;

    assert!(matches!(result, Err(ManifestError::VersionNotFound(v)) if v == "9.9.9"));
}

#[tokio::test]
async fn malformed_checksum_line_fails_the_whole_resolution() {
    let mut server = Server::new_async().await;
    let _mocks = mock_releases(
        &mut server,
        "abc123 MyApp-windows-x64.zip\nthis line has four fields\n",
    )
    .await;

    let result = create_service(&server).package_manifests("foo", None).await;

    assert!(matches!(
        result,
        Err(ManifestError::Resolve(ResolveError::ChecksumFormat { .. }))
    ));
}
