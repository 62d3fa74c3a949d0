//! Contract Tests for Scoped Setting Overrides
//!
//! Every override must leave the settings file exactly as it found it,
//! checked by re-reading the file from disk after each case.

use tempfile::TempDir;
use venvcmd::settings::{with_setting, JsonFileSettings, SettingsStore, TERMINAL_PREFIX, WINDOWS_SHELL_SETTING};
use venvcmd::Error;

async fn reread(path: &std::path::Path) -> Option<String> {
    JsonFileSettings::open(path)
        .await
        .unwrap()
        .get(WINDOWS_SHELL_SETTING, Some(TERMINAL_PREFIX))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_restores_after_success() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let store = JsonFileSettings::open(&path).await.unwrap();
    store
        .set(WINDOWS_SHELL_SETTING, Some("pwsh.exe"), Some(TERMINAL_PREFIX))
        .await
        .unwrap();

    let inside = with_setting(
        &store,
        WINDOWS_SHELL_SETTING,
        Some("cmd.exe"),
        Some(TERMINAL_PREFIX),
        || async { Ok(reread(&path).await) },
    )
    .await
    .unwrap();

    assert_eq!(inside.as_deref(), Some("cmd.exe"));
    assert_eq!(reread(&path).await.as_deref(), Some("pwsh.exe"));
}

#[tokio::test]
async fn test_restores_after_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let store = JsonFileSettings::open(&path).await.unwrap();
    store
        .set(WINDOWS_SHELL_SETTING, Some("pwsh.exe"), Some(TERMINAL_PREFIX))
        .await
        .unwrap();

    let result: venvcmd::Result<()> = with_setting(
        &store,
        WINDOWS_SHELL_SETTING,
        Some("bash.exe"),
        Some(TERMINAL_PREFIX),
        || async { Err(Error::Other("assertion failed".to_string())) },
    )
    .await;

    assert!(matches!(result, Err(Error::Other(_))));
    assert_eq!(reread(&path).await.as_deref(), Some("pwsh.exe"));
}

#[tokio::test]
async fn test_unset_override_restores_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let store = JsonFileSettings::open(&path).await.unwrap();
    store
        .set(WINDOWS_SHELL_SETTING, Some("cmd.exe"), Some(TERMINAL_PREFIX))
        .await
        .unwrap();

    let inside = with_setting(&store, WINDOWS_SHELL_SETTING, None, Some(TERMINAL_PREFIX), || async {
        Ok(reread(&path).await)
    })
    .await
    .unwrap();

    assert_eq!(inside, None);
    assert_eq!(reread(&path).await.as_deref(), Some("cmd.exe"));
}

#[tokio::test]
async fn test_originally_unset_stays_unset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let store = JsonFileSettings::open(&path).await.unwrap();

    with_setting(
        &store,
        WINDOWS_SHELL_SETTING,
        Some("cmd.exe"),
        Some(TERMINAL_PREFIX),
        || async { Ok(()) },
    )
    .await
    .unwrap();

    assert_eq!(reread(&path).await, None);
}
