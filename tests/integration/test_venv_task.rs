//! Integration Tests for Venv Task Strings
//!
//! Drives task composition through the settings store, overriding the
//! integrated terminal shell for each case the way an editor user would.

use venvcmd::settings::{
    with_setting, MemorySettings, SettingsStore, EXTENSION_PREFIX, PYTHON_VENV_SETTING,
    TERMINAL_PREFIX, WINDOWS_SHELL_SETTING,
};
use venvcmd::{Platform, Result, VenvCommandComposer};

const COMMAND: &str = "func pack";

async fn store_with_venv() -> MemorySettings {
    let store = MemorySettings::new();
    store
        .set(PYTHON_VENV_SETTING, Some(".env"), Some(EXTENSION_PREFIX))
        .await
        .unwrap();
    store
}

async fn task_with_shell(platform: Platform, shell: Option<&str>) -> Result<String> {
    let store = store_with_venv().await;
    with_setting(
        &store,
        WINDOWS_SHELL_SETTING,
        shell,
        Some(TERMINAL_PREFIX),
        || async {
            VenvCommandComposer::new(platform)
                .convert_to_venv_task(&store, COMMAND)
                .await
        },
    )
    .await
}

#[tokio::test]
async fn test_windows_default() {
    let task = task_with_shell(Platform::Windows, None).await.unwrap();
    assert_eq!(task, r".env\Scripts\activate ; func pack");
}

#[tokio::test]
async fn test_windows_powershell() {
    let task = task_with_shell(
        Platform::Windows,
        Some(r"C:\Windows\System32\WindowsPowerShell\v1.0\powershell.exe"),
    )
    .await
    .unwrap();
    assert_eq!(task, r".env\Scripts\activate ; func pack");
}

#[tokio::test]
async fn test_windows_pwsh() {
    let task = task_with_shell(
        Platform::Windows,
        Some(r"C:\Windows\System32\WindowsPowerShell\v1.0\pwsh.exe"),
    )
    .await
    .unwrap();
    assert_eq!(task, r".env\Scripts\activate ; func pack");
}

#[tokio::test]
async fn test_windows_cmd() {
    let task = task_with_shell(Platform::Windows, Some(r"C:\Windows\System32\cmd.exe"))
        .await
        .unwrap();
    assert_eq!(task, r".env\Scripts\activate && func pack");
}

#[tokio::test]
async fn test_windows_git_bash() {
    let task = task_with_shell(Platform::Windows, Some(r"C:\Program Files\Git\bin\bash.exe"))
        .await
        .unwrap();
    assert_eq!(task, ". .env/Scripts/activate && func pack");
}

#[tokio::test]
async fn test_windows_bash() {
    let task = task_with_shell(Platform::Windows, Some(r"C:\Windows\System32\bash.exe"))
        .await
        .unwrap();
    assert_eq!(task, ". .env/Scripts/activate && func pack");
}

#[tokio::test]
async fn test_mac() {
    let task = task_with_shell(Platform::MacOs, None).await.unwrap();
    assert_eq!(task, ". .env/bin/activate && func pack");
}

#[tokio::test]
async fn test_linux() {
    let task = task_with_shell(Platform::Linux, None).await.unwrap();
    assert_eq!(task, ". .env/bin/activate && func pack");
}

#[tokio::test]
async fn test_linux_ignores_windows_shell_setting() {
    let task = task_with_shell(Platform::Linux, Some(r"C:\Windows\System32\cmd.exe"))
        .await
        .unwrap();
    assert_eq!(task, ". .env/bin/activate && func pack");
}

#[tokio::test]
async fn test_shell_setting_restored_after_each_case() {
    let store = store_with_venv().await;
    store
        .set(WINDOWS_SHELL_SETTING, Some("cmd.exe"), Some(TERMINAL_PREFIX))
        .await
        .unwrap();

    let task = with_setting(
        &store,
        WINDOWS_SHELL_SETTING,
        Some("bash.exe"),
        Some(TERMINAL_PREFIX),
        || async {
            VenvCommandComposer::new(Platform::Windows)
                .convert_to_venv_task(&store, COMMAND)
                .await
        },
    )
    .await
    .unwrap();
    assert_eq!(task, ". .env/Scripts/activate && func pack");

    let after = VenvCommandComposer::new(Platform::Windows)
        .convert_to_venv_task(&store, COMMAND)
        .await
        .unwrap();
    assert_eq!(after, r".env\Scripts\activate && func pack");
}
