//! Property-based tests for terminal resolution

use proptest::prelude::*;
use venvcmd::settings::{MemorySettings, SettingsStore, TERMINAL_PREFIX, WINDOWS_SHELL_SETTING};
use venvcmd::terminal::{resolve, resolve_from_settings};
use venvcmd::{Platform, TerminalDialect};

fn non_windows_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::MacOs),
        Just(Platform::Linux),
        Just(Platform::FreeBsd),
        Just(Platform::OpenBsd),
        Just(Platform::SunOs),
        Just(Platform::Other),
    ]
}

proptest! {
    #[test]
    fn test_non_windows_is_always_posix(
        platform in non_windows_platform(),
        shell in proptest::option::of("\\PC*"),
    ) {
        prop_assert_eq!(resolve(platform, shell.as_deref()), TerminalDialect::PosixShell);
    }

    #[test]
    fn test_powershell_anywhere_wins(
        prefix in "\\PC{0,20}",
        suffix in "\\PC{0,20}",
        name in prop_oneof![Just("powershell"), Just("PowerShell"), Just("pwsh"), Just("PWSH")],
    ) {
        let shell = format!("{}{}{}", prefix, name, suffix);
        prop_assert_eq!(resolve(Platform::Windows, Some(&shell)), TerminalDialect::PowerShell);
    }

    #[test]
    fn test_bash_without_powershell_is_posix(
        prefix in "[a-z:\\\\ ]{0,20}",
        name in prop_oneof![Just("bash"), Just("BASH"), Just("Bash")],
    ) {
        prop_assume!(!prefix.contains("pwsh") && !prefix.contains("powershell"));
        let shell = format!("{}{}.exe", prefix, name);
        prop_assert_eq!(resolve(Platform::Windows, Some(&shell)), TerminalDialect::PosixShell);
    }

    #[test]
    fn test_other_windows_shells_are_cmd(shell in "[c-z0-9:\\\\. ]{0,30}") {
        let lower = shell.to_lowercase();
        prop_assume!(!lower.contains("bash") && !lower.contains("pwsh") && !lower.contains("powershell"));
        prop_assert_eq!(resolve(Platform::Windows, Some(&shell)), TerminalDialect::WindowsCmd);
    }

    #[test]
    fn test_settings_lookup_matches_direct_resolution(shell in proptest::option::of("\\PC{0,30}")) {
        let store = MemorySettings::new();
        let via_settings = tokio_test::block_on(async {
            store
                .set(WINDOWS_SHELL_SETTING, shell.as_deref(), Some(TERMINAL_PREFIX))
                .await
                .unwrap();
            resolve_from_settings(&store, Platform::Windows).await.unwrap()
        });
        prop_assert_eq!(via_settings, resolve(Platform::Windows, shell.as_deref()));
    }
}
