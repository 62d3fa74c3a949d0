//! Property-based tests for command composition

use proptest::prelude::*;
use venvcmd::{Platform, TerminalDialect, VenvCommandComposer};

fn any_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::Windows),
        Just(Platform::MacOs),
        Just(Platform::Linux),
        Just(Platform::FreeBsd),
        Just(Platform::Other),
    ]
}

fn any_dialect() -> impl Strategy<Value = TerminalDialect> {
    prop_oneof![
        Just(TerminalDialect::PosixShell),
        Just(TerminalDialect::WindowsCmd),
        Just(TerminalDialect::PowerShell),
    ]
}

proptest! {
    #[test]
    fn test_without_venv_command_is_unchanged(
        platform in any_platform(),
        dialect in any_dialect(),
        command in "\\PC*",
    ) {
        let composer = VenvCommandComposer::new(platform);
        prop_assert_eq!(composer.compose(dialect, None, &command), command);
    }

    #[test]
    fn test_command_is_final_segment(
        platform in any_platform(),
        dialect in any_dialect(),
        venv in "[a-zA-Z0-9_.-]{1,16}",
        command in "\\PC*",
    ) {
        let composer = VenvCommandComposer::new(platform);
        let line = composer.compose(dialect, Some(&venv), &command);
        let suffix = format!("{}{}", dialect.separator(), command);
        prop_assert!(line.ends_with(&suffix));
    }

    #[test]
    fn test_activation_prefix_matches_activate_command(
        platform in any_platform(),
        dialect in any_dialect(),
        venv in "[a-zA-Z0-9_-]{1,16}",
        command in "[a-z ]{1,20}",
    ) {
        let composer = VenvCommandComposer::new(platform);
        let line = composer.compose(dialect, Some(&venv), &command);
        let activation = composer.activate_command(&venv, dialect);
        prop_assert_eq!(line, format!("{}{}{}", activation, dialect.separator(), command));
    }

    #[test]
    fn test_compose_is_deterministic(
        platform in any_platform(),
        dialect in any_dialect(),
        venv in proptest::option::of("[a-zA-Z0-9_.-]{0,16}"),
        command in "\\PC*",
    ) {
        let composer = VenvCommandComposer::new(platform);
        let first = composer.compose(dialect, venv.as_deref(), &command);
        let second = composer.compose(dialect, venv.as_deref(), &command);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_activate_path_spelling_follows_dialect(
        platform in any_platform(),
        dialect in any_dialect(),
        venv in "[a-zA-Z0-9_-]{1,16}",
    ) {
        let path = VenvCommandComposer::new(platform).activate_path(&venv, dialect);
        prop_assert!(path.ends_with("activate"));
        match dialect {
            TerminalDialect::PosixShell => prop_assert!(!path.contains('\\')),
            _ => prop_assert!(!path.contains('/')),
        }
    }
}
