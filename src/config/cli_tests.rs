//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command};

mod subcommands {
    use super::*;

    #[test]
    fn trigger_with_all_values() {
        let cli = Cli::parse_from_iter([
            "ifttt-webhook",
            "trigger",
            "door_open",
            "--value1",
            "front",
            "--value2",
            "12",
            "--value3",
            "x",
        ]);

        match cli.command {
            Command::Trigger {
                event,
                value1,
                value2,
                value3,
            } => {
                assert_eq!(event, "door_open");
                assert_eq!(value1.as_deref(), Some("front"));
                assert_eq!(value2.as_deref(), Some("12"));
                assert_eq!(value3.as_deref(), Some("x"));
            }
            other => panic!("Expected Trigger, got {other:?}"),
        }
    }

    #[test]
    fn trigger_values_are_optional() {
        let cli = Cli::parse_from_iter(["ifttt-webhook", "trigger", "ping"]);

        assert!(matches!(
            cli.command,
            Command::Trigger {
                value1: None,
                value2: None,
                value3: None,
                ..
            }
        ));
    }

    #[test]
    fn trigger_requires_event() {
        let result = Cli::try_parse_from_iter(["ifttt-webhook", "trigger"]);
        assert!(result.is_err());
    }

    #[test]
    fn gmail_requires_to() {
        let result = Cli::try_parse_from_iter(["ifttt-webhook", "gmail", "--subject", "Hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn gmail_parses_fields() {
        let cli = Cli::parse_from_iter([
            "ifttt-webhook",
            "gmail",
            "--to",
            "a@b.com",
            "--subject",
            "Hi",
        ]);

        match cli.command {
            Command::Gmail { to, subject, body } => {
                assert_eq!(to, "a@b.com");
                assert_eq!(subject.as_deref(), Some("Hi"));
                assert!(body.is_none());
            }
            other => panic!("Expected Gmail, got {other:?}"),
        }
    }

    #[test]
    fn notify_parses_fields() {
        let cli = Cli::parse_from_iter([
            "ifttt-webhook",
            "notify",
            "--title",
            "Build",
            "--url",
            "https://ci.example.com",
        ]);

        match cli.command {
            Command::Notify {
                title,
                message,
                url,
            } => {
                assert_eq!(title.as_deref(), Some("Build"));
                assert!(message.is_none());
                assert_eq!(url.as_deref(), Some("https://ci.example.com"));
            }
            other => panic!("Expected Notify, got {other:?}"),
        }
    }

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["ifttt-webhook", "init"]);

        assert!(cli.is_init());
        match cli.command {
            Command::Init { output } => assert_eq!(output, PathBuf::from("ifttt-webhook.toml")),
            other => panic!("Expected Init, got {other:?}"),
        }
    }

    #[test]
    fn subcommand_is_required() {
        let result = Cli::try_parse_from_iter(["ifttt-webhook", "--key", "K"]);
        assert!(result.is_err());
    }
}

mod global_options {
    use super::*;

    #[test]
    fn options_before_subcommand() {
        let cli = Cli::parse_from_iter([
            "ifttt-webhook",
            "--key",
            "K",
            "--url-template",
            "https://x/{event_name}/{key}",
            "-c",
            "cfg.toml",
            "-v",
            "trigger",
            "ev",
        ]);

        assert_eq!(cli.key.as_deref(), Some("K"));
        assert_eq!(
            cli.url_template.as_deref(),
            Some("https://x/{event_name}/{key}")
        );
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
        assert!(cli.verbose);
        assert!(!cli.is_init());
    }

    #[test]
    fn options_after_subcommand() {
        let cli = Cli::parse_from_iter(["ifttt-webhook", "notify", "--key", "K", "--verbose"]);

        assert_eq!(cli.key.as_deref(), Some("K"));
        assert!(cli.verbose);
    }

    #[test]
    fn defaults_when_omitted() {
        let cli = Cli::parse_from_iter(["ifttt-webhook", "trigger", "ev"]);

        assert!(cli.key.is_none());
        assert!(cli.url_template.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }
}
