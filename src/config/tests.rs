use super::*;

use std::{io::Write, path::PathBuf};

use crate::domain::format::FormatTag;

fn render_args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["seekeech", "render"];
    argv.extend_from_slice(extra);
    argv.push("notes.md");
    CliArgs::parse_from(argv)
}

#[test]
fn defaults_apply_without_any_source() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.logging.level, LevelFilter::WARN);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(settings.render.theme, DEFAULT_THEME);
    assert!(settings.render.highlight_fenced_code);
    assert_eq!(
        settings.preview.large_document_chars.get(),
        DEFAULT_LARGE_DOCUMENT_CHARS
    );
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.render.theme = Some("base16-ocean.light".to_string());
    raw.logging.level = Some("info".to_string());

    raw.apply_logging_overrides(&LoggingOverrides {
        log_level: Some("debug".to_string()),
        log_json: None,
    });
    raw.apply_render_overrides(&RenderOverrides {
        theme: Some("base16-ocean.dark".to_string()),
        highlight_fenced_code: Some(false),
    });
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert_eq!(settings.render.theme, "base16-ocean.dark");
    assert!(!settings.render.highlight_fenced_code);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    raw.apply_logging_overrides(&LoggingOverrides {
        log_level: None,
        log_json: Some(true),
    });
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn unknown_theme_is_rejected() {
    let mut raw = RawSettings::default();
    raw.render.theme = Some("neon".to_string());

    let err = Settings::from_raw(raw).expect_err("invalid theme");
    assert!(matches!(err, LoadError::Invalid { key: "render.theme", .. }));
    assert!(err.to_string().contains("base16-ocean.dark"));
}

#[test]
fn zero_large_document_threshold_is_rejected() {
    let mut raw = RawSettings::default();
    raw.apply_preview_overrides(&PreviewOverrides {
        large_document_chars: Some(0),
    });

    let err = Settings::from_raw(raw).expect_err("invalid threshold");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "preview.large_document_chars",
            ..
        }
    ));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("invalid level");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn config_file_is_layered_under_cli_flags() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tmp file");
    writeln!(
        file,
        "[render]\ntheme = \"base16-ocean.dark\"\nhighlight_fenced_code = false\n\n[logging]\nlevel = \"error\""
    )
    .expect("write config");

    let path = file.path().to_str().expect("utf-8 path").to_string();
    let args = render_args(&["--config-file", &path, "--highlight-fenced-code", "yes"]);
    let settings = load(&args).expect("settings load");

    assert_eq!(settings.render.theme, "base16-ocean.dark");
    assert!(settings.render.highlight_fenced_code);
    assert_eq!(settings.logging.level, LevelFilter::ERROR);
}

#[test]
fn missing_explicit_config_file_fails() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("absent.toml");
    let path = path.to_str().expect("utf-8 path").to_string();
    let args = render_args(&["--config-file", &path]);

    assert!(matches!(load(&args), Err(LoadError::Build(_))));
}

#[test]
fn parse_render_arguments() {
    let args = CliArgs::parse_from([
        "seekeech",
        "render",
        "--format",
        "json",
        "--standalone",
        "--output",
        "out.html",
        "-",
    ]);

    match args.command {
        Command::Render(render) => {
            assert_eq!(render.format, Some(FormatTag::Json));
            assert!(render.standalone);
            assert_eq!(render.output, Some(PathBuf::from("out.html")));
            assert_eq!(render.input, PathBuf::from("-"));
        }
        other => panic!("expected render command, got {other:?}"),
    }
}

#[test]
fn unknown_format_flag_is_a_usage_error() {
    let result = CliArgs::try_parse_from(["seekeech", "render", "--format", "yaml", "a.txt"]);
    assert!(result.is_err());
}

#[test]
fn global_logging_flags_follow_the_subcommand() {
    let args = CliArgs::parse_from(["seekeech", "detect", "a.md", "--log-level", "trace"]);
    assert_eq!(args.logging.log_level.as_deref(), Some("trace"));
    assert!(matches!(args.command, Command::Detect(DetectArgs { ref name }) if name == "a.md"));
}

#[test]
fn parse_stats_and_stylesheet_arguments() {
    let args = CliArgs::parse_from([
        "seekeech",
        "stats",
        "--large-document-chars",
        "50",
        "notes.txt",
    ]);
    match args.command {
        Command::Stats(stats) => assert_eq!(stats.preview.large_document_chars, Some(50)),
        other => panic!("expected stats command, got {other:?}"),
    }

    let args = CliArgs::parse_from(["seekeech", "stylesheet", "--list"]);
    assert!(matches!(
        args.command,
        Command::Stylesheet(StylesheetArgs { list: true, .. })
    ));
}
