use super::*;

#[test]
fn defaults_point_at_public_placeholder_service() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.addr.to_string(), "127.0.0.1:3000");
    assert_eq!(
        settings.remote.base_url.as_str(),
        "https://jsonplaceholder.typicode.com/"
    );
    assert_eq!(settings.remote.timeout, Duration::from_secs(10));
    assert_eq!(settings.board.heading, "Blog App");
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());
    raw.remote.base_url = Some("http://from-file.invalid".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        log_level: Some("debug".to_string()),
        remote_base_url: Some("http://127.0.0.1:9000/api".to_string()),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert_eq!(settings.remote.base_url.as_str(), "http://127.0.0.1:9000/api");
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);
    let err = Settings::from_raw(raw).expect_err("port zero");
    assert!(matches!(err, LoadError::Invalid { key: "server.port", .. }));
}

#[test]
fn zero_timeout_is_rejected() {
    let mut raw = RawSettings::default();
    raw.remote.timeout_seconds = Some(0);
    let err = Settings::from_raw(raw).expect_err("timeout zero");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "remote.timeout_seconds",
            ..
        }
    ));
}

#[test]
fn non_http_remote_is_rejected() {
    let mut raw = RawSettings::default();
    raw.remote.base_url = Some("ftp://example.com".to_string());
    let err = Settings::from_raw(raw).expect_err("ftp scheme");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "remote.base_url",
            ..
        }
    ));
}

#[test]
fn blank_heading_is_rejected() {
    let mut raw = RawSettings::default();
    raw.board.heading = Some("   ".to_string());
    assert!(Settings::from_raw(raw).is_err());
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());
    let err = Settings::from_raw(raw).expect_err("bad level");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["postboard"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "postboard",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--remote-base-url",
        "http://localhost:8080",
        "--board-heading",
        "Mi Blog",
        "--log-json",
        "true",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(
                serve.overrides.remote_base_url.as_deref(),
                Some("http://localhost:8080")
            );
            assert_eq!(serve.overrides.board_heading.as_deref(), Some("Mi Blog"));
            assert_eq!(serve.overrides.log_json, Some(true));
        }
    }
}
