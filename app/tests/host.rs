use std::io::Cursor;
use std::rc::Rc;

use bloom::host::Host;
use bloom::{BloomApp, HostConfig};
use bloom_data::StaticContent;
use bloom_navigation::NavController;

fn run(config: HostConfig, script: &str) -> (String, NavController) {
    let app = BloomApp::new(Rc::new(StaticContent::new()))
        .unwrap()
        .with_settings(config.settings());
    let mut host = Host::new(app, Vec::new(), config);
    host.run(Cursor::new(script)).unwrap();
    let nav = host.app().navigator();
    (String::from_utf8(host.into_output()).unwrap(), nav)
}

#[test]
fn script_walks_from_welcome_to_home() {
    let (out, nav) = run(
        HostConfig::default(),
        "tap Log in\n\
         type \"Email address\" ana@example.com\n\
         type \"Password (8+ characters)\" secret99\n\
         tap Log in\n\
         stack\n\
         dump\n",
    );
    assert_eq!(nav.current_route(), "main/home");
    assert!(out.contains("welcome > logIn > main/home"));
    assert!(out.contains("--- frame 1"));
    assert!(out.contains("\"Browse themes\""));
    assert!(out.contains("\"Home\" (selected)"));
}

#[test]
fn errors_are_reported_and_the_loop_continues() {
    let (out, nav) = run(
        HostConfig::default(),
        "go nowhere\n\
         tap Nothing here\n\
         dance\n\
         # comment\n\
         go logIn\n",
    );
    assert!(out.contains("error: no destination is declared for route `nowhere`"));
    assert!(out.contains("error: no node matches `Nothing here`"));
    assert!(out.contains("error: unknown command `dance`"));
    assert_eq!(nav.current_route(), "logIn");
}

#[test]
fn back_stops_at_the_start() {
    let (out, nav) = run(HostConfig::default(), "go logIn\nback\nback\n");
    assert_eq!(nav.current_route(), "welcome");
    assert_eq!(out.matches("already at the start").count(), 1);
}

#[test]
fn quit_stops_reading() {
    let (_, nav) = run(HostConfig::default(), "go logIn\nquit\ngo main\n");
    assert_eq!(nav.current_route(), "logIn");
}

#[test]
fn consent_links_can_be_tapped() {
    let (out, _) = run(HostConfig::default(), "go logIn\ntap Privacy Policy\n");
    assert!(!out.contains("error"), "{out}");
}

#[test]
fn start_route_is_pushed_over_welcome() {
    let config = HostConfig {
        start_route: "main".into(),
        ..HostConfig::default()
    };
    let (_, nav) = run(config, "");
    assert_eq!(nav.back_stack(), ["welcome", "main/home"]);
}

#[test]
fn back_stack_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = HostConfig {
        saved_stack: Some(dir.path().join("state").join("stack.json")),
        ..HostConfig::default()
    };

    run(config.clone(), "go logIn\ngo main\ngo main/cart\n");
    assert!(dir.path().join("state/stack.json").exists());

    let (out, nav) = run(config, "stack\n");
    assert!(out.contains("welcome > logIn > main/home > main/cart"));
    assert_eq!(nav.current_route(), "main/cart");
}

#[test]
fn corrupt_saved_stack_falls_back_to_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stack.json");
    std::fs::write(&path, "{ not json").unwrap();
    let config = HostConfig {
        saved_stack: Some(path),
        start_route: "logIn".into(),
        ..HostConfig::default()
    };
    let (_, nav) = run(config, "");
    assert_eq!(nav.back_stack(), ["welcome", "logIn"]);
}

#[test]
fn config_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bloom").join("config.toml");
    let config = HostConfig {
        dark_theme: true,
        start_route: "logIn".into(),
        density: 2.0,
        text_scale: 1.25,
        saved_stack: Some(dir.path().join("stack.json")),
    };
    config.save(&path).unwrap();
    assert_eq!(HostConfig::load_from(&path).unwrap(), config);
    assert_eq!(HostConfig::load(Some(&path)).unwrap(), config);
}

#[test]
fn missing_config_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = HostConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, HostConfig::default());
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "dark_theme = \"very\"").unwrap();
    let err = HostConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, bloom::ConfigError::Parse { .. }), "{err}");
}

#[test]
fn dump_uses_the_configured_density() {
    let config = HostConfig {
        density: 2.0,
        ..HostConfig::default()
    };
    let (out, _) = run(config, "dump\n");
    assert!(out.contains("\"Beautiful home garden solutions\" 32px"), "{out}");
}
