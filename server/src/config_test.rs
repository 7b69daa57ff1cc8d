use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert!(cfg.assets_dir.ends_with("../assets"));
}

#[test]
fn explicit_values_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", " 8080 "),
        ("BIND_ADDR", "127.0.0.1"),
        ("ASSETS_DIR", "/srv/site/assets"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site/assets"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("ASSETS_DIR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("../assets"));
}

#[test]
fn invalid_port_is_a_config_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    match err {
        ServerError::Config { var, value, .. } => {
            assert_eq!(var, "PORT");
            assert_eq!(value, "eighty");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn port_out_of_range_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost:80")])).unwrap_err();
    assert!(err.to_string().contains("BIND_ADDR"));
}
