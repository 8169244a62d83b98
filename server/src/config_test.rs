use super::*;

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_string())
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.into(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BIND_HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
}

#[test]
fn rejects_out_of_range_port() {
    assert!(matches!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort(_))
    ));
}

#[test]
fn rejects_blank_host() {
    assert_eq!(ServerConfig::from_lookup(lookup(&[("BIND_HOST", "  ")])), Err(ConfigError::EmptyHost));
}
