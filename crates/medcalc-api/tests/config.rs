use std::collections::HashMap;

use medcalc_api::config::{LogFormat, ServerConfig};

fn config(vars: &[(&str, &str)]) -> eyre::Result<ServerConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults() {
    let config = config(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8000");
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(!config.lambda);
}

#[test]
fn overrides() {
    let config = config(&[
        ("MEDCALC_BIND_ADDR", "127.0.0.1:9090"),
        ("MEDCALC_LOG_FORMAT", "pretty"),
        ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 9090);
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert!(config.lambda);
}

#[test]
fn rejects_bad_values() {
    assert!(config(&[("MEDCALC_BIND_ADDR", "localhost")]).is_err());
    assert!(config(&[("MEDCALC_LOG_FORMAT", "xml")]).is_err());
}
