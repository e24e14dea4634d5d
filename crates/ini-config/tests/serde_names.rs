use ini_config::{build_model, from_str, DecodeOptions, IniRecord};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, IniRecord)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Proxy {
    upstream_host: String,
    #[serde(rename(serialize = "out", deserialize = "Timeout"))]
    timeout_secs: u32,
    #[serde(default, rename = "retry")]
    retries: Vec<u8>,
}

#[derive(Debug, Default, Deserialize, IniRecord)]
#[serde(rename_all = "kebab-case")]
#[ini(rename_all = "UPPERCASE")]
struct Overridden {
    max_size: u64,
}

#[test]
fn serde_renames_are_used_as_fallback_tags() {
    let (model, error) = build_model::<Proxy>(&DecodeOptions::default());
    assert!(error.is_none());
    assert_eq!(model.tags(), vec!["retry", "timeout", "upstream-host"]);

    let proxy: Proxy = from_str("upstream-host = a\ntimeout = 30\nretry = 1\nretry = 2").unwrap();
    assert_eq!(proxy.upstream_host, "a");
    assert_eq!(proxy.timeout_secs, 30);
    assert_eq!(proxy.retries, vec![1, 2]);
}

#[test]
fn ini_attributes_take_precedence_over_serde() {
    let (model, _) = build_model::<Overridden>(&DecodeOptions::default());
    // UPPERCASE is lowercased again for lookup, so the underscore survives
    assert_eq!(model.tags(), vec!["max_size"]);
}
