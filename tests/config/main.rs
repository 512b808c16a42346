#[path = "../support.rs"]
mod support;

use std::convert::TryFrom;
use tower_unless::{
    config::{OneOrMany, PathEntry},
    Rule, Rules, UnlessConfig,
};

#[test]
fn scalars_and_lists_from_toml() {
    let config: UnlessConfig = toml::from_str(
        r#"
        path = ["/login", { pattern = "^/public/" }]
        ext = ".css"
        method = ["GET", "HEAD"]
        "#,
    )
    .unwrap();

    assert_eq!(
        config.path,
        OneOrMany::Many(vec![
            PathEntry::Literal("/login".into()),
            PathEntry::Pattern {
                pattern: "^/public/".into()
            },
        ])
    );
    assert_eq!(config.ext, OneOrMany::One(".css".into()));
    assert!(!config.use_original_url);

    let rules = config.into_rules().unwrap();
    assert_eq!(rules.matching(&support::request("POST", "/login")), Some(Rule::Path));
    assert_eq!(
        rules.matching(&support::request("POST", "/public/logo.png")),
        Some(Rule::Path)
    );
    assert_eq!(
        rules.matching(&support::request("POST", "/app.css")),
        Some(Rule::Extension)
    );
    assert_eq!(rules.matching(&support::request("HEAD", "/x")), Some(Rule::Method));
    assert_eq!(rules.matching(&support::request("POST", "/x")), None);
}

#[test]
fn missing_fields_are_empty() {
    let config: UnlessConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, UnlessConfig::default());

    let rules = config.into_rules().unwrap();
    assert_eq!(rules.matching(&support::get("/")), None);
}

#[test]
fn single_pattern_and_original_url_from_json() {
    let config: UnlessConfig = serde_json::from_str(
        r#"{ "path": { "pattern": "\\.map$" }, "use_original_url": true }"#,
    )
    .unwrap();

    let rules = Rules::try_from(config).unwrap();
    assert_eq!(
        rules.matching(&support::rewritten("/app.js.map", "/app.js")),
        Some(Rule::Path)
    );
    assert_eq!(rules.matching(&support::get("/app.js.map")), None);
}

#[test]
fn invalid_pattern_is_reported() {
    let config: UnlessConfig =
        serde_json::from_str(r#"{ "path": ["/ok", { "pattern": "[unclosed" }] }"#).unwrap();

    let err = config.into_rules().unwrap_err();
    assert_eq!(err.pattern(), "[unclosed");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn custom_predicate_can_be_added() {
    let config: UnlessConfig = serde_json::from_str(r#"{ "method": "OPTIONS" }"#).unwrap();

    let rules = config
        .into_rules()
        .unwrap()
        .custom(|req: &http::Request<()>| req.headers().contains_key("upgrade"));

    let mut req = support::get("/ws");
    req.headers_mut().insert("upgrade", "websocket".parse().unwrap());
    assert_eq!(rules.matching(&req), Some(Rule::Custom));
    assert_eq!(
        rules.matching(&support::request("OPTIONS", "/")),
        Some(Rule::Method)
    );
}
