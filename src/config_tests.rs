//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, layering, defaults, and validation.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use crate::config::*;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // ====== Default Value Tests ======

    #[test]
    fn test_defaults_match_original_invocation() {
        let config = AppConfig::default();
        assert_eq!(config.vectara.endpoint, "https://api.vectara.io/v1/query");
        assert_eq!(config.vectara.num_results, 10);
        assert_eq!(config.anthropic.model, "claude-3-sonnet-20240229");
        assert_eq!(config.anthropic.max_tokens, 1000);
        assert_eq!(config.anthropic.api_version, "2023-06-01");
        assert!(config.vectara.timeout_secs.is_none());
        assert!(config.anthropic.timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_address() {
        let mut config = AppConfig::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 9000;
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    // ====== Loading Tests ======

    #[test]
    fn test_load_from_missing_file_uses_defaults_and_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = AppConfig::load_from(
            &path,
            &env_of(&[
                ("VECTARA_CUSTOMER_ID", "1234567"),
                ("VECTARA_API_KEY", "zqt_key"),
                ("VECTARA_CORPUS_ID", "3"),
                ("ANTHROPIC_API_KEY", "sk-ant-test"),
            ]),
        )
        .unwrap();

        assert_eq!(config.vectara.customer_id, "1234567");
        assert_eq!(config.vectara.api_key, "zqt_key");
        assert_eq!(config.vectara.corpus_id, "3");
        assert_eq!(config.anthropic.api_key, "sk-ant-test");
        assert_eq!(config.server.port, 8501);
    }

    #[test]
    fn test_missing_credentials_are_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path().join("none.toml"), &env_of(&[])).unwrap();
        assert!(config.vectara.api_key.is_empty());
        assert!(config.anthropic.api_key.is_empty());
    }

    #[test]
    fn test_file_values_layer_over_defaults() {
        let file = write_config(
            r#"
[server]
port = 9100

[vectara]
customer_id = "42"
num_results = 5

[anthropic]
max_tokens = 512
timeout_secs = 30
"#,
        );

        let config = AppConfig::load_from(file.path(), &env_of(&[])).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.vectara.customer_id, "42");
        assert_eq!(config.vectara.num_results, 5);
        assert_eq!(config.anthropic.max_tokens, 512);
        assert_eq!(config.anthropic.timeout_secs, Some(30));
        assert_eq!(config.anthropic.model, "claude-3-sonnet-20240229");
    }

    #[test]
    fn test_credential_variables_override_file() {
        let file = write_config(
            r#"
[vectara]
api_key = "from-file"
"#,
        );

        let config =
            AppConfig::load_from(file.path(), &env_of(&[("VECTARA_API_KEY", "from-env")])).unwrap();
        assert_eq!(config.vectara.api_key, "from-env");
    }

    #[test]
    fn test_prefixed_environment_overrides_file() {
        let file = write_config(
            r#"
[server]
port = 9100

[vectara]
api_key = "from-file"
"#,
        );

        let config = AppConfig::load_from(
            file.path(),
            &env_of(&[
                ("RAGCHAT__SERVER__PORT", "9311"),
                ("RAGCHAT__ANTHROPIC__TIMEOUT_SECS", "7"),
                ("RAGCHAT__LOGGING__LEVEL", "debug"),
                ("RAGCHAT__VECTARA__API_KEY", "from-prefixed-env"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9311);
        assert_eq!(config.anthropic.timeout_secs, Some(7));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.vectara.api_key, "from-prefixed-env");
    }

    #[test]
    fn test_credential_variables_override_prefixed_environment() {
        let file = write_config(
            r#"
[vectara]
customer_id = "file-customer"
api_key = "file-key"
corpus_id = "file-corpus"

[anthropic]
api_key = "file-anthropic"
"#,
        );

        let config = AppConfig::load_from(
            file.path(),
            &env_of(&[
                ("RAGCHAT__VECTARA__CUSTOMER_ID", "env-customer"),
                ("RAGCHAT__VECTARA__API_KEY", "env-key"),
                ("RAGCHAT__VECTARA__CORPUS_ID", "env-corpus"),
                ("RAGCHAT__ANTHROPIC__API_KEY", "env-anthropic"),
                ("VECTARA_CUSTOMER_ID", "cred-customer"),
                ("VECTARA_API_KEY", "cred-key"),
                ("VECTARA_CORPUS_ID", "cred-corpus"),
                ("ANTHROPIC_API_KEY", "cred-anthropic"),
            ]),
        )
        .unwrap();

        assert_eq!(config.vectara.customer_id, "cred-customer");
        assert_eq!(config.vectara.api_key, "cred-key");
        assert_eq!(config.vectara.corpus_id, "cred-corpus");
        assert_eq!(config.anthropic.api_key, "cred-anthropic");
    }

    #[test]
    fn test_unprefixed_variables_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(
            dir.path().join("none.toml"),
            &env_of(&[("SERVER__PORT", "1"), ("PORT", "2")]),
        )
        .unwrap();
        assert_eq!(config.server.port, 8501);
    }

    // ====== Validation Tests ======

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let mut config = AppConfig::default();
        config.anthropic.endpoint = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(crate::RagChatError::ConfigError(_))
        ));
    }

    #[test]
    fn test_zero_num_results_is_rejected() {
        let mut config = AppConfig::default();
        config.vectara.num_results = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_redacted_hides_keys() {
        let mut config = AppConfig::default();
        config.vectara.api_key = "secret".to_string();
        let redacted = config.redacted();
        assert_eq!(redacted.vectara.api_key, "********");
        assert_eq!(redacted.anthropic.api_key, "<unset>");
        assert_eq!(config.vectara.api_key, "secret");
    }
}
