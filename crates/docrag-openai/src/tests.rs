//! Snapshot tests for client configuration

#[cfg(test)]
mod snapshot_tests {
    use crate::{ChatConfig, EmbeddingClient, EmbeddingConfig};
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_embedding_config_snapshot() {
        let config = EmbeddingConfig::new("test_api_key_redacted");

        assert_yaml_snapshot!(config, @r###"
        endpoint: "https://api.euron.one/api/v1/euri/embeddings"
        model: text-embedding-3-small
        dimension: 1536
        timeout:
          secs: 10
          nanos: 0
        "###);
    }

    #[test]
    fn test_chat_config_snapshot() {
        let config = ChatConfig::new("test_api_key_redacted");

        assert_yaml_snapshot!(config, @r###"
        endpoint: "https://api.euron.one/api/v1/euri/chat/completions"
        model: gpt-4.1-nano
        timeout:
          secs: 10
          nanos: 0
        "###);
    }

    #[test]
    fn test_model_constants() {
        assert_yaml_snapshot!(EmbeddingClient::TEXT_EMBEDDING_3_SMALL, @"text-embedding-3-small");
        assert_yaml_snapshot!(EmbeddingClient::TEXT_EMBEDDING_3_LARGE, @"text-embedding-3-large");
    }
}
