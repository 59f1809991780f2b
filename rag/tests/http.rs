use std::collections::HashMap;
use std::error::Error;
use std::net::TcpListener;

use rag::{ApiClient, Config, Embedder, RagError};

fn config_for(endpoint: String, api_key: &str) -> Config {
    let mut vars = HashMap::new();
    vars.insert("AZURE_OPENAI_KEY", api_key.to_string());
    vars.insert("AZURE_OPENAI_ENDPOINT", endpoint);
    vars.insert("AZURE_OPENAI_API_VERSION", "2024-02-01".to_string());
    vars.insert("AZURE_OPENAI_DEPLOYMENT", "chat".to_string());
    vars.insert("AZURE_OPENAI_EMBEDDING_DEPLOYMENT", "embed".to_string());
    vars.insert("RAG_HTTP_TIMEOUT_SECS", "5".to_string());
    Config::from_lookup(|key| vars.get(key).cloned()).expect("test config should build")
}

#[test]
fn unreachable_endpoint_keeps_the_transport_error_as_source() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind free port");
        listener.local_addr().expect("local addr").port()
    };
    let cfg = config_for(format!("http://127.0.0.1:{}", port), "secret");
    let client = ApiClient::new(&cfg).expect("client should build");

    let err = client.embed("hello").expect_err("nothing is listening");
    match &err {
        RagError::Transport { url, .. } => {
            assert!(url.contains("/openai/deployments/embed/embeddings?api-version=2024-02-01"));
        }
        other => panic!("expected transport error, got {:?}", other),
    }
    let source = err.source().expect("reqwest error should be kept");
    assert!(source.downcast_ref::<reqwest::Error>().is_some());
}

#[test]
fn api_key_with_control_characters_is_rejected() {
    let cfg = config_for("http://127.0.0.1:9".to_string(), "bad\nkey");
    let err = ApiClient::new(&cfg).expect_err("newline is not a valid header value");
    assert!(matches!(err, RagError::InvalidApiKey));
}
