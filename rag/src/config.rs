use std::env;
use std::time::Duration;

use crate::build_prompt::SYSTEM_PROMPT;
use crate::error::RagError;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub api_version: String,
    pub chat_deployment: String,
    pub embedding_deployment: String,
    pub source_dir: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub max_embed_chars: usize,
    pub top_k: usize,
    pub temperature: f32,
    pub http_timeout: Duration,
    pub system_prompt: String,
}

impl Config {
    pub fn from_env() -> Result<Self, RagError> {
        // Load .env if present so credentials work without manual `source .env`.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RagError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, RagError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(RagError::MissingEnv(key))
        };

        let cfg = Self {
            api_key: required("AZURE_OPENAI_KEY")?,
            endpoint: required("AZURE_OPENAI_ENDPOINT")?
                .trim_end_matches('/')
                .to_string(),
            api_version: required("AZURE_OPENAI_API_VERSION")?,
            chat_deployment: required("AZURE_OPENAI_DEPLOYMENT")?,
            embedding_deployment: required("AZURE_OPENAI_EMBEDDING_DEPLOYMENT")?,
            source_dir: lookup("RAG_SOURCE_DIR").unwrap_or_else(|| "documents".to_string()),
            chunk_size: parsed(&lookup, "RAG_CHUNK_SIZE", 600)?,
            chunk_overlap: parsed(&lookup, "RAG_CHUNK_OVERLAP", 100)?,
            max_embed_chars: parsed(&lookup, "RAG_MAX_EMBED_CHARS", 2000)?,
            top_k: parsed(&lookup, "RAG_TOP_K", 3)?,
            temperature: parsed(&lookup, "RAG_TEMPERATURE", 0.2)?,
            http_timeout: Duration::from_secs(parsed(&lookup, "RAG_HTTP_TIMEOUT_SECS", 120)?),
            system_prompt: lookup("RAG_SYSTEM_PROMPT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| SYSTEM_PROMPT.to_string()),
        };

        if cfg.chunk_size == 0 || cfg.chunk_overlap >= cfg.chunk_size {
            return Err(RagError::InvalidChunking {
                size: cfg.chunk_size,
                overlap: cfg.chunk_overlap,
            });
        }
        if cfg.top_k == 0 {
            return Err(RagError::InvalidTopK);
        }
        Ok(cfg)
    }
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, RagError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| RagError::InvalidEnv { key, value: raw }),
    }
}
