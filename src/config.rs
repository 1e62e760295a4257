use std::env;
use std::path::PathBuf;

use crate::error::FinderError;

const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
const DEFAULT_MODEL_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4.1-mini";

const DEFAULT_INPUT_PATH: &str = "companies.txt";
const DEFAULT_OUTPUT_PATH: &str = "founders.json";

/// Runtime configuration. Credentials and endpoints come from the
/// environment; input/output paths from the first two CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub search_api_key: String,
    pub search_engine_id: String,
    pub search_endpoint: String,
    pub model_api_key: String,
    pub model_endpoint: String,
    pub model: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, FinderError> {
        let mut args = env::args().skip(1);
        let input_path = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));
        let output_path = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        Ok(Config {
            search_api_key: require("GOOGLE_API_KEY")?,
            search_engine_id: require("GOOGLE_SEARCH_ENGINE_ID")?,
            search_endpoint: var_or("GOOGLE_SEARCH_URL", DEFAULT_SEARCH_ENDPOINT),
            model_api_key: require("OPENAI_API_KEY")?,
            model_endpoint: var_or("OPENAI_API_URL", DEFAULT_MODEL_ENDPOINT),
            model: var_or("OPENAI_MODEL", DEFAULT_MODEL),
            input_path,
            output_path,
        })
    }
}

fn require(name: &'static str) -> Result<String, FinderError> {
    env::var(name).map_err(|_| FinderError::MissingEnv(name))
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
