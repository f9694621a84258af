//! Client for the Piston code execution API.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const PISTON_URL: &str = "https://emkc.org/api/v2/piston";

/// A fenced code block with a language tag: ```lang\n...```
static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```(\w+)\s(.+?)\s*```\s*$").expect("Valid code block regex")
});

/// Source submitted through the `run` command.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub language: String,
    pub source: String,
}

/// Splits a fenced code block into language and source.
///
/// Returns `None` when the input is not a single fenced block with a language tag.
pub fn parse_code_block(input: &str) -> Option<CodeBlock> {
    let captures = CODE_BLOCK.captures(input)?;

    Some(CodeBlock {
        language: captures[1].to_lowercase(),
        source: captures[2].to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct Runtime {
    language: String,
    #[serde(default)]
    aliases: Vec<String>,
}

/// Flattens runtimes into every accepted language name, aliases included.
fn language_names(runtimes: Vec<Runtime>) -> Vec<String> {
    runtimes
        .into_iter()
        .flat_map(|runtime| std::iter::once(runtime.language).chain(runtime.aliases))
        .collect()
}

#[derive(Debug, Serialize)]
struct ExecuteRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: [ExecuteFile<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ExecuteFile<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct Execution {
    pub language: String,
    pub version: String,
    pub run: RunOutput,
}

#[derive(Debug, Deserialize)]
pub struct RunOutput {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
}

pub struct PistonService<'a> {
    http_client: &'a reqwest::Client,
}

impl<'a> PistonService<'a> {
    pub fn new(http_client: &'a reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Fetches every language name Piston can run.
    pub async fn languages(&self) -> Result<Vec<String>, AppError> {
        let runtimes = self
            .http_client
            .get(format!("{}/runtimes", PISTON_URL))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Runtime>>()
            .await?;

        Ok(language_names(runtimes))
    }

    /// Runs `block` with the latest available version of its language.
    pub async fn execute(&self, block: &CodeBlock) -> Result<Execution, AppError> {
        let request = ExecuteRequest {
            language: &block.language,
            version: "*",
            files: [ExecuteFile {
                content: &block.source,
            }],
        };

        let execution = self
            .http_client
            .post(format!("{}/execute", PISTON_URL))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Execution>()
            .await?;

        Ok(execution)
    }
}
