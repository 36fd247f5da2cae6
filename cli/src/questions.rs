//! Gathering questions for the `generate` subcommand

use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// One question per non-empty line
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Questions from the command line, then the file, then stdin
pub async fn collect(args: Vec<String>, file: Option<&Path>, stdin: bool) -> Result<Vec<String>> {
    let mut questions = args;

    if let Some(path) = file {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read questions from {}", path.display()))?;
        questions.extend(parse_lines(&text));
    }

    if stdin {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read questions from stdin")?;
        questions.extend(parse_lines(&text));
    }

    Ok(questions)
}
