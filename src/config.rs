use crate::errors::ShellResult;
use regex::Regex;

/// Default prompt printed before each line is read
pub const DEFAULT_PROMPT: &str = "$ ";

/// Optional stream number (`1` or `2`), `>`, optional second `>` for append
pub const REDIRECT_OPERATOR_PATTERN: &str = r"^(1|2)?>(>)?$";

/// Immutable shell configuration, built once at start-up
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub prompt: String,
    pub redirect_operator: Regex,
}

impl ShellConfig {
    pub fn new(prompt: impl Into<String>) -> ShellResult<Self> {
        Ok(Self {
            prompt: prompt.into(),
            redirect_operator: Regex::new(REDIRECT_OPERATOR_PATTERN)?,
        })
    }
}
