//! Endpoint configuration
//!
//! Every service endpoint can be overridden through an environment variable.
//! A missing, empty or malformed value falls back to the built-in default.

use crate::errors::{ScriptError, ScriptResult};
use loan_platform_common::constants::*;
use reqwest::Url;
use std::env;

/// **Base URLs of the three remote services**
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    pub bank_accounts: Url,
    pub loan_approval: Url,
    pub approvals: Url,
}

impl Endpoints {
    /// Resolves the endpoints from the process environment.
    pub fn from_env() -> ScriptResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the endpoints through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> ScriptResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bank_accounts: get_base_url(
                BANK_ACCOUNTS_URL_VAR,
                lookup(BANK_ACCOUNTS_URL_VAR),
                DEFAULT_BANK_ACCOUNTS_URL,
            )?,
            loan_approval: get_base_url(
                LOAN_APPROVAL_URL_VAR,
                lookup(LOAN_APPROVAL_URL_VAR),
                DEFAULT_LOAN_APPROVAL_URL,
            )?,
            approvals: get_base_url(
                APPROVALS_URL_VAR,
                lookup(APPROVALS_URL_VAR),
                DEFAULT_APPROVALS_URL,
            )?,
        })
    }
}

/// **Get base URL**
///
/// Tries to create a URL from the provided value.
///
/// - If the value is `None` or empty, returns `default`.
/// - If it's a valid URL string, returns it as URL.
/// - If it's a malformed URL string, logs a warning and returns `default`.
///
/// # Errors
/// - `default` itself can't be parsed, `ScriptError::InvalidUrl`
fn get_base_url(var: &str, value: Option<String>, default: &str) -> ScriptResult<Url> {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            log::debug!("{} not set; using default: {}", var, default);
            return parse_url(default);
        }
    };

    match Url::parse(value.trim()) {
        Ok(url) => Ok(url),
        Err(err) => {
            log::warn!(
                "{}=\"{}\" could not be parsed ({}); using default: {}",
                var,
                value,
                err,
                default
            );
            parse_url(default)
        }
    }
}

fn parse_url(url: &str) -> ScriptResult<Url> {
    Url::parse(url).map_err(|err| ScriptError::InvalidUrl {
        url: url.to_string(),
        reason: err.to_string(),
    })
}
