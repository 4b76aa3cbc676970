// crates/engine/src/options.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// When to emit the aggregate total row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalPolicy {
    /// Emit the total only when more than one source was supplied.
    #[default]
    Auto,
    /// Always emit the total.
    Always,
    /// Emit only the total and suppress per-source rows.
    Only,
    /// Never emit the total.
    Never,
}

pub fn parse_total_policy(when: &str) -> Result<TotalPolicy, String> {
    match when.to_ascii_lowercase().as_str() {
        "auto" => Ok(TotalPolicy::Auto),
        "always" => Ok(TotalPolicy::Always),
        "only" => Ok(TotalPolicy::Only),
        "never" => Ok(TotalPolicy::Never),
        other => Err(format!("invalid argument '{other}' for '--total'")),
    }
}

impl FromStr for TotalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_total_policy(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!(parse_total_policy("auto"), Ok(TotalPolicy::Auto));
        assert_eq!(parse_total_policy("always"), Ok(TotalPolicy::Always));
        assert_eq!(parse_total_policy("only"), Ok(TotalPolicy::Only));
        assert_eq!(parse_total_policy("NEVER"), Ok(TotalPolicy::Never));
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("sometimes".parse::<TotalPolicy>().is_err());
    }
}
