//! Dropbox info.json parsing (serde_json).
//!
//! The client writes one object per linked account:
//! {"personal": {"path": "/home/u/Dropbox", ...}, "business": {"path": ...}}
//!
//! The personal account wins; business is the fallback. Unknown fields are
//! ignored since the client adds new ones between releases.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct InfoJson {
    personal: Option<Account>,
    business: Option<Account>,
}

#[derive(Debug, Deserialize)]
struct Account {
    path: Option<String>,
}

/// Why an info.json did not yield a sync root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfoError {
    #[error("invalid json: {0}")]
    Malformed(String),

    #[error("neither a personal nor a business account is configured")]
    NoAccount,

    #[error("{0} account has no path")]
    MissingPath(&'static str),
}

/// Extract the sync root from info.json content.
pub fn parse_info(content: &str) -> Result<PathBuf, InfoError> {
    let parsed: InfoJson =
        serde_json::from_str(content).map_err(|e| InfoError::Malformed(e.to_string()))?;

    let (name, account) = match (parsed.personal, parsed.business) {
        (Some(p), _) => ("personal", p),
        (None, Some(b)) => ("business", b),
        (None, None) => return Err(InfoError::NoAccount),
    };

    account
        .path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .ok_or(InfoError::MissingPath(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_wins_over_business() {
        let json = r#"{"personal": {"path": "/home/u/Dropbox"}, "business": {"path": "/home/u/Dropbox (Work)"}}"#;
        assert_eq!(parse_info(json).unwrap(), PathBuf::from("/home/u/Dropbox"));
    }

    #[test]
    fn business_is_fallback() {
        let json = r#"{"business": {"path": "/home/u/Dropbox (Work)", "host": 12, "is_team": true}}"#;
        assert_eq!(parse_info(json).unwrap(), PathBuf::from("/home/u/Dropbox (Work)"));
    }

    #[test]
    fn path_is_trimmed() {
        let json = r#"{"personal": {"path": "  /srv/sync \n"}}"#;
        assert_eq!(parse_info(json).unwrap(), PathBuf::from("/srv/sync"));
    }

    #[test]
    fn no_account_is_reported() {
        assert_eq!(parse_info(r#"{"other": {}}"#).unwrap_err(), InfoError::NoAccount);
    }

    #[test]
    fn personal_without_path_does_not_fall_back() {
        let json = r#"{"personal": {"host": 1}, "business": {"path": "/b"}}"#;
        assert_eq!(parse_info(json).unwrap_err(), InfoError::MissingPath("personal"));
    }

    #[test]
    fn blank_path_is_rejected() {
        let json = r#"{"business": {"path": "   "}}"#;
        assert_eq!(parse_info(json).unwrap_err(), InfoError::MissingPath("business"));
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(parse_info("not json"), Err(InfoError::Malformed(_))));
        assert!(matches!(
            parse_info(r#"{"personal": {"path": 42}}"#),
            Err(InfoError::Malformed(_))
        ));
    }
}
