//! Upload destination.

use std::fmt;
use std::str::FromStr;

use crate::core::error::TelegoyError;

/// Where albums are sent: a numeric chat id or a public `@username`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTarget {
    Id(i64),
    Username(String),
}

impl FromStr for ChatTarget {
    type Err = TelegoyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return Ok(ChatTarget::Id(id));
        }
        match s.strip_prefix('@') {
            Some(name) if !name.is_empty() => Ok(ChatTarget::Username(s.to_string())),
            _ => Err(TelegoyError::Config(format!(
                "chat id must be a number or an @username, got {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatTarget::Id(id) => write!(f, "{}", id),
            ChatTarget::Username(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_and_supergroup_ids() {
        assert_eq!("12345".parse::<ChatTarget>().unwrap(), ChatTarget::Id(12345));
        assert_eq!(
            " -1001234567890 ".parse::<ChatTarget>().unwrap(),
            ChatTarget::Id(-1001234567890)
        );
    }

    #[test]
    fn test_parse_username_keeps_at_sign() {
        let target: ChatTarget = "@my_channel".parse().unwrap();
        assert_eq!(target, ChatTarget::Username("@my_channel".to_string()));
        assert_eq!(target.to_string(), "@my_channel");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ChatTarget>().is_err());
        assert!("@".parse::<ChatTarget>().is_err());
        assert!("my_channel".parse::<ChatTarget>().is_err());
    }
}
