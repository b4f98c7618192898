use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator token attached to unary and binary nodes by the parser.
///
/// The set is wider than what the binder gives meaning to: the parser may
/// hand over tokens such as `~` or `++`, and the binder reports those as an
/// internal invariant violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum OperatorToken {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Asterisk,
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "^")]
    Caret,
    #[serde(rename = "&")]
    Ampersand,
    #[serde(rename = "|")]
    Bar,
    #[serde(rename = "<<")]
    LessThanLessThan,
    #[serde(rename = ">>")]
    GreaterThanGreaterThan,
    #[serde(rename = "==")]
    EqualsEquals,
    #[serde(rename = "!=")]
    ExclamationEquals,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanEquals,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanEquals,
    #[serde(rename = "&&")]
    AmpersandAmpersand,
    #[serde(rename = "||")]
    BarBar,
    #[serde(rename = "!")]
    Exclamation,
    #[serde(rename = "~")]
    Tilde,
    #[serde(rename = "++")]
    PlusPlus,
    #[serde(rename = "--")]
    MinusMinus,
}

impl OperatorToken {
    /// Source text of the token.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Bar => "|",
            Self::LessThanLessThan => "<<",
            Self::GreaterThanGreaterThan => ">>",
            Self::EqualsEquals => "==",
            Self::ExclamationEquals => "!=",
            Self::LessThan => "<",
            Self::LessThanEquals => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEquals => ">=",
            Self::AmpersandAmpersand => "&&",
            Self::BarBar => "||",
            Self::Exclamation => "!",
            Self::Tilde => "~",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
        }
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
