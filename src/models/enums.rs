use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string literal doubles as the serde wire representation, so the
/// same spelling flows through the database and the verdict JSON.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(MessageRole {
    User => "user",
    Assistant => "assistant",
});

str_enum!(DecisionType {
    Approved => "APPROVED",
    Rejected => "REJECTED",
    NeedsClarification => "NEEDS_CLARIFICATION",
});

str_enum!(FlawCategory {
    NoExternalCause => "NO_EXTERNAL_CAUSE",
    NoWorkConnection => "NO_WORK_CONNECTION",
    Intoxication => "INTOXICATION",
    LackOfEvidence => "LACK_OF_EVIDENCE",
    LackOfSuddenness => "LACK_OF_SUDDENNESS",
    Other => "OTHER",
});

str_enum!(FlawSeverity {
    Critical => "CRITICAL",
    Warning => "WARNING",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decision_type_roundtrip() {
        for d in [
            DecisionType::Approved,
            DecisionType::Rejected,
            DecisionType::NeedsClarification,
        ] {
            let parsed = DecisionType::from_str(d.as_str()).unwrap();
            assert_eq!(parsed, d);
        }
    }

    #[test]
    fn decision_type_serde_uses_wire_spelling() {
        let json = serde_json::to_string(&DecisionType::NeedsClarification).unwrap();
        assert_eq!(json, "\"NEEDS_CLARIFICATION\"");
        let parsed: DecisionType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DecisionType::NeedsClarification);
    }

    #[test]
    fn message_role_is_lowercase() {
        assert_eq!(MessageRole::User.as_str(), "user");
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn invalid_enum_value_rejected() {
        assert!(FlawSeverity::from_str("FATAL").is_err());
        assert!(FlawCategory::from_str("").is_err());
    }

    #[test]
    fn flaw_category_covers_schema() {
        for s in [
            "NO_EXTERNAL_CAUSE",
            "NO_WORK_CONNECTION",
            "INTOXICATION",
            "LACK_OF_EVIDENCE",
            "LACK_OF_SUDDENNESS",
            "OTHER",
        ] {
            assert!(FlawCategory::from_str(s).is_ok(), "missing category {s}");
        }
    }
}
