use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier for a generated quiz.
///
/// Identifiers are the correlation keys for follow-up calls (submit, complete)
/// against the session they belong to; the backend rejects stale ones.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizId(u64);

/// Server-assigned identifier for a quest line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestLineId(u64);

/// Identifier of a single quest within its quest line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(u64);

/// Server-assigned identifier for a coding challenge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChallengeId(u64);

macro_rules! id_impls {
    ($name:ident) => {
        impl $name {
            #[must_use]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            #[must_use]
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_impls!(QuizId);
id_impls!(QuestLineId);
id_impls!(QuestId);
id_impls!(ChallengeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_number() {
        assert_eq!(QuizId::new(42).to_string(), "42");
        assert_eq!(QuestLineId::new(7).to_string(), "7");
    }

    #[test]
    fn debug_names_the_type() {
        assert_eq!(format!("{:?}", QuestId::new(3)), "QuestId(3)");
    }

    #[test]
    fn value_roundtrip() {
        assert_eq!(ChallengeId::new(1001).value(), 1001);
    }
}
