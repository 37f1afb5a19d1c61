//! Typed identifiers for all API resources.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! id {
    ($name:ident) => {
        #[derive(
            Copy,
            Clone,
            Debug,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl Display for $name {
            #[inline]
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl AsRef<u64> for $name {
            #[inline]
            fn as_ref(&self) -> &u64 {
                &self.0
            }
        }

        impl PartialEq<u64> for $name {
            #[inline]
            fn eq(&self, other: &u64) -> bool {
                self.0 == *other
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = <u64 as FromStr>::Err;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse::<u64>()?))
            }
        }
    };
}

id!(TournamentId);
id!(StageId);
id!(StageItemId);
id!(TeamId);
id!(RoundId);

#[cfg(test)]
mod tests {
    use super::StageItemId;

    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_id_transparent() {
        assert_tokens(&StageItemId(3), &[Token::U64(3)]);
    }

    #[test]
    fn test_id_from_str() {
        assert_eq!("42".parse::<StageItemId>().unwrap(), StageItemId(42));
        assert!("winner".parse::<StageItemId>().is_err());
    }
}
