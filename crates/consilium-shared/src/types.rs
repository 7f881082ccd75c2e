use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// The id immediately after this one.
            pub fn next(self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a feed case.
    CaseId
);

numeric_id!(
    /// Identifier of a comment, unique within its case.
    CommentId
);

numeric_id!(
    /// Identifier of a directory user (doctor).
    UserId
);

numeric_id!(
    /// Identifier of a chat thread.
    ThreadId
);

numeric_id!(
    /// Identifier of a chat message, monotonic within its thread.
    MessageId
);

/// Return the smallest id strictly greater than every id in `existing`,
/// starting at 1 for an empty set.
pub fn next_free_id<T, I>(existing: I) -> T
where
    T: From<u64>,
    I: IntoIterator<Item = u64>,
{
    let max = existing.into_iter().max().unwrap_or(0);
    T::from(max.saturating_add(1))
}
