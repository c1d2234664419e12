//! Token sets and synchronization points.
//!
//! Uses bitset-based O(1) membership testing: every [`TokenTag`] index is
//! below 128, so a set of tags is one `u128`.

use psdc_ir::TokenTag;

const _: () = assert!(
    TokenTag::COUNT <= 128,
    "TokenSet uses u128 bitset; all tag indices must be < 128"
);

/// A set of token tags.
///
/// # Example
/// ```ignore
/// const STMT_START: TokenSet = TokenSet::new()
///     .with(TokenTag::KwIf)
///     .with(TokenTag::KwWhile);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single tag.
    #[inline]
    pub const fn single(tag: TokenTag) -> Self {
        Self(1u128 << tag.index())
    }

    /// Add a tag to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u128 << tag.index()))
    }

    /// Build a set from a list of tags.
    pub const fn from_tags(tags: &[TokenTag]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < tags.len() {
            set = set.with(tags[i]);
            i += 1;
        }
        set
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Add a tag (non-const mutation).
    #[inline]
    pub fn insert(&mut self, tag: TokenTag) {
        self.0 |= 1u128 << tag.index();
    }

    #[inline]
    pub const fn contains(&self, tag: TokenTag) -> bool {
        (self.0 & (1u128 << tag.index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of tags in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the tag indices in this set, lowest first.
    #[inline]
    pub fn iter_indices(&self) -> TokenSetIterator {
        TokenSetIterator { bits: self.0 }
    }

    /// Iterate over the tags in this set, in tag order.
    pub fn iter(&self) -> impl Iterator<Item = TokenTag> {
        self.iter_indices().filter_map(TokenTag::from_index)
    }

    /// Format this token set as a human-readable list for error messages.
    ///
    /// Returns a string like "`,`, `)`, or `}`" for multiple tokens,
    /// or "`(`" for a single token, or "nothing" for empty set.
    pub fn format_expected(&self) -> String {
        let names: Vec<&'static str> = self.iter().map(TokenTag::name).collect();

        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => format!("`{single}`"),
            [first, second] => format!("`{first}` or `{second}`"),
            [rest @ .., last] => {
                let rest_str = rest
                    .iter()
                    .map(|n| format!("`{n}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{rest_str}, or `{last}`")
            }
        }
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<TokenTag> for TokenSet {
    fn from_iter<I: IntoIterator<Item = TokenTag>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// Iterator over tag indices in a `TokenSet`.
pub struct TokenSetIterator {
    bits: u128,
}

impl Iterator for TokenSetIterator {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "u128::trailing_zeros() max is 127"
        )]
        let idx = idx as u8;
        self.bits &= self.bits - 1; // Clear the lowest set bit
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.bits.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for TokenSetIterator {}

/// Where a failed repetition item resumes.
///
/// Each synchronization tag says whether the token itself is consumed
/// before parsing resumes (`stop_after`) or left for the next item
/// (`stop_at`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SyncPoints {
    stop: TokenSet,
    consume: TokenSet,
}

impl SyncPoints {
    pub const fn new() -> Self {
        SyncPoints {
            stop: TokenSet::new(),
            consume: TokenSet::new(),
        }
    }

    /// Resume at `tag`, leaving it in place.
    #[must_use]
    pub const fn stop_at(self, tag: TokenTag) -> Self {
        SyncPoints {
            stop: self.stop.with(tag),
            consume: TokenSet(self.consume.0 & !TokenSet::single(tag).0),
        }
    }

    /// Resume just past `tag`.
    #[must_use]
    pub const fn stop_after(self, tag: TokenTag) -> Self {
        SyncPoints {
            stop: self.stop.with(tag),
            consume: self.consume.with(tag),
        }
    }

    /// `Some(consume)` if `tag` is a synchronization point.
    #[inline]
    pub const fn lookup(&self, tag: TokenTag) -> Option<bool> {
        if self.stop.contains(tag) {
            Some(self.consume.contains(tag))
        } else {
            None
        }
    }

    /// All synchronization tags.
    #[inline]
    pub const fn tags(&self) -> TokenSet {
        self.stop
    }
}
