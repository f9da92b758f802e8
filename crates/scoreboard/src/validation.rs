//! Validation rules shared by the entity value types.
//!
//! # Validation Rules
//!
//! - Usernames: 2 to 16 characters inclusive, counted as Unicode scalar values
//! - Titles: non-empty
//! - Scores: integers from 1 up to the active ceiling (5000 by default)

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 2;

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 16;

/// Lowest accepted score.
pub const SCORE_MIN: u16 = 1;

/// Highest accepted score under the documented ceiling.
pub const SCORE_MAX: u16 = 5000;

/// Highest score accepted by the legacy boundary check.
pub const LEGACY_SCORE_MAX: u16 = 5002;

/// Returns `true` if `name` is an acceptable username.
///
/// # Examples
///
/// ```
/// use scoreboard::is_valid_username;
///
/// assert!(is_valid_username("Al"));
/// assert!(!is_valid_username("A"));
/// assert!(!is_valid_username("seventeen-chars!!"));
/// ```
#[must_use]
pub fn is_valid_username(name: &str) -> bool {
    (USERNAME_MIN..=USERNAME_MAX).contains(&name.chars().count())
}

/// Returns `true` if `title` is an acceptable game title.
#[must_use]
pub const fn is_valid_title(title: &str) -> bool {
    !title.is_empty()
}

/// Returns `true` if `score` lies in `SCORE_MIN..=ceiling`.
#[must_use]
pub fn is_valid_score(score: i64, ceiling: u16) -> bool {
    (i64::from(SCORE_MIN)..=i64::from(ceiling)).contains(&score)
}

#[cfg(test)]
mod tests {
    //! Covers username, title, and score boundary behaviour.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Al", true)]
    #[case("Alice", true)]
    #[case("sixteen_chars_ok", true)]
    #[case("  ", true)] // Whitespace counts toward length
    #[case("Zoë", true)]
    #[case("", false)]
    #[case("A", false)]
    #[case("seventeen_chars_x", false)]
    fn username_lengths(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_username(name), expected);
    }

    #[test]
    fn username_length_counts_characters_not_bytes() {
        let name = "é".repeat(USERNAME_MAX);
        assert!(name.len() > USERNAME_MAX);
        assert!(is_valid_username(&name));
    }

    #[rstest]
    #[case("Chess", true)]
    #[case(" ", true)]
    #[case("", false)]
    fn titles(#[case] title: &str, #[case] expected: bool) {
        assert_eq!(is_valid_title(title), expected);
    }

    #[rstest]
    #[case(1, SCORE_MAX, true)]
    #[case(5000, SCORE_MAX, true)]
    #[case(0, SCORE_MAX, false)]
    #[case(-3, SCORE_MAX, false)]
    #[case(5001, SCORE_MAX, false)]
    #[case(5002, LEGACY_SCORE_MAX, true)]
    #[case(5003, LEGACY_SCORE_MAX, false)]
    fn scores(#[case] score: i64, #[case] ceiling: u16, #[case] expected: bool) {
        assert_eq!(is_valid_score(score, ceiling), expected);
    }
}
