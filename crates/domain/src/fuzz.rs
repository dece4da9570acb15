//! Approximate string matching based on the longest common subsequence of two strings.
//!
//! Scores are in the range 0 to 100 and rounded half to even, so that the thresholds used for
//! body part detection and history lookup are applied to the same integer scores everywhere.

/// Similarity of the best aligned substring of the longer string with the shorter string.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    round(raw_partial_ratio(a, b))
}

/// Find the choice most similar to the query.
///
/// Query and choices are normalized before scoring. If several choices reach the highest
/// score, the first one wins.
#[must_use]
pub fn extract_one<'a>(
    query: &str,
    choices: impl IntoIterator<Item = &'a str>,
) -> Option<(&'a str, u8)> {
    let query = normalize(query);
    let mut best: Option<(&'a str, f64)> = None;

    for choice in choices {
        let score = raw_partial_ratio(&query, &normalize(choice));
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((choice, score));
        }
    }

    best.map(|(choice, score)| (choice, round(score)))
}

/// Lower-case the string, replace everything but letters and digits by spaces and trim it.
#[must_use]
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

fn raw_partial_ratio(a: &str, b: &str) -> f64 {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();

    match a.len().cmp(&b.len()) {
        std::cmp::Ordering::Less => best_alignment(&a, &b),
        std::cmp::Ordering::Greater => best_alignment(&b, &a),
        std::cmp::Ordering::Equal => best_alignment(&a, &b).max(best_alignment(&b, &a)),
    }
}

fn best_alignment(needle: &[char], haystack: &[char]) -> f64 {
    if needle.is_empty() {
        return 0.0;
    }

    let n = needle.len();
    let m = haystack.len();

    // Windows partially overlapping the start, fully inside and partially overlapping the end
    (1..n)
        .map(|end| &haystack[..end])
        .chain((0..=m - n).map(|start| &haystack[start..start + n]))
        .chain((m - n + 1..m).map(|start| &haystack[start..]))
        .map(|window| ratio(needle, window))
        .fold(0.0, f64::max)
}

#[allow(clippy::cast_precision_loss)]
fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    200.0 * lcs_len(a, b) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut previous = vec![0; b.len() + 1];
    let mut current = vec![0; b.len() + 1];

    for x in a {
        for (j, y) in b.iter().enumerate() {
            current[j + 1] = if x == y {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round(score: f64) -> u8 {
    score.round_ties_even().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::contained("bench", "incline bench press", 100)]
    #[case::contained_reversed("incline bench press", "bench", 100)]
    #[case::swapped_letters("bench", "bnech press", 80)]
    #[case::partial_overlap("abs", "xyzabc", 67)]
    #[case::overlapping_start("cde", "defghi", 80)]
    #[case::overlapping_end("xyab", "cdexy", 67)]
    #[case::unrelated("row", "pulldown", 67)]
    #[case::no_common_character("sit-up", "xyzabc", 0)]
    #[case::identical("squat", "squat", 100)]
    #[case::empty_needle("", "squat", 0)]
    #[case::both_empty("", "", 0)]
    fn test_partial_ratio(#[case] a: &str, #[case] b: &str, #[case] expected: u8) {
        assert_eq!(partial_ratio(a, b), expected);
    }

    #[test]
    fn test_partial_ratio_is_case_sensitive() {
        // best window is the suffix "ench"
        assert_eq!(partial_ratio("Bench", "bench"), 89);
        assert_eq!(partial_ratio("bench", "bench"), 100);
    }

    #[rstest]
    #[case("Bench-Press ", "bench press")]
    #[case("  Sit-Up", "sit up")]
    #[case("Überzug 2", "überzug 2")]
    #[case("", "")]
    fn test_normalize(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(normalize(value), expected);
    }

    #[test]
    fn test_extract_one() {
        assert_eq!(
            extract_one("bench press", ["Squat", "Bench Press", "Bench press"]),
            Some(("Bench Press", 100))
        );
        assert_eq!(
            extract_one("squats", ["Bench Press", "Squat"]),
            Some(("Squat", 100))
        );
        assert_eq!(extract_one("squat", []), None);
    }

    #[test]
    fn test_extract_one_first_choice_wins_tie() {
        assert_eq!(extract_one("curl", ["Curl", "curl"]), Some(("Curl", 100)));
        assert_eq!(extract_one("curl", ["curl", "Curl"]), Some(("curl", 100)));
    }
}
