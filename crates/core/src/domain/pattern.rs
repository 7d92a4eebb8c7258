//! Glob-like pattern matching over package paths.
//!
//! `*` matches exactly one path segment; `**` matches zero or more segments.
//! The separator is language-derived: `.` for Kotlin/Java, `/` for
//! TypeScript/JavaScript paths. Exact strings must match segment-for-segment.

/// `a.b.*` matches `a.b.c` but not `a.b.c.d`; `a.b.**` matches both.
pub fn matches(pattern: &str, package: &str, separator: char) -> bool {
    let pattern_segments: Vec<&str> = pattern.split(separator).collect();
    let package_segments: Vec<&str> = package.split(separator).collect();
    match_segments(&pattern_segments, &package_segments)
}

fn match_segments(pattern: &[&str], input: &[&str]) -> bool {
    match pattern.split_first() {
        None => input.is_empty(),
        Some((&"**", rest)) => {
            if rest.is_empty() {
                return true;
            }
            (0..=input.len()).any(|i| match_segments(rest, &input[i..]))
        }
        Some((&"*", rest)) => !input.is_empty() && match_segments(rest, &input[1..]),
        Some((seg, rest)) => {
            !input.is_empty() && input[0] == *seg && match_segments(rest, &input[1..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_star_matches_exactly_one_segment() {
        assert!(matches("a.b.*", "a.b.c", '.'));
        assert!(!matches("a.b.*", "a.b.c.d", '.'));
    }

    #[test]
    fn double_star_matches_zero_or_more_segments() {
        assert!(matches("a.b.**", "a.b.c", '.'));
        assert!(matches("a.b.**", "a.b.c.d", '.'));
        assert!(matches("a.b.**", "a.b", '.'));
    }

    #[test]
    fn exact_strings_match_segment_for_segment() {
        assert!(matches("a.b.c", "a.b.c", '.'));
        assert!(!matches("a.b.c", "a.b.x", '.'));
    }

    #[test]
    fn slash_separator_for_typescript_paths() {
        assert!(matches("src/*/service", "src/order/service", '/'));
        assert!(!matches("src/*/service", "src/order/sub/service", '/'));
    }
}
