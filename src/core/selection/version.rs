// ─── Version ordering ───
// Total ordering over loosely formatted version strings and file names.

use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    /// Digits with leading zeros stripped.
    Number(&'a str),
    Word(String),
}

fn segments(raw: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let bytes = raw.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        if bytes[i].is_ascii_digit() {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let digits = raw[start..i].trim_start_matches('0');
            out.push(Segment::Number(digits));
        } else if bytes[i].is_ascii_alphabetic() {
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            out.push(Segment::Word(raw[start..i].to_ascii_lowercase()));
        } else {
            i += 1;
        }
    }

    out
}

fn compare_segment(left: &Segment<'_>, right: &Segment<'_>) -> Ordering {
    match (left, right) {
        (Segment::Number(l), Segment::Number(r)) => l.len().cmp(&r.len()).then_with(|| l.cmp(r)),
        (Segment::Word(l), Segment::Word(r)) => l.cmp(r),
        (Segment::Number(_), Segment::Word(_)) => Ordering::Greater,
        (Segment::Word(_), Segment::Number(_)) => Ordering::Less,
    }
}

/// Compare two version-like strings (`"1.12.2"`, `"jei_1.12.2-4.16.1.301.jar"`,
/// `"forge-14.23.5.2847"`).
///
/// Numeric runs compare numerically, letter runs case-insensitively, and a
/// number outranks a word. When one side runs out, a trailing word marks a
/// pre-release (`1.0-beta < 1.0`) while a trailing number is newer
/// (`1.0 < 1.0.1`). Never fails; exact ties fall back to byte order.
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let l = segments(left);
    let r = segments(right);

    for (a, b) in l.iter().zip(r.iter()) {
        let ord = compare_segment(a, b);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    let tail = match l.len().cmp(&r.len()) {
        Ordering::Equal => Ordering::Equal,
        Ordering::Greater => match &l[r.len()] {
            Segment::Number(_) => Ordering::Greater,
            Segment::Word(_) => Ordering::Less,
        },
        Ordering::Less => match &r[l.len()] {
            Segment::Number(_) => Ordering::Less,
            Segment::Word(_) => Ordering::Greater,
        },
    };

    tail.then_with(|| left.cmp(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_compare_numerically() {
        assert_eq!(compare_versions("1.10", "1.9"), Ordering::Greater);
        assert_eq!(compare_versions("1.12.2", "1.12.10"), Ordering::Less);
        assert_eq!(compare_versions("2.0", "10.0"), Ordering::Less);
    }

    #[test]
    fn trailing_word_is_prerelease_and_trailing_number_is_newer() {
        assert_eq!(compare_versions("1.0-beta", "1.0"), Ordering::Less);
        assert_eq!(compare_versions("1.0", "1.0.1"), Ordering::Less);
    }

    #[test]
    fn file_names_sort_newest_first() {
        let mut names = vec![
            "jei_1.12.2-4.15.0.291.jar",
            "jei_1.12.2-4.16.1.301.jar",
            "jei_1.12.2-4.9.0.jar",
            "jei_1.12.2-4.16.1.1000.jar",
        ];
        names.sort_by(|a, b| compare_versions(b, a));
        assert_eq!(
            names,
            vec![
                "jei_1.12.2-4.16.1.1000.jar",
                "jei_1.12.2-4.16.1.301.jar",
                "jei_1.12.2-4.15.0.291.jar",
                "jei_1.12.2-4.9.0.jar",
            ]
        );
    }

    #[test]
    fn non_version_names_do_not_fault() {
        assert_eq!(compare_versions("", ""), Ordering::Equal);
        assert_eq!(compare_versions("README", "readme"), Ordering::Less);
        assert_ne!(compare_versions("Mod [Final]!", "mod-final"), Ordering::Equal);
    }

    #[test]
    fn loader_names_order() {
        assert_eq!(
            compare_versions("forge-14.23.5.2847", "forge-14.23.5.2768"),
            Ordering::Greater
        );
    }
}
