//! Blank-marker handling for scenario templates.
//!
//! A scenario template contains the reserved marker `_____` at its
//! substitution point. Raw content may carry zero, one, or several markers;
//! only templates that resolve to exactly one marker are usable.

/// The reserved blank marker inside scenario templates.
pub const BLANK: &str = "_____";

/// Resolve a raw template to its single-blank form.
///
/// A template with one marker passes through unchanged. A template with
/// several markers is collapsed: everything between the first and last
/// marker is dropped, the text before the first marker is joined to the
/// text after the last one, and whitespace runs are collapsed. Returns
/// `None` when no marker is present or the collapse still leaves more than
/// one marker.
pub fn normalize(template: &str) -> Option<String> {
    match template.matches(BLANK).count() {
        0 => None,
        1 => Some(template.to_string()),
        _ => {
            let first = template.find(BLANK)?;
            let last = template.rfind(BLANK)?;
            let mut joined =
                String::with_capacity(first + BLANK.len() + template.len() - last - BLANK.len());
            joined.push_str(&template[..first + BLANK.len()]);
            joined.push_str(&template[last + BLANK.len()..]);
            let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
            if collapsed.matches(BLANK).count() == 1 {
                Some(collapsed)
            } else {
                None
            }
        }
    }
}

/// Split a single-blank template into the trimmed text before and after
/// the marker. Returns `None` when the template has no marker.
pub fn split_at_blank(template: &str) -> Option<(&str, &str)> {
    let idx = template.find(BLANK)?;
    let before = template[..idx].trim();
    let after = template[idx + BLANK.len()..].trim();
    Some((before, after))
}

/// Substitute a response into the template's blank.
pub fn fill(template: &str, response: &str) -> String {
    template.replace(BLANK, response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_single_blank_is_identity() {
        let t = "The tea is: _____.";
        assert_eq!(normalize(t).as_deref(), Some(t));
    }

    #[test]
    fn test_normalize_without_blank_is_none() {
        assert_eq!(normalize("No blanks here."), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_normalize_collapses_multi_blank() {
        let t = "When I: _____ I always _____ after.";
        assert_eq!(normalize(t).as_deref(), Some("When I: _____ after."));
    }

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        let t = "My  take:   _____ and then   _____  honestly.";
        assert_eq!(normalize(t).as_deref(), Some("My take: _____ honestly."));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let t = "When I: _____ I always _____ after.";
        let once = normalize(t).unwrap();
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_split_at_blank_trims_surroundings() {
        let (before, after) = split_at_blank("It's giving _____ energy.").unwrap();
        assert_eq!(before, "It's giving");
        assert_eq!(after, "energy.");
    }

    #[test]
    fn test_split_at_blank_none_without_marker() {
        assert!(split_at_blank("nothing to split").is_none());
    }

    #[test]
    fn test_fill_replaces_marker() {
        assert_eq!(
            fill("The tea is: _____.", "a complete mess"),
            "The tea is: a complete mess."
        );
    }
}
