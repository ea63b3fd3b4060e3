use crate::model::ItemRecord;

const CORRUPTED: &str = "corrupted";

/// Appended to the name of every corrupted item.
pub const CORRUPTED_SUFFIX: &str = " (corrupted)";

pub fn normalize_all(records: &mut [ItemRecord]) {
    for record in records.iter_mut() {
        record.name = normalize_name(&record.name);
    }
}

/// Removes a "corrupted" qualifier from the name and marks the item with
/// [`CORRUPTED_SUFFIX`] instead. Surrounding whitespace is trimmed and inner
/// runs of whitespace collapse to a single space, qualifier or not.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let (base, marked) = match strip_marker(trimmed) {
        Some(base) => (base, true),
        None => (trimmed, false),
    };

    let words: Vec<&str> = base.split_whitespace().collect();
    let kept: Vec<&str> = words.iter().copied().filter(|w| !is_qualifier(w)).collect();
    let removed = kept.len() != words.len();

    let joined = kept.join(" ");
    let mut normalized = if removed {
        // "Hoag, Corrupted" leaves a dangling separator behind
        joined
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-'))
            .to_string()
    } else {
        joined
    };
    if marked || removed {
        normalized.push_str(CORRUPTED_SUFFIX);
    }
    normalized
}

/// Returns the name without a trailing marker, matched ignoring case.
fn strip_marker(name: &str) -> Option<&str> {
    let cut = name.len().checked_sub(CORRUPTED_SUFFIX.len())?;
    let tail = name.get(cut..)?;
    tail.eq_ignore_ascii_case(CORRUPTED_SUFFIX).then(|| &name[..cut])
}

fn is_qualifier(word: &str) -> bool {
    word.trim_matches(|c: char| c.is_ascii_punctuation())
        .eq_ignore_ascii_case(CORRUPTED)
}
