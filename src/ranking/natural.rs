// Numeric-aware string ordering
use std::cmp::Ordering;

/// Compares two strings so that embedded digit runs order by integer value:
/// `"9" < "10"`, `"item2" < "item10"`. Digit runs of any length are
/// supported; leading zeros are ignored.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a, b);
    loop {
        match (next_run(a), next_run(b)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some((run_a, rest_a)), Some((run_b, rest_b))) => {
                let ord = if is_digits(run_a) && is_digits(run_b) {
                    cmp_digit_runs(run_a, run_b)
                } else {
                    run_a.cmp(run_b)
                };
                if ord != Ordering::Equal {
                    return ord;
                }
                a = rest_a;
                b = rest_b;
            }
        }
    }
}

/// Splits off the leading run of all-digit or all-non-digit characters.
fn next_run(s: &str) -> Option<(&str, &str)> {
    let first = s.chars().next()?;
    let digit = first.is_ascii_digit();
    let end = s
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() != digit)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    Some(s.split_at(end))
}

fn is_digits(run: &str) -> bool {
    run.bytes().all(|b| b.is_ascii_digit())
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
