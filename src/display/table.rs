use crate::display::listing::Listing;
use std::fmt::Write;

/// Renders a listing as a fixed-width text table.
pub fn render_table(listing: &Listing) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Cheapest listings for [{}] at {}",
        listing.query.describe(),
        listing.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    if listing.items.is_empty() {
        out.push_str("No listings\n");
        return out;
    }

    let widths: Vec<usize> = listing
        .columns
        .iter()
        .map(|(field, label)| {
            listing
                .items
                .iter()
                .map(|item| field.value(item).chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = listing
        .columns
        .iter()
        .zip(&widths)
        .map(|((_, label), &w)| pad(label, w))
        .collect();
    let _ = writeln!(out, "{}", header.join(" | ").trim_end());

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for item in &listing.items {
        let row: Vec<String> = listing
            .columns
            .iter()
            .zip(&widths)
            .map(|((field, _), &w)| pad(field.value(item), w))
            .collect();
        let _ = writeln!(out, "{}", row.join(" | ").trim_end());
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}
