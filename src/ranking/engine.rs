use crate::model::ItemRecord;
use crate::ranking::currency::Currency;
use crate::ranking::natural::natural_cmp;

/// Result of a ranking pass together with how many records were left out
/// because their price carried no recognized currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub items: Vec<ItemRecord>,
    pub dropped: usize,
}

/// Orders records cheapest first: by currency tier, then by the magnitude
/// in front of the currency label using natural ordering. Records with an
/// unrecognized currency are left out. Equal prices keep their input order.
pub fn rank(records: Vec<ItemRecord>) -> Vec<ItemRecord> {
    rank_with_report(records).items
}

/// Same ordering as [`rank`], also reporting the number of dropped records.
pub fn rank_with_report(records: Vec<ItemRecord>) -> Ranking {
    let mut buckets: [Vec<(String, ItemRecord)>; 4] = Default::default();
    let mut dropped = 0;

    for record in records {
        match Currency::split_price(&record.price) {
            Some((magnitude, currency)) => {
                let magnitude = magnitude.to_string();
                buckets[currency.tier()].push((magnitude, record));
            }
            None => dropped += 1,
        }
    }

    let items = buckets
        .into_iter()
        .flat_map(|mut bucket| {
            // sort_by is stable, ties stay in input order
            bucket.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
            bucket.into_iter().map(|(_, record)| record)
        })
        .collect();

    Ranking { items, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(name: &str, price: &str) -> ItemRecord {
        ItemRecord::new(name, "seller", "R-G-B", price)
    }

    fn prices(items: &[ItemRecord]) -> Vec<&str> {
        items.iter().map(|r| r.price.as_str()).collect()
    }

    #[test]
    fn orders_by_tier_then_magnitude() {
        let input = vec![
            priced("a", "5 chaos"),
            priced("b", "2 alchemy"),
            priced("c", "10 chaos"),
            priced("d", "1 exalted"),
        ];

        let ranked = rank(input);

        assert_eq!(prices(&ranked), vec!["2 alchemy", "5 chaos", "10 chaos", "1 exalted"]);
    }

    #[test]
    fn drops_unrecognized_currency() {
        let input = vec![
            priced("a", "5 chaos"),
            priced("b", "3 mystery-coin"),
            priced("c", "1 fusing"),
        ];

        let ranking = rank_with_report(input);

        assert_eq!(prices(&ranking.items), vec!["1 fusing", "5 chaos"]);
        assert_eq!(ranking.dropped, 1);
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let input = vec![
            priced("first", "4 chaos"),
            priced("cheap", "1 chaos"),
            priced("second", "4 chaos"),
            priced("third", "04 chaos"),
        ];

        let names: Vec<String> = rank(input).into_iter().map(|r| r.name).collect();

        assert_eq!(names, vec!["cheap", "first", "second", "third"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let ranking = rank_with_report(Vec::new());
        assert!(ranking.items.is_empty());
        assert_eq!(ranking.dropped, 0);
    }

    #[test]
    fn malformed_magnitude_does_not_panic() {
        let input = vec![
            priced("a", "lots of chaos"),
            priced("b", "chaos"),
            priced("c", "3 chaos"),
        ];

        assert_eq!(rank(input).len(), 3);
    }

    #[test]
    fn cheap_exalted_still_ranks_after_expensive_chaos() {
        let input = vec![priced("a", "1 exalted"), priced("b", "999 chaos")];

        assert_eq!(prices(&rank(input)), vec!["999 chaos", "1 exalted"]);
    }
}
