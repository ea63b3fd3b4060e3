use crate::model::ItemRecord;

/// Record fields shown to the user, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Seller,
    Sockets,
    Price,
    SecondaryStat,
}

pub const COLUMNS: [(Field, &str); 5] = [
    (Field::Name, "Item Name"),
    (Field::Seller, "Seller"),
    (Field::Sockets, "Sockets"),
    (Field::Price, "Price"),
    (Field::SecondaryStat, "pDPS"),
];

/// Field-to-label mapping handed to whoever renders the listing.
pub fn columns() -> &'static [(Field, &'static str)] {
    &COLUMNS
}

impl Field {
    pub fn value(self, record: &ItemRecord) -> &str {
        match self {
            Field::Name => &record.name,
            Field::Seller => &record.seller,
            Field::Sockets => &record.sockets,
            Field::Price => &record.price,
            Field::SecondaryStat => record.secondary_stat.as_deref().unwrap_or(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_column_order() {
        let labels: Vec<&str> = columns().iter().map(|(_, label)| *label).collect();
        assert_eq!(labels, vec!["Item Name", "Seller", "Sockets", "Price", "pDPS"]);
    }

    #[test]
    fn missing_secondary_stat_reads_empty() {
        let record = ItemRecord::new("Hoag", "anna", "R-R", "2 chaos");
        assert_eq!(Field::SecondaryStat.value(&record), "");
        assert_eq!(Field::Sockets.value(&record), "R-R");
    }
}
