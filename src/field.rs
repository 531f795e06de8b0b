use std::fmt::Display;

/// Numeric type of item bounds, wide enough for every field range and the
/// [`Item::WILDCARD`] sentinel.
pub type ItemValueType = i8;

/// Single normalized entry of a schedule field.
///
/// Every entry of a field's comma-separated list becomes one `Item` with
/// the same shape regardless of how it was written:
/// - `*` keeps both bounds at [`Item::WILDCARD`],
/// - a single value `N` sets `start == end == N`,
/// - a range `N-M` sets the bounds as written, without reordering them
///   (`10-5` and `DEC-FEB` are kept verbatim),
/// - a `/S` suffix overrides the step, which is 1 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    start: ItemValueType,
    end: ItemValueType,
    step: u8,
}

impl Item {
    /// Sentinel bound of a wildcard item: `*` doesn't name any particular
    /// value, so both bounds hold this marker instead.
    pub const WILDCARD: ItemValueType = -1;

    pub(crate) fn new(start: ItemValueType, end: ItemValueType, step: u8) -> Self {
        Self { start, end, step }
    }

    /// Lower bound of the item, or [`Item::WILDCARD`].
    pub fn start(&self) -> ItemValueType {
        self.start
    }

    /// Upper bound of the item, or [`Item::WILDCARD`].
    ///
    /// Equals [`start`](Item::start) for single-value items.
    pub fn end(&self) -> ItemValueType {
        self.end
    }

    /// Step between consecutive values, 1 unless the item carried an
    /// explicit `/S` suffix.
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Returns `true` if the item was written with a `*` base.
    pub fn is_wildcard(&self) -> bool {
        self.start == Self::WILDCARD
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_wildcard() {
            write!(f, "*")?;
        } else if self.start == self.end {
            write!(f, "{}", self.start)?;
        } else {
            write!(f, "{}-{}", self.start, self.end)?;
        }
        if self.step != 1 {
            write!(f, "/{}", self.step)?;
        }
        Ok(())
    }
}

/// One parsed field of a schedule: an ordered, non-empty list of items.
///
/// Items keep the source order, duplicates included; the parser performs
/// no merging or deduplication.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Field {
    items: Vec<Item>,
}

impl Field {
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Items of the field in source order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self.items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        write!(f, "{}", values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum FieldType {
    Seconds,
    Minutes,
    Hours,
    Doms,
    Months,
    Dows,
}

impl FieldType {
    const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const MONTHS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    pub(crate) fn min_max(&self) -> (ItemValueType, ItemValueType) {
        match self {
            Self::Seconds => (0, 59),
            Self::Minutes => (0, 59),
            Self::Hours => (0, 23),
            Self::Doms => (1, 31),
            Self::Months => (1, 12),
            Self::Dows => (0, 6),
        }
    }

    // Rule names surfaced by error messages, matching the value grammar
    // each field accepts.
    pub(crate) fn value_label(&self) -> &'static str {
        match self {
            Self::Seconds => "second value",
            Self::Minutes => "minute value",
            Self::Hours => "hour value",
            Self::Doms => "day of month value",
            Self::Months => "month value",
            Self::Dows => "day of week value",
        }
    }

    // Mnemonic table and the value of its first entry, for fields that
    // accept names next to numbers.
    pub(crate) fn symbols(&self) -> Option<(&'static [&'static str], ItemValueType)> {
        match self {
            Self::Months => Some((&Self::MONTHS, 1)),
            Self::Dows => Some((&Self::DAYS_OF_WEEK, 0)),
            _ => None,
        }
    }
}
