use crate::names;

/// A 1-based page number. A missing or unparsable value reads as the first
/// page; integers below 1 are kept and address no data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageNumber(i64);

impl PageNumber {
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Self)
            .unwrap_or_default()
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self(names::DEFAULT_PAGE)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub start: usize,
    pub end: usize,
}

/// Slices `items[(n-1)*size .. n*size]`, clamped to the data. A page past
/// the end, or numbered below 1, is empty.
pub fn page<T>(items: &[T], number: PageNumber, size: usize) -> Page<'_, T> {
    if number.get() < 1 {
        return Page {
            items: &[],
            start: 0,
            end: 0,
        };
    }

    let start = usize::try_from(number.get() - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(size)
        .min(items.len());
    let end = start.saturating_add(size).min(items.len());

    Page {
        items: &items[start..end],
        start,
        end,
    }
}
