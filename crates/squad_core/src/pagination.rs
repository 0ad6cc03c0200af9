//! Pagination descriptor and its normalization rules.

use serde::{Serialize, Serializer};

/// Page number used when the caller does not ask for one.
pub const DEFAULT_PAGE: u64 = 1;

/// Records per page used when the caller does not ask for a size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A requested page size.
///
/// [`PageSize::Unbounded`] means "return all remaining records, no upper
/// limit" and survives normalization unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// At most this many records per page.
    Records(i64),
    /// No upper limit.
    Unbounded,
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageSize::Records(n) => serializer.serialize_i64(*n),
            PageSize::Unbounded => serializer.serialize_none(),
        }
    }
}

/// An immutable page/page-size descriptor.
///
/// Raw values are kept as given; normalization happens in the accessors so
/// that any `page <= 0` or absent becomes [`DEFAULT_PAGE`] and any
/// non-positive or absent size becomes the default the caller passes in.
/// Equality is by raw value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    page: Option<i64>,
    page_size: Option<PageSize>,
}

impl Pagination {
    /// Creates a pagination descriptor from raw caller input.
    pub fn new(page: impl Into<Option<i64>>, page_size: impl Into<Option<PageSize>>) -> Self {
        Self {
            page: page.into(),
            page_size: page_size.into(),
        }
    }

    /// Returns the normalized page number, always `>= 1`.
    pub fn page(&self) -> u64 {
        match self.page {
            Some(page) if page > 0 => page as u64,
            _ => DEFAULT_PAGE,
        }
    }

    /// Returns the normalized page size.
    ///
    /// A missing or non-positive record count becomes `default`; an
    /// unbounded size is preserved. The returned `Records` value is always
    /// positive.
    pub fn page_size(&self, default: u64) -> PageSize {
        match self.page_size {
            Some(PageSize::Unbounded) => PageSize::Unbounded,
            Some(PageSize::Records(n)) if n > 0 => PageSize::Records(n),
            _ => PageSize::Records(default as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(Pagination::new(None, None).page(), 1);
        assert_eq!(Pagination::new(0, None).page(), 1);
        assert_eq!(Pagination::new(-1, None).page(), 1);
    }

    #[test]
    fn page_passes_through_when_positive() {
        assert_eq!(Pagination::new(5, None).page(), 5);
    }

    #[test]
    fn page_size_defaults_to_ten() {
        let cases = [None, Some(PageSize::Records(0)), Some(PageSize::Records(-1))];
        for raw in cases {
            let pagination = Pagination::new(None, raw);
            assert_eq!(
                pagination.page_size(DEFAULT_PAGE_SIZE),
                PageSize::Records(10)
            );
        }
    }

    #[test]
    fn page_size_passes_through_when_positive() {
        let pagination = Pagination::new(None, PageSize::Records(200));
        assert_eq!(
            pagination.page_size(DEFAULT_PAGE_SIZE),
            PageSize::Records(200)
        );
    }

    #[test]
    fn unbounded_page_size_survives_normalization() {
        let pagination = Pagination::new(None, PageSize::Unbounded);
        assert_eq!(pagination.page_size(DEFAULT_PAGE_SIZE), PageSize::Unbounded);
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(
            Pagination::new(2, PageSize::Records(5)),
            Pagination::new(2, PageSize::Records(5))
        );
        assert_ne!(
            Pagination::new(2, PageSize::Records(5)),
            Pagination::new(3, PageSize::Records(5))
        );
    }

    #[test]
    fn page_size_serializes_as_number_or_null() {
        assert_eq!(
            serde_json::to_string(&PageSize::Records(10)).unwrap(),
            "10"
        );
        assert_eq!(serde_json::to_string(&PageSize::Unbounded).unwrap(), "null");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalized_page_is_always_positive(raw in any::<Option<i64>>()) {
                let pagination = Pagination::new(raw, None);
                prop_assert!(pagination.page() >= 1);
            }

            #[test]
            fn normalized_record_count_is_always_positive(raw in any::<i64>()) {
                let pagination = Pagination::new(None, PageSize::Records(raw));
                match pagination.page_size(DEFAULT_PAGE_SIZE) {
                    PageSize::Records(n) => prop_assert!(n > 0),
                    PageSize::Unbounded => prop_assert!(false, "bounded input became unbounded"),
                }
            }

            #[test]
            fn non_positive_sizes_take_the_default(raw in i64::MIN..=0) {
                let pagination = Pagination::new(None, PageSize::Records(raw));
                prop_assert_eq!(
                    pagination.page_size(DEFAULT_PAGE_SIZE),
                    PageSize::Records(DEFAULT_PAGE_SIZE as i64)
                );
            }
        }
    }
}
