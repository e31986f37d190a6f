//! ORDER BY / LIMIT descriptors and derived page metadata.
//!
//! [`Page`] accumulates ORDER BY entries and an optional LIMIT, rendering
//! the clause suffix spliced after a WHERE clause. [`PageRet`] is the
//! read-model snapshot derived from a descriptor for paginated-list
//! responses: echoed offset/size, a one-based page number, and optional
//! total counts supplied by the caller.
//!
//! Like the filter side of the DSL, descriptors are values: `order` and
//! `limit` consume `self` and return the updated descriptor, so a shared
//! starting template can be branched with `clone` and never mutates behind
//! a caller's back.
//!
//! # Example
//! ```ignore
//! use myquery::{page, Order, PageRet};
//!
//! let p = page()
//!     .order(Order::desc("create_at"))
//!     .limit(20, 10)?;
//! assert_eq!(p.sql(), "order by create_at desc limit 20,10");
//! assert_eq!(PageRet::new(&p)?.page_no, 3);
//! # Ok::<(), myquery::QueryError>(())
//! ```

use crate::error::{QueryError, QueryResult};
use crate::sort::Sort;
use serde::{Deserialize, Serialize};

/// A single ORDER BY entry: column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Column name, rendered as-is.
    pub col: String,
    /// Sort direction.
    pub sort: Sort,
}

impl Order {
    /// Create an ORDER BY entry.
    pub fn new(col: impl Into<String>, sort: Sort) -> Self {
        Self {
            col: col.into(),
            sort,
        }
    }

    /// Ascending entry for a column.
    pub fn asc(col: impl Into<String>) -> Self {
        Self::new(col, Sort::Asc)
    }

    /// Descending entry for a column.
    pub fn desc(col: impl Into<String>) -> Self {
        Self::new(col, Sort::Desc)
    }

    fn write_sql(&self, out: &mut String) {
        out.push_str(&self.col);
        out.push(' ');
        out.push_str(self.sort.as_sql());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Limit {
    offset: i64,
    size: i64,
}

/// Pagination descriptor: ORDER BY entries plus an optional LIMIT.
///
/// Entries render in insertion order; duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    orders: Vec<Order>,
    limit: Option<Limit>,
}

/// Create an empty pagination descriptor.
///
/// # Example
/// ```ignore
/// let p = myquery::page().order(myquery::Order::asc("score")).limit(20, 10)?;
/// # Ok::<(), myquery::QueryError>(())
/// ```
pub fn page() -> Page {
    Page::new()
}

impl Page {
    /// Create an empty descriptor: no orders, no limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ORDER BY entry after the existing ones, returning the
    /// updated descriptor.
    pub fn order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    /// Replace the limit, returning the updated descriptor.
    ///
    /// A negative `offset` or non-positive `size` is rejected with
    /// [`QueryError::InvalidLimit`].
    pub fn limit(mut self, offset: i64, size: i64) -> QueryResult<Self> {
        if offset < 0 {
            return Err(QueryError::invalid_limit(format!(
                "negative offset: {offset}"
            )));
        }
        if size <= 0 {
            return Err(QueryError::invalid_limit(format!(
                "non-positive size: {size}"
            )));
        }
        self.limit = Some(Limit { offset, size });
        Ok(self)
    }

    /// The ORDER BY entries, in render order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Rows to skip; `0` when no limit is set.
    pub fn offset(&self) -> i64 {
        self.limit.map(|l| l.offset).unwrap_or(0)
    }

    /// Rows per page; `0` when no limit is set.
    pub fn size(&self) -> i64 {
        self.limit.map(|l| l.size).unwrap_or(0)
    }

    /// Render the ORDER BY / LIMIT suffix.
    ///
    /// With no orders, only the `limit` clause is rendered; with no limit,
    /// only the `order by` clause; with neither, the empty string.
    pub fn sql(&self) -> String {
        let mut out = String::new();
        if !self.orders.is_empty() {
            out.push_str("order by ");
            for (i, order) in self.orders.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                order.write_sql(&mut out);
            }
        }
        if let Some(limit) = self.limit {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("limit {},{}", limit.offset, limit.size));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(sql = %out, "rendered page");
        out
    }
}

/// Derived, read-only pagination metadata for a list response.
///
/// Total counts are an explicit external input: [`PageRet::new`] leaves
/// them unset, [`PageRet::with_total`] derives `total_pages` from a
/// caller-supplied row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRet {
    /// One-based page number.
    pub page_no: i64,
    /// Rows per page, echoed from the descriptor.
    pub size: i64,
    /// Rows skipped, echoed from the descriptor.
    pub offset: i64,
    /// Total row count, when known.
    pub total: Option<i64>,
    /// Total page count, when `total` is known.
    pub total_pages: Option<i64>,
}

impl PageRet {
    /// Derive page metadata from a descriptor.
    ///
    /// A descriptor with no limit set has no page size to divide by and is
    /// rejected with [`QueryError::InvalidPage`].
    pub fn new(page: &Page) -> QueryResult<Self> {
        let limit = page.limit.ok_or_else(|| {
            QueryError::invalid_page("page number requires a limit with positive size")
        })?;
        Ok(Self {
            page_no: limit.offset / limit.size + 1,
            size: limit.size,
            offset: limit.offset,
            total: None,
            total_pages: None,
        })
    }

    /// Derive page metadata including total counts from a caller-supplied
    /// row count.
    pub fn with_total(page: &Page, total: i64) -> QueryResult<Self> {
        if total < 0 {
            return Err(QueryError::invalid_page(format!(
                "negative total row count: {total}"
            )));
        }
        let mut ret = Self::new(page)?;
        ret.total = Some(total);
        ret.total_pages = Some((total + ret.size - 1) / ret.size);
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_renders_nothing() {
        assert_eq!(page().sql(), "");
    }

    #[test]
    fn orders_only_no_limit_suffix() {
        let p = page().order(Order::desc("create_at"));
        assert_eq!(p.sql(), "order by create_at desc");
    }

    #[test]
    fn limit_only_no_order_prefix() {
        let p = page().limit(20, 10).unwrap();
        assert_eq!(p.sql(), "limit 20,10");
    }

    #[test]
    fn orders_join_in_insertion_order() {
        let p = page()
            .order(Order::desc("create_at"))
            .order(Order::asc("score"))
            .limit(30, 5)
            .unwrap();
        assert_eq!(p.sql(), "order by create_at desc,score asc limit 30,5");
    }

    #[test]
    fn duplicate_orders_preserved() {
        let p = page().order(Order::asc("a")).order(Order::asc("a"));
        assert_eq!(p.sql(), "order by a asc,a asc");
    }

    #[test]
    fn limit_replaces_previous() {
        let p = page().limit(20, 10).unwrap().limit(30, 5).unwrap();
        assert_eq!(p.sql(), "limit 30,5");
    }

    #[test]
    fn limit_rejects_negative_offset() {
        let err = page().limit(-1, 10).unwrap_err();
        assert!(err.is_invalid_limit());
    }

    #[test]
    fn limit_rejects_non_positive_size() {
        assert!(page().limit(0, 0).unwrap_err().is_invalid_limit());
        assert!(page().limit(0, -5).unwrap_err().is_invalid_limit());
    }

    #[test]
    fn page_no_is_one_based_floor_division() {
        let p = page().limit(20, 10).unwrap();
        assert_eq!(PageRet::new(&p).unwrap().page_no, 3);

        let p = page().limit(0, 1).unwrap();
        assert_eq!(PageRet::new(&p).unwrap().page_no, 1);

        let p = page().limit(25, 10).unwrap();
        assert_eq!(PageRet::new(&p).unwrap().page_no, 3);
    }

    #[test]
    fn page_ret_requires_limit() {
        let err = PageRet::new(&page()).unwrap_err();
        assert!(err.is_invalid_page());
    }

    #[test]
    fn page_ret_echoes_offset_and_size() {
        let p = page().limit(30, 5).unwrap();
        let ret = PageRet::new(&p).unwrap();
        assert_eq!(ret.offset, 30);
        assert_eq!(ret.size, 5);
        assert_eq!(ret.page_no, 7);
        assert_eq!(ret.total, None);
        assert_eq!(ret.total_pages, None);
    }

    #[test]
    fn with_total_derives_page_count() {
        let p = page().limit(0, 10).unwrap();
        let ret = PageRet::with_total(&p, 97).unwrap();
        assert_eq!(ret.total, Some(97));
        assert_eq!(ret.total_pages, Some(10));

        let ret = PageRet::with_total(&p, 100).unwrap();
        assert_eq!(ret.total_pages, Some(10));

        let ret = PageRet::with_total(&p, 0).unwrap();
        assert_eq!(ret.total_pages, Some(0));
    }

    #[test]
    fn with_total_rejects_negative_total() {
        let p = page().limit(0, 10).unwrap();
        assert!(PageRet::with_total(&p, -1).unwrap_err().is_invalid_page());
    }

    #[test]
    fn clone_branches_without_cross_talk() {
        let base = page().order(Order::desc("create_at"));
        let a = base.clone().limit(0, 10).unwrap();
        let b = base.order(Order::asc("score"));
        assert_eq!(a.sql(), "order by create_at desc limit 0,10");
        assert_eq!(b.sql(), "order by create_at desc,score asc");
    }
}
