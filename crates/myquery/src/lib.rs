//! # myquery
//!
//! A tiny MySQL-flavored WHERE / ORDER BY / LIMIT clause builder.
//!
//! ## Features
//!
//! - **Filter DSL**: build boolean filter trees with `col(..).eq(..)` and
//!   fold them with `.and(..)` / `.or(..)`; every fold parenthesizes, so
//!   rendered clauses never depend on SQL operator precedence
//! - **Literal rendering**: values render as quoted SQL literals (lists for
//!   `in`, raw fragments like `now()`, `null`)
//! - **Pagination**: `Page` renders the `order by ... limit <offset>,<size>`
//!   suffix; `PageRet` derives one-based page metadata for list responses
//! - **Values, not mutation**: every builder step returns a new value, so a
//!   shared template can be branched across threads without cross-talk
//!
//! ## Usage
//!
//! ```ignore
//! use myquery::{col, page, Order, PageRet};
//!
//! let filter = col("name").eq("wubin")
//!     .or(col("school").eq("havard"))
//!     .and(col("age").eq(18));
//! assert_eq!(
//!     filter.sql(),
//!     "((`name` = 'wubin' or `school` = 'havard') and `age` = '18')"
//! );
//!
//! let p = page()
//!     .order(Order::desc("create_at"))
//!     .limit(20, 10)?;
//! assert_eq!(p.sql(), "order by create_at desc limit 20,10");
//! assert_eq!(PageRet::new(&p)?.page_no, 3);
//! # Ok::<(), myquery::QueryError>(())
//! ```
//!
//! The rendered text is a clause fragment for downstream splicing; this
//! crate does not execute SQL, and string literals are quoted as-is without
//! escaping (see [`Value`]).

pub mod criteria;
pub mod error;
pub mod page;
pub mod sort;
pub mod value;

pub use criteria::{Col, Comparator, Connective, Criteria, col};
pub use error::{QueryError, QueryResult};
pub use page::{Order, Page, PageRet, page};
pub use sort::Sort;
pub use value::Value;
