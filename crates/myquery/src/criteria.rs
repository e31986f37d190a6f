//! Filter predicates and AND/OR composition.
//!
//! This module provides the WHERE-clause half of the DSL: [`col`] opens a
//! column context, comparator methods anchor a leaf [`Criteria`], and
//! [`Criteria::and`] / [`Criteria::or`] fold further nodes in.
//!
//! Folding is strictly left-associative and every fold step parenthesizes
//! the whole accumulated tree, so rendered clauses never depend on SQL
//! operator precedence:
//!
//! ```ignore
//! use myquery::col;
//!
//! let q = col("name").eq("wubin")
//!     .or(col("school").eq("havard"))
//!     .and(col("age").eq(18));
//! assert_eq!(q.sql(), "((`name` = 'wubin' or `school` = 'havard') and `age` = '18')");
//! ```
//!
//! Combinators consume `self` and return a new tree; a previously returned
//! node is never mutated. Clone a prefix to branch off a shared template.

use crate::value::Value;

/// Comparison operator for a leaf predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `like`
    Like,
    /// `in`
    In,
    /// `not in`
    NotIn,
    /// `is null`
    IsNull,
    /// `is not null`
    IsNotNull,
}

impl Comparator {
    /// SQL text for this operator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Ne => "!=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Like => "like",
            Comparator::In => "in",
            Comparator::NotIn => "not in",
            Comparator::IsNull => "is null",
            Comparator::IsNotNull => "is not null",
        }
    }
}

/// Logical connective joining two subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    /// `and`
    And,
    /// `or`
    Or,
}

impl Connective {
    /// SQL text for this connective.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
        }
    }
}

/// Open a column context for building a leaf predicate.
///
/// The column name is rendered backtick-quoted as-is; no identifier
/// escaping beyond that is performed.
///
/// # Example
/// ```ignore
/// let q = myquery::col("name").eq("wubin");
/// ```
pub fn col(name: impl Into<String>) -> Col {
    Col { name: name.into() }
}

/// A column context positioned at "no predicate yet".
///
/// Each comparator method consumes the context and returns an immutable
/// leaf [`Criteria`].
#[derive(Debug, Clone)]
pub struct Col {
    name: String,
}

impl Col {
    /// `` `col` = value ``
    pub fn eq(self, value: impl Into<Value>) -> Criteria {
        self.cmp(Comparator::Eq, value.into())
    }

    /// `` `col` != value ``
    pub fn ne(self, value: impl Into<Value>) -> Criteria {
        self.cmp(Comparator::Ne, value.into())
    }

    /// `` `col` < value ``
    pub fn lt(self, value: impl Into<Value>) -> Criteria {
        self.cmp(Comparator::Lt, value.into())
    }

    /// `` `col` <= value ``
    pub fn lte(self, value: impl Into<Value>) -> Criteria {
        self.cmp(Comparator::Lte, value.into())
    }

    /// `` `col` > value ``
    pub fn gt(self, value: impl Into<Value>) -> Criteria {
        self.cmp(Comparator::Gt, value.into())
    }

    /// `` `col` >= value ``
    pub fn gte(self, value: impl Into<Value>) -> Criteria {
        self.cmp(Comparator::Gte, value.into())
    }

    /// `` `col` like pattern ``
    pub fn like(self, pattern: impl Into<Value>) -> Criteria {
        self.cmp(Comparator::Like, pattern.into())
    }

    /// `` `col` in (values...) ``
    ///
    /// A non-list value is treated as a one-element list. An empty list
    /// renders the constant `1=0`.
    pub fn in_list(self, value: impl Into<Value>) -> Criteria {
        self.cmp(Comparator::In, coerce_list(value.into()))
    }

    /// `` `col` not in (values...) ``
    ///
    /// A non-list value is treated as a one-element list. An empty list
    /// renders the constant `1=1`.
    pub fn not_in(self, value: impl Into<Value>) -> Criteria {
        self.cmp(Comparator::NotIn, coerce_list(value.into()))
    }

    /// `` `col` is null ``
    pub fn is_null(self) -> Criteria {
        Criteria(CriteriaInner::Cond {
            column: self.name,
            op: Comparator::IsNull,
            value: None,
        })
    }

    /// `` `col` is not null ``
    pub fn is_not_null(self) -> Criteria {
        Criteria(CriteriaInner::Cond {
            column: self.name,
            op: Comparator::IsNotNull,
            value: None,
        })
    }

    fn cmp(self, op: Comparator, value: Value) -> Criteria {
        Criteria(CriteriaInner::Cond {
            column: self.name,
            op,
            value: Some(value),
        })
    }
}

fn coerce_list(value: Value) -> Value {
    match value {
        v @ Value::List(_) => v,
        v => Value::List(vec![v]),
    }
}

/// Internal representation of a [`Criteria`] tree node.
#[derive(Debug, Clone, PartialEq)]
enum CriteriaInner {
    /// Leaf: a single column/operator/value predicate.
    Cond {
        column: String,
        op: Comparator,
        value: Option<Value>,
    },
    /// Composite: two subtrees joined by a connective, always rendered
    /// parenthesized.
    Group {
        left: Box<Criteria>,
        connective: Connective,
        right: Box<Criteria>,
    },
}

/// A boolean filter expression tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria(CriteriaInner);

impl Criteria {
    /// Fold `rhs` in with `and`, wrapping the entire accumulated tree as
    /// the left operand of the new group.
    pub fn and(self, rhs: Criteria) -> Criteria {
        self.group(Connective::And, rhs)
    }

    /// Fold `rhs` in with `or`, wrapping the entire accumulated tree as
    /// the left operand of the new group.
    pub fn or(self, rhs: Criteria) -> Criteria {
        self.group(Connective::Or, rhs)
    }

    fn group(self, connective: Connective, rhs: Criteria) -> Criteria {
        Criteria(CriteriaInner::Group {
            left: Box::new(self),
            connective,
            right: Box::new(rhs),
        })
    }

    /// Render the tree to SQL text.
    ///
    /// Pure and idempotent; the tree is not mutated and repeated calls
    /// yield identical text.
    pub fn sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        #[cfg(feature = "tracing")]
        tracing::trace!(sql = %out, "rendered criteria");
        out
    }

    fn write_sql(&self, out: &mut String) {
        match &self.0 {
            CriteriaInner::Cond { column, op, value } => {
                // Empty in-lists collapse to a constant truth value instead
                // of emitting invalid `in ()`.
                if matches!(op, Comparator::In | Comparator::NotIn) {
                    if let Some(Value::List(items)) = value {
                        if items.is_empty() {
                            out.push_str(match op {
                                Comparator::NotIn => "1=1",
                                _ => "1=0",
                            });
                            return;
                        }
                    }
                }
                out.push('`');
                out.push_str(column);
                out.push('`');
                out.push(' ');
                out.push_str(op.as_sql());
                if let Some(value) = value {
                    out.push(' ');
                    value.write_sql(out);
                }
            }
            CriteriaInner::Group {
                left,
                connective,
                right,
            } => {
                out.push('(');
                left.write_sql(out);
                out.push(' ');
                out.push_str(connective.as_sql());
                out.push(' ');
                right.write_sql(out);
                out.push(')');
            }
        }
    }
}
