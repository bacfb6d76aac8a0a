//! The age/date converter.
//!
//! `age_days` is a read/write view over `date_release`: computed on read,
//! translated back onto the stored date on write, and rewritten into a
//! release-date comparison when it appears in a query. It has no storage of
//! its own (the field is serde-skipped on [`Card`](crate::model::Card)).

use crate::model::Book;
use chrono::{Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// The stored field every age predicate is rewritten against.
pub const RELEASE_FIELD: &str = "date_release";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl CmpOp {
    /// Age grows as the release date shrinks, so an inequality on the age
    /// must flip direction when restated against the date. Equality and
    /// inequality pass through unchanged.
    pub fn flipped(self) -> CmpOp {
        match self {
            CmpOp::Gt => CmpOp::Lt,
            CmpOp::Ge => CmpOp::Le,
            CmpOp::Lt => CmpOp::Gt,
            CmpOp::Le => CmpOp::Ge,
            other => other,
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
            CmpOp::Eq => "=",
            CmpOp::Ne => "!=",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for CmpOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(CmpOp::Lt),
            "<=" => Ok(CmpOp::Le),
            ">" => Ok(CmpOp::Gt),
            ">=" => Ok(CmpOp::Ge),
            "=" | "==" => Ok(CmpOp::Eq),
            "!=" => Ok(CmpOp::Ne),
            other => Err(format!("Unknown comparison operator: {}", other)),
        }
    }
}

/// One comparison against the stored release-date field, the output of the
/// query rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePredicate {
    pub field: &'static str,
    pub op: CmpOp,
    pub date: NaiveDate,
}

impl DatePredicate {
    /// Applies the predicate to a stored release date. Undated books never
    /// match: an absent date has no age to compare.
    pub fn matches(&self, date_release: Option<NaiveDate>) -> bool {
        let Some(date) = date_release else {
            return false;
        };
        match self.op {
            CmpOp::Lt => date < self.date,
            CmpOp::Le => date <= self.date,
            CmpOp::Gt => date > self.date,
            CmpOp::Ge => date >= self.date,
            CmpOp::Eq => date == self.date,
            CmpOp::Ne => date != self.date,
        }
    }
}

/// The calendar date `days` before `today`, fractional days truncated
/// toward zero. `None` when the count is not finite or the result falls
/// outside chrono's representable date range.
pub fn date_before(today: NaiveDate, days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    let duration = Duration::try_days(days.trunc() as i64)?;
    today.checked_sub_signed(duration)
}

/// Forward conversion: sets `age_days` to the whole number of days between
/// `today` and each book's release date. Books without a release date are
/// left untouched. A future release date yields a negative age; validation
/// rejects such dates at write time, not here.
pub fn compute<'a, I>(today: NaiveDate, books: I)
where
    I: IntoIterator<Item = &'a mut Book>,
{
    for book in books {
        if let Some(released) = book.card.date_release {
            book.card.age_days = Some((today - released).num_days() as f64);
        }
    }
}

/// Inverse conversion: overwrites each book's release date with
/// `today - age_days`. Mirrors the forward guard: books without a release
/// date are skipped, as are books whose `age_days` was never assigned.
///
/// Fractional ages are truncated toward zero; only whole days are
/// meaningful. Ages that would land outside the representable date range
/// leave the stored date unchanged.
pub fn inverse<'a, I>(today: NaiveDate, books: I)
where
    I: IntoIterator<Item = &'a mut Book>,
{
    for book in books {
        if book.card.date_release.is_none() {
            continue;
        }
        if let Some(age) = book.card.age_days {
            if let Some(date) = date_before(today, age) {
                book.card.date_release = Some(date);
            }
        }
    }
}

/// Query rewrite: turns `age_days <op> value` into the equivalent single
/// comparison on the stored release date. Counts beyond the representable
/// date range clamp to the calendar bounds, which keeps the matching set
/// intact: no stored date lies past either bound.
pub fn search(today: NaiveDate, op: CmpOp, value_days: f64) -> DatePredicate {
    let target = date_before(today, value_days).unwrap_or(if value_days >= 0.0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    });
    DatePredicate {
        field: RELEASE_FIELD,
        op: op.flipped(),
        date: target,
    }
}

/// A textual age condition as accepted on the CLI: an optional operator
/// followed by a day count, e.g. `">30"`, `"<= 7"`, or a bare `"30"`
/// (shorthand for equality).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeQuery {
    pub op: CmpOp,
    pub days: f64,
}

impl AgeQuery {
    pub fn to_predicate(&self, today: NaiveDate) -> DatePredicate {
        search(today, self.op, self.days)
    }
}

impl FromStr for AgeQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .char_indices()
            .find(|(_, c)| !matches!(c, '<' | '>' | '=' | '!'))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let (op_str, rest) = s.split_at(split);

        let op = if op_str.is_empty() {
            CmpOp::Eq
        } else {
            op_str.parse()?
        };
        let days: f64 = rest
            .trim()
            .parse()
            .map_err(|_| format!("Invalid day count in age condition: {}", s))?;
        if !days.is_finite() {
            return Err(format!("Invalid day count in age condition: {}", s));
        }
        Ok(AgeQuery { op, days })
    }
}
