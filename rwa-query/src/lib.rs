//! Filter, sort and aggregate pipeline for small in-memory record lists.
//!
//! Every list view in the dashboard has the same shape: a fixed slice of
//! records, a set of user-selected criteria, the rows that satisfy all of
//! them, and a few summary metrics derived from those rows. This crate owns
//! that shape once so that pages only declare *which* criteria apply.
//!
//! Criteria are [`Predicate`]s. A [`Pipeline`] combines them by logical AND,
//! optionally orders the surviving rows, and hands them to a reducer. The
//! reducer helpers in [`aggregate`] guard every division, so an empty view
//! reports zeros rather than NaN.

pub mod aggregate;

use std::cmp::Ordering;
use std::fmt::Debug;
use std::str::FromStr;

#[cfg(feature = "derive")]
pub use rwa_query_derive::Searchable;

// ── Predicate ────────────────────────────────────────────────────────────────

/// A single filter criterion over records of type `T`.
///
/// Predicates are pure: the same record always yields the same answer, and
/// evaluating a predicate never mutates the record.
pub trait Predicate<T>: Send + Sync {
    /// Test whether `record` satisfies this criterion.
    fn matches(&self, record: &T) -> bool;

    /// Short name of the criterion, used in trace output.
    fn label(&self) -> &str;
}

// ── Choice ───────────────────────────────────────────────────────────────────

/// An "all or one value" selection, as offered by a select box.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Choice<V> {
    /// No restriction.
    Any,
    /// Only records whose field equals the value.
    Only(V),
}

impl<V> Default for Choice<V> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<V: PartialEq> Choice<V> {
    /// Does this selection admit `value`?
    pub fn admits(&self, value: &V) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(selected) => selected == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }

    pub fn selected(&self) -> Option<&V> {
        match self {
            Choice::Any => None,
            Choice::Only(value) => Some(value),
        }
    }

    /// Select `value`, or clear the selection if `value` is already selected.
    pub fn toggled(self, value: V) -> Self {
        match self {
            Choice::Only(current) if current == value => Choice::Any,
            _ => Choice::Only(value),
        }
    }
}

impl<V: FromStr> Choice<V> {
    /// Parse a select-box value. `"all"` and the empty string mean [`Choice::Any`].
    pub fn parse(raw: &str) -> Result<Self, V::Err> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Ok(Choice::Any);
        }
        raw.parse().map(Choice::Only)
    }
}

// ── Searchable ───────────────────────────────────────────────────────────────

/// A record that can be matched by free-text search.
///
/// Usually derived: `#[derive(Searchable)] #[search(name, location)]`.
pub trait Searchable {
    /// The text fields a search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

// ── Built-in predicates ──────────────────────────────────────────────────────

/// Exact match of one enum-like field against a [`Choice`].
pub struct Exact<T, V> {
    label: String,
    choice: Choice<V>,
    field: fn(&T) -> V,
}

impl<T, V> Exact<T, V> {
    pub fn new(label: impl Into<String>, choice: Choice<V>, field: fn(&T) -> V) -> Self {
        Self {
            label: label.into(),
            choice,
            field,
        }
    }
}

impl<T, V> Predicate<T> for Exact<T, V>
where
    V: PartialEq + Send + Sync,
{
    fn matches(&self, record: &T) -> bool {
        self.choice.admits(&(self.field)(record))
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Inclusive numeric range over one field.
pub struct InRange<T> {
    label: String,
    min: f64,
    max: f64,
    field: fn(&T) -> f64,
}

impl<T> InRange<T> {
    pub fn new(label: impl Into<String>, min: f64, max: f64, field: fn(&T) -> f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            field,
        }
    }
}

impl<T> Predicate<T> for InRange<T> {
    fn matches(&self, record: &T) -> bool {
        let value = (self.field)(record);
        value >= self.min && value <= self.max
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Case-insensitive substring search over [`Searchable::search_fields`].
///
/// A blank term matches every record.
#[derive(Clone, Debug)]
pub struct TextSearch {
    needle: String,
}

impl TextSearch {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }
}

impl<T: Searchable> Predicate<T> for TextSearch {
    fn matches(&self, record: &T) -> bool {
        self.is_blank()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }

    fn label(&self) -> &str {
        "search"
    }
}

/// A labelled closure, for criteria that do not fit the built-in shapes.
pub struct Where<F> {
    label: String,
    test: F,
}

impl<F> Where<F> {
    pub fn new(label: impl Into<String>, test: F) -> Self {
        Self {
            label: label.into(),
            test,
        }
    }
}

impl<T, F> Predicate<T> for Where<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn matches(&self, record: &T) -> bool {
        (self.test)(record)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

// ── Pipeline ─────────────────────────────────────────────────────────────────

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Conjunction of predicates plus an optional ordering.
///
/// Applying a pipeline never mutates its input. Without an ordering the
/// output keeps input order; with one, the sort is stable so ties keep
/// input order too.
pub struct Pipeline<T> {
    predicates: Vec<Box<dyn Predicate<T>>>,
    order: Option<Comparator<T>>,
}

/// Rows that survived a pipeline together with the reducer's summary.
#[derive(Debug)]
pub struct Outcome<'a, T, S> {
    pub rows: Vec<&'a T>,
    pub summary: S,
}

impl<T: 'static> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Pipeline<T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
            order: None,
        }
    }

    /// Add an arbitrary predicate.
    pub fn filter(mut self, predicate: impl Predicate<T> + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Add an exact-match criterion. [`Choice::Any`] adds nothing.
    pub fn choice<V>(self, label: &str, choice: Choice<V>, field: fn(&T) -> V) -> Self
    where
        V: PartialEq + Send + Sync + 'static,
    {
        if choice.is_any() {
            self
        } else {
            self.filter(Exact::new(label, choice, field))
        }
    }

    /// Add an inclusive range criterion.
    pub fn range(self, label: &str, min: f64, max: f64, field: fn(&T) -> f64) -> Self {
        self.filter(InRange::new(label, min, max, field))
    }

    /// Add a free-text criterion. A blank term adds nothing.
    pub fn search(self, term: &str) -> Self
    where
        T: Searchable,
    {
        let search = TextSearch::new(term);
        if search.is_blank() {
            self
        } else {
            self.filter(search)
        }
    }

    /// Order surviving rows with `cmp`.
    pub fn sort_by(mut self, cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.order = Some(Box::new(cmp));
        self
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.label()).collect()
    }

    /// True when `record` satisfies every predicate.
    pub fn admits(&self, record: &T) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Filter (and order) `records`.
    pub fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        let mut rows: Vec<&'a T> = records.iter().filter(|r| self.admits(r)).collect();
        if let Some(order) = &self.order {
            rows.sort_by(|a, b| order(*a, *b));
        }
        tracing::trace!(
            predicates = ?self.labels(),
            input = records.len(),
            output = rows.len(),
            "pipeline applied"
        );
        rows
    }

    /// Filter `records`, then summarise the surviving rows with `reducer`.
    pub fn run<'a, S>(&self, records: &'a [T], reducer: impl FnOnce(&[&'a T]) -> S) -> Outcome<'a, T, S> {
        let rows = self.apply(records);
        let summary = reducer(&rows);
        Outcome { rows, summary }
    }
}

impl<T> Debug for Pipeline<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field(
                "predicates",
                &self.predicates.iter().map(|p| p.label()).collect::<Vec<_>>(),
            )
            .field("sorted", &self.order.is_some())
            .finish()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Kind {
        Gpu,
        Energy,
    }

    impl FromStr for Kind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "gpu" => Ok(Kind::Gpu),
                "energy" => Ok(Kind::Energy),
                other => Err(format!("unknown kind '{other}'")),
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Row {
        id: u32,
        name: String,
        kind: Kind,
        price: f64,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str()]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "GPU Cluster #3".into(), kind: Kind::Gpu, price: 25.0 },
            Row { id: 2, name: "Solar Farm #42".into(), kind: Kind::Energy, price: 12.0 },
            Row { id: 3, name: "GPU Cluster #7".into(), kind: Kind::Gpu, price: 95.0 },
            Row { id: 4, name: "Wind Farm #15".into(), kind: Kind::Energy, price: 32.0 },
        ]
    }

    fn ids(rows: &[&Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_pipeline_keeps_everything_in_order() {
        let data = rows();
        let out = Pipeline::<Row>::new().apply(&data);
        assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn any_choice_adds_no_predicate() {
        let pipeline = Pipeline::<Row>::new().choice("kind", Choice::Any, |r: &Row| r.kind);
        assert_eq!(pipeline.predicate_count(), 0);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let data = rows();
        let out = Pipeline::<Row>::new()
            .choice("kind", Choice::Only(Kind::Gpu), |r: &Row| r.kind)
            .range("price", 0.0, 50.0, |r: &Row| r.price)
            .apply(&data);
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let data = rows();
        let out = Pipeline::<Row>::new()
            .range("price", 12.0, 32.0, |r: &Row| r.price)
            .apply(&data);
        assert_eq!(ids(&out), vec![1, 2, 4]);
    }

    #[test]
    fn search_is_case_insensitive_and_blank_matches_all() {
        let data = rows();
        assert_eq!(ids(&Pipeline::<Row>::new().search("farm").apply(&data)), vec![2, 4]);
        assert_eq!(ids(&Pipeline::<Row>::new().search("   ").apply(&data)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let data = rows();
        let out = Pipeline::<Row>::new()
            .sort_by(|a: &Row, b: &Row| {
                (a.kind == Kind::Energy).cmp(&(b.kind == Kind::Energy))
            })
            .apply(&data);
        assert_eq!(ids(&out), vec![1, 3, 2, 4]);
    }

    #[test]
    fn apply_does_not_touch_input() {
        let data = rows();
        let _ = Pipeline::<Row>::new()
            .sort_by(|a: &Row, b: &Row| b.price.total_cmp(&a.price))
            .apply(&data);
        assert_eq!(data, rows());
    }

    #[test]
    fn where_predicate_uses_closure_and_label() {
        let data = rows();
        let pipeline = Pipeline::<Row>::new().filter(Where::new("even", |r: &Row| r.id % 2 == 0));
        assert_eq!(pipeline.labels(), vec!["even"]);
        assert_eq!(ids(&pipeline.apply(&data)), vec![2, 4]);
    }

    #[test]
    fn run_hands_filtered_rows_to_reducer() {
        let data = rows();
        let outcome = Pipeline::<Row>::new()
            .choice("kind", Choice::Only(Kind::Energy), |r: &Row| r.kind)
            .run(&data, |rows| aggregate::sum_by(rows, |r| r.price));
        assert_eq!(outcome.rows.len(), 2);
        assert!((outcome.summary - 44.0).abs() < 1e-9);
    }

    #[test]
    fn choice_parse_and_toggle() {
        assert_eq!(Choice::<Kind>::parse("all"), Ok(Choice::Any));
        assert_eq!(Choice::<Kind>::parse(""), Ok(Choice::Any));
        assert_eq!(Choice::<Kind>::parse("gpu"), Ok(Choice::Only(Kind::Gpu)));
        assert!(Choice::<Kind>::parse("bogus").is_err());

        let picked = Choice::Any.toggled(Kind::Gpu);
        assert_eq!(picked, Choice::Only(Kind::Gpu));
        assert_eq!(picked.clone().toggled(Kind::Gpu), Choice::Any);
        assert_eq!(picked.toggled(Kind::Energy), Choice::Only(Kind::Energy));
    }
}
