#[cfg(feature = "parallel-selection")]
use rayon::prelude::*;
use tracing::{info, trace, warn};

use crate::core::{Figure, PropertyPath, TargetValues, Trace};
use crate::error::{StyleError, StyleResult};

/// What to do with a trace that lacks the queried property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPropertyPolicy {
    /// The trace simply does not match.
    ///
    /// This also hides typos in the property key: a misspelled key matches
    /// nothing and surfaces only as a no-match notice.
    #[default]
    Skip,
    /// Selection fails with [`StyleError::MissingProperty`] on the first
    /// trace without the property.
    Error,
}

/// Result of [`sel_trace`]: no match, exactly one trace, or several in
/// original order.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    NoMatch,
    Exactly(&'a Trace),
    Many(Vec<&'a Trace>),
}

impl<'a> Selection<'a> {
    #[must_use]
    pub fn from_matches(mut matches: Vec<&'a Trace>) -> Self {
        match matches.len() {
            0 => Self::NoMatch,
            1 => Self::Exactly(matches.remove(0)),
            _ => Self::Many(matches),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::NoMatch => 0,
            Self::Exactly(_) => 1,
            Self::Many(traces) => traces.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatch)
    }

    /// The trace when exactly one matched.
    #[must_use]
    pub fn single(&self) -> Option<&'a Trace> {
        match self {
            Self::Exactly(trace) => Some(trace),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<&'a Trace> {
        match self {
            Self::NoMatch => Vec::new(),
            Self::Exactly(trace) => vec![trace],
            Self::Many(traces) => traces,
        }
    }
}

/// Property/value criteria for selecting traces.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceQuery {
    path: PropertyPath,
    targets: TargetValues,
    missing_policy: MissingPropertyPolicy,
}

enum Outcome {
    Matched,
    Rejected,
    Missing,
}

impl TraceQuery {
    /// Matches trace names against `value`.
    #[must_use]
    pub fn new(value: impl Into<TargetValues>) -> Self {
        Self {
            path: PropertyPath::name(),
            targets: value.into(),
            missing_policy: MissingPropertyPolicy::default(),
        }
    }

    /// Matches the property at `prop` (dotted or magic-underscore notation).
    pub fn with_property(mut self, prop: &str) -> StyleResult<Self> {
        self.path = PropertyPath::parse(prop)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_path(mut self, path: PropertyPath) -> Self {
        self.path = path;
        self
    }

    #[must_use]
    pub fn with_missing_policy(mut self, policy: MissingPropertyPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    #[must_use]
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    #[must_use]
    pub fn targets(&self) -> &TargetValues {
        &self.targets
    }

    #[must_use]
    pub fn matches(&self, trace: &Trace) -> bool {
        matches!(self.classify(trace), Outcome::Matched)
    }

    fn classify(&self, trace: &Trace) -> Outcome {
        match trace.resolve(&self.path) {
            Some(value) if self.targets.contains(value) => Outcome::Matched,
            Some(_) => Outcome::Rejected,
            None => Outcome::Missing,
        }
    }

    /// Matching traces in original order.
    ///
    /// Fails only under [`MissingPropertyPolicy::Error`].
    pub fn select<'a>(&self, traces: &'a [Trace]) -> StyleResult<Vec<&'a Trace>> {
        #[cfg(feature = "parallel-selection")]
        let outcomes: Vec<Outcome> = traces.par_iter().map(|t| self.classify(t)).collect();
        #[cfg(not(feature = "parallel-selection"))]
        let outcomes: Vec<Outcome> = traces.iter().map(|t| self.classify(t)).collect();

        let mut selected = Vec::new();
        for (index, (trace, outcome)) in traces.iter().zip(outcomes).enumerate() {
            match outcome {
                Outcome::Matched => selected.push(trace),
                Outcome::Rejected => {}
                Outcome::Missing => {
                    if self.missing_policy == MissingPropertyPolicy::Error {
                        warn!(index, path = %self.path, "trace is missing selected property");
                        return Err(StyleError::MissingProperty {
                            index,
                            path: self.path.to_string(),
                        });
                    }
                }
            }
        }

        trace!(
            path = %self.path,
            candidates = traces.len(),
            selected = selected.len(),
            "selected traces"
        );
        Ok(selected)
    }

    /// Shape-dependent selection; logs [`Self::no_match_notice`] when
    /// nothing matches.
    pub fn sel<'a>(&self, traces: &'a [Trace]) -> StyleResult<Selection<'a>> {
        let selection = Selection::from_matches(self.select(traces)?);
        if selection.is_empty() {
            info!("{}", self.no_match_notice());
        }
        Ok(selection)
    }

    #[must_use]
    pub fn no_match_notice(&self) -> String {
        format!(
            "No traces match the given criteria of {} == {}.",
            self.path, self.targets
        )
    }
}

/// Selects traces whose `prop` equals `value` (or any element of it when it
/// is a list).
///
/// One match yields [`Selection::Exactly`], several yield
/// [`Selection::Many`] in original order. No match yields
/// [`Selection::NoMatch`] plus an `info` notice; it is not an error. Traces
/// without `prop` never match. The only error is a malformed `prop`.
pub fn sel_trace<'a>(
    traces: &'a [Trace],
    value: impl Into<TargetValues>,
    prop: &str,
) -> StyleResult<Selection<'a>> {
    TraceQuery::new(value).with_property(prop)?.sel(traces)
}

/// [`sel_trace`] keyed on the trace name.
pub fn sel_trace_by_name<'a>(traces: &'a [Trace], value: impl Into<TargetValues>) -> Selection<'a> {
    let query = TraceQuery::new(value);
    let selection = Selection::from_matches(select_traces(traces, &query));
    if selection.is_empty() {
        info!("{}", query.no_match_notice());
    }
    selection
}

/// Uniform variant: always a list in original order, no notice.
///
/// Traces without the property are skipped regardless of the query's policy;
/// use [`TraceQuery::select`] for strict selection.
#[must_use]
pub fn select_traces<'a>(traces: &'a [Trace], query: &TraceQuery) -> Vec<&'a Trace> {
    traces.iter().filter(|trace| query.matches(trace)).collect()
}

impl Figure {
    /// [`sel_trace`] over this figure's traces.
    pub fn sel_trace(&self, value: impl Into<TargetValues>, prop: &str) -> StyleResult<Selection<'_>> {
        sel_trace(&self.data, value, prop)
    }

    /// [`select_traces`] over this figure's traces; missing properties are
    /// skipped whatever the query's policy.
    #[must_use]
    pub fn select_traces(&self, query: &TraceQuery) -> Vec<&Trace> {
        select_traces(&self.data, query)
    }

    /// Policy-honouring selection, as [`TraceQuery::select`].
    pub fn try_select_traces(&self, query: &TraceQuery) -> StyleResult<Vec<&Trace>> {
        query.select(&self.data)
    }
}
