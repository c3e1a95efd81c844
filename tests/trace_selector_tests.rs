use plot_style::api::{
    MissingPropertyPolicy, Selection, TraceQuery, sel_trace, sel_trace_by_name, select_traces,
};
use plot_style::core::{Figure, Trace};
use serde_json::json;

fn trace(value: serde_json::Value) -> Trace {
    Trace::from_value(value).expect("trace object")
}

fn names(traces: &[&Trace]) -> Vec<String> {
    traces
        .iter()
        .map(|t| t.name().unwrap_or_default().to_owned())
        .collect()
}

#[test]
fn exactly_one_match_is_returned_unwrapped() {
    let traces = vec![trace(json!({"name": "a"}))];
    let selection = sel_trace(&traces, "a", "name").expect("selection");
    assert_eq!(selection, Selection::Exactly(&traces[0]));
    assert_eq!(selection.single().map(Trace::as_value), Some(&json!({"name": "a"})));
}

#[test]
fn zero_matches_yields_no_match() {
    let traces = vec![trace(json!({"name": "a"}))];
    let selection = sel_trace(&traces, "z", "name").expect("selection");
    assert!(selection.is_empty());
    assert_eq!(
        TraceQuery::new("z").no_match_notice(),
        "No traces match the given criteria of name == z."
    );
}

#[test]
fn multiple_matches_keep_original_order() {
    let traces = vec![
        trace(json!({"name": "a", "uid": 1})),
        trace(json!({"name": "b", "uid": 2})),
        trace(json!({"name": "a", "uid": 3})),
        trace(json!({"name": "c", "uid": 4})),
    ];
    let Selection::Many(found) = sel_trace(&traces, "a", "name").expect("selection") else {
        panic!("expected several matches");
    };
    let uids: Vec<_> = found.iter().map(|t| t.get("uid").cloned()).collect();
    assert_eq!(uids, vec![Some(json!(1)), Some(json!(3))]);
}

#[test]
fn list_target_selects_every_listed_name() {
    let traces: Vec<Trace> = ["a", "b", "c", "b"]
        .iter()
        .map(|n| Trace::new("bar").with_name(*n))
        .collect();
    let selection = sel_trace(&traces, vec!["a", "b"], "name").expect("selection");
    assert_eq!(names(&selection.into_vec()), vec!["a", "b", "b"]);
}

#[test]
fn nested_property_lookup_with_magic_underscore() {
    let traces = vec![
        trace(json!({"name": "t1", "marker": {"color": "red"}})),
        trace(json!({"name": "t2", "marker": {"color": "blue"}})),
        trace(json!({"name": "t3", "marker": {"color": "red"}})),
    ];
    let underscored = sel_trace(&traces, "red", "marker_color").expect("selection");
    let dotted = sel_trace(&traces, "red", "marker.color").expect("selection");
    assert_eq!(underscored, dotted);
    assert_eq!(names(&underscored.into_vec()), vec!["t1", "t3"]);
}

#[test]
fn matching_is_exact() {
    let traces = vec![
        trace(json!({"name": "Alpha"})),
        trace(json!({"name": "alpha"})),
        trace(json!({"name": "alphabet"})),
    ];
    let selection = sel_trace(&traces, "alpha", "name").expect("selection");
    assert_eq!(selection, Selection::Exactly(&traces[1]));
}

#[test]
fn traces_without_the_property_are_skipped_by_default() {
    let traces = vec![
        trace(json!({"name": "a"})),
        trace(json!({"name": "b", "legendgroup": "g"})),
    ];
    let selection = sel_trace(&traces, "g", "legendgroup").expect("selection");
    assert_eq!(selection, Selection::Exactly(&traces[1]));

    let strict = TraceQuery::new("g")
        .with_property("legendgroup")
        .expect("path")
        .with_missing_policy(MissingPropertyPolicy::Error);
    assert!(strict.select(&traces).is_err());
}

#[test]
fn selector_does_not_mutate_and_is_idempotent() {
    let figure = Figure::from_traces(vec![
        trace(json!({"name": "a", "x": [1, 2]})),
        trace(json!({"name": "b"})),
        trace(json!({"name": "a"})),
    ]);
    let before = figure.clone();
    let first = figure.sel_trace("a", "name").expect("selection");
    let second = figure.sel_trace("a", "name").expect("selection");
    assert_eq!(first, second);
    assert_eq!(figure, before);
}

#[test]
fn default_name_variant_and_uniform_variant_agree() {
    let traces: Vec<Trace> = ["a", "b", "a"]
        .iter()
        .map(|n| Trace::new("scatter").with_name(*n))
        .collect();
    let by_name = sel_trace_by_name(&traces, "a").into_vec();
    let uniform = select_traces(&traces, &TraceQuery::new("a"));
    assert_eq!(by_name, uniform);

    let single = select_traces(&traces, &TraceQuery::new("b"));
    assert_eq!(single.len(), 1);
    assert!(select_traces(&traces, &TraceQuery::new("z")).is_empty());
}

#[test]
fn numeric_and_indexed_properties_can_be_matched() {
    let traces = vec![
        trace(json!({"name": "a", "opacity": 0.5, "x": [10, 20]})),
        trace(json!({"name": "b", "opacity": 1, "x": [30, 40]})),
    ];
    let by_opacity = sel_trace(&traces, 0.5, "opacity").expect("selection");
    assert_eq!(by_opacity, Selection::Exactly(&traces[0]));

    let by_first_x = sel_trace(&traces, 30_i64, "x[0]").expect("selection");
    assert_eq!(by_first_x, Selection::Exactly(&traces[1]));

    let float_vs_int = sel_trace(&traces, 1.0, "opacity").expect("selection");
    assert!(float_vs_int.is_empty());
}

#[test]
fn figure_select_traces_matches_free_function() {
    let figure = Figure::new()
        .with_trace(Trace::new("scatter").with_name("a"))
        .with_trace(Trace::new("bar").with_name("b"));
    let query = TraceQuery::new("bar").with_property("type").expect("path");
    assert_eq!(names(&figure.select_traces(&query)), vec!["b"]);
    assert_eq!(figure.select_traces(&query), select_traces(&figure.data, &query));
}

#[test]
fn figure_select_traces_skips_missing_even_under_strict_policy() {
    let figure = Figure::new()
        .with_trace(Trace::new("bar").with_name("a"))
        .with_trace(Trace::from_value(json!({"name": "untyped"})).expect("trace"));
    let strict = TraceQuery::new("bar")
        .with_property("type")
        .expect("path")
        .with_missing_policy(MissingPropertyPolicy::Error);

    assert_eq!(names(&figure.select_traces(&strict)), vec!["a"]);
    assert_eq!(
        figure.select_traces(&strict),
        select_traces(&figure.data, &strict)
    );
    assert!(figure.try_select_traces(&strict).is_err());
}
