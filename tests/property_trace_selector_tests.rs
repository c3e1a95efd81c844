use plot_style::api::{Selection, TraceQuery, sel_trace, select_traces};
use plot_style::core::Trace;
use proptest::prelude::*;

fn traces_from(names: &[u8]) -> Vec<Trace> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| {
            Trace::new("scatter")
                .with_name(format!("n{n}"))
                .with("uid", i as u64)
        })
        .collect()
}

proptest! {
    #[test]
    fn selected_traces_all_match_and_keep_order(
        names in proptest::collection::vec(0u8..5, 0..40),
        targets in proptest::collection::vec(0u8..5, 1..4)
    ) {
        let traces = traces_from(&names);
        let wanted: Vec<String> = targets.iter().map(|t| format!("n{t}")).collect();
        let query = TraceQuery::new(wanted.clone());
        let selected = select_traces(&traces, &query);

        for trace in &selected {
            let name = trace.name().unwrap_or_default().to_owned();
            prop_assert!(wanted.contains(&name));
        }

        let expected: Vec<&Trace> = traces
            .iter()
            .filter(|t| wanted.iter().any(|w| Some(w.as_str()) == t.name()))
            .collect();
        prop_assert_eq!(&selected, &expected);

        let uids: Vec<u64> = selected
            .iter()
            .filter_map(|t| t.get("uid").and_then(serde_json::Value::as_u64))
            .collect();
        prop_assert!(uids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn shape_follows_match_count_and_is_idempotent(
        names in proptest::collection::vec(0u8..4, 0..24),
        target in 0u8..4
    ) {
        let traces = traces_from(&names);
        let value = format!("n{target}");
        let first = sel_trace(&traces, value.as_str(), "name").expect("selection");
        let second = sel_trace(&traces, value.as_str(), "name").expect("selection");
        prop_assert_eq!(&first, &second);

        let count = names.iter().filter(|n| **n == target).count();
        match (&first, count) {
            (Selection::NoMatch, 0) | (Selection::Exactly(_), 1) => {}
            (Selection::Many(found), n) if n > 1 => {
                prop_assert_eq!(found.len(), n);
            }
            (other, n) => {
                prop_assert!(false, "unexpected shape {:?} for {} matches", other, n);
            }
        }
    }
}
