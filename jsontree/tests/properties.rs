use proptest::prelude::*;

use jsontree::clipboard::MemoryClipboard;
use jsontree::collapse::CollapseState;
use jsontree::render::render;
use jsontree::serialize::to_pretty_string;
use jsontree::{Map, Path, TreeSession, Value};

/// Finite numbers: small integral and fractional values plus any double.
fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1_000_000i64..1_000_000).prop_map(|n| n as f64 / 4.0),
        any::<f64>().prop_filter("finite", |n| n.is_finite()),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_number().prop_map(Value::Number),
        "\\PC{0,8}".prop_map(Value::Text),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::vec(("[a-z.\"\\[\\] ]{0,4}", inner), 0..6)
                .prop_map(|entries| Value::Mapping(entries.into_iter().collect::<Map>())),
        ]
    })
}

/// A value plus an arbitrary subset of its container paths.
fn arb_value_and_state() -> impl Strategy<Value = (Value, CollapseState)> {
    arb_value().prop_flat_map(|value| {
        let paths = value.container_paths();
        let len = paths.len();
        (
            Just(value),
            prop::collection::vec(any::<bool>(), len).prop_map(move |mask| {
                paths
                    .iter()
                    .zip(mask)
                    .filter_map(|(path, on)| on.then(|| path.clone()))
                    .collect::<CollapseState>()
            }),
        )
    })
}

fn expanded_row_count(value: &Value) -> usize {
    match value {
        Value::Sequence(items) if !items.is_empty() => {
            2 + items.iter().map(expanded_row_count).sum::<usize>()
        }
        Value::Mapping(map) if !map.is_empty() => {
            2 + map.values().map(expanded_row_count).sum::<usize>()
        }
        _ => 1,
    }
}

proptest! {
    #[test]
    fn toggling_twice_restores_rendering(
        (value, state) in arb_value_and_state(),
        pick in any::<prop::sample::Index>(),
    ) {
        let paths = value.container_paths();
        prop_assume!(!paths.is_empty());
        let path = &paths[pick.index(paths.len())];

        let twice = state.toggled(path).toggled(path);
        prop_assert_eq!(&twice, &state);
        prop_assert_eq!(render(&value, &twice), render(&value, &state));
    }

    #[test]
    fn copy_is_independent_of_collapse_state((value, state) in arb_value_and_state()) {
        let mut session = TreeSession::new(value.clone());
        for path in state.iter() {
            session.toggle(path);
        }

        let mut clipboard = MemoryClipboard::new();
        let outcome = session.copy(&mut clipboard, std::time::Instant::now());
        prop_assert_eq!(outcome.text, to_pretty_string(&value));
    }

    #[test]
    fn expanded_render_visits_every_node(value in arb_value()) {
        let tree = render(&value, &CollapseState::new());
        prop_assert_eq!(tree.nodes_visited(), value.node_count());
        prop_assert_eq!(tree.len(), expanded_row_count(&value));
    }

    #[test]
    fn collapsed_rendering_never_visits_more(value_and_state in arb_value_and_state()) {
        let (value, state) = value_and_state;
        let tree = render(&value, &state);
        prop_assert!(tree.nodes_visited() <= value.node_count());
        prop_assert!(!tree.is_empty());

        for row in tree.rows() {
            if let Some(affordance) = &row.toggle {
                prop_assert_eq!(affordance.collapsed, state.contains(&affordance.path));
                prop_assert!(value.get(&affordance.path).is_some_and(Value::is_container));
            }
        }
    }

    #[test]
    fn collapse_all_leaves_one_row(value in arb_value()) {
        let mut state = CollapseState::new();
        state.collapse_all(&value);
        prop_assert_eq!(render(&value, &state).len(), 1);
        prop_assert_eq!(state.contains(&Path::root()), value.is_container());
    }

    #[test]
    fn pretty_text_round_trips(value in arb_value()) {
        let reparsed = Value::from_json_str(&to_pretty_string(&value)).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn numbers_round_trip_bit_for_bit(n in arb_number()) {
        let reparsed = Value::from_json_str(&to_pretty_string(&Value::Number(n))).unwrap();
        let back = reparsed.as_f64().unwrap();
        // -0.0 is written as 0
        prop_assert!(back.to_bits() == n.to_bits() || (n == 0.0 && back == 0.0));
    }
}
