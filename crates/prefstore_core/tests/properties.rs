//! Property tests for the set/get/remove contract.

use prefstore_core::{BackendKind, BackendSelector, Namespace, UserDefaults, PROBE_SUFFIX};
use prefstore_storage::{FileBackend, InMemoryBackend, KeyValueBackend};
use prefstore_testkit::{key_strategy, op_sequence_strategy, text_value_strategy, FaultyBackend, Op};
use proptest::prelude::*;
use std::collections::HashMap;

fn memory_store() -> UserDefaults<InMemoryBackend> {
    UserDefaults::with_backend(Namespace::default(), BackendKind::Memory, InMemoryBackend::new())
}

/// Replays `ops` against `prefs` and a plain map, comparing every read.
fn check_against_model<B: KeyValueBackend>(prefs: &mut UserDefaults<B>, ops: &[Op]) {
    let mut model: HashMap<String, String> = HashMap::new();
    for op in ops {
        match op {
            Op::Set(k, v) => {
                prefs.set(k, v);
                model.insert(k.clone(), v.clone());
            }
            Op::Get(k) => assert_eq!(prefs.get(k), model.get(k).cloned()),
            Op::Remove(k) => {
                prefs.remove(k);
                model.remove(k);
            }
        }
    }

    let mut expected: Vec<String> = model.into_keys().collect();
    expected.sort();
    assert_eq!(prefs.keys(), expected);
}

proptest! {
    #[test]
    fn set_then_get_returns_value(key in key_strategy(), value in text_value_strategy()) {
        let mut prefs = memory_store();
        prefs.set(&key, &value);
        prop_assert_eq!(prefs.get(&key), Some(value));
    }

    #[test]
    fn remove_then_get_is_absent(key in key_strategy(), value in text_value_strategy()) {
        let mut prefs = memory_store();
        prefs.set(&key, &value);
        prefs.remove(&key);
        prop_assert_eq!(prefs.get(&key), None);
    }

    #[test]
    fn never_set_is_absent(key in key_strategy()) {
        let prefs = memory_store();
        prop_assert_eq!(prefs.get(&key), None);
    }

    #[test]
    fn repeated_set_is_idempotent(key in key_strategy(), value in text_value_strategy()) {
        let mut prefs = memory_store();
        prefs.set(&key, &value);
        prefs.set(&key, &value);
        prop_assert_eq!(prefs.get(&key), Some(value));
        prop_assert_eq!(prefs.keys().len(), 1);
    }

    #[test]
    fn memory_matches_model(ops in op_sequence_strategy(64)) {
        check_against_model(&mut memory_store(), &ops);
    }

    #[test]
    fn file_matches_model(ops in op_sequence_strategy(32)) {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(&dir.path().join("prefs.json")).unwrap();
        let mut prefs = UserDefaults::with_backend(Namespace::default(), BackendKind::Persistent, backend);
        check_against_model(&mut prefs, &ops);
    }

    #[test]
    fn rejected_writes_keep_prior_state(ops in op_sequence_strategy(32), key in key_strategy()) {
        let backend = FaultyBackend::new();
        let faults = backend.faults();
        let mut prefs = UserDefaults::with_backend(Namespace::default(), BackendKind::Session, backend);

        prefs.set(&key, "original");
        faults.fail_writes(true);
        faults.fail_removes(true);
        for op in &ops {
            match op {
                Op::Set(_, v) => prefs.set(&key, v),
                Op::Remove(_) => prefs.remove(&key),
                Op::Get(_) => {}
            }
        }
        let got = prefs.get(&key);
        prop_assert_eq!(got.as_deref(), Some("original"));
    }

    #[test]
    fn stored_values_survive_reselection(
        key in prop_oneof![Just(PROBE_SUFFIX.to_string()), key_strategy()],
        value in text_value_strategy(),
    ) {
        let backend = InMemoryBackend::new();
        let mut prefs = UserDefaults::with_backend(Namespace::default(), BackendKind::Persistent, backend.clone());
        prefs.set(&key, &value);

        let selected = BackendSelector::new(Namespace::default())
            .candidate(BackendKind::Persistent, move || Ok(backend))
            .select(InMemoryBackend::new);
        prop_assert_eq!(selected.kind, BackendKind::Persistent);

        let reopened = UserDefaults::from_selected(Namespace::default(), selected);
        prop_assert_eq!(reopened.get(&key), Some(value));
        prop_assert_eq!(reopened.keys(), vec![key]);
    }

    #[test]
    fn integers_survive(key in key_strategy(), value in any::<i32>()) {
        let mut prefs = memory_store();
        prefs.set_integer(&key, value);
        prop_assert_eq!(prefs.get_integer(&key, value.wrapping_add(1)), value);
    }
}
