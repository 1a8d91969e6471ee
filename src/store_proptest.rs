//! Property-based tests for the key/value store.
//!
//! These tests use proptest to generate keys and values and check that the
//! store keeps its ordering and uniqueness guarantees across rewrites.

#[cfg(test)]
mod proptest_tests {
    use crate::store::KeyValueStore;
    use proptest::collection::{btree_set, vec};
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    const KEY: &str = "[A-Z_][A-Z0-9_]{0,10}";
    const ENV_VALUE: &str = "[ -~\t\n]{0,24}";
    const OUT_VALUE: &str = "[!-~]([ !-~]{0,14}[!-~])?";

    fn store(dir: &TempDir, name: &str) -> KeyValueStore {
        KeyValueStore::new(dir.path().join(name))
    }

    fn keys(store: &KeyValueStore) -> Vec<String> {
        store
            .entries()
            .unwrap()
            .into_iter()
            .map(|entry| entry.key)
            .collect()
    }

    // ============================================================================
    // Round trips
    // ============================================================================

    proptest! {
        /// Property: a value written to a .env file reads back unchanged,
        /// apart from trailing newlines
        #[test]
        fn env_value_survives_rewrite(key in KEY, value in ENV_VALUE) {
            let dir = TempDir::new().unwrap();
            let store = store(&dir, "output.env");

            store.set(&key, &value).unwrap();
            // A second transaction re-parses and rewrites the file.
            store.set("other.key", "x").unwrap();

            let expected = value.trim_end_matches('\n').to_string();
            prop_assert_eq!(store.get(&key).unwrap(), Some(expected));
        }

        /// Property: single line values round trip through a .out file
        #[test]
        fn out_value_survives_rewrite(key in KEY, value in OUT_VALUE) {
            let dir = TempDir::new().unwrap();
            let store = store(&dir, "output.out");

            store.set(&key, &value).unwrap();
            store.set("other.key", "x").unwrap();

            prop_assert_eq!(store.get(&key).unwrap(), Some(value));
        }
    }

    // ============================================================================
    // Ordering and uniqueness
    // ============================================================================

    proptest! {
        /// Property: keys stay in first insertion order and appear once, no
        /// matter how often they are updated
        #[test]
        fn updates_keep_order_and_uniqueness(
            names in btree_set(KEY, 1..8),
            updates in vec(any::<prop::sample::Index>(), 0..10),
        ) {
            let dir = TempDir::new().unwrap();
            let store = store(&dir, "output.env");
            let names: Vec<String> = names.into_iter().collect();

            for name in &names {
                store.set(name, "initial").unwrap();
            }
            for (round, index) in updates.iter().enumerate() {
                let name = index.get(&names);
                store.update(name, &format!("round-{}", round)).unwrap();
            }

            prop_assert_eq!(keys(&store), names);
        }

        /// Property: delete removes exactly one key and repeating it changes
        /// nothing
        #[test]
        fn delete_is_idempotent(
            names in btree_set(KEY, 1..8),
            victim in any::<prop::sample::Index>(),
        ) {
            let dir = TempDir::new().unwrap();
            let store = store(&dir, "output.out");
            let names: Vec<String> = names.into_iter().collect();
            for name in &names {
                store.set(name, "v").unwrap();
            }

            let victim = victim.get(&names).clone();
            store.delete(&victim).unwrap();
            let after_first = fs::read(store.path()).unwrap();
            store.delete(&victim).unwrap();
            let after_second = fs::read(store.path()).unwrap();

            prop_assert_eq!(&after_first, &after_second);
            let expected: Vec<String> = names.into_iter().filter(|n| *n != victim).collect();
            prop_assert_eq!(keys(&store), expected);
        }
    }

    // ============================================================================
    // Validation
    // ============================================================================

    proptest! {
        /// Property: a rejected multiline value never touches a .out file
        #[test]
        fn out_multiline_rejection_leaves_file(
            key in KEY,
            head in "[!-~]{1,8}",
            tail in "[!-~]{1,8}",
        ) {
            let dir = TempDir::new().unwrap();
            let store = store(&dir, "output.out");
            store.set("EXISTING", "value").unwrap();
            let before = fs::read(store.path()).unwrap();

            let result = store.set(&key, &format!("{}\n{}", head, tail));

            prop_assert!(result.is_err());
            prop_assert_eq!(fs::read(store.path()).unwrap(), before);
        }
    }
}
