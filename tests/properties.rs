//! Property tests: the tree behaves like the set of strings it was built from

use proptest::prelude::*;
use radix_db::RadixTree;
use std::collections::HashSet;

/// Small alphabets so that strings share prefixes and force splits
fn word_set() -> impl Strategy<Value = HashSet<String>> {
    prop::collection::hash_set("[abc]{1,6}|[xé]{1,4}", 0..40)
}

fn probe() -> impl Strategy<Value = String> {
    "[abcxé]{0,7}"
}

fn proper_prefix(prefix: &str, of: &str) -> bool {
    prefix.len() < of.len() && of.starts_with(prefix)
}

proptest! {
    #[test]
    fn enumeration_matches_input(words in word_set()) {
        let tree = RadixTree::from_strings(&words);
        let listed: Vec<String> = tree.iter().collect();

        prop_assert_eq!(listed.len(), words.len());
        prop_assert_eq!(listed.into_iter().collect::<HashSet<_>>(), words.clone());
        prop_assert_eq!(tree.len(), words.len());
    }

    #[test]
    fn contains_matches_membership(words in word_set(), target in probe()) {
        let tree = RadixTree::from_strings(&words);
        prop_assert_eq!(tree.contains(&target), words.contains(&target));
        for word in &words {
            prop_assert!(tree.contains(word));
        }
    }

    #[test]
    fn parents_are_stored_proper_prefixes(words in word_set(), target in probe()) {
        let tree = RadixTree::from_strings(&words);
        let expected: HashSet<String> = words
            .iter()
            .filter(|s| proper_prefix(s, &target))
            .cloned()
            .collect();

        let parents = tree.parents(&target);
        prop_assert_eq!(parents.len(), expected.len());
        prop_assert_eq!(parents.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn kids_are_stored_proper_extensions(words in word_set(), target in probe()) {
        prop_assume!(!target.is_empty());
        let tree = RadixTree::from_strings(&words);
        let expected: HashSet<String> = words
            .iter()
            .filter(|s| proper_prefix(&target, s))
            .cloned()
            .collect();

        let kids = tree.kids(&target);
        prop_assert_eq!(kids.len(), expected.len());
        prop_assert_eq!(kids.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn structural_results_cover_stored_results(words in word_set(), target in probe()) {
        let tree = RadixTree::from_strings(&words);

        let structural: HashSet<String> = tree.structural_kids(&target).into_iter().collect();
        for kid in tree.kids(&target) {
            prop_assert!(structural.contains(&kid));
        }
        for node in &structural {
            prop_assert!(proper_prefix(&target, node));
        }

        let inner: HashSet<String> = tree.structural_parents(&target).into_iter().collect();
        for parent in tree.parents(&target) {
            prop_assert!(inner.contains(&parent));
        }
        for node in &inner {
            prop_assert!(proper_prefix(node, &target));
        }
    }

    #[test]
    fn reinsertion_is_idempotent(words in word_set()) {
        let mut tree = RadixTree::from_strings(&words);
        let before = tree.clone();
        for word in &words {
            tree.insert(word);
        }
        prop_assert_eq!(tree, before);
    }

    #[test]
    fn records_roundtrip(words in word_set()) {
        let tree = RadixTree::from_strings(&words);
        let restored = RadixTree::from_records(tree.export()).unwrap();

        prop_assert_eq!(&restored, &tree);
        prop_assert_eq!(restored.iter().collect::<HashSet<_>>(), words);
    }

    #[test]
    fn siblings_never_share_a_first_char(words in word_set()) {
        let tree = RadixTree::from_strings(&words);
        let mut stack = vec![tree.root()];
        while let Some(node) = stack.pop() {
            let firsts: Vec<char> = node
                .children()
                .iter()
                .filter_map(|child| child.fragment().chars().next())
                .collect();
            let unique: HashSet<char> = firsts.iter().copied().collect();
            prop_assert_eq!(firsts.len(), node.children().len());
            prop_assert_eq!(unique.len(), firsts.len());
            stack.extend(node.children());
        }
        prop_assert!(!tree.root().is_terminal());
    }
}
