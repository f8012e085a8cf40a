use proptest::prelude::*;
use sufx::index::{
    Sequence, SuffixArrayBuilder, SuffixArraySearcher, SuffixTree, SuffixTrie, suffix_array,
};

/// Naive substring check for baseline
fn occurs(text: &[u8], pattern: &[u8]) -> bool {
    pattern.is_empty() || text.windows(pattern.len()).any(|w| w == pattern)
}

fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), 0..max_len)
}

proptest! {
    #[test]
    fn prop_array_is_sorted_permutation(text in dna(64)) {
        let seq = Sequence::with_sentinel(text, b'$').unwrap();
        let tree = SuffixTree::build(&seq).unwrap();
        let sa = SuffixArrayBuilder::from_tree(&tree, seq.len()).unwrap();

        prop_assert_eq!(sa.len(), seq.len());

        let mut seen = vec![false; seq.len()];
        for &offset in sa.iter() {
            prop_assert!(offset < seq.len());
            prop_assert!(!seen[offset]);
            seen[offset] = true;
        }

        for w in sa.windows(2) {
            prop_assert!(seq.suffix(w[0]) < seq.suffix(w[1]));
        }
    }

    #[test]
    fn prop_tree_matches_sorting(text in dna(64)) {
        let seq = Sequence::with_sentinel(text, b'$').unwrap();
        let tree = SuffixTree::build(&seq).unwrap();
        let from_tree = SuffixArrayBuilder::from_tree(&tree, seq.len()).unwrap();
        prop_assert_eq!(from_tree, SuffixArrayBuilder::by_sorting(&seq));
    }

    #[test]
    fn prop_exact_suffix_round_trip(text in dna(48)) {
        let seq = Sequence::with_sentinel(text, b'$').unwrap();
        let sa = SuffixArrayBuilder::by_sorting(&seq);

        for offset in 0..seq.len() {
            let i = suffix_array::search(&sa, seq.as_bytes(), seq.suffix(offset));
            prop_assert_eq!(sa[i], offset);
        }
    }

    #[test]
    fn prop_search_is_lower_bound(text in dna(48), query in dna(6)) {
        let seq = Sequence::with_sentinel(text, b'$').unwrap();
        let sa = SuffixArrayBuilder::by_sorting(&seq);
        let i = suffix_array::search(&sa, seq.as_bytes(), &query);

        prop_assert!(i <= sa.len());
        for &offset in &sa[..i] {
            prop_assert!(seq.suffix(offset) < query.as_slice());
        }
        for &offset in &sa[i..] {
            prop_assert!(seq.suffix(offset) >= query.as_slice());
        }
    }

    #[test]
    fn prop_verified_lookup_agrees_with_scan(text in dna(48), query in dna(5)) {
        let seq = Sequence::with_sentinel(text.clone(), b'$').unwrap();
        let sa = SuffixArrayBuilder::by_sorting(&seq);
        let searcher = SuffixArraySearcher::new(&sa, &seq);

        prop_assert_eq!(searcher.contains(&query), occurs(&text, &query));

        let expected: Vec<usize> = (0..=text.len().saturating_sub(query.len()))
            .filter(|&p| !query.is_empty() && text[p..].starts_with(&query))
            .collect();
        if !query.is_empty() {
            prop_assert_eq!(searcher.positions(&query), expected);
        }
    }

    #[test]
    fn prop_trie_bounded_by_pattern(text in dna(32), pattern in dna(12)) {
        let trie = SuffixTrie::build(&Sequence::raw(text.clone()));
        let matched = trie.search(&pattern);

        prop_assert!(matched <= pattern.len());
        prop_assert!(occurs(&text, &pattern[..matched]));
        prop_assert_eq!(matched == pattern.len(), occurs(&text, &pattern));
        if matched < pattern.len() {
            prop_assert!(!occurs(&text, &pattern[..=matched]));
        }
    }

    #[test]
    fn prop_rebuild_is_identical(text in dna(32)) {
        let seq = Sequence::with_sentinel(text, b'$').unwrap();
        prop_assert_eq!(SuffixTrie::build(&seq), SuffixTrie::build(&seq));

        let a = SuffixArrayBuilder::from_tree(&SuffixTree::build(&seq).unwrap(), seq.len()).unwrap();
        let b = SuffixArrayBuilder::from_tree(&SuffixTree::build(&seq).unwrap(), seq.len()).unwrap();
        prop_assert_eq!(a, b);
    }
}
