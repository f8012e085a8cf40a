#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::index::{Sequence, SuffixArrayBuilder, SuffixArraySearcher, SuffixTree};

fuzz_target!(|input: (&[u8], &[u8])| {
    let (text, query) = input;

    // NUL sentinel: rejected only if the text already contains one
    let Ok(seq) = Sequence::with_sentinel(text.to_vec(), 0) else {
        return;
    };

    let tree = SuffixTree::build(&seq).expect("sentinel-terminated sequence");
    let sa = SuffixArrayBuilder::from_tree(&tree, seq.len()).expect("well-formed tree");
    assert_eq!(sa, SuffixArrayBuilder::by_sorting(&seq));

    let searcher = SuffixArraySearcher::new(&sa, &seq);
    let range = searcher.range(query);
    assert!(range.start <= range.end && range.end <= sa.len());
});
