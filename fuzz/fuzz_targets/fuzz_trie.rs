#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::index::{Sequence, SuffixTrie};

fuzz_target!(|input: (&[u8], &[u8])| {
    let (text, pattern) = input;

    // Quadratic construction; keep inputs small
    if text.len() > 512 {
        return;
    }

    let trie = SuffixTrie::build(&Sequence::raw(text.to_vec()));
    let matched = trie.search(pattern);
    assert!(matched <= pattern.len());
    assert!(trie.suffix_count() <= text.len());
});
