use std::collections::HashMap;

use crate::types::BenchTarget;

/// The compiled-in benchmark suite, in run order.
///
/// The checker is pointed at each (file, property) pair with a per-target
/// `--n` iteration budget.
pub fn builtin_suite() -> Vec<BenchTarget> {
    vec![
        BenchTarget::new("Catch.hs", "prop", 1000),
        BenchTarget::new("Mux.hs", "prop_encDec", 11000),
        BenchTarget::new("Mux.hs", "prop_mux", 1000),
        BenchTarget::new("MuxSad.hs", "prop_binSad", 1000),
        BenchTarget::new("Countdown.hs", "prop_lemma3", 1000),
        BenchTarget::new("Countdown.hs", "prop_solutions", 1000),
        BenchTarget::new("Huffman.hs", "prop_decEnc", 1000),
        BenchTarget::new("Huffman.hs", "prop_optimal", 1000),
        BenchTarget::new("Mate.hs", "prop_checkmate", 1000),
        BenchTarget::new("Mux.hs", "prop_encode", 1000),
        BenchTarget::new("RedBlack.hs", "prop_insertRB", 1000),
        BenchTarget::new("RegExp.hs", "prop_regex", 1000),
        BenchTarget::new("SumPuz.hs", "prop_Sound", 1000),
        BenchTarget::new("Turner.hs", "prop_abstr", 1000),
    ]
}

/// Occurrence count per property name across the suite, used as reporting
/// context next to the suite listing
pub fn property_stats(targets: &[BenchTarget]) -> HashMap<String, usize> {
    let mut stats: HashMap<String, usize> = HashMap::new();
    for target in targets {
        *stats.entry(target.property.clone()).or_insert(0) += 1;
    }
    stats
}
