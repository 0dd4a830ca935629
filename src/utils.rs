use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

use crate::TermID;

/// Counts every element of every chain; a term in N chains gets N.
pub fn count_chain_elements(chains: &[Vec<TermID>]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for chain in chains {
        for term in chain {
            *counts.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    counts
}

/// Indices of `terms` ordered by (count ascending, input position ascending).
pub fn get_sorted_index(terms: &[TermID], counts: &HashMap<&str, usize>) -> Vec<usize> {
    let count_of = |idx: usize| counts.get(terms[idx].as_str()).copied().unwrap_or(0);
    let mut index: Vec<usize> = (0..terms.len()).collect();
    index.sort_by(|&a, &b| count_of(a).cmp(&count_of(b)).then(a.cmp(&b)));
    index
}

pub fn generate_progress_bar_of_length_and_message(length: u64, message: &str) -> ProgressBar {
    let progress_bar = ProgressBar::new(length);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "[{{elapsed_precise}}] {} {{bar:40.cyan/blue}} {{percent}}%",
                message
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress_bar
}
