/// Picks the `k` best-scoring numbers and returns them ascending.
///
/// `scores[i]` belongs to number `i + 1`. Ties fall to whatever the stable
/// descending sort leaves first, which is the lower number. That order is an
/// artefact, not a rule.
pub fn top_k(scores: &[f64], k: usize) -> Vec<u8> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut picked: Vec<u8> = indices
        .into_iter()
        .take(k)
        .map(|i| (i + 1) as u8)
        .collect();
    picked.sort_unstable();
    picked
}
