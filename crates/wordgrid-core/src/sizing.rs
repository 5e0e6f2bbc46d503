use crate::normalize::normalize;
use crate::types::Phrase;

/// Square grid dimension derived from phrase-length statistics.
///
/// Starts from the longest phrase plus one, grows with the average length
/// scaled by phrase count, and never exceeds the longest phrase plus five.
pub fn estimate_size(phrases: &[Phrase]) -> usize {
    let lengths: Vec<usize> = phrases
        .iter()
        .map(|p| normalize(&p.text).chars().count())
        .collect();
    estimate_size_from_lengths(&lengths)
}

pub(crate) fn estimate_size_from_lengths(lengths: &[usize]) -> usize {
    let count = lengths.len();
    if count == 0 {
        return 1;
    }

    let max_len = lengths.iter().copied().max().unwrap_or(0);
    let avg_len = lengths.iter().sum::<usize>() as f64 / count as f64;

    let factor = if count <= 5 {
        1.5
    } else if count <= 10 {
        1.8
    } else {
        2.0
    };

    let base = max_len + 1;
    let scaled = (avg_len * factor) as usize;
    base.max(scaled).min(max_len + 5)
}
