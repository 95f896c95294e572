//! "Did you mean?" lookup for undefined names.
//!
//! Candidates are the names visible from the scope of the failed lookup.
//! The allowed edit distance grows with the length of the misspelled name
//! so short names only match near-identical candidates.

/// Levenshtein distance over `char`s.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &b_char) in b_chars.iter().enumerate() {
            let substitution = prev[j] + usize::from(a_char != b_char);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

fn threshold(len: usize) -> usize {
    match len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        _ => 3,
    }
}

/// Closest candidate within the length-based threshold. Ties go to the
/// candidate seen first.
pub fn suggest_similar<'a>(name: &str, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let limit = threshold(name.chars().count());
    let mut best: Option<(&'a str, usize)> = None;

    for candidate in candidates {
        if candidate == name || candidate.len().abs_diff(name.len()) > limit {
            continue;
        }
        let distance = edit_distance(name, candidate);
        let closer = match best {
            Some((_, best_distance)) => distance < best_distance,
            None => true,
        };
        if distance <= limit && closer {
            best = Some((candidate, distance));
        }
    }

    best.map(|(candidate, _)| candidate)
}
