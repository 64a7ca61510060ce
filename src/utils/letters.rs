use once_cell::sync::Lazy;

/// Letter frequency weights for filler cells.
/// Roughly tracks English letter frequency so filler text looks plausible;
/// the answer path never draws from this table.
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('e', 90.0),
        ('t', 86.0),
        ('a', 81.0),
        ('o', 75.0),
        ('i', 70.0),
        ('n', 68.0),
        ('s', 63.0),
        ('r', 59.0),
        ('h', 54.0),
        ('l', 40.0),
        ('d', 34.0),
        ('c', 28.0),
        ('u', 26.0),
        ('m', 24.0),
        ('f', 22.0),
        ('p', 18.0),
        ('g', 17.0),
        ('y', 15.0),
        ('w', 13.0),
        ('b', 12.0),
        ('v', 10.0),
        ('k', 8.0),
        ('x', 4.0),
        ('j', 3.0),
        ('q', 2.0),
        ('z', 2.0),
    ]
});

/// Calculate the cumulative distribution for weighted random selection
pub fn get_cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, weight)| {
            cumulative += weight;
            (*ch, cumulative)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_covers_alphabet() {
        assert_eq!(LETTER_DISTRIBUTION.len(), 26);
        for (ch, weight) in LETTER_DISTRIBUTION.iter() {
            assert!(
                ch.is_ascii_lowercase(),
                "letter '{}' should be lowercase",
                ch
            );
            assert!(*weight > 0.0, "letter '{}' should have positive weight", ch);
        }
    }

    #[test]
    fn test_cumulative_distribution() {
        let dist = get_cumulative_distribution();
        assert_eq!(dist.len(), 26);

        // Running sums must be strictly increasing
        for window in dist.windows(2) {
            assert!(window[0].1 < window[1].1);
        }

        let total: f32 = LETTER_DISTRIBUTION.iter().map(|(_, w)| w).sum();
        assert!((dist.last().unwrap().1 - total).abs() < 0.001);
    }
}
