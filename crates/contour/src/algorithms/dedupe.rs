//! Segment deduplication: drops exact and direction-inverted duplicates from
//! the pool while preserving first-seen order. Comparison uses the normalized
//! endpoint order; surviving segments keep their original direction.

use std::collections::HashSet;

use crate::types::{Segment, Vertex};

pub fn dedupe_segments(pool: Vec<Segment>) -> Vec<Segment> {
    let mut seen: HashSet<(Vertex, Vertex)> = HashSet::with_capacity(pool.len());
    let mut unique = Vec::with_capacity(pool.len());
    for segment in pool {
        if seen.insert(segment.normalized()) {
            unique.push(segment);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(a: (f64, f64), b: (f64, f64)) -> Segment {
        Segment::new(Vertex::quantized(a.0, a.1), Vertex::quantized(b.0, b.1))
            .expect("distinct endpoints")
    }

    #[test]
    fn exact_duplicates_are_removed() {
        let pool = vec![
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((0.0, 0.0), (1.0, 0.0)),
        ];
        assert_eq!(dedupe_segments(pool).len(), 1);
    }

    #[test]
    fn inverted_duplicates_are_removed() {
        let pool = vec![
            segment((0.0, 0.0), (1.0, 0.0)),
            segment((1.0, 0.0), (0.0, 0.0)),
        ];
        let unique = dedupe_segments(pool);
        assert_eq!(unique.len(), 1);
        // The first-seen direction survives.
        assert_eq!(unique[0].start, Vertex::quantized(0.0, 0.0));
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let a = segment((0.0, 0.0), (1.0, 0.0));
        let b = segment((5.0, 5.0), (6.0, 5.0));
        let c = segment((2.0, 2.0), (3.0, 2.0));
        let unique = dedupe_segments(vec![a, b, segment((1.0, 0.0), (0.0, 0.0)), c]);
        assert_eq!(unique, vec![a, b, c]);
    }

    #[test]
    fn at_most_one_direction_survives() {
        let pool = vec![
            segment((0.0, 0.0), (1.0, 1.0)),
            segment((1.0, 1.0), (0.0, 0.0)),
            segment((1.0, 1.0), (2.0, 0.0)),
            segment((0.0, 0.0), (1.0, 1.0)),
            segment((2.0, 0.0), (1.0, 1.0)),
        ];
        let unique = dedupe_segments(pool);
        let mut normalized: Vec<_> = unique.iter().map(Segment::normalized).collect();
        let before = normalized.len();
        normalized.sort();
        normalized.dedup();
        assert_eq!(normalized.len(), before);
        assert_eq!(unique.len(), 2);
    }
}
