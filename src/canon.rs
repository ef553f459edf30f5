/// Returns the lexicographically smaller of a sequence and its reversal.
///
/// Skeletons are open paths, not yet closed rings, so reversal is the only
/// symmetry that maps one to an equivalent sequence.
pub fn reflect_canonical<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    let forward = seq.to_vec();
    let mut backward = forward.clone();
    backward.reverse();
    forward.min(backward)
}

/// Returns the lexicographic minimum over every rotation of a sequence and
/// every rotation of its reversal, the full set of `2n` dihedral images.
///
/// Once the center atom closes the ring, all five slots are interchangeable
/// neighbors and the whole pentagon symmetry group applies. The empty
/// sequence is its own canonical form.
pub fn necklace_canonical<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    let n = seq.len();
    if n == 0 {
        return Vec::new();
    }

    let mut best = seq.to_vec();
    // Try all rotations and directions.
    for &reverse in &[false, true] {
        let mut candidate = seq.to_vec();
        if reverse {
            candidate.reverse();
        }
        for start in 0..n {
            let rotated: Vec<T> = candidate[start..]
                .iter()
                .chain(candidate[..start].iter())
                .cloned()
                .collect();
            if rotated < best {
                best = rotated;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_canonical_picks_smaller_direction() {
        assert_eq!(reflect_canonical(&[1, 2, 3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(reflect_canonical(&[4, 3, 2, 1]), vec![1, 2, 3, 4]);
        // A palindrome maps to itself.
        assert_eq!(reflect_canonical(&[2, 1, 2]), vec![2, 1, 2]);
    }

    #[test]
    fn test_reflect_canonical_idempotent() {
        let canon = reflect_canonical(&[3, 1, 2]);
        assert_eq!(reflect_canonical(&canon), canon);
    }

    #[test]
    fn test_necklace_canonical_dihedral_images_agree() {
        let base = [1, 2, 3, 4, 5];
        let key = necklace_canonical(&base);

        // All ten rotation/reflection images of the pentagon.
        let mut images: Vec<Vec<i32>> = Vec::new();
        for start in 0..base.len() {
            let rotated: Vec<i32> = base[start..]
                .iter()
                .chain(base[..start].iter())
                .copied()
                .collect();
            let mut reflected = rotated.clone();
            reflected.reverse();
            images.push(rotated);
            images.push(reflected);
        }
        assert_eq!(images.len(), 10);
        for image in images {
            assert_eq!(
                necklace_canonical(&image),
                key,
                "image {:?} missed the shared key",
                image
            );
        }
    }

    #[test]
    fn test_necklace_canonical_examples() {
        assert_eq!(necklace_canonical(&[2, 3, 4, 5, 1]), vec![1, 2, 3, 4, 5]);
        assert_eq!(necklace_canonical(&[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
        assert_eq!(necklace_canonical(&[1, 5, 4, 3, 2]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_necklace_canonical_idempotent() {
        let canon = necklace_canonical(&[3, 1, 4, 1, 5]);
        assert_eq!(necklace_canonical(&canon), canon);
    }

    #[test]
    fn test_degenerate_sequences() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(reflect_canonical(&empty), empty);
        assert_eq!(necklace_canonical(&empty), empty);
        assert_eq!(necklace_canonical(&[7]), vec![7]);
    }
}
