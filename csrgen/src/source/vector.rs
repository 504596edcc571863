//! Random dense vectors for kernel inputs

use rand::Rng;

/// Vector of `len` values drawn uniformly from `[0, 1)`
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_vector() {
        let mut rng = StdRng::seed_from_u64(0);
        let v = random_vector(&mut rng, 16);
        assert_eq!(v.len(), 16);
        assert!(v.iter().all(|x| (0.0..1.0).contains(x)));
    }
}
