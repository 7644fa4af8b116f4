#![cfg(feature = "heavy")]
use lcs_dp::LcsSession;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_stress_lcs_medium() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 5_000);
    let t = random_dna(&mut rng, 5_000);
    let lcs = LcsSession::new(&s, &t);
    let len = lcs.length();
    assert!(len <= 5_000);
    assert_eq!(lcs.values().len(), len);
    for w in lcs.index_pairs().windows(2) {
        assert!(w[0].left < w[1].left && w[0].right < w[1].right);
    }
}
