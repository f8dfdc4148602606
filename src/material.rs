use rand::Rng;

/// Material names the renderer's scene loader binds to concrete material
/// definitions. Order matters: it is the index space for random picks.
pub const MATERIALS: [&str; 16] = [
    "ground", "mat1", "mat2", "mat3", "mat4", "mat5", "mat6", "mat7", "metal1", "metal2",
    "metal3", "metal4", "metal5", "metal6", "glass", "diamond",
];

/// Pick one palette entry uniformly at random.
pub fn pick<R: Rng>(rng: &mut R) -> &'static str {
    MATERIALS[rng.gen_range(0..MATERIALS.len())]
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn pick_returns_palette_members() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            assert!(MATERIALS.contains(&pick(&mut rng)));
        }
    }

    #[test]
    fn zeroed_rng_picks_the_first_entry() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(pick(&mut rng), "ground");
    }
}
