use electric_border::noise::{octaved_noise, scalar_hash, value_noise_2d, NoiseTuning};

/// Small deterministic LCG so the randomized checks are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

#[test]
fn hash_and_noise_are_pure() {
    for &(x, y) in &[(0.0, 0.0), (1.5, -2.25), (123.456, 7.0), (-9876.5, 0.125)] {
        assert_eq!(scalar_hash(x).to_bits(), scalar_hash(x).to_bits());
        assert_eq!(value_noise_2d(x, y).to_bits(), value_noise_2d(x, y).to_bits());
    }
    let tuning = NoiseTuning::default();
    let a = octaved_noise(0.3, 1.7, 1, 0.12, &tuning);
    let b = octaved_noise(0.3, 1.7, 1, 0.12, &tuning);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn hash_stays_in_unit_interval() {
    let mut rng = Lcg(7);
    for _ in 0..10_000 {
        let x = rng.range(-1.0e4, 1.0e4);
        let h = scalar_hash(x);
        assert!((0.0..1.0).contains(&h), "hash({x}) = {h}");
    }
}

#[test]
fn value_noise_stays_in_unit_interval() {
    let mut rng = Lcg(42);
    for _ in 0..10_000 {
        let x = rng.range(-5000.0, 5000.0);
        let y = rng.range(-5000.0, 5000.0);
        let n = value_noise_2d(x, y);
        assert!((0.0..1.0).contains(&n), "noise({x}, {y}) = {n}");
    }
}

#[test]
fn value_noise_hits_lattice_values() {
    // At integer coordinates the smoothed offsets are zero.
    assert_eq!(value_noise_2d(3.0, 2.0), scalar_hash(3.0 + 2.0 * 57.0));
    assert_eq!(value_noise_2d(-1.0, 0.0), scalar_hash(-1.0));
}

#[test]
fn value_noise_is_continuous() {
    let mut rng = Lcg(3);
    for _ in 0..1000 {
        let x = rng.range(-100.0, 100.0);
        let y = rng.range(-100.0, 100.0);
        let d = (value_noise_2d(x, y) - value_noise_2d(x + 1e-6, y + 1e-6)).abs();
        assert!(d < 1e-4, "jump of {d} at ({x}, {y})");
    }
}

#[test]
fn zero_flatness_drops_first_octave_only() {
    let one = NoiseTuning { octaves: 1, ..NoiseTuning::default() };
    assert_eq!(octaved_noise(0.37, 2.0, 0, 1.0, &one), 0.0);

    let two = NoiseTuning { octaves: 2, ..NoiseTuning::default() };
    let second = 0.7 * value_noise_2d(16.0 * 0.37, 2.0 * 16.0 * 0.3);
    assert!((octaved_noise(0.37, 2.0, 0, 1.0, &two) - second).abs() < 1e-12);
}

#[test]
fn octave_sum_is_bounded_by_amplitudes() {
    let tuning = NoiseTuning::default();
    let bound = tuning.max_output(0.5);
    let mut rng = Lcg(11);
    for _ in 0..2000 {
        let v = octaved_noise(rng.range(0.0, 8.0), rng.range(0.0, 100.0), 0, 0.5, &tuning);
        assert!(v >= 0.0 && v < bound, "{v} outside [0, {bound})");
    }
}

#[test]
fn seeds_decorrelate_channels() {
    let tuning = NoiseTuning::default();
    let n = 400;
    let xs: Vec<f64> = (0..n).map(|i| octaved_noise(i as f64 / n as f64 * 8.0, 1.25, 0, 1.0, &tuning)).collect();
    let ys: Vec<f64> = (0..n).map(|i| octaved_noise(i as f64 / n as f64 * 8.0, 1.25, 1, 1.0, &tuning)).collect();

    let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;
    let (mx, my) = (mean(&xs), mean(&ys));
    let cov: f64 = xs.iter().zip(&ys).map(|(x, y)| (x - mx) * (y - my)).sum();
    let vx: f64 = xs.iter().map(|x| (x - mx).powi(2)).sum();
    let vy: f64 = ys.iter().map(|y| (y - my).powi(2)).sum();
    let correlation = cov / (vx * vy).sqrt();
    assert!(correlation.abs() < 0.5, "channels correlated: {correlation}");
    assert!(xs.iter().zip(&ys).filter(|(x, y)| x != y).count() > n - 5);
}

#[test]
fn noise_evolves_over_time() {
    let tuning = NoiseTuning::default();
    let a = octaved_noise(0.5, 0.0, 0, 1.0, &tuning);
    let b = octaved_noise(0.5, 1.0, 0, 1.0, &tuning);
    assert_ne!(a, b);
}
