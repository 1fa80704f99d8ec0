use fastbits::sampler::sample;
use rand::{ rngs::StdRng, SeedableRng };

const NUM_BITS: i32 = 64; // width of each sampled vector

fn main() {
    const MC: usize = 100000;
    const PROBS: [f32; 7] = [0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99];

    let mut rng = StdRng::from_entropy();

    for p in PROBS {
        let mut acc: f64 = 0.0;
        for _ in 0..MC {
            let r = sample(p, NUM_BITS, &mut rng)
                .expect("inputs are in range");
            acc += f64::from(r.count_ones());
        }
        let mean = acc / MC as f64;
        let expected = f64::from(p) * f64::from(NUM_BITS);
        println!(
            "p = {:.2}: mean weight = {:.4} (expected {:.4})",
            p, mean, expected,
        );
    }
}
