use chrono::{Days, NaiveDate};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let names = ["Alice", "Bob", "Chen", "Dana", "Eve", "Farid", "Grace"];
    let cities = ["NYC", "LA", "Chicago", "Austin", "Boston, MA"];
    let epoch = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid epoch");

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["id", "name", "age", "city", "joined", "score"])
        .expect("Failed to write header");

    let rows = 60;
    for id in 0..rows {
        let age = 18 + rng.below(50);
        let joined = epoch
            .checked_add_days(Days::new(rng.below(4 * 365)))
            .expect("date in range");

        // Roughly one score in twenty is blank, which keeps the column above the
        // numeric threshold without it being perfectly clean.
        let score = match rng.below(20) {
            0 => String::new(),
            _ => format!("{:.1}", rng.next_f64() * 100.0),
        };

        writer
            .write_record([
                id.to_string(),
                rng.pick(&names).to_string(),
                age.to_string(),
                rng.pick(&cities).to_string(),
                joined.format("%Y-%m-%d").to_string(),
                score,
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {rows} rows to {output_path}");
}
