use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Uniform jitter in `[-spread, spread]`.
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

struct SampleCar {
    id: String,
    brand: &'static str,
    model: String,
    origin: &'static str,
    year: i64,
    cylinder: f64,
    consumption: f64,
    acceleration: f64,
    displacement: f64,
    horsepower: Option<f64>,
    weight: f64,
}

fn round_to(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

fn generate_car(index: usize, rng: &mut SimpleRng) -> SampleCar {
    let makers: [(&str, &str); 9] = [
        ("ford", "usa"),
        ("chevrolet", "usa"),
        ("plymouth", "usa"),
        ("amc", "usa"),
        ("toyota", "japan"),
        ("datsun", "japan"),
        ("honda", "japan"),
        ("volkswagen", "europe"),
        ("peugeot", "europe"),
    ];
    let trims = ["coupe", "sedan", "wagon", "deluxe", "gl", "sport"];

    let &(brand, origin) = rng.pick(&makers);
    let cylinder = *rng.pick(&[4.0, 4.0, 6.0, 8.0]);
    let displacement = round_to(cylinder * 38.0 + rng.jitter(25.0), 1.0);
    let horsepower = round_to(displacement * 0.45 + 20.0 + rng.jitter(12.0), 1.0);
    let weight = round_to(1400.0 + displacement * 6.5 + rng.jitter(200.0), 1.0);
    let consumption = round_to(48.0 - weight / 140.0 + rng.jitter(2.5), 0.1);
    let acceleration = round_to(21.0 - horsepower / 22.0 + rng.jitter(1.5), 0.1);

    SampleCar {
        id: format!("sample-{index:03}"),
        brand,
        model: format!("{} {}", rng.pick(&trims), 100 + index),
        origin,
        year: 70 + (rng.next_u64() % 13) as i64,
        cylinder,
        consumption,
        acceleration,
        displacement,
        // Roughly one in twenty source rows lacks horsepower.
        horsepower: (rng.next_f64() > 0.05).then_some(horsepower),
        weight,
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let cars: Vec<SampleCar> = (0..120).map(|i| generate_car(i, &mut rng)).collect();

    let text = |f: fn(&SampleCar) -> &str| -> StringArray {
        StringArray::from(cars.iter().map(f).collect::<Vec<_>>())
    };
    let number = |f: fn(&SampleCar) -> Option<f64>| -> Float64Array {
        Float64Array::from(cars.iter().map(f).collect::<Vec<_>>())
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("brand", DataType::Utf8, false),
        Field::new("model", DataType::Utf8, false),
        Field::new("origin", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("cylinder", DataType::Float64, true),
        Field::new("consumption", DataType::Float64, true),
        Field::new("acceleration", DataType::Float64, true),
        Field::new("displacement", DataType::Float64, true),
        Field::new("horsepower", DataType::Float64, true),
        Field::new("weight", DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(text(|c| c.id.as_str())),
            Arc::new(text(|c| c.brand)),
            Arc::new(text(|c| c.model.as_str())),
            Arc::new(text(|c| c.origin)),
            Arc::new(Int64Array::from(cars.iter().map(|c| c.year).collect::<Vec<_>>())),
            Arc::new(number(|c| Some(c.cylinder))),
            Arc::new(number(|c| Some(c.consumption))),
            Arc::new(number(|c| Some(c.acceleration))),
            Arc::new(number(|c| Some(c.displacement))),
            Arc::new(number(|c| c.horsepower)),
            Arc::new(number(|c| Some(c.weight))),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let output_path = "sample_cars.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {} cars to {output_path}", cars.len());
}
