use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use delicias_tourism::{
    Catalog, Category, DurationBucket, FilterCriteria, Locale, LocalizedText, PriceBucket,
    TourRecord, TourSearchProcessor,
};
use rand::{seq::SliceRandom, thread_rng, Rng};

const WORDS: [&str; 8] = [
    "histórico",
    "nogales",
    "presa",
    "museo",
    "mercado",
    "desierto",
    "vino",
    "noche",
];

// Synthetic catalog far larger than the bundled one
fn synthetic_catalog(size: u32) -> Catalog {
    let mut rng = thread_rng();
    let tours = (1..=size)
        .map(|id| {
            let word = WORDS.choose(&mut rng).unwrap();
            TourRecord {
                id,
                title: LocalizedText::new(format!("Tour {word} {id}"), format!("Tour {id}")),
                description: LocalizedText::new(
                    format!("Recorrido por {word}"),
                    "A guided walk".to_string(),
                ),
                schedule: LocalizedText::default(),
                category: *Category::ALL.choose(&mut rng).unwrap(),
                duration_minutes: rng.gen_range(30..600),
                price_amount: (rng.gen_range(0..80) * 10) as f64,
                rating: rng.gen_range(0.0..=5.0),
                review_count: rng.gen_range(0..500),
                itinerary: Default::default(),
                includes: Default::default(),
                testimonials: vec![],
                image_ref: String::new(),
            }
        })
        .collect();
    Catalog::new(tours).unwrap()
}

pub fn filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_filter");

    for size in [8u32, 1_000, 10_000].iter() {
        let catalog = synthetic_catalog(*size);
        let criteria = FilterCriteria {
            search_text: "MUSEO".to_string(),
            category: Some(Category::Cultural),
            duration: DurationBucket::Medium,
            price: PriceBucket::Low,
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(TourSearchProcessor::filter(
                    &catalog,
                    black_box(&criteria),
                    Some(Locale::Es),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, filter_benchmark);
criterion_main!(benches);
