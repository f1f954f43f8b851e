use divan::counter::BytesCount;
use divan::{AllocProfiler, Bencher, black_box, black_box_drop};
use uji_engine::{ConversionEngine, Field, HashInput, RandomGenerator, compute_digests};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_text(len: usize) -> String {
    "宇治 uji52 hoge fuga ".chars().cycle().take(len).collect()
}

mod conversion {
    use super::*;

    #[divan::bench(args = [16, 256, 4096], min_time = 0.250)]
    fn from_plain(bencher: Bencher, len: usize) {
        let text = sample_text(len);

        bencher
            .counter(BytesCount::new(text.len()))
            .with_inputs(ConversionEngine::new)
            .bench_local_refs(|engine| {
                black_box_drop(engine.update_from_field(Field::Plain, black_box(&text)))
            });
    }

    #[divan::bench(args = [16, 256, 4096], min_time = 0.250)]
    fn from_binary(bencher: Bencher, len: usize) {
        let mut seed = ConversionEngine::new();
        let binary = seed
            .update_from_field(Field::Plain, &sample_text(len))
            .fields
            .get(Field::Binary)
            .to_string();

        bencher
            .counter(BytesCount::new(binary.len()))
            .with_inputs(ConversionEngine::new)
            .bench_local_refs(|engine| {
                black_box_drop(engine.update_from_field(Field::Binary, black_box(&binary)))
            });
    }
}

mod hash {
    use super::*;

    #[divan::bench(args = [16, 4096], min_time = 0.250)]
    fn all_digests(bencher: Bencher, len: usize) {
        let text = sample_text(len);

        bencher
            .counter(BytesCount::new(text.len()))
            .bench_local(|| black_box_drop(compute_digests(HashInput::Plain(black_box(&text)))));
    }
}

mod random {
    use super::*;

    #[divan::bench(args = [8, 4096])]
    fn generate(bencher: Bencher, len: usize) {
        let mut generator = RandomGenerator::with_seed(52);
        bencher.bench_local(|| black_box_drop(generator.generate(len, "")));
    }
}
