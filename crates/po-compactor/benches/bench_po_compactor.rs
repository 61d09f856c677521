use criterion::{black_box, criterion_group, criterion_main, Criterion};
use po_compactor::{abbreviations, entities, word, Optimizer};
use po_core::config::OptimizationConfig;
use rand::Rng;

fn generate_text(size_kb: usize) -> String {
    let base = "O desenvolvimento da aplicação em São Paulo custou R$ 1.000,00 e levou 3 meses. \
                A equipe usou JavaScript, Python e PostgreSQL com uma API REST documentada. \
                Contato: suporte@empresa.com.br ou (11) 98765-4321 até 15/03/2025 às 14:30. \
                O gato e o cachorro dormem perto da árvore enquanto a universidade funciona. ";
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text
}

fn random_words(n: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let letters: Vec<char> = "abcdefghijklmnopqrstuvwxyzáéãç".chars().collect();
    (0..n)
        .map(|_| {
            let len = rng.gen_range(4..16);
            (0..len).map(|_| letters[rng.gen_range(0..letters.len())]).collect()
        })
        .collect()
}

fn heavy() -> OptimizationConfig {
    OptimizationConfig {
        word_compression: 0.6,
        abbreviation_level: 0.8,
        stop_word_removal: 0.5,
        remove_accents: true,
        remove_punctuation: true,
        min_word_length: 1,
        ..Default::default()
    }
}

fn bench_optimize(c: &mut Criterion) {
    let optimizer = Optimizer::new();
    let config = heavy();
    for kb in [1, 10, 100] {
        let text = generate_text(kb);
        c.bench_function(&format!("optimize_heavy_{kb}kb"), |b| {
            b.iter(|| black_box(optimizer.optimize(black_box(&text), &config)))
        });
    }
}

fn bench_stages(c: &mut Criterion) {
    let text = generate_text(10);
    c.bench_function("entities_extract_10kb", |b| {
        b.iter(|| black_box(entities::extract(black_box(&text))))
    });
    c.bench_function("abbreviations_apply_10kb", |b| {
        b.iter(|| black_box(abbreviations::apply(black_box(&text), 0.8, true)))
    });

    let words = random_words(1000);
    c.bench_function("word_compress_1000", |b| {
        b.iter(|| {
            for w in &words {
                black_box(word::compress(black_box(w), 0.5, 2));
            }
        })
    });
}

criterion_group!(benches, bench_optimize, bench_stages);
criterion_main!(benches);
