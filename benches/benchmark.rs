use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qa_keyword_features::{
    Document, HybridFeatureBuilder, SentimentLexicon, SmoothTfIdfEngine, StopwordSet, TermFilter,
    TfIdfVectorizer,
};

const WORDS: &[(&str, &str)] = &[
    ("外卖", "n"),
    ("骑手", "n"),
    ("补贴", "vn"),
    ("京东", "nt"),
    ("美团", "nt"),
    ("商家", "n"),
    ("平台", "n"),
    ("配送", "vn"),
    ("便宜", "a"),
    ("满意", "v"),
    ("失望", "v"),
    ("很", "d"),
    ("的", "uj"),
    ("北京", "ns"),
    ("用户", "n"),
    ("价格", "n"),
];

/// Deterministic tagged corpus, `docs` lines of `len` tokens
fn synthetic_corpus(docs: usize, len: usize) -> Vec<Document> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..docs)
        .map(|_| {
            let line = (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    let (word, pos) = WORDS[(state % WORDS.len() as u64) as usize];
                    format!("{word}/{pos}")
                })
                .collect::<Vec<_>>()
                .join(" ");
            Document::parse_line(&line)
        })
        .collect()
}

fn tfidf_benchmark(c: &mut Criterion) {
    let docs = synthetic_corpus(2_000, 40);
    let stopwords = StopwordSet::from_lines(["的", "很"]);

    c.bench_function("vectorizer_new", |b| {
        b.iter(|| {
            TfIdfVectorizer::<f64, SmoothTfIdfEngine>::new(
                black_box(&docs),
                &stopwords,
                TermFilter::default(),
            )
        });
    });

    let keyword_vectorizer =
        TfIdfVectorizer::<f64, SmoothTfIdfEngine>::new(&docs, &stopwords, TermFilter::default());
    c.bench_function("keywords_top10", |b| {
        b.iter(|| keyword_vectorizer.keywords(black_box(10)));
    });

    let dense_vectorizer =
        TfIdfVectorizer::<f64, SmoothTfIdfEngine>::new(&docs, &stopwords, TermFilter::Unrestricted);
    c.bench_function("dense_matrix", |b| {
        b.iter(|| dense_vectorizer.dense_matrix());
    });

    let keywords = keyword_vectorizer.keywords(10);
    let mut lexicon = SentimentLexicon::new();
    lexicon.extend_category(["满意", "便宜"], 1.0);
    lexicon.extend_category(["失望"], -1.0);
    c.bench_function("hybrid_features", |b| {
        b.iter(|| HybridFeatureBuilder::new(&lexicon).build(black_box(&keywords)));
    });
}

criterion_group!(benches, tfidf_benchmark);
criterion_main!(benches);
