use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hpograph::term_store::InMemoryTermStore;
use hpograph::{RustHpo, Term, TermID};

// Balanced tree: every term has `width` children, `depth` levels below the root.
fn build_tree(width: usize, depth: usize) -> (Vec<Term>, Vec<TermID>) {
    let mut terms = vec![Term::new("T:0", "root", &[])];
    let mut level: Vec<TermID> = vec!["T:0".to_string()];
    for _ in 0..depth {
        let mut next = Vec::new();
        for parent in &level {
            for child in 0..width {
                let id = format!("{parent}.{child}");
                terms.push(Term::new(&id, &id, &[parent.as_str()]));
                next.push(id);
            }
        }
        level = next;
    }
    (terms, level)
}

fn criterion_benchmark(c: &mut Criterion) {
    let (terms, leaves) = build_tree(4, 6);
    let hpo = RustHpo::new(InMemoryTermStore::new(terms));
    let query: Vec<TermID> = black_box(leaves.iter().step_by(97).cloned().collect());

    c.bench_function("min_graph", |b| b.iter(|| hpo.get_min_graph(&query)));
    c.bench_function("ancestors", |b| {
        b.iter(|| hpo.get_ancestors(black_box(&leaves[leaves.len() / 2])))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
