use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use meridian_election::{
    run_primaries, AlgorithmRegistry, BallotMethod, CandidacyMethod, DifficultyTable,
    ElectionVersions, SelectionRules, SelectorMethod,
};
use meridian_types::{AccountId, BlockElectionDistillate, BlockHash, MiningTier};

fn distillate() -> BlockElectionDistillate {
    BlockElectionDistillate::new(1_000, BlockHash::new([0x2a; 32]), BlockHash::new([0x17; 32]))
}

fn bench_candidacy(c: &mut Criterion) {
    let method = CandidacyMethod::SimpleHash;
    let d = distillate();

    c.bench_function("candidacy_fingerprint", |b| {
        b.iter(|| {
            black_box(method.determine_candidacy(black_box(&d), black_box(AccountId::new(42))))
        });
    });
}

fn bench_ballot(c: &mut Criterion) {
    let candidacy = CandidacyMethod::SimpleHash;
    let ballot = BallotMethod::TargetDivision;
    let fingerprint = candidacy.determine_candidacy(&distillate(), AccountId::new(42));

    let mut group = c.benchmark_group("primaries_ballot");
    for difficulty in [1u64, 1_000, 1_000_000_000] {
        let table = DifficultyTable::uniform(difficulty);
        group.bench_with_input(
            BenchmarkId::new("perform", difficulty),
            &table,
            |b, table| {
                b.iter(|| {
                    black_box(
                        ballot
                            .perform_ballot(
                                black_box(&fingerprint),
                                MiningTier::Tier0,
                                black_box(table),
                            )
                            .unwrap(),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_full_evaluation(c: &mut Criterion) {
    let registry = AlgorithmRegistry::standard();
    let versions = ElectionVersions::current();
    let table = DifficultyTable::uniform(3);
    let d = distillate();

    let mut group = c.benchmark_group("primaries_evaluation");
    for count in [64u64, 256, 1_024] {
        let candidates: Vec<(AccountId, MiningTier)> = (0..count)
            .map(|id| {
                (
                    AccountId::new(id),
                    MiningTier::ALL[(id % 4) as usize],
                )
            })
            .collect();
        group.bench_with_input(
            BenchmarkId::new("candidates", count),
            &candidates,
            |b, candidates| {
                b.iter(|| {
                    black_box(
                        run_primaries(&registry, &versions, &d, candidates, &table).unwrap(),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let registry = AlgorithmRegistry::standard();
    let versions = ElectionVersions::current();
    let table = DifficultyTable::uniform(1);
    let d = distillate();

    // Difficulty 1 elects everyone, giving the selector a full field.
    let candidates: Vec<(AccountId, MiningTier)> = (0..1_024u64)
        .map(|id| (AccountId::new(id), MiningTier::Tier0))
        .collect();
    let elected = run_primaries(&registry, &versions, &d, &candidates, &table)
        .unwrap()
        .into_map();
    let rules = SelectionRules::uniform(32);

    c.bench_function("select_representatives_1024", |b| {
        b.iter(|| {
            black_box(
                SelectorMethod::TopLowestHashes
                    .select_representatives(black_box(&elected), black_box(&rules))
                    .unwrap(),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_candidacy,
    bench_ballot,
    bench_full_evaluation,
    bench_selection,
);
criterion_main!(benches);
