// Criterion benchmarks for Talent Match pure scoring paths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use talent_match::core::{enhancer::position_fit, keywords::keyword_similarity};
use talent_match::models::{
    ContractType, EducationLevel, MobilityType, Position, PositionStatus, Profile,
};

const CV_TEXT: &str = "Senior backend engineer with Java Spring Boot PostgreSQL Docker \
    Kubernetes AWS experience building distributed scoring pipelines and REST services";

const JOB_TEXT: &str = "We are looking for a backend engineer experienced with Java Spring \
    PostgreSQL Docker and cloud deployments on AWS or Azure";

fn create_profile() -> Profile {
    Profile {
        cv_text: CV_TEXT.to_string(),
        experience_years: 7,
        education: Some(EducationLevel::Master),
        country: "France".to_string(),
        city: "Paris".to_string(),
        skills: vec!["java".to_string(), "docker".to_string(), "aws".to_string()],
    }
}

fn create_position() -> Position {
    Position {
        id: 1,
        title: "Backend Engineer".to_string(),
        department: "Engineering".to_string(),
        description: JOB_TEXT.to_string(),
        requirements: "5+ years of backend experience".to_string(),
        salary_min: Some(45000.0),
        salary_max: Some(60000.0),
        contract_type: ContractType::Permanent,
        experience_required: 5,
        education_required: Some(EducationLevel::Bachelor),
        status: PositionStatus::Active,
        mobility_type: MobilityType::Internal,
        branch_id: 1,
        branch_name: "Paris HQ".to_string(),
        country: "France".to_string(),
        city: "Paris".to_string(),
    }
}

fn bench_keyword_similarity(c: &mut Criterion) {
    c.bench_function("keyword_similarity", |b| {
        b.iter(|| keyword_similarity(black_box(CV_TEXT), black_box(JOB_TEXT)));
    });
}

fn bench_keyword_similarity_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyword_similarity_text_length");

    for repeats in [1usize, 10, 50] {
        let cv = CV_TEXT.repeat(repeats);
        let job = JOB_TEXT.repeat(repeats);
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &repeats, |b, _| {
            b.iter(|| keyword_similarity(black_box(&cv), black_box(&job)));
        });
    }

    group.finish();
}

fn bench_position_fit(c: &mut Criterion) {
    let profile = create_profile();
    let position = create_position();

    c.bench_function("position_fit", |b| {
        b.iter(|| position_fit(black_box(72.0), black_box(&profile), black_box(&position)));
    });
}

criterion_group!(
    benches,
    bench_keyword_similarity,
    bench_keyword_similarity_by_length,
    bench_position_fit
);
criterion_main!(benches);
