//! Performance benchmarks for modernapi

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use modernapi::test_utils::TestRepo;
use modernapi::{ScanConfig, extract, extract_routes_from_content, repository_score, score_all};
use std::path::Path;

const FASTAPI_SOURCE: &str = r#"from fastapi import APIRouter, Depends

router = APIRouter(prefix="/orders")

@router.get(
    "/v1/orders",
    response_model=list[Order],
    tags=["orders"],
    summary="List orders",
    description="Return orders visible to the caller",
    dependencies=[Depends(require_scope("orders:read"))],
)
async def list_orders():
    return await repo.all()

@router.post("/orders")
async def create_order(payload: OrderIn = Body(...)):
    return await repo.create(payload)

@router.route(path="/v2/orders/{order_id}", methods=["PATCH"])
async def patch_order(order_id: int):
    return await repo.patch(order_id)
"#;

fn create_test_repo(modules: usize, routes_per_module: usize) -> TestRepo {
    let repo = TestRepo::new();
    for i in 0..modules {
        repo.add_route_module(&format!("app/module_{}/routes.py", i), routes_per_module);
        repo.add_file(&format!("app/module_{}/models.py", i), "class Item:\n    pass\n");
    }
    repo
}

fn bench_route_extraction(c: &mut Criterion) {
    let large = FASTAPI_SOURCE.repeat(100);

    let mut group = c.benchmark_group("route_extraction");

    group.bench_function("single_module", |b| {
        b.iter(|| extract_routes_from_content(black_box(FASTAPI_SOURCE), Path::new("orders.py")))
    });
    group.bench_function("large_module_300_routes", |b| {
        b.iter(|| extract_routes_from_content(black_box(&large), Path::new("orders.py")))
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let small = create_test_repo(10, 10);
    let large = create_test_repo(200, 10);

    let mut group = c.benchmark_group("scan");

    group.bench_function("small_repo_10_modules", |b| {
        b.iter(|| extract(black_box(small.path()), &ScanConfig::default()))
    });
    group.bench_function("large_repo_200_modules_sequential", |b| {
        let config = ScanConfig {
            parallel_workers: 1,
            ..Default::default()
        };
        b.iter(|| extract(black_box(large.path()), &config))
    });
    group.bench_function("large_repo_200_modules_parallel", |b| {
        b.iter(|| extract(black_box(large.path()), &ScanConfig::default()))
    });

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let routes = extract_routes_from_content(&FASTAPI_SOURCE.repeat(1000), Path::new("orders.py"));

    let mut group = c.benchmark_group("scoring");

    group.bench_function("score_3000_routes", |b| {
        b.iter(|| score_all(black_box(routes.clone())))
    });
    let scored = score_all(routes.clone());
    group.bench_function("repository_score_3000_routes", |b| {
        b.iter(|| repository_score(black_box(&scored)))
    });

    group.finish();
}

criterion_group!(benches, bench_route_extraction, bench_scan, bench_scoring);
criterion_main!(benches);
