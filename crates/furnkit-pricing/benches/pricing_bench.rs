use criterion::{black_box, criterion_group, criterion_main, Criterion};
use furnkit_configurator::model::{MeubleConfig, ProductConfig};
use furnkit_configurator::{reduce, WizardAction, WizardState};
use furnkit_core::catalog::{CatalogSet, ModuleKind};
use furnkit_pricing::price;

fn large_meuble(catalogs: &CatalogSet) -> ProductConfig {
    let mut state = WizardState::new();
    for _ in 0..7 {
        state = reduce(
            &state,
            &WizardAction::AddCabinet {
                width_mm: 600.0,
                height_mm: 2400.0,
                depth_mm: 600.0,
            },
            catalogs,
        );
    }
    if let ProductConfig::Meuble(config) = &state.config {
        let ids: Vec<_> = config.cabinets.iter().map(|c| c.id).collect();
        for cabinet in ids {
            for kind in [ModuleKind::Etagere, ModuleKind::Tiroir, ModuleKind::Porte] {
                for _ in 0..4 {
                    state = reduce(&state, &WizardAction::AddModule { cabinet, kind }, catalogs);
                }
            }
        }
    }
    state.config
}

fn bench_pricing(c: &mut Criterion) {
    let catalogs = CatalogSet::standard();
    let default_config = ProductConfig::Meuble(MeubleConfig::default());
    let large_config = large_meuble(&catalogs);

    c.bench_function("price_default_meuble", |b| {
        b.iter(|| price(black_box(&default_config), black_box(&catalogs)))
    });

    c.bench_function("price_large_meuble", |b| {
        b.iter(|| price(black_box(&large_config), black_box(&catalogs)))
    });
}

criterion_group!(benches, bench_pricing);
criterion_main!(benches);
