// ABOUTME: Criterion benchmarks for ingredient exclusion and recipe payload decoding
// ABOUTME: Measures nutrient scaling and detail deserialization across recipe sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition adjustment path.
//!
//! Recipes are synthetic; nutrient and ingredient counts are scaled to cover
//! typical (10-20 ingredients) and outsized payloads.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rex_recipe_server::models::{Ingredient, Nutrient, NutritionInfo, RecipeDetail};
use rex_recipe_server::recipes::apply_exclusions;

const INGREDIENT_NAMES: &[&str] = &[
    "spaghetti pasta",
    "eggs",
    "pecorino cheese",
    "guanciale",
    "black pepper",
    "olive oil",
    "garlic",
    "parsley",
];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_recipe(ingredient_count: usize, nutrient_count: usize) -> RecipeDetail {
    let ingredients = (0..ingredient_count)
        .map(|index| Ingredient {
            id: Some(index as i64),
            name: Some(INGREDIENT_NAMES[index % INGREDIENT_NAMES.len()].to_owned()),
            amount: Some(1.0 + index as f64),
            unit: Some("g".to_owned()),
            ..Ingredient::default()
        })
        .collect();

    let nutrients = (0..nutrient_count)
        .map(|index| Nutrient {
            name: Some(format!("Nutrient {index}")),
            amount: Some(17.3 * (index + 1) as f64),
            unit: Some("mg".to_owned()),
            percent_of_daily_needs: Some(3.7 * (index % 30) as f64),
        })
        .collect();

    RecipeDetail {
        id: Some(1),
        title: Some("Benchmark Carbonara".to_owned()),
        extended_ingredients: Some(ingredients),
        nutrition: Some(NutritionInfo {
            nutrients: Some(nutrients),
            ..NutritionInfo::default()
        }),
        ..RecipeDetail::default()
    }
}

fn bench_apply_exclusions(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_exclusions");
    let exclusions = vec!["pasta".to_owned(), "Cheese".to_owned()];

    for (ingredients, nutrients) in [(10, 30), (20, 60), (200, 400)] {
        let recipe = generate_recipe(ingredients, nutrients);
        group.throughput(Throughput::Elements(nutrients as u64));
        group.bench_with_input(
            BenchmarkId::new("ingredients", ingredients),
            &recipe,
            |b, recipe| {
                b.iter(|| apply_exclusions(black_box(recipe.clone()), black_box(&exclusions)));
            },
        );
    }

    let recipe = generate_recipe(20, 60);
    let unmatched = vec!["saffron".to_owned()];
    group.bench_function("no_match", |b| {
        b.iter(|| apply_exclusions(black_box(recipe.clone()), black_box(&unmatched)));
    });

    group.finish();
}

fn bench_detail_deserialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_recipe_detail");
    let serialized = serde_json::to_string(&generate_recipe(20, 60)).unwrap();

    group.throughput(Throughput::Bytes(serialized.len() as u64));
    group.bench_function("typical", |b| {
        b.iter(|| serde_json::from_str::<RecipeDetail>(black_box(&serialized)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_apply_exclusions, bench_detail_deserialization);
criterion_main!(benches);
