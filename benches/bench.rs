//! Criterion benchmarks for content-query.
//!
//! Covers bool query building and full descriptor translation.

use criterion::{Criterion, criterion_group, criterion_main};
use content_query::descriptor::{ContentDescriptor, RequestContext, translate};
use content_query::query::{BooleanQueryBuilder, ClauseRequest, Occur};
use serde_json::json;
use std::hint::black_box;

/// A descriptor touching every translated field.
fn full_descriptor() -> ContentDescriptor {
    ContentDescriptor::from_value(json!({
        "includeTags": ["politics", "election", "congress"],
        "excludeTags": ["sponsored", "paid post"],
        "includeContentChannels": ["news", "opinion"],
        "excludeContentChannels": ["shopping"],
        "includeFeatureTypes": ["interview", "longform"],
        "excludeFeatureTypes": ["listicle"],
        "includeStoryCharacteristics": ["evergreen"],
        "excludeStoryCharacteristics": ["time sensitive"],
        "includeFeeds": ["rss", "apple news"],
        "excludeFeeds": ["smart news"],
        "sitePrefixes": ["http://nymag.com/intelligencer", "http://www.thecut.com"],
        "crossposts": ["wwwthecut", "vulture"],
        "siteSlugs": ["grubstreet"],
        "elasticIndex": "published-articles"
    }))
    .expect("valid descriptor")
}

fn bench_builder(c: &mut Criterion) {
    let tags: Vec<String> = (0..32).map(|i| format!("tag-{i}")).collect();

    c.bench_function("builder_nested_should_32", |b| {
        b.iter(|| {
            let mut builder = BooleanQueryBuilder::new();
            builder.add_clause(
                Occur::Filter,
                ClauseRequest::nested_bool(|group| {
                    for tag in &tags {
                        group.add_term(Occur::Should, "tags", tag.as_str());
                    }
                }),
            );
            black_box(builder.build())
        })
    });
}

fn bench_translate(c: &mut Criterion) {
    let descriptor = full_descriptor();
    let context = RequestContext::for_site("wwwthecut");

    c.bench_function("translate_full_descriptor", |b| {
        b.iter(|| black_box(translate(black_box(&descriptor), black_box(&context))))
    });

    c.bench_function("translate_to_json", |b| {
        b.iter(|| {
            let request = translate(&descriptor, &context);
            black_box(serde_json::to_string(&request).expect("serializable request"))
        })
    });
}

criterion_group!(benches, bench_builder, bench_translate);
criterion_main!(benches);
