// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use armory_html::{Catalog, catalog::extract, render};

const CATEGORIES: [&str; 13] = [
    "helmet", "neck", "shoulder", "back", "chest", "wrist", "hands", "belt", "legs", "boots",
    "ring", "trinket", "ranged",
];
const WEAPON_TYPES: [(&str, &str); 4] = [
    ("swords", "one_hand"),
    ("axes", "main_hand"),
    ("daggers", "off_hand"),
    ("maces", "one_hand"),
];

/// Header shaped like Armory.hpp, with some duplicates to normalize away.
fn synthetic_header() -> String {
    let mut h = String::from("struct Armory\n{\n");
    for cat in CATEGORIES {
        h.push_str(&format!("    std::vector<Armor> {cat}_t\n        {{\n"));
        for i in 0..60 {
            h.push_str(&format!(
                "            {{\"{cat}_item_{}\", Attributes{{0, 0}}, Special_stats{{0, 0, 0}}, Socket::{cat}}},\n",
                i % 50
            ));
        }
        h.push_str("        };\n\n");
    }
    for (cat, socket) in WEAPON_TYPES {
        h.push_str(&format!("    std::vector<Weapon> {cat}_t\n        {{\n"));
        for i in 0..40 {
            h.push_str(&format!(
                "            {{\"{cat}_weapon_{i}\", Attributes{{0, 0}}, Special_stats{{0, 0, 0}}, 2.6, 80, 150,\n             Weapon_socket::{socket}, Weapon_type::sword}},\n"
            ));
        }
        h.push_str("        };\n\n");
    }
    h.push_str("};\n");
    h
}

fn bench_extract(c: &mut Criterion) {
    let header = synthetic_header();

    c.bench_function("extract_armor", |b| {
        b.iter(|| black_box(extract::armor(black_box(&header))).len())
    });

    c.bench_function("extract_weapons", |b| {
        b.iter(|| black_box(extract::weapons(black_box(&header))).len())
    });

    c.bench_function("catalog_from_header", |b| {
        b.iter(|| black_box(Catalog::from_header(black_box(&header))).armor.len())
    });

    let catalog = Catalog::from_header(&header);
    c.bench_function("render_blocks", |b| {
        b.iter(|| black_box(render::render(black_box(&catalog))).multi_armor.len())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
