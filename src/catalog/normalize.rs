// src/catalog/normalize.rs

use super::{ArmorCategory, Catalog, WeaponCategory};

/// Sort ascending by identifier (byte order) and drop exact duplicates.
pub fn armor(cat: &mut ArmorCategory) {
    cat.items.sort_unstable();
    cat.items.dedup();
}

/// Same rule, keyed on `"name*hand"`: the same name in two hand slots stays twice.
pub fn weapons(cat: &mut WeaponCategory) {
    cat.items.sort_by_cached_key(|w| w.key());
    cat.items.dedup_by(|a, b| a.name == b.name && a.hand == b.hand);
}

pub fn catalog(catalog: &mut Catalog) {
    catalog.armor.iter_mut().for_each(armor);
    catalog.weapons.iter_mut().for_each(weapons);
}
