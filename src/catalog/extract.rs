// src/catalog/extract.rs
//
// Line scanner for the item tables in Armory.hpp.
//
// Expected layout (whitespace is free, but the shapes below are not):
//
//     std::vector<Armor> helmet_t
//     {
//         {"lionheart_helm", Attributes{...}, Special_stats{...}, Socket::head},
//         ...
//     };
//
//     std::vector<Weapon> swords_t
//     {
//         {"brutality_blade", Attributes{...}, Special_stats{...}, 2.5, 90, 168,
//          Weapon_socket::one_hand, Weapon_type::sword},
//         ...
//     };
//
// Anything the scanner does not recognize is skipped silently.

use crate::config::consts::{
    ARMOR_TYPE_TAG, BLOCK_END, CATEGORY_SUFFIX, SOCKET_TAG, WEAPON_TYPE_TAG,
};
use crate::core::text::{lines_keep_ends, tokens};

use super::{ArmorCategory, HandSlot, Weapon, WeaponCategory};

/* ---------------- Line recognizers ---------------- */

/// `std::vector<Armor> helmet_t\n` → `Some("helmet")` for `tag = "std::vector<Armor>"`.
///
/// The second token must end in `_t` plus exactly one more character
/// (usually the line terminator).
fn block_start(line: &str, tag: &str) -> Option<String> {
    let mut t = tokens(line);
    if t.next()? != tag {
        return None;
    }
    let var = t.next()?;

    let mut chars = var.chars();
    chars.next_back()?;
    let body = chars.as_str();
    let category = body.strip_suffix(CATEGORY_SUFFIX)?;
    Some(s!(category))
}

fn is_block_end(line: &str) -> bool {
    tokens(line).next() == Some(BLOCK_END)
}

/// A line with exactly two `"` whose prefix opens with a `{` token.
fn item_name(line: &str) -> Option<String> {
    let mut parts = line.split('"');
    let before = parts.next()?;
    let name = parts.next()?;
    parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    (tokens(before).next()? == "{").then(|| s!(name))
}

/// `Weapon_socket::one_hand` → `one`. The tag must occur exactly once.
fn hand_slot(line: &str) -> Option<HandSlot> {
    let mut parts = line.split(SOCKET_TAG);
    parts.next()?;
    let after = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let code: String = after.chars().skip(2).take(3).collect();
    Some(HandSlot::from_code(&code))
}

/* ---------------- Armor ---------------- */

enum ArmorScan {
    Idle,
    InBlock(ArmorCategory),
}

/// Collect every `std::vector<Armor> <name>_t` block, in header order.
/// Items are raw: duplicates and header order are kept.
pub fn armor(header: &str) -> Vec<ArmorCategory> {
    let mut out = Vec::new();
    let mut state = ArmorScan::Idle;

    for line in lines_keep_ends(header) {
        if let Some(category) = block_start(line, ARMOR_TYPE_TAG) {
            if let ArmorScan::InBlock(open) = &state {
                logd!("armor block {:?} restarted by {:?}", open.category, category);
            }
            state = ArmorScan::InBlock(ArmorCategory::new(category));
        }

        if let ArmorScan::InBlock(cat) = &mut state {
            if let Some(name) = item_name(line) {
                cat.items.push(name);
            }
        }

        if is_block_end(line) {
            if let ArmorScan::InBlock(cat) = std::mem::replace(&mut state, ArmorScan::Idle) {
                logd!("armor category {:?}: {} raw items", cat.category, cat.items.len());
                out.push(cat);
            }
        }
    }

    out
}

/* ---------------- Weapons ---------------- */

/// A weapon entry spans several lines; its name and hand slot may show up
/// in either order. One of each completes the entry.
enum WeaponScan {
    Idle,
    InBlock(WeaponCategory),
    AwaitingSlot(WeaponCategory, String),
    AwaitingName(WeaponCategory, HandSlot),
}

impl WeaponScan {
    fn open(&self) -> Option<&WeaponCategory> {
        match self {
            WeaponScan::Idle => None,
            WeaponScan::InBlock(cat)
            | WeaponScan::AwaitingSlot(cat, _)
            | WeaponScan::AwaitingName(cat, _) => Some(cat),
        }
    }

    /// Close the block; a half-read entry is dropped with it.
    fn close(self) -> Option<WeaponCategory> {
        match self {
            WeaponScan::Idle => None,
            WeaponScan::InBlock(cat)
            | WeaponScan::AwaitingSlot(cat, _)
            | WeaponScan::AwaitingName(cat, _) => Some(cat),
        }
    }

    fn step(self, name: Option<String>, slot: Option<HandSlot>) -> Self {
        use WeaponScan::*;

        let (mut cat, pending_name, pending_slot) = match self {
            Idle => return Idle,
            InBlock(cat) => (cat, None, None),
            AwaitingSlot(cat, n) => (cat, Some(n), None),
            AwaitingName(cat, h) => (cat, None, Some(h)),
        };

        // Fresh values on this line replace anything pending.
        match (name.or(pending_name), slot.or(pending_slot)) {
            (Some(n), Some(h)) => {
                cat.items.push(Weapon::new(n, h));
                InBlock(cat)
            }
            (Some(n), None) => AwaitingSlot(cat, n),
            (None, Some(h)) => AwaitingName(cat, h),
            (None, None) => InBlock(cat),
        }
    }
}

/// Collect every `std::vector<Weapon> <name>_t` block, in header order.
pub fn weapons(header: &str) -> Vec<WeaponCategory> {
    let mut out = Vec::new();
    let mut state = WeaponScan::Idle;

    for line in lines_keep_ends(header) {
        if let Some(category) = block_start(line, WEAPON_TYPE_TAG) {
            if let Some(open) = state.open() {
                logd!("weapon block {:?} restarted by {:?}", open.category, category);
            }
            state = WeaponScan::InBlock(WeaponCategory::new(category));
        }

        if !matches!(state, WeaponScan::Idle) {
            state = state.step(item_name(line), hand_slot(line));
        }

        if is_block_end(line) {
            if let Some(cat) = std::mem::replace(&mut state, WeaponScan::Idle).close() {
                logd!("weapon category {:?}: {} raw items", cat.category, cat.items.len());
                out.push(cat);
            }
        }
    }

    out
}
