// src/catalog/mod.rs
//! # Item catalog
//!
//! Armor and weapon lists as they are declared in `Armory.hpp`.
//!
//! ## Flow
//! ```text
//! header text → extract::{armor, weapons} → normalize → Catalog → render
//! ```
//!
//! - `extract` is a pure line scanner. It knows the C++ initializer layout
//!   (`std::vector<Armor> helmet_t` … `};`) and nothing about HTML.
//! - `normalize` dedups and sorts each category. After it runs, every
//!   category holds unique identifiers in ascending byte order, which is the
//!   order the renderer emits them in.
//!
//! Categories keep header order; only the items inside them are sorted.

use serde::{Serialize, Serializer};

use crate::config::consts::{PAIRED_SLOTS, WEAPON_KEY_SEP};
use crate::core::text::unify_newlines;

pub mod extract;
pub mod normalize;

/// Which hand(s) a weapon can be equipped in. Parsed from the three
/// characters after `Weapon_socket::`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandSlot {
    One,
    Main,
    Off,
    Other(String),
}

impl HandSlot {
    pub fn from_code(code: &str) -> Self {
        match code {
            "one" => HandSlot::One,
            "mai" => HandSlot::Main,
            "off" => HandSlot::Off,
            other => HandSlot::Other(s!(other)),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            HandSlot::One => "one",
            HandSlot::Main => "mai",
            HandSlot::Off => "off",
            HandSlot::Other(code) => code,
        }
    }

    pub fn fits_main_hand(&self) -> bool {
        matches!(self, HandSlot::One | HandSlot::Main)
    }

    pub fn fits_off_hand(&self) -> bool {
        matches!(self, HandSlot::One | HandSlot::Off)
    }
}

impl Serialize for HandSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Weapon {
    pub name: String,
    pub hand: HandSlot,
}

impl Weapon {
    pub fn new(name: impl Into<String>, hand: HandSlot) -> Self {
        Self { name: name.into(), hand }
    }

    /// `"name*hand"`, the identity used for dedup and ordering.
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(self.name.len() + 4);
        key.push_str(&self.name);
        key.push(WEAPON_KEY_SEP);
        key.push_str(self.hand.code());
        key
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ArmorCategory {
    pub category: String,
    pub items: Vec<String>,
}

impl ArmorCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self { category: category.into(), items: Vec::new() }
    }

    /// Rings and trinkets occupy two equipment slots each.
    pub fn is_paired(&self) -> bool {
        PAIRED_SLOTS.contains(&self.category.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WeaponCategory {
    pub category: String,
    pub items: Vec<Weapon>,
}

impl WeaponCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self { category: category.into(), items: Vec::new() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub armor: Vec<ArmorCategory>,
    pub weapons: Vec<WeaponCategory>,
}

impl Catalog {
    /// Scrape both lists from header text and normalize them.
    /// CRLF and LF headers give the same catalog.
    pub fn from_header(text: &str) -> Self {
        let text = unify_newlines(text);
        let mut catalog = Self {
            armor: extract::armor(&text),
            weapons: extract::weapons(&text),
        };
        normalize::catalog(&mut catalog);
        catalog
    }

    pub fn is_empty(&self) -> bool {
        self.armor.is_empty() && self.weapons.is_empty()
    }
}
