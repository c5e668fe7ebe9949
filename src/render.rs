// src/render.rs
//
// HTML for the two generated regions. Output is plain string building, one
// line per `emit!`; nothing here touches the filesystem.

use crate::catalog::{ArmorCategory, Catalog, Weapon, WeaponCategory};
use crate::config::consts::{
    ARMOR_SELECT_ATTRS, MULTI_SELECT_ATTRS, SELECTS_PER_ROW, WEAPON_HANDS, WEAPON_SELECT_ATTRS,
    WEAPONS_CAPTION,
};
use crate::core::text::{capitalize, label};

const SPAN_CLASSES: [&str; 3] = ["left_select", "middle_select", "right_select"];
const PLACEHOLDER: &str = r#"    <option value="none" selected disabled></option>"#;
const WEAPONS_TITLE: &str = r#"<p class="select-title">Select weapons:</p><br>"#;

/// The four generated blocks, in the order they are spliced in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blocks {
    pub single_armor: String,
    pub single_weapon: String,
    pub multi_armor: String,
    pub multi_weapon: String,
}

impl Blocks {
    /// Region between `begin` and `stop`.
    pub fn first_region(&self) -> String {
        join!(&self.single_armor, &self.single_weapon)
    }

    /// Region between `begin2` and `stop2`.
    pub fn second_region(&self) -> String {
        join!(&self.multi_armor, &self.multi_weapon)
    }
}

pub fn render(catalog: &Catalog) -> Blocks {
    // One counter for both armor blocks: a short last row of single selects
    // carries over into the first row of multi selects.
    let mut rows = RowBreaks::default();

    Blocks {
        single_armor: single_armor(&catalog.armor, &mut rows),
        single_weapon: single_weapon(&catalog.weapons),
        multi_armor: multi_armor(&catalog.armor, &mut rows),
        multi_weapon: multi_weapon(&catalog.weapons),
    }
}

/* ---------------- Shared pieces ---------------- */

#[derive(Default)]
struct RowBreaks {
    in_row: usize,
}

impl RowBreaks {
    fn add(&mut self, selects: usize) {
        self.in_row += selects;
    }

    /// Paragraph break once a row holds three or more selects.
    fn maybe_break(&mut self, buf: &mut String) {
        if self.in_row >= SELECTS_PER_ROW {
            emit!(buf, "<p></p>");
            emit!(buf);
            self.in_row = 0;
        }
    }
}

/// Caption row above a group of selects: up to three spans from `names`.
fn caption(buf: &mut String, names: &[String]) {
    let n = names.len().min(SPAN_CLASSES.len());
    if n == 0 {
        return;
    }
    for (class, name) in SPAN_CLASSES.iter().zip(&names[..n]) {
        buf.push_str(&format!(r#"<span class="{class}">{name}</span>"#));
    }
    emit!(buf, "<br>");
}

fn option(buf: &mut String, id: &str) {
    emit!(buf, r#"    <option value="{id}">{}</option>"#, label(id));
}

fn category_header(buf: &mut String, cat: &WeaponCategory) {
    emit!(buf, r#"    <option value="none" disabled> --- {} --- </option>"#, cat.category.to_uppercase());
}

fn armor_select(buf: &mut String, id: &str, attrs: &str, placeholder: bool, items: &[String]) {
    emit!(buf, r#"<select id="{id}_dd{attrs}>"#);
    if placeholder {
        emit!(buf, "{PLACEHOLDER}");
    }
    for item in items {
        option(buf, item);
    }
    emit!(buf, "</select>");
    emit!(buf);
}

/* ---------------- Single-select ---------------- */

/// Slot names in select order: `ring` becomes `ring1`, `ring2`.
fn slot_names(armor: &[ArmorCategory]) -> Vec<String> {
    let mut names = Vec::with_capacity(armor.len() + 2);
    for cat in armor {
        if cat.is_paired() {
            names.push(format!("{}1", cat.category));
            names.push(format!("{}2", cat.category));
        } else {
            names.push(cat.category.clone());
        }
    }
    names
}

fn single_armor(armor: &[ArmorCategory], rows: &mut RowBreaks) -> String {
    let names = slot_names(armor);
    let mut buf = s!();
    let mut slot = 0usize;

    for cat in armor {
        // A paired category takes two slots, so a caption can be skipped
        // when it straddles a multiple of three.
        if slot % SELECTS_PER_ROW == 0 {
            caption(&mut buf, names.get(slot..).unwrap_or_default());
        }
        slot += 1;

        if cat.is_paired() {
            slot += 1;
            for i in 1..=2 {
                let id = format!("{}{i}", cat.category);
                armor_select(&mut buf, &id, ARMOR_SELECT_ATTRS, true, &cat.items);
            }
            rows.add(2);
        } else {
            armor_select(&mut buf, &cat.category, ARMOR_SELECT_ATTRS, true, &cat.items);
            rows.add(1);
        }

        rows.maybe_break(&mut buf);
    }

    buf
}

fn single_weapon(weapons: &[WeaponCategory]) -> String {
    let mut buf = s!();
    emit!(buf, "{WEAPONS_TITLE}");

    for (i, hand) in WEAPON_HANDS.iter().enumerate() {
        let fits: fn(&Weapon) -> bool = if i == 0 {
            |w: &Weapon| w.hand.fits_main_hand()
        } else {
            |w: &Weapon| w.hand.fits_off_hand()
        };

        emit!(buf, r#"<select id="{hand}_dd{WEAPON_SELECT_ATTRS}>"#);
        emit!(buf, "{PLACEHOLDER}");
        for cat in weapons {
            category_header(&mut buf, cat);
            for w in cat.items.iter().filter(|w| fits(w)) {
                option(&mut buf, &w.name);
            }
        }
        emit!(buf, "</select>");
    }

    buf
}

/* ---------------- Multi-select ---------------- */

/// Caption names for the multi-select rows, plus the trailing weapons entry.
fn multi_names(armor: &[ArmorCategory]) -> Vec<String> {
    let mut names: Vec<String> = armor
        .iter()
        .map(|cat| {
            if cat.is_paired() {
                capitalize(&join!(&cat.category, "s"))
            } else {
                capitalize(&cat.category)
            }
        })
        .collect();
    names.push(s!(WEAPONS_CAPTION));
    names
}

fn multi_armor(armor: &[ArmorCategory], rows: &mut RowBreaks) -> String {
    let names = multi_names(armor);
    let mut buf = s!();

    for (i, cat) in armor.iter().enumerate() {
        if i % SELECTS_PER_ROW == 0 {
            caption(&mut buf, &names[i..]);
        }
        armor_select(&mut buf, &cat.category, MULTI_SELECT_ATTRS, false, &cat.items);
        rows.add(1);
        rows.maybe_break(&mut buf);
    }

    buf
}

fn multi_weapon(weapons: &[WeaponCategory]) -> String {
    let mut buf = s!();
    emit!(buf, r#"<select id="weapons_dd{MULTI_SELECT_ATTRS}>"#);
    for cat in weapons {
        category_header(&mut buf, cat);
        for w in &cat.items {
            option(&mut buf, &w.name);
        }
    }
    emit!(buf, "</select>");
    buf
}
