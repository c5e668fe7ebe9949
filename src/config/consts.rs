// src/config/consts.rs

// Input/output
pub const DEFAULT_HEADER_PATH: &str = "../wow_library/include/Armory.hpp";
pub const DEFAULT_HTML_PATH: &str = "index.html";

// Header scraping
pub const ARMOR_TYPE_TAG: &str = "std::vector<Armor>";
pub const WEAPON_TYPE_TAG: &str = "std::vector<Weapon>";
pub const CATEGORY_SUFFIX: &str = "_t";
pub const BLOCK_END: &str = "};\n";
pub const SOCKET_TAG: &str = "Weapon_socket";
pub const WEAPON_KEY_SEP: char = '*';

// Splice markers
pub const MARK_BEGIN: &str = "<!--armor begin-->";
pub const MARK_STOP: &str = "<!--armor stop-->";
pub const MARK_BEGIN2: &str = "<!--armor begin2-->";
pub const MARK_STOP2: &str = "<!--armor stop2-->";

// Categories that take two equipment slots
pub const PAIRED_SLOTS: [&str; 2] = ["ring", "trinket"];

// Rendering
pub const ARMOR_SELECT_ATTRS: &str = r#"" class="item-select""#;
pub const WEAPON_SELECT_ATTRS: &str = r#"" class="weapon-select""#;
pub const MULTI_SELECT_ATTRS: &str = r#"_mult" size="10" class="item-select" multiple"#;
pub const WEAPON_HANDS: [&str; 2] = ["main_hand", "off_hand"];
pub const WEAPONS_CAPTION: &str = "Weapons";
pub const SELECTS_PER_ROW: usize = 3;
