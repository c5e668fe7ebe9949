// tests/extract_catalog.rs
//
// Catalog scraping against header snippets, no files involved.
use armory_html::Catalog;
use armory_html::catalog::{HandSlot, Weapon, extract};

#[test]
fn header_without_tables_gives_empty_catalog() {
    let header = "\
#include \"Armor.hpp\"
struct Armory
{
    std::vector<Armor> get_items_in_socket(Socket socket) const;
    Attributes get_enchant_attributes(Socket socket, Enchant::Type type) const;
};
";
    let catalog = Catalog::from_header(header);
    assert!(catalog.armor.is_empty());
    assert!(catalog.weapons.is_empty());
    assert!(catalog.is_empty());
}

#[test]
fn every_category_is_unique_and_sorted() {
    let header = "\
    std::vector<Armor> legs_t
        {
            {\"legguards_of_the_fallen_crusader\", Attributes{0, 0}, Socket::legs},
            {\"devilsaur_leggings\", Attributes{0, 0}, Socket::legs},
            {\"cloudkeeper_legplates\", Attributes{0, 0}, Socket::legs},
            {\"devilsaur_leggings\", Attributes{0, 0}, Socket::legs},
        };

    std::vector<Armor> boots_t
        {
            {\"chromatic_boots\", Attributes{0, 0}, Socket::boots},
            {\"boots_of_the_shadow_flame\", Attributes{0, 0}, Socket::boots},
        };
";
    let catalog = Catalog::from_header(header);
    assert_eq!(catalog.armor.len(), 2);
    for cat in &catalog.armor {
        let mut expected = cat.items.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(cat.items, expected, "category {}", cat.category);
    }
    assert_eq!(
        catalog.armor[0].items,
        vec!["cloudkeeper_legplates", "devilsaur_leggings", "legguards_of_the_fallen_crusader"]
    );
}

#[test]
fn weapons_keep_same_name_in_different_hands() {
    let header = "\
    std::vector<Weapon> fists_t
        {
            {\"claw_of_the_black_drake\", Attributes{0, 0}, 2.9, 102, 191, Weapon_socket::main_hand, Weapon_type::fist},
            {\"claw_of_the_black_drake\", Attributes{0, 0}, 2.9, 102, 191, Weapon_socket::off_hand, Weapon_type::fist},
            {\"claw_of_the_black_drake\", Attributes{0, 0}, 2.9, 102, 191, Weapon_socket::main_hand, Weapon_type::fist},
        };
";
    let catalog = Catalog::from_header(header);
    assert_eq!(
        catalog.weapons[0].items,
        vec![
            Weapon::new("claw_of_the_black_drake", HandSlot::Main),
            Weapon::new("claw_of_the_black_drake", HandSlot::Off),
        ]
    );
}

#[test]
fn stray_block_end_outside_tables_is_ignored() {
    let header = "\
};
std::vector<Armor> back_t
{
    {\"cape_of_the_black_baron\", 1},
};
};
";
    let cats = extract::armor(header);
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].category, "back");
}

#[test]
fn crlf_header_gives_same_catalog_as_lf() {
    let header = "\
std::vector<Armor> back_t
{
    {\"cape\", 1},
    {\"cape\", 1},
};
std::vector<Weapon> axes_t
{
    {\"axe\", 1, 2.6,
     Weapon_socket::main_hand, Weapon_type::axe},
};
";
    let lf = Catalog::from_header(header);
    let crlf = Catalog::from_header(&header.replace('\n', "\r\n"));
    assert_eq!(lf.armor.len(), 1);
    assert_eq!(lf.weapons[0].items, vec![Weapon::new("axe", HandSlot::Main)]);
    assert_eq!(crlf, lf);
}
