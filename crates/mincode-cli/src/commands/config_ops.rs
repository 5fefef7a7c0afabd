use std::fs;

use crate::die;

pub fn settings_export() {
    print!("{}", mincode_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        mincode_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: search.breadth_limit={}, join.mode={}",
        s.search.breadth_limit, s.join.mode
    );
}

pub fn layout_export() {
    print!("{}", mincode_core::layout::default_toml());
}

pub fn layout_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        mincode_core::layout::parse_layout_toml(&content),
        "Error: {}"
    );
    println!("OK");
}
