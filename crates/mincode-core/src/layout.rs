//! Physical key classes used to analyze an encoding.
//!
//! A layout assigns keys to the eight typing fingers and to the four
//! keyboard rows. Keys that appear in neither count as "other".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LAYOUT_TOML: &str = include_str!("default_layout.toml");

/// Returns the embedded default layout TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_LAYOUT_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("key {key:?} is assigned to both {first} and {second}")]
    DuplicateKey {
        key: char,
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    LeftPinky,
    LeftRing,
    LeftMiddle,
    LeftIndex,
    RightIndex,
    RightMiddle,
    RightRing,
    RightPinky,
}

impl Finger {
    pub const ALL: [Finger; 8] = [
        Finger::LeftPinky,
        Finger::LeftRing,
        Finger::LeftMiddle,
        Finger::LeftIndex,
        Finger::RightIndex,
        Finger::RightMiddle,
        Finger::RightRing,
        Finger::RightPinky,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Finger::LeftPinky => "left_pinky",
            Finger::LeftRing => "left_ring",
            Finger::LeftMiddle => "left_middle",
            Finger::LeftIndex => "left_index",
            Finger::RightIndex => "right_index",
            Finger::RightMiddle => "right_middle",
            Finger::RightRing => "right_ring",
            Finger::RightPinky => "right_pinky",
        }
    }

    pub fn is_left(self) -> bool {
        matches!(
            self,
            Finger::LeftPinky | Finger::LeftRing | Finger::LeftMiddle | Finger::LeftIndex
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    Number,
    Top,
    Home,
    Bottom,
}

impl Row {
    pub const ALL: [Row; 4] = [Row::Number, Row::Top, Row::Home, Row::Bottom];

    pub fn name(self) -> &'static str {
        match self {
            Row::Number => "number",
            Row::Top => "top",
            Row::Home => "home",
            Row::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawLayout {
    fingers: RawFingers,
    rows: RawRows,
}

#[derive(Debug, Clone, Deserialize)]
struct RawFingers {
    left_pinky: String,
    left_ring: String,
    left_middle: String,
    left_index: String,
    right_index: String,
    right_middle: String,
    right_ring: String,
    right_pinky: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawRows {
    number: String,
    top: String,
    home: String,
    bottom: String,
}

/// Key → finger and key → row lookup tables.
#[derive(Debug, Clone)]
pub struct KeyLayout {
    fingers: HashMap<char, Finger>,
    rows: HashMap<char, Row>,
}

impl KeyLayout {
    /// The embedded QWERTY layout.
    pub fn qwerty() -> Self {
        parse_layout_toml(DEFAULT_LAYOUT_TOML).expect("default layout TOML must be valid")
    }

    pub fn finger_of(&self, key: char) -> Option<Finger> {
        self.fingers.get(&key).copied()
    }

    pub fn row_of(&self, key: char) -> Option<Row> {
        self.rows.get(&key).copied()
    }
}

pub fn parse_layout_toml(toml_str: &str) -> Result<KeyLayout, LayoutError> {
    let raw: RawLayout =
        toml::from_str(toml_str).map_err(|e| LayoutError::Parse(e.to_string()))?;
    let f = &raw.fingers;
    let fingers = index_keys(
        &[
            (Finger::LeftPinky, f.left_pinky.as_str()),
            (Finger::LeftRing, f.left_ring.as_str()),
            (Finger::LeftMiddle, f.left_middle.as_str()),
            (Finger::LeftIndex, f.left_index.as_str()),
            (Finger::RightIndex, f.right_index.as_str()),
            (Finger::RightMiddle, f.right_middle.as_str()),
            (Finger::RightRing, f.right_ring.as_str()),
            (Finger::RightPinky, f.right_pinky.as_str()),
        ],
        Finger::name,
    )?;
    let r = &raw.rows;
    let rows = index_keys(
        &[
            (Row::Number, r.number.as_str()),
            (Row::Top, r.top.as_str()),
            (Row::Home, r.home.as_str()),
            (Row::Bottom, r.bottom.as_str()),
        ],
        Row::name,
    )?;
    Ok(KeyLayout { fingers, rows })
}

fn index_keys<T: Copy>(
    groups: &[(T, &str)],
    name: fn(T) -> &'static str,
) -> Result<HashMap<char, T>, LayoutError> {
    let mut index: HashMap<char, T> = HashMap::new();
    for &(class, keys) in groups {
        for key in keys.chars() {
            if let Some(&prev) = index.get(&key) {
                if name(prev) != name(class) {
                    return Err(LayoutError::DuplicateKey {
                        key,
                        first: name(prev),
                        second: name(class),
                    });
                }
            }
            index.insert(key, class);
        }
    }
    Ok(index)
}
