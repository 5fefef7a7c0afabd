use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keys that start a shape code in the scheme rules.
const SHAPE_KEYS: &str = "aiouv";
/// Keys that carry sound in the scheme rules.
const SOUND_KEYS: &str = "bcdefghjklmnpqrstwxyz";

/// How adjacent word codes are joined into one keystroke stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    /// Every code is followed by a space.
    Space,
    /// Codes are concatenated directly.
    None,
    /// Spacing follows the shape/sound rules of a phonetic-shape scheme.
    Scheme,
}

impl JoinMode {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinMode::Space => "space",
            JoinMode::None => "none",
            JoinMode::Scheme => "scheme",
        }
    }

    /// Map the legacy numeric selector (`1` none, `2` scheme, anything else space).
    pub fn from_legacy_id(id: &str) -> Self {
        match id {
            "1" => JoinMode::None,
            "2" => JoinMode::Scheme,
            _ => JoinMode::Space,
        }
    }
}

impl fmt::Display for JoinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown join mode '{0}' (expected space, none, scheme or a numeric id)")]
pub struct ParseJoinModeError(String);

impl FromStr for JoinMode {
    type Err = ParseJoinModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(JoinMode::from_legacy_id(&s));
        }
        match s.as_str() {
            "space" => Ok(JoinMode::Space),
            "none" => Ok(JoinMode::None),
            "scheme" => Ok(JoinMode::Scheme),
            _ => Err(ParseJoinModeError(s)),
        }
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_shape(c: char) -> bool {
    SHAPE_KEYS.contains(c)
}

fn is_sound(c: char) -> bool {
    SOUND_KEYS.contains(c)
}

/// Join an accumulated code `head` with the next word code `tail`.
pub fn join(mode: JoinMode, head: &str, tail: &str) -> String {
    match mode {
        JoinMode::Space => {
            let mut out = String::with_capacity(head.len() + 1 + tail.len());
            out.push_str(head);
            out.push(' ');
            out.push_str(tail);
            out
        }
        JoinMode::None => {
            let mut out = String::with_capacity(head.len() + tail.len());
            out.push_str(head);
            out.push_str(tail);
            out
        }
        JoinMode::Scheme => join_scheme(head, tail),
    }
}

fn join_scheme(head: &str, tail: &str) -> String {
    let Some(first) = tail.chars().next() else {
        return head.to_string();
    };
    // An empty head has no last char, so the head-dependent rules stay off.
    let last = head.chars().next_back();

    // Punctuation swallows the separating space in front of it.
    if !is_letter(first) && last == Some(' ') {
        let mut out = String::with_capacity(head.len() + tail.len());
        out.push_str(&head[..head.len() - 1]);
        out.push_str(tail);
        return out;
    }

    let mut out = String::with_capacity(head.len() + tail.len() + 2);
    out.push_str(head);
    if is_shape(first) && last.is_some_and(is_letter) {
        out.push(' ');
    }
    out.push_str(tail);
    // Short codes ending on a sound key need an explicit terminator.
    if tail.chars().count() < 4 && tail.chars().next_back().is_some_and(is_sound) {
        out.push(' ');
    }
    out
}
