//! Keyboard keys
//!
//! A key can be named three ways: its descriptive name (`"space"`, `"."`,
//! `"left shift"`), an alias taken from the classic constant names
//! (`"period"`, `"lshift"`, also accepted as `"K_PERIOD"`), or a single
//! character (`" "`, `"A"`). Lookups are case-insensitive.
//!
//! ```ignore
//! let space: Key = "space".parse()?;
//! assert_eq!(space, Key::Space);
//! if Key::Space.is_pressed() { /* jump */ }
//! ```

use std::fmt;
use std::str::FromStr;

use macroquad::input::{get_keys_down, is_key_down, KeyCode};

use super::fuzzy;
use crate::error::Error;

macro_rules! key_table {
    ($( $variant:ident => $code:ident, $name:literal $(, $alias:literal)* ; )*) => {
        /// A key on the keyboard
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $( $variant, )*
        }

        impl Key {
            /// Every key, in table order
            pub const ALL: &'static [Key] = &[ $( Key::$variant, )* ];

            /// Descriptive name
            pub fn name(self) -> &'static str {
                match self {
                    $( Key::$variant => $name, )*
                }
            }

            /// Other accepted spellings
            pub fn aliases(self) -> &'static [&'static str] {
                match self {
                    $( Key::$variant => &[$( $alias ),*], )*
                }
            }

            pub fn key_code(self) -> KeyCode {
                match self {
                    $( Key::$variant => KeyCode::$code, )*
                }
            }

            pub fn from_key_code(code: KeyCode) -> Option<Key> {
                match code {
                    $( KeyCode::$code => Some(Key::$variant), )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}

key_table! {
    Backspace => Backspace, "backspace";
    Tab => Tab, "tab";
    Return => Enter, "return";
    Pause => Pause, "pause";
    Escape => Escape, "escape", "esc";
    Space => Space, "space", " ";
    Quote => Apostrophe, "'", "quote", "apostrophe";
    Comma => Comma, ",", "comma";
    Minus => Minus, "-", "minus";
    Period => Period, ".", "period";
    Slash => Slash, "/", "slash";
    Num0 => Key0, "0";
    Num1 => Key1, "1";
    Num2 => Key2, "2";
    Num3 => Key3, "3";
    Num4 => Key4, "4";
    Num5 => Key5, "5";
    Num6 => Key6, "6";
    Num7 => Key7, "7";
    Num8 => Key8, "8";
    Num9 => Key9, "9";
    Semicolon => Semicolon, ";", "semicolon";
    Equals => Equal, "=", "equals";
    LeftBracket => LeftBracket, "[", "leftbracket";
    Backslash => Backslash, "\\", "backslash";
    RightBracket => RightBracket, "]", "rightbracket";
    Backquote => GraveAccent, "`", "backquote";
    A => A, "a";
    B => B, "b";
    C => C, "c";
    D => D, "d";
    E => E, "e";
    F => F, "f";
    G => G, "g";
    H => H, "h";
    I => I, "i";
    J => J, "j";
    K => K, "k";
    L => L, "l";
    M => M, "m";
    N => N, "n";
    O => O, "o";
    P => P, "p";
    Q => Q, "q";
    R => R, "r";
    S => S, "s";
    T => T, "t";
    U => U, "u";
    V => V, "v";
    W => W, "w";
    X => X, "x";
    Y => Y, "y";
    Z => Z, "z";
    Delete => Delete, "delete";
    Kp0 => Kp0, "[0]", "kp0";
    Kp1 => Kp1, "[1]", "kp1";
    Kp2 => Kp2, "[2]", "kp2";
    Kp3 => Kp3, "[3]", "kp3";
    Kp4 => Kp4, "[4]", "kp4";
    Kp5 => Kp5, "[5]", "kp5";
    Kp6 => Kp6, "[6]", "kp6";
    Kp7 => Kp7, "[7]", "kp7";
    Kp8 => Kp8, "[8]", "kp8";
    Kp9 => Kp9, "[9]", "kp9";
    KpPeriod => KpDecimal, "[.]", "kp_period";
    KpDivide => KpDivide, "[/]", "kp_divide";
    KpMultiply => KpMultiply, "[*]", "kp_multiply";
    KpMinus => KpSubtract, "[-]", "kp_minus";
    KpPlus => KpAdd, "[+]", "kp_plus";
    KpEnter => KpEnter, "enter", "kp_enter";
    KpEquals => KpEqual, "[=]", "kp_equals";
    Up => Up, "up";
    Down => Down, "down";
    Right => Right, "right";
    Left => Left, "left";
    Insert => Insert, "insert";
    Home => Home, "home";
    End => End, "end";
    PageUp => PageUp, "page up", "pageup";
    PageDown => PageDown, "page down", "pagedown";
    F1 => F1, "f1";
    F2 => F2, "f2";
    F3 => F3, "f3";
    F4 => F4, "f4";
    F5 => F5, "f5";
    F6 => F6, "f6";
    F7 => F7, "f7";
    F8 => F8, "f8";
    F9 => F9, "f9";
    F10 => F10, "f10";
    F11 => F11, "f11";
    F12 => F12, "f12";
    F13 => F13, "f13";
    F14 => F14, "f14";
    F15 => F15, "f15";
    NumLock => NumLock, "numlock";
    CapsLock => CapsLock, "caps lock", "capslock";
    ScrollLock => ScrollLock, "scroll lock", "scrollock";
    RightShift => RightShift, "right shift", "rshift";
    LeftShift => LeftShift, "left shift", "lshift";
    RightCtrl => RightControl, "right ctrl", "rctrl";
    LeftCtrl => LeftControl, "left ctrl", "lctrl";
    RightAlt => RightAlt, "right alt", "ralt";
    LeftAlt => LeftAlt, "left alt", "lalt";
    RightSuper => RightSuper, "right super", "rsuper", "rmeta";
    LeftSuper => LeftSuper, "left super", "lsuper", "lmeta";
    Print => PrintScreen, "print screen", "print";
    Menu => Menu, "menu";
}

impl Key {
    /// Whether this key is held down right now
    pub fn is_pressed(self) -> bool {
        is_key_down(self.key_code())
    }

    /// Whether any key is held down right now
    pub fn is_any_pressed() -> bool {
        !get_keys_down().is_empty()
    }

    /// Look a key up by name, alias, constant name or character
    pub fn from_name(name: &str) -> Result<Key, Error> {
        let wanted = normalize(name);
        let constant = wanted.strip_prefix("k_");

        let found = Key::ALL.iter().copied().find(|key| {
            key.name() == wanted
                || key.aliases().contains(&wanted.as_str())
                || constant.is_some_and(|c| key.name() == c || key.aliases().contains(&c))
        });
        if let Some(key) = found {
            return Ok(key);
        }

        let candidates = Key::ALL
            .iter()
            .flat_map(|key| std::iter::once(key.name()).chain(key.aliases().iter().copied()));
        let suggestion = fuzzy::closest(&wanted, candidates).unwrap_or_default().to_string();
        tracing::debug!(name, %suggestion, "unknown key name");
        Err(Error::UnknownKey {
            name: name.to_string(),
            suggestion,
        })
    }
}

/// Lowercase, and trim unless the whole name is whitespace (" " is a key)
fn normalize(name: &str) -> String {
    let trimmed = if name.trim().is_empty() { name } else { name.trim() };
    trimmed.to_lowercase()
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_name(s)
    }
}

impl TryFrom<char> for Key {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Key::from_name(c.encode_utf8(&mut [0; 4]))
    }
}

impl From<Key> for KeyCode {
    fn from(key: Key) -> Self {
        key.key_code()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_period_spellings_agree() {
        let by_alias: Key = "period".parse().unwrap();
        let by_char: Key = ".".parse().unwrap();
        let by_constant: Key = "K_PERIOD".parse().unwrap();
        assert_eq!(by_alias, Key::Period);
        assert_eq!(by_char, Key::Period);
        assert_eq!(by_constant, Key::Period);
    }

    #[test]
    fn test_misspelling_suggests_comma() {
        match Key::from_name("coma") {
            Err(Error::UnknownKey { name, suggestion }) => {
                assert_eq!(name, "coma");
                assert!(suggestion.contains("comma"));
            }
            other => panic!("expected UnknownKey, got {:?}", other),
        }
    }

    #[test]
    fn test_case_insensitive_and_characters() {
        assert_eq!(Key::from_name("A").unwrap(), Key::A);
        assert_eq!(Key::from_name("Left Shift").unwrap(), Key::LeftShift);
        assert_eq!(Key::from_name(" ").unwrap(), Key::Space);
        assert_eq!(Key::try_from('7').unwrap(), Key::Num7);
        assert_eq!(Key::from_name("K_a").unwrap(), Key::A);
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for key in Key::ALL {
            assert!(seen.insert(key.name()), "duplicate name {}", key.name());
            for alias in key.aliases() {
                assert!(seen.insert(alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_key_code_roundtrip() {
        for &key in Key::ALL {
            assert_eq!(Key::from_key_code(key.key_code()), Some(key));
        }
        assert_eq!(Key::from_key_code(KeyCode::Unknown), None);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Key::PageUp.to_string(), "page up");
    }
}
