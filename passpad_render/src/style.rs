// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual configuration for keys and the view around them.

use kurbo::Insets;

use crate::canvas::TextStyle;

/// Key text and background styling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyStyle {
    /// Size for single-character labels and multi-code keys.
    pub key_text_size: f64,
    /// Size for multi-character labels such as "DEL".
    pub label_text_size: f64,
    /// ARGB label colour.
    pub key_text_color: u32,
    /// Label drop-shadow radius.
    pub shadow_radius: f64,
    /// Label drop-shadow ARGB colour.
    pub shadow_color: u32,
    /// Inner padding of the key background; labels and icons centre inside it.
    pub key_padding: Insets,
}

impl Default for KeyStyle {
    fn default() -> Self {
        Self {
            key_text_size: 18.0,
            label_text_size: 14.0,
            key_text_color: 0xFF00_0000,
            shadow_radius: 0.0,
            shadow_color: 0,
            key_padding: Insets::ZERO,
        }
    }
}

impl KeyStyle {
    /// Text style for a label on a key with `code_count` codes.
    ///
    /// Words on single-code keys get the bold label size; single characters and
    /// multi-tap keys get the regular key size.
    pub fn text_style_for(&self, label: &str, code_count: usize) -> TextStyle {
        let word = label.chars().nth(1).is_some() && code_count < 2;
        TextStyle {
            size: if word {
                self.label_text_size
            } else {
                self.key_text_size
            },
            bold: word,
            color: self.key_text_color,
            shadow_radius: self.shadow_radius,
            shadow_color: self.shadow_color,
        }
    }
}

/// View padding in whole layout units.
///
/// Keys are laid out inside the padding: touch points have the leading padding
/// subtracted and key rects have it added when drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Left.
    pub left: i32,
    /// Top.
    pub top: i32,
    /// Right.
    pub right: i32,
    /// Bottom.
    pub bottom: i32,
}

impl Padding {
    /// Same padding on every side.
    pub const fn uniform(v: i32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    /// Left plus right.
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Top plus bottom.
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_bold_at_label_size() {
        let s = KeyStyle::default();
        let del = s.text_style_for("DEL", 1);
        assert!(del.bold);
        assert_eq!(del.size, 14.0);
        let digit = s.text_style_for("7", 1);
        assert!(!digit.bold);
        assert_eq!(digit.size, 18.0);
        let multi = s.text_style_for("abc", 3);
        assert!(!multi.bold, "multi-tap keys use the key size");
    }

    #[test]
    fn padding_sums() {
        let p = Padding {
            left: 1,
            top: 2,
            right: 3,
            bottom: 4,
        };
        assert_eq!(p.horizontal(), 4);
        assert_eq!(p.vertical(), 6);
        assert_eq!(Padding::uniform(5).horizontal(), 10);
    }
}
