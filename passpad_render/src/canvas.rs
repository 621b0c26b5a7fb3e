// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing targets and the recorded off-screen buffer.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use passpad_keyboard::{Icon, KeyState};

/// Text attributes for a key label.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size.
    pub size: f64,
    /// Bold face instead of the regular one.
    pub bold: bool,
    /// ARGB colour.
    pub color: u32,
    /// Drop-shadow blur radius. Zero disables the shadow.
    pub shadow_radius: f64,
    /// Drop-shadow ARGB colour.
    pub shadow_color: u32,
}

/// Something keys can be painted onto.
///
/// Label anchors are the centre of the key's padded area; the canvas is expected
/// to centre the text on it horizontally and vertically.
pub trait Canvas {
    /// Paint a key background in the given visual state.
    fn draw_background(&mut self, rect: Rect, state: KeyState);
    /// Paint a label centred on `anchor`.
    fn draw_label(&mut self, text: &str, anchor: Point, style: &TextStyle);
    /// Paint an icon into `rect` (already centred and sized).
    fn draw_icon(&mut self, icon: Icon, rect: Rect);
}

/// A single recorded drawing command.
///
/// Every op remembers the rect of the key it belongs to; clearing and clipping work
/// on that rect.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A key background.
    Background {
        /// Key rect.
        rect: Rect,
        /// Visual state.
        state: KeyState,
    },
    /// A key label.
    Label {
        /// Key rect.
        rect: Rect,
        /// Text.
        text: String,
        /// Centre of the padded key area.
        anchor: Point,
        /// Text attributes.
        style: TextStyle,
    },
    /// A key icon.
    Icon {
        /// Key rect.
        rect: Rect,
        /// Image.
        icon: Icon,
        /// Where the image goes.
        target: Rect,
    },
}

impl DrawOp {
    /// The key rect the op belongs to.
    pub fn key_rect(&self) -> Rect {
        match self {
            Self::Background { rect, .. } | Self::Label { rect, .. } | Self::Icon { rect, .. } => {
                *rect
            }
        }
    }

    fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match self {
            Self::Background { rect, state } => canvas.draw_background(*rect, *state),
            Self::Label {
                text,
                anchor,
                style,
                ..
            } => canvas.draw_label(text, *anchor, style),
            Self::Icon { icon, target, .. } => canvas.draw_icon(*icon, *target),
        }
    }
}

// Positive-area overlap; rects that only share an edge do not overlap.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// The off-screen buffer: a display list sized to the view.
///
/// A pass starts with [`begin`](Self::begin), which clears everything under the clip.
/// Ops recorded afterwards are kept only where they overlap the clip, the way pixels
/// outside a clip are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Buffer {
    size: Size,
    clip: Rect,
    ops: Vec<DrawOp>,
}

impl Buffer {
    /// An empty buffer of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            clip: Rect::ZERO,
            ops: Vec::new(),
        }
    }

    /// Size the buffer was allocated for.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Start a pass: set the clip and clear what lies under it.
    pub fn begin(&mut self, clip: Rect) {
        self.clip = clip;
        self.ops.retain(|op| !overlaps(op.key_rect(), clip));
    }

    /// Record an op, discarding it if it falls outside the clip.
    pub fn record(&mut self, op: DrawOp) {
        if overlaps(op.key_rect(), self.clip) {
            self.ops.push(op);
        }
    }

    /// Recorded ops in paint order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Replay the buffer onto a target.
    pub fn blit<C: Canvas + ?Sized>(&self, target: &mut C) {
        for op in &self.ops {
            op.replay(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Count(usize);

    impl Canvas for Count {
        fn draw_background(&mut self, _: Rect, _: KeyState) {
            self.0 += 1;
        }
        fn draw_label(&mut self, _: &str, _: Point, _: &TextStyle) {
            self.0 += 1;
        }
        fn draw_icon(&mut self, _: Icon, _: Rect) {
            self.0 += 1;
        }
    }

    fn bg(x: f64) -> DrawOp {
        DrawOp::Background {
            rect: Rect::new(x, 0.0, x + 10.0, 10.0),
            state: KeyState::Normal,
        }
    }

    #[test]
    fn begin_clears_only_under_clip() {
        let mut b = Buffer::new(Size::new(30.0, 10.0));
        b.begin(Rect::new(0.0, 0.0, 30.0, 10.0));
        b.record(bg(0.0));
        b.record(bg(10.0));
        b.record(bg(20.0));
        assert_eq!(b.ops().len(), 3);
        b.begin(Rect::new(10.0, 0.0, 20.0, 10.0));
        assert_eq!(b.ops().len(), 2, "neighbours sharing an edge survive");
        b.record(bg(0.0));
        assert_eq!(b.ops().len(), 2, "ops outside the clip are dropped");
        b.record(bg(10.0));
        let mut c = Count::default();
        b.blit(&mut c);
        assert_eq!(c.0, 3);
    }
}
