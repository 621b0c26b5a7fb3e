// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render cache: an off-screen key buffer kept current by dirty rectangles.
//!
//! ## Passes
//!
//! A buffer pass clips to the dirty region. When that region lies within the single
//! invalidated key (allowing one unit of slack), only that key is redrawn; otherwise
//! every key is. After a pass the dirty region and the invalidated key are cleared.
//!
//! [`RenderCache::draw`] runs a pass only when a full redraw is pending or no buffer
//! exists, then blits. [`RenderCache::invalidate_key`] runs its pass at once, so a
//! pressed key is current in the buffer before the host repaints its bounds.

use kurbo::{Rect, Size};
use passpad_index::{Bounds, DirtyRect};
use passpad_keyboard::Key;

use crate::canvas::{Buffer, Canvas, DrawOp};
use crate::style::{KeyStyle, Padding};

/// What the most recent buffer pass drew.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Keys painted.
    pub keys_drawn: usize,
    /// Whether the pass was restricted to the invalidated key.
    pub single_key: bool,
}

/// Off-screen buffer plus dirty-rectangle bookkeeping for a keypad view.
#[derive(Clone, Debug, Default)]
pub struct RenderCache {
    buffer: Option<Buffer>,
    dirty: DirtyRect,
    invalidated_key: Option<usize>,
    draw_pending: bool,
    width: i32,
    height: i32,
    padding: Padding,
    style: KeyStyle,
    repaint: DirtyRect,
    last_pass: Option<PassReport>,
}

impl RenderCache {
    /// A cache with no buffer and zero size.
    pub fn new(style: KeyStyle, padding: Padding) -> Self {
        Self {
            style,
            padding,
            ..Self::default()
        }
    }

    /// Current key style.
    pub fn style(&self) -> &KeyStyle {
        &self.style
    }

    /// View padding.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// View size as `(width, height)`.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Track a new view size. The buffer is released and reallocated on next draw.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.release();
    }

    /// Drop the buffer.
    pub fn release(&mut self) {
        if self.buffer.take().is_some() {
            log::debug!("released key buffer");
        }
    }

    /// Whether a buffer is allocated.
    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    /// The buffer, if allocated.
    pub fn buffer(&self) -> Option<&Buffer> {
        self.buffer.as_ref()
    }

    /// Whether a full redraw is pending.
    pub fn is_draw_pending(&self) -> bool {
        self.draw_pending
    }

    /// The region still waiting for a buffer pass.
    pub fn dirty_region(&self) -> Option<Bounds> {
        self.dirty.region()
    }

    /// What the last buffer pass did, if one ran.
    pub fn last_pass(&self) -> Option<PassReport> {
        self.last_pass
    }

    /// Take the region the host should repaint, leaving it empty.
    pub fn take_repaint(&mut self) -> Option<Bounds> {
        self.repaint.take()
    }

    fn view_bounds(&self) -> Bounds {
        Bounds::new(0, 0, self.width, self.height)
    }

    fn key_view_bounds(&self, key: &Key) -> Bounds {
        key.bounds.offset(self.padding.left, self.padding.top)
    }

    /// Mark the whole view dirty and defer the redraw to the next [`draw`](Self::draw).
    pub fn invalidate_all(&mut self) {
        let all = self.view_bounds();
        self.dirty.add(all);
        self.repaint.add(all);
        self.draw_pending = true;
    }

    /// Mark one key dirty and redraw it into the buffer now.
    ///
    /// Unknown indices are ignored.
    pub fn invalidate_key(&mut self, keys: &[Key], index: usize) {
        let Some(key) = keys.get(index) else {
            return;
        };
        let bounds = self.key_view_bounds(key);
        self.invalidated_key = Some(index);
        self.dirty.add(bounds);
        self.draw_buffer(keys);
        self.repaint.add(bounds);
    }

    /// Bring the buffer up to date if needed and blit it onto `canvas`.
    pub fn draw<C: Canvas + ?Sized>(&mut self, keys: &[Key], canvas: &mut C) {
        if self.draw_pending || self.buffer.is_none() {
            self.draw_buffer(keys);
        }
        if let Some(buffer) = &self.buffer {
            buffer.blit(canvas);
        }
    }

    fn draw_buffer(&mut self, keys: &[Key]) {
        if self.width <= 0 || self.height <= 0 {
            return;
        }
        if self.buffer.is_none() {
            log::debug!("allocating {}x{} key buffer", self.width, self.height);
            self.buffer = Some(Buffer::new(Size::new(
                f64::from(self.width),
                f64::from(self.height),
            )));
            self.invalidate_all();
        }
        let clip = self.dirty.region().unwrap_or_default();
        let single = self.invalidated_key.filter(|&i| {
            keys.get(i)
                .is_some_and(|k| self.key_view_bounds(k).encloses(&clip, 1))
        });
        let style = self.style;
        let offset = (self.padding.left, self.padding.top);
        let Some(buffer) = self.buffer.as_mut() else {
            return;
        };
        buffer.begin(to_rect(clip));
        let mut drawn = 0;
        for (i, key) in keys.iter().enumerate() {
            if single.is_some_and(|s| s != i) {
                continue;
            }
            record_key(buffer, key, offset, &style);
            drawn += 1;
        }
        log::trace!("buffer pass drew {drawn} keys");
        self.last_pass = Some(PassReport {
            keys_drawn: drawn,
            single_key: single.is_some(),
        });
        self.invalidated_key = None;
        self.draw_pending = false;
        self.dirty.clear();
    }
}

fn to_rect(b: Bounds) -> Rect {
    Rect::new(
        f64::from(b.x),
        f64::from(b.y),
        f64::from(b.right()),
        f64::from(b.bottom()),
    )
}

fn record_key(buffer: &mut Buffer, key: &Key, offset: (i32, i32), style: &KeyStyle) {
    let rect = to_rect(key.bounds.offset(offset.0, offset.1));
    buffer.record(DrawOp::Background {
        rect,
        state: key.state(),
    });
    let inner = rect - style.key_padding;
    if let Some(label) = &key.label {
        buffer.record(DrawOp::Label {
            rect,
            text: label.clone(),
            anchor: inner.center(),
            style: style.text_style_for(label, key.codes.len()),
        });
    } else if let Some(icon) = key.icon {
        let size = Size::new(f64::from(icon.width), f64::from(icon.height));
        buffer.record(DrawOp::Icon {
            rect,
            icon,
            target: Rect::from_center_size(inner.center(), size),
        });
    }
}
