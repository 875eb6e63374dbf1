// src/clock/layout.rs

//! Text placement on the screen.
//!
//! A piece of text is placed relative to a reference edge (or the centre)
//! plus an offset. With a `Left` reference the offset is measured from the
//! left edge to the left of the text; with `Right`, from the right edge to the
//! right of the text; with `Centre`, it shifts the centred text. Vertical
//! placement works the same way.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalRef {
    Left,
    Centre,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalRef {
    Top,
    Middle,
    Bottom,
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i64,
    pub height: i64,
}

impl Size {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub href: HorizontalRef,
    pub vref: VerticalRef,
    pub hoff: i64,
    pub voff: i64,
}

impl Placement {
    pub fn new(href: HorizontalRef, vref: VerticalRef, hoff: i64, voff: i64) -> Self {
        Self { href, vref, hoff, voff }
    }

    /// Top-left corner of `text` on `screen`.
    ///
    /// Sizes come straight from the config, so the arithmetic saturates
    /// instead of overflowing.
    pub fn position(&self, screen: Size, text: Size) -> (i64, i64) {
        (
            axis(self.href.into(), screen.width, text.width, self.hoff),
            axis(self.vref.into(), screen.height, text.height, self.voff),
        )
    }
}

#[derive(Debug, Clone, Copy)]
enum Anchor {
    Start,
    Centre,
    End,
}

impl From<HorizontalRef> for Anchor {
    fn from(r: HorizontalRef) -> Self {
        match r {
            HorizontalRef::Left => Anchor::Start,
            HorizontalRef::Centre => Anchor::Centre,
            HorizontalRef::Right => Anchor::End,
        }
    }
}

impl From<VerticalRef> for Anchor {
    fn from(r: VerticalRef) -> Self {
        match r {
            VerticalRef::Top => Anchor::Start,
            VerticalRef::Middle => Anchor::Centre,
            VerticalRef::Bottom => Anchor::End,
        }
    }
}

fn axis(anchor: Anchor, screen: i64, text: i64, offset: i64) -> i64 {
    let slack = screen.saturating_sub(text);
    match anchor {
        Anchor::Start => offset,
        Anchor::End => slack.saturating_sub(offset),
        Anchor::Centre => (slack / 2).saturating_add(offset),
    }
}
