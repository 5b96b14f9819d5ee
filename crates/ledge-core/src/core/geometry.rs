use glam::IVec2;

/// Axis-aligned rectangle in integer pixels.
/// `(x, y)` is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn at(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    pub fn set_left(&mut self, v: i32) {
        self.x = v;
    }

    pub fn set_right(&mut self, v: i32) {
        self.x = v - self.w;
    }

    pub fn set_top(&mut self, v: i32) {
        self.y = v;
    }

    pub fn set_bottom(&mut self, v: i32) {
        self.y = v - self.h;
    }
}

/// Strict intersection test. Rectangles that merely share an edge do not
/// overlap, so a snapped entity resting on a tile stays collision-free.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// The moving rect hit the still one from below (its top edge is inside).
/// Bounds are inclusive; these run after the movement that caused the overlap.
pub fn colliding_from_below(moving: Rect, still: Rect) -> bool {
    still.top() <= moving.top() && moving.top() <= still.bottom()
}

/// The moving rect hit the still one from above (its bottom edge is inside).
pub fn colliding_from_above(moving: Rect, still: Rect) -> bool {
    still.top() <= moving.bottom() && moving.bottom() <= still.bottom()
}

/// The moving rect hit the still one from the right (its left edge is inside).
pub fn colliding_from_right(moving: Rect, still: Rect) -> bool {
    still.left() <= moving.left() && moving.left() <= still.right()
}

/// The moving rect hit the still one from the left (its right edge is inside).
pub fn colliding_from_left(moving: Rect, still: Rect) -> bool {
    still.left() <= moving.right() && moving.right() <= still.right()
}
