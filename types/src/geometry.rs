//! Logical-unit geometry shared by the engine and renderers.
//!
//! Coordinates are `f64` with the origin at the top-left and y growing down.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` whose center sits on `center`.
    #[must_use]
    pub fn centered_on(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Euclidean length of the diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    #[must_use]
    pub fn lerp(from: &Rect, to: &Rect, t: f64) -> Self {
        Self::new(
            lerp(from.x, to.x, t),
            lerp(from.y, to.y, t),
            lerp(from.width, to.width, t),
            lerp(from.height, to.height, t),
        )
    }
}

/// Rounded rectangle path, the shape used for clipping masks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: f64,
}

impl RoundedRect {
    #[must_use]
    pub const fn new(rect: Rect, corner_radius: f64) -> Self {
        Self {
            rect,
            corner_radius,
        }
    }

    /// Corner radius as drawn: never more than half the shorter side.
    #[must_use]
    pub fn effective_radius(&self) -> f64 {
        let limit = self.rect.width.min(self.rect.height) / 2.0;
        self.corner_radius.clamp(0.0, limit.max(0.0))
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        if !self.rect.contains(point) {
            return false;
        }

        let radius = self.effective_radius();
        if radius <= 0.0 {
            return true;
        }

        let center = self.rect.center();
        let dx = ((point.x - center.x).abs() - (self.rect.width / 2.0 - radius)).max(0.0);
        let dy = ((point.y - center.y).abs() - (self.rect.height / 2.0 - radius)).max(0.0);
        dx * dx + dy * dy <= radius * radius
    }

    #[must_use]
    pub fn lerp(from: &RoundedRect, to: &RoundedRect, t: f64) -> Self {
        Self::new(
            Rect::lerp(&from.rect, &to.rect, t),
            lerp(from.corner_radius, to.corner_radius, t),
        )
    }
}

pub(crate) fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
