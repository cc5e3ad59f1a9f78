/// Axis-aligned square region with exclusive `x2`/`y2`, usable directly as a crop box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SquareBounds {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl SquareBounds {
    pub fn from_origin(x1: u32, y1: u32, side: u32) -> Self {
        Self {
            x1,
            y1,
            x2: x1 + side,
            y2: y1 + side,
        }
    }

    pub fn side(&self) -> u32 {
        self.x2 - self.x1
    }
}

impl std::fmt::Display for SquareBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}
