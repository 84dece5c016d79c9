//! The three draggable corner handles

use kurbo::Point;

/// Identifier of one of the three corner handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointId {
    A,
    B,
    C,
}

impl PointId {
    pub const ALL: [PointId; 3] = [PointId::A, PointId::B, PointId::C];

    pub fn label(&self) -> &'static str {
        match self {
            PointId::A => "A",
            PointId::B => "B",
            PointId::C => "C",
        }
    }

    fn index(self) -> usize {
        match self {
            PointId::A => 0,
            PointId::B => 1,
            PointId::C => 2,
        }
    }
}

/// Positions of the three handles, indexed by [`PointId`].
#[derive(Debug, Clone, PartialEq)]
pub struct Handles {
    positions: [Point; 3],
}

impl Default for Handles {
    fn default() -> Self {
        Self {
            positions: [
                Point::new(100.0, 100.0),
                Point::new(400.0, 400.0),
                Point::new(700.0, 100.0),
            ],
        }
    }
}

impl Handles {
    pub fn get(&self, id: PointId) -> Point {
        self.positions[id.index()]
    }

    pub fn set(&mut self, id: PointId, pos: Point) {
        self.positions[id.index()] = pos;
    }

    /// The corner as `(a, b, c)` with the vertex at `b`.
    pub fn corner(&self) -> (Point, Point, Point) {
        (self.positions[0], self.positions[1], self.positions[2])
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, Point)> + '_ {
        PointId::ALL.iter().map(move |&id| (id, self.get(id)))
    }

    /// Nearest handle within `pick_radius` of `pos`, if any.
    pub fn hit_test(&self, pos: Point, pick_radius: f64) -> Option<PointId> {
        let mut best: Option<(f64, PointId)> = None;
        for (id, p) in self.iter() {
            let dist = (pos - p).hypot();
            if dist <= pick_radius && best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, id));
            }
        }
        best.map(|(_, id)| id)
    }
}
