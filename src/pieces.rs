//! Static data and geometry primitives shared by the locator and the
//! fortress generator: piece kinds, their fixed dimensions, bounding-box
//! orientation, and the weight-table rows that drive random piece choice.

use std::fmt;

/// A cardinal facing. The axis matters for the start piece's bounding box:
/// North/South face along Z, East/West face along X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn axis_is_z(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    pub fn left(self) -> Direction {
        match self {
            Direction::North | Direction::South => Direction::West,
            Direction::West | Direction::East => Direction::North,
        }
    }

    pub fn right(self) -> Direction {
        match self {
            Direction::North | Direction::South => Direction::East,
            Direction::West | Direction::East => Direction::South,
        }
    }
}

/// An axis-aligned, inclusive-on-both-ends integer box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub max_z: i32,
}

impl BoundingBox {
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.max_x >= other.min_x
            && self.min_x <= other.max_x
            && self.max_y >= other.min_y
            && self.min_y <= other.max_y
            && self.max_z >= other.min_z
            && self.min_z <= other.max_z
    }

    pub fn center(&self) -> (i32, i32, i32) {
        (
            (self.min_x + self.max_x).div_euclid(2),
            (self.min_y + self.max_y).div_euclid(2),
            (self.min_z + self.max_z).div_euclid(2),
        )
    }

    /// Orients a `(w, h, d)` box with offsets `(ox, oy, oz)` at origin
    /// `(x, y, z)` facing `dir`. Used by every piece except the start piece.
    #[allow(clippy::too_many_arguments)]
    pub fn oriented(
        x: i32,
        y: i32,
        z: i32,
        ox: i32,
        oy: i32,
        oz: i32,
        w: i32,
        h: i32,
        d: i32,
        dir: Direction,
    ) -> BoundingBox {
        match dir {
            Direction::North => BoundingBox {
                min_x: x + ox,
                min_y: y + oy,
                min_z: z - d + 1 + oz,
                max_x: x + w - 1 + ox,
                max_y: y + h - 1 + oy,
                max_z: z + oz,
            },
            Direction::South => BoundingBox {
                min_x: x + ox,
                min_y: y + oy,
                min_z: z + oz,
                max_x: x + w - 1 + ox,
                max_y: y + h - 1 + oy,
                max_z: z + d - 1 + oz,
            },
            Direction::West => BoundingBox {
                min_x: x - d + 1 + oz,
                min_y: y + oy,
                min_z: z + ox,
                max_x: x + oz,
                max_y: y + h - 1 + oy,
                max_z: z + w - 1 + ox,
            },
            Direction::East => BoundingBox {
                min_x: x + oz,
                min_y: y + oy,
                min_z: z + ox,
                max_x: x + d - 1 + oz,
                max_y: y + h - 1 + oy,
                max_z: z + w - 1 + ox,
            },
        }
    }

    /// The start piece's own bounding-box formula. Numerically identical to
    /// `oriented` for the fixed 19x10x19 footprint used here, but kept
    /// distinct: the host computes it via a different code path
    /// (`StructurePiece.makeBoundingBox`) and a future change to the
    /// dimensions would make the two diverge.
    pub fn start_piece(x: i32, y: i32, z: i32, dir: Direction, w: i32, h: i32, d: i32) -> BoundingBox {
        if dir.axis_is_z() {
            BoundingBox {
                min_x: x,
                min_y: y,
                min_z: z,
                max_x: x + w - 1,
                max_y: y + h - 1,
                max_z: z + d - 1,
            }
        } else {
            BoundingBox {
                min_x: x,
                min_y: y,
                min_z: z,
                max_x: x + d - 1,
                max_y: y + h - 1,
                max_z: z + w - 1,
            }
        }
    }
}

/// One of the fifteen catalogued piece templates, plus the start piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    BridgeStraight,
    BridgeCrossing,
    RoomCrossing,
    StairsRoom,
    MonsterThrone,
    CastleEntrance,
    BridgeEndFiller,
    CastleSmallCorridor,
    CastleSmallCorridorCrossing,
    CastleSmallCorridorRightTurn,
    CastleSmallCorridorLeftTurn,
    CastleCorridorStairs,
    CastleCorridorTBalcony,
    CastleStalkRoom,
    StartPiece,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// `(width, height, depth)` and `(offset_x, offset_y, offset_z)` for a kind,
/// per the fixed external table. Never changes at runtime.
pub fn dimensions(kind: PieceKind) -> (i32, i32, i32) {
    use PieceKind::*;
    match kind {
        BridgeStraight => (5, 10, 19),
        BridgeCrossing => (19, 10, 19),
        RoomCrossing => (7, 9, 7),
        StairsRoom => (7, 11, 7),
        MonsterThrone => (7, 8, 9),
        CastleEntrance => (13, 14, 13),
        BridgeEndFiller => (5, 10, 8),
        CastleSmallCorridor => (5, 7, 5),
        CastleSmallCorridorCrossing => (5, 7, 5),
        CastleSmallCorridorRightTurn => (5, 7, 5),
        CastleSmallCorridorLeftTurn => (5, 7, 5),
        CastleCorridorStairs => (5, 14, 10),
        CastleCorridorTBalcony => (9, 7, 9),
        CastleStalkRoom => (13, 14, 13),
        StartPiece => (19, 10, 19),
    }
}

pub fn offsets(kind: PieceKind) -> (i32, i32, i32) {
    use PieceKind::*;
    match kind {
        BridgeStraight => (-1, -3, 0),
        BridgeCrossing => (-8, -3, 0),
        RoomCrossing => (-2, 0, 0),
        StairsRoom => (-2, 0, 0),
        MonsterThrone => (-2, 0, 0),
        CastleEntrance => (-5, -3, 0),
        BridgeEndFiller => (-1, -3, 0),
        CastleSmallCorridor => (-1, 0, 0),
        CastleSmallCorridorCrossing => (-1, 0, 0),
        CastleSmallCorridorRightTurn => (-1, 0, 0),
        CastleSmallCorridorLeftTurn => (-1, 0, 0),
        CastleCorridorStairs => (-1, -7, 0),
        CastleCorridorTBalcony => (-3, 0, 0),
        CastleStalkRoom => (-5, -3, 0),
        StartPiece => (-8, -3, 0),
    }
}

/// Computes the oriented bounding box for `kind` at the given origin/facing
/// using its fixed dimension/offset table entry.
pub fn orient(kind: PieceKind, x: i32, y: i32, z: i32, dir: Direction) -> BoundingBox {
    let (w, h, d) = dimensions(kind);
    let (ox, oy, oz) = offsets(kind);
    BoundingBox::oriented(x, y, z, ox, oy, oz, w, h, d, dir)
}

/// One row of a weight table: a candidate piece, its relative draw weight,
/// an optional placement cap (0 = unlimited), and whether it may be placed
/// twice in a row.
#[derive(Debug, Clone, Copy)]
pub struct PieceWeight {
    pub kind: PieceKind,
    pub weight: i32,
    pub max_place_count: i32,
    pub allow_in_row: bool,
    pub place_count: i32,
}

impl PieceWeight {
    const fn new(kind: PieceKind, weight: i32, max_place_count: i32, allow_in_row: bool) -> Self {
        PieceWeight { kind, weight, max_place_count, allow_in_row, place_count: 0 }
    }

    /// Whether this entry still has placement budget left.
    pub fn has_budget(&self) -> bool {
        self.max_place_count == 0 || self.place_count < self.max_place_count
    }

    /// Whether this entry has hit its placement cap.
    pub fn is_capped(&self) -> bool {
        self.max_place_count > 0 && self.place_count >= self.max_place_count
    }
}

/// Fresh copy of the bridge catalogue's initial weight state.
pub fn bridge_weights() -> Vec<PieceWeight> {
    use PieceKind::*;
    vec![
        PieceWeight::new(BridgeStraight, 30, 0, true),
        PieceWeight::new(BridgeCrossing, 10, 4, false),
        PieceWeight::new(RoomCrossing, 10, 4, false),
        PieceWeight::new(StairsRoom, 10, 3, false),
        PieceWeight::new(MonsterThrone, 5, 2, false),
        PieceWeight::new(CastleEntrance, 5, 1, false),
    ]
}

/// Fresh copy of the castle catalogue's initial weight state.
pub fn castle_weights() -> Vec<PieceWeight> {
    use PieceKind::*;
    vec![
        PieceWeight::new(CastleSmallCorridor, 25, 0, true),
        PieceWeight::new(CastleSmallCorridorCrossing, 15, 5, false),
        PieceWeight::new(CastleSmallCorridorRightTurn, 5, 10, false),
        PieceWeight::new(CastleSmallCorridorLeftTurn, 5, 10, false),
        PieceWeight::new(CastleCorridorStairs, 10, 3, true),
        PieceWeight::new(CastleCorridorTBalcony, 7, 2, false),
        PieceWeight::new(CastleStalkRoom, 5, 2, false),
    ]
}

/// One placed piece of the final generator output.
#[derive(Debug, Clone, Copy)]
pub struct StructurePiece {
    pub kind: PieceKind,
    pub bounding_box: BoundingBox,
    pub direction: Direction,
    pub gen_depth: u32,
}

impl StructurePiece {
    pub fn center(&self) -> (i32, i32, i32) {
        self.bounding_box.center()
    }

    /// `BridgeCrossing` and `StartPiece` share the 19x10x19 footprint and
    /// are treated identically by the quad-crossing detector.
    pub fn is_crossing(&self) -> bool {
        matches!(self.kind, PieceKind::BridgeCrossing | PieceKind::StartPiece)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounding_box_intersects_is_inclusive() {
        let a = BoundingBox { min_x: 0, min_y: 0, min_z: 0, max_x: 4, max_y: 4, max_z: 4 };
        let b = BoundingBox { min_x: 4, min_y: 4, min_z: 4, max_x: 8, max_y: 8, max_z: 8 };
        assert!(a.intersects(&b));
        let c = BoundingBox { min_x: 5, min_y: 0, min_z: 0, max_x: 9, max_y: 4, max_z: 4 };
        assert!(!a.intersects(&c));
    }

    #[test]
    fn start_piece_footprint_is_19x19_either_axis() {
        let ns = BoundingBox::start_piece(0, 64, 0, Direction::North, 19, 10, 19);
        let ew = BoundingBox::start_piece(0, 64, 0, Direction::East, 19, 10, 19);
        assert_eq!((ns.max_x - ns.min_x, ns.max_z - ns.min_z), (18, 18));
        assert_eq!((ew.max_x - ew.min_x, ew.max_z - ew.min_z), (18, 18));
    }

    #[test]
    fn bridge_weights_total_is_seventy() {
        let total: i32 = bridge_weights().iter().map(|w| w.weight).sum();
        assert_eq!(total, 70);
    }
}
