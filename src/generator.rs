//! The recursive fortress layout generator: starting from a Fortress chunk,
//! grows a weight-biased, collision-tested piece graph via a randomized
//! work queue. This is the single largest and riskiest component of the
//! core — see the design notes on the randomized pop and the generator-wide
//! "last placed" tracker before changing anything here.

use crate::locator::ChunkPos;
use crate::pieces::{
    bridge_weights, castle_weights, dimensions, orient, BoundingBox, Direction, PieceKind, PieceWeight,
    StructurePiece,
};
use crate::rng::{next_horizontal_direction, Rng};

const MAGIC_START_Y: i32 = 64;
const LOWEST_Y: i32 = 10;
const MAX_DEPTH: u32 = 30;
const ANCHOR_RADIUS: i32 = 112;
const MAX_ATTEMPTS: u32 = 5;

struct Generator {
    rng: Rng,
    pieces: Vec<StructurePiece>,
    pending: Vec<StructurePiece>,
    bridge_weights: Vec<PieceWeight>,
    castle_weights: Vec<PieceWeight>,
    last_placed: Option<PieceKind>,
    anchor: Option<BoundingBox>,
}

/// Runs one complete generation from a Fortress chunk and returns every
/// placed piece in creation order.
pub fn generate(world_seed: i64, chunk: ChunkPos) -> Vec<StructurePiece> {
    let mut gen = Generator {
        rng: Rng::default(),
        pieces: Vec::new(),
        pending: Vec::new(),
        bridge_weights: bridge_weights(),
        castle_weights: castle_weights(),
        last_placed: None,
        anchor: None,
    };
    gen.run(world_seed, chunk);
    gen.pieces
}

impl Generator {
    fn run(&mut self, world_seed: i64, chunk: ChunkPos) {
        log::debug!("starting generator run for seed {} at chunk ({}, {})", world_seed, chunk.x, chunk.z);
        self.rng.set_large_feature_seed(world_seed, chunk.x, chunk.z);

        let start_x = chunk.x * 16 + 2;
        let start_z = chunk.z * 16 + 2;
        let start_direction = next_horizontal_direction(&self.rng);

        let (w, h, d) = dimensions(PieceKind::StartPiece);
        let start_box = BoundingBox::start_piece(start_x, MAGIC_START_Y, start_z, start_direction, w, h, d);
        let start_piece = StructurePiece {
            kind: PieceKind::StartPiece,
            bounding_box: start_box,
            direction: start_direction,
            gen_depth: 0,
        };

        self.anchor = Some(start_box);
        self.pieces.push(start_piece);
        self.spawn_children(start_piece);

        while !self.pending.is_empty() {
            let idx = self.rng.next_int_bound(self.pending.len() as i32) as usize;
            let piece = self.pending.remove(idx);
            self.spawn_children(piece);
        }
    }

    /// Dispatches the fixed per-kind child-spawn request list: each piece
    /// kind asks for a specific, hardcoded set of `forward`/`left`/`right`
    /// calls at fixed offsets.
    fn spawn_children(&mut self, piece: StructurePiece) {
        use PieceKind::*;
        match piece.kind {
            StartPiece | BridgeCrossing => {
                self.forward(piece, 8, 3, false);
                self.left(piece, 3, 8, false);
                self.right(piece, 3, 8, false);
            }
            BridgeStraight => {
                self.forward(piece, 1, 3, false);
            }
            RoomCrossing => {
                self.forward(piece, 2, 0, false);
                self.left(piece, 0, 2, false);
                self.right(piece, 0, 2, false);
            }
            StairsRoom => {
                self.right(piece, 6, 2, false);
            }
            CastleEntrance => {
                self.forward(piece, 5, 3, true);
            }
            CastleSmallCorridor => {
                self.forward(piece, 1, 0, true);
            }
            CastleSmallCorridorCrossing => {
                self.forward(piece, 1, 0, true);
                self.left(piece, 0, 1, true);
                self.right(piece, 0, 1, true);
            }
            CastleSmallCorridorRightTurn => {
                self.right(piece, 0, 1, true);
            }
            CastleSmallCorridorLeftTurn => {
                self.left(piece, 0, 1, true);
            }
            CastleCorridorStairs => {
                self.forward(piece, 1, 0, true);
            }
            CastleCorridorTBalcony => {
                let i = match piece.direction {
                    Direction::West | Direction::North => 5,
                    _ => 1,
                };
                let left_castle = self.rng.next_int_bound(8) > 0;
                self.left(piece, 0, i, left_castle);
                let right_castle = self.rng.next_int_bound(8) > 0;
                self.right(piece, 0, i, right_castle);
            }
            CastleStalkRoom => {
                self.forward(piece, 5, 3, true);
                self.forward(piece, 5, 11, true);
            }
            MonsterThrone | BridgeEndFiller => {}
        }
    }

    /// Requests a child piece ahead of `piece`: same facing, `i` along the
    /// lateral axis, `j` added to `min_y`.
    fn forward(&mut self, piece: StructurePiece, i: i32, j: i32, is_castle: bool) {
        let b = piece.bounding_box;
        let (x, y, z) = match piece.direction {
            Direction::North => (b.min_x + i, b.min_y + j, b.min_z - 1),
            Direction::South => (b.min_x + i, b.min_y + j, b.max_z + 1),
            Direction::West => (b.min_x - 1, b.min_y + j, b.min_z + i),
            Direction::East => (b.max_x + 1, b.min_y + j, b.min_z + i),
        };
        self.try_spawn(x, y, z, piece.direction, piece.gen_depth, is_castle);
    }

    /// Requests a child piece turned 90° counterclockwise from `piece`.
    fn left(&mut self, piece: StructurePiece, i: i32, j: i32, is_castle: bool) {
        let b = piece.bounding_box;
        let (x, y, z, dir) = match piece.direction {
            Direction::North | Direction::South => (b.min_x - 1, b.min_y + i, b.min_z + j, Direction::West),
            Direction::West | Direction::East => (b.min_x + j, b.min_y + i, b.min_z - 1, Direction::North),
        };
        self.try_spawn(x, y, z, dir, piece.gen_depth, is_castle);
    }

    /// Requests a child piece turned 90° clockwise from `piece`: mirror of `left`.
    fn right(&mut self, piece: StructurePiece, i: i32, j: i32, is_castle: bool) {
        let b = piece.bounding_box;
        let (x, y, z, dir) = match piece.direction {
            Direction::North | Direction::South => (b.max_x + 1, b.min_y + i, b.min_z + j, Direction::East),
            Direction::West | Direction::East => (b.min_x + j, b.min_y + i, b.max_z + 1, Direction::South),
        };
        self.try_spawn(x, y, z, dir, piece.gen_depth, is_castle);
    }

    /// Applies the 112-block anchor cutoff and, if it passes, runs the
    /// weighted piece-creation procedure.
    fn try_spawn(&mut self, x: i32, y: i32, z: i32, dir: Direction, parent_depth: u32, is_castle: bool) {
        if let Some(anchor) = self.anchor {
            if (x - anchor.min_x).abs() > ANCHOR_RADIUS || (z - anchor.min_z).abs() > ANCHOR_RADIUS {
                log::trace!("rejecting spawn at ({}, {}, {}): outside anchor radius", x, y, z);
                return;
            }
        }

        let depth = parent_depth + 1;
        if let Some(piece) = self.generate_piece(is_castle, x, y, z, dir, depth) {
            self.pieces.push(piece);
            self.pending.push(piece);
        }
    }

    fn generate_piece(
        &mut self,
        is_castle: bool,
        x: i32,
        y: i32,
        z: i32,
        dir: Direction,
        depth: u32,
    ) -> Option<StructurePiece> {
        let weights = if is_castle { &self.castle_weights } else { &self.bridge_weights };
        let total: i32 = weights.iter().map(|w| w.weight).sum();
        let has_valid = weights.iter().any(|w| w.has_budget() && w.max_place_count > 0);
        let total_signal = if total < 1 || !has_valid { -1 } else { total };
        let can_place = total_signal > 0 && depth <= MAX_DEPTH;

        if can_place {
            for _ in 0..MAX_ATTEMPTS {
                let weights = if is_castle { &self.castle_weights } else { &self.bridge_weights };
                let mut t = self.rng.next_int_bound(total_signal);
                let mut chosen = None;
                for (idx, w) in weights.iter().enumerate() {
                    t -= w.weight;
                    if t < 0 {
                        chosen = Some(idx);
                        break;
                    }
                }
                let idx = chosen.expect("weight table total must cover the draw");
                let pw = weights[idx];

                if pw.is_capped() {
                    log::trace!("rejecting spawn of {:?}: piece already at its placement cap", pw.kind);
                    continue;
                }
                if Some(pw.kind) == self.last_placed && !pw.allow_in_row {
                    log::trace!("rejecting spawn of {:?}: cannot repeat the last placed piece", pw.kind);
                    continue;
                }

                let bbox = orient(pw.kind, x, y, z, dir);
                if bbox.min_y <= LOWEST_Y || collides(&self.pieces, &bbox) {
                    log::trace!("rejecting spawn of {:?} at ({}, {}, {}): too low or colliding", pw.kind, x, y, z);
                    continue;
                }

                let weights_mut = if is_castle { &mut self.castle_weights } else { &mut self.bridge_weights };
                weights_mut[idx].place_count += 1;
                self.last_placed = Some(pw.kind);
                if weights_mut[idx].is_capped() {
                    weights_mut.remove(idx);
                }
                return Some(StructurePiece { kind: pw.kind, bounding_box: bbox, direction: dir, gen_depth: depth });
            }
        }

        self.try_end_filler(x, y, z, dir, depth)
    }

    /// Step 5: a single unconditional attempt at a non-branching filler
    /// piece once the weighted draw exhausts its attempts or has no budget.
    fn try_end_filler(&self, x: i32, y: i32, z: i32, dir: Direction, depth: u32) -> Option<StructurePiece> {
        let bbox = orient(PieceKind::BridgeEndFiller, x, y, z, dir);
        if bbox.min_y <= LOWEST_Y || collides(&self.pieces, &bbox) {
            return None;
        }
        Some(StructurePiece { kind: PieceKind::BridgeEndFiller, bounding_box: bbox, direction: dir, gen_depth: depth })
    }
}

fn collides(pieces: &[StructurePiece], bbox: &BoundingBox) -> bool {
    pieces.iter().any(|p| p.bounding_box.intersects(bbox))
}
