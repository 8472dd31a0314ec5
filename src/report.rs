//! Console report formatting: one plain formatting function rather than a
//! templating engine, matching how the rest of this pipeline reports
//! results.

use std::fmt::Write as _;

use crate::geometry::QuadCrossing;
use crate::locator::ChunkPos;
use crate::pieces::StructurePiece;

/// Everything found for one Fortress chunk: its placed pieces and any
/// quad-crossing clusters among them.
pub struct FortressMatch {
    pub chunk: ChunkPos,
    pub pieces: Vec<StructurePiece>,
    pub quads: Vec<QuadCrossing>,
}

/// Formats a single fortress's report: chunk/block coordinates, its total
/// crossing count, and each quad cluster's center, bounding box, and
/// per-crossing centers.
pub fn format_fortress(m: &FortressMatch) -> String {
    let (block_x, block_z) = m.chunk.to_block();
    let crossing_count = m.pieces.iter().filter(|p| p.is_crossing()).count();

    let mut out = String::new();
    let _ = writeln!(out, "Fortress at chunk ({}, {}) / block ({}, {})", m.chunk.x, m.chunk.z, block_x, block_z);
    let _ = writeln!(out, "  {} pieces placed, {} crossings", m.pieces.len(), crossing_count);

    if m.quads.is_empty() {
        let _ = writeln!(out, "  no 2x2 quad crossing found");
    }
    for (i, quad) in m.quads.iter().enumerate() {
        let b = quad.bounding_box;
        let _ = writeln!(
            out,
            "  quad #{}: center=({}, {}, {}) bounds=({}, {}, {})->({}, {}, {})",
            i + 1,
            quad.center.0,
            quad.center.1,
            quad.center.2,
            b.min_x,
            b.min_y,
            b.min_z,
            b.max_x,
            b.max_y,
            b.max_z
        );
        for &idx in &quad.crossings {
            let c = m.pieces[idx].center();
            let _ = writeln!(out, "    crossing at ({}, {}, {})", c.0, c.1, c.2);
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn report_without_quads_says_so() {
        let m = FortressMatch { chunk: ChunkPos::new(1, 2), pieces: Vec::new(), quads: Vec::new() };
        let text = format_fortress(&m);
        assert!(text.contains("no 2x2 quad crossing found"));
        assert!(text.contains("chunk (1, 2)"));
    }
}
