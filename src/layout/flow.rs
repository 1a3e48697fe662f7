//! Flow layout: packs fixed-size tiles left-to-right into wrapped rows.

use crate::models::Tile;

/// Position and size assigned to one tile by the arranger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTile {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Result of a placement pass over a tile sequence.
#[derive(Debug, Clone)]
pub struct FlowLayout {
    /// One placement per input tile, in input order.
    pub placements: Vec<PlacedTile>,
    /// Sum of row heights plus inter-row spacing.
    pub total_height: u32,
}

/// Arranges tiles left-to-right, wrapping to a new row when the next tile
/// would overflow the available width.
///
/// Holds no state across calls beyond the configured spacing; every call
/// computes positions fresh from the given sequence. A tile whose right
/// edge lands exactly on the available width stays in its row. A single
/// tile wider than the available width is still placed at the row origin
/// and overflows visually.
#[derive(Debug, Clone, Copy)]
pub struct FlowArranger {
    /// Gap between tiles within a row and between rows, in pixels.
    pub spacing: u32,
}

impl Default for FlowArranger {
    fn default() -> Self {
        Self { spacing: 6 }
    }
}

impl FlowArranger {
    pub fn new(spacing: u32) -> Self {
        Self { spacing }
    }

    /// Placement mode: computes positions for every tile plus total height.
    pub fn arrange(&self, tiles: &[Tile], available_width: u32) -> FlowLayout {
        let (placements, total_height) = self.flow(tiles, available_width, true);
        FlowLayout {
            placements,
            total_height,
        }
    }

    /// Query mode: total height only, for size negotiation. No placements
    /// are produced.
    pub fn height_for_width(&self, tiles: &[Tile], available_width: u32) -> u32 {
        self.flow(tiles, available_width, false).1
    }

    fn flow(&self, tiles: &[Tile], available_width: u32, emit: bool) -> (Vec<PlacedTile>, u32) {
        let mut placements = Vec::with_capacity(if emit { tiles.len() } else { 0 });
        let mut x = 0u32;
        let mut y = 0u32;
        let mut row_height = 0u32;
        let mut row_len = 0usize;

        for tile in tiles {
            // Wrap only when the row already holds a tile; an oversized
            // singleton stays at the row origin and overflows.
            if row_len > 0 && x.saturating_add(tile.width) > available_width {
                x = 0;
                y = y.saturating_add(row_height).saturating_add(self.spacing);
                row_height = 0;
                row_len = 0;
            }

            if emit {
                placements.push(PlacedTile {
                    x,
                    y,
                    width: tile.width,
                    height: tile.height,
                });
            }

            x = x.saturating_add(tile.width).saturating_add(self.spacing);
            row_height = row_height.max(tile.height);
            row_len += 1;
        }

        let total_height = if tiles.is_empty() {
            0
        } else {
            y.saturating_add(row_height)
        };
        (placements, total_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(sizes: &[(u32, u32)]) -> Vec<Tile> {
        sizes.iter().map(|&(w, h)| Tile::new(w, h)).collect()
    }

    #[test]
    fn test_empty_input() {
        let arranger = FlowArranger::default();
        let layout = arranger.arrange(&[], 500);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.total_height, 0);
        assert_eq!(arranger.height_for_width(&[], 500), 0);
    }

    #[test]
    fn test_boundary_wrap_scenario() {
        // Width 50, spacing 10, available 120: tiles 1 and 2 fit in row one
        // (tile 2's right edge lands exactly at 110 <= 120), tile 3 wraps.
        let arranger = FlowArranger::new(10);
        let layout = arranger.arrange(&tiles(&[(50, 40), (50, 40), (50, 40)]), 120);

        assert_eq!(layout.placements[0], PlacedTile { x: 0, y: 0, width: 50, height: 40 });
        assert_eq!(layout.placements[1], PlacedTile { x: 60, y: 0, width: 50, height: 40 });
        assert_eq!(layout.placements[2], PlacedTile { x: 0, y: 50, width: 50, height: 40 });
        // Two rows of height 40 plus one inter-row gap.
        assert_eq!(layout.total_height, 90);
    }

    #[test]
    fn test_exact_fit_does_not_wrap() {
        // Second tile's right edge lands exactly on the available width.
        let arranger = FlowArranger::new(10);
        let layout = arranger.arrange(&tiles(&[(50, 40), (60, 40)]), 120);
        assert_eq!(layout.placements[1].x, 60);
        assert_eq!(layout.placements[1].y, 0);
        assert_eq!(layout.total_height, 40);
    }

    #[test]
    fn test_oversized_tile_placed_at_origin() {
        let arranger = FlowArranger::new(4);
        let layout = arranger.arrange(&tiles(&[(300, 100), (50, 50)]), 200);
        // Oversized singleton stays at the origin of its row.
        assert_eq!(layout.placements[0].x, 0);
        assert_eq!(layout.placements[0].y, 0);
        // The next tile starts a new row.
        assert_eq!(layout.placements[1].x, 0);
        assert_eq!(layout.placements[1].y, 104);
        assert_eq!(layout.total_height, 154);
    }

    #[test]
    fn test_row_height_is_max_in_row() {
        let arranger = FlowArranger::new(0);
        let layout = arranger.arrange(&tiles(&[(40, 20), (40, 80), (40, 30), (40, 10)]), 120);
        // First row: three tiles, max height 80. Second row: one tile.
        assert_eq!(layout.placements[3].y, 80);
        assert_eq!(layout.total_height, 90);
    }

    #[test]
    fn test_no_overlap_and_width_respected() {
        let arranger = FlowArranger::new(6);
        let sizes: Vec<(u32, u32)> = (0..20).map(|i| (30 + (i % 5) * 10, 40)).collect();
        let available = 200;
        let layout = arranger.arrange(&tiles(&sizes), available);

        for (i, a) in layout.placements.iter().enumerate() {
            // No tile's right edge exceeds the available width (all tiles
            // here are narrower than it, so no overflow singletons).
            assert!(a.x + a.width <= available, "tile {i} overflows");
            for b in &layout.placements[i + 1..] {
                if a.y == b.y {
                    let disjoint = a.x + a.width <= b.x || b.x + b.width <= a.x;
                    assert!(disjoint, "tiles overlap in row at y={}", a.y);
                }
            }
        }
    }

    #[test]
    fn test_query_mode_matches_placement_mode() {
        let arranger = FlowArranger::new(8);
        let sizes: Vec<(u32, u32)> = (0..15).map(|i| (50 + (i % 3) * 25, 30 + (i % 4) * 15)).collect();
        let tile_seq = tiles(&sizes);
        for width in [100, 250, 640, 1920] {
            assert_eq!(
                arranger.height_for_width(&tile_seq, width),
                arranger.arrange(&tile_seq, width).total_height,
            );
        }
    }

    #[test]
    fn test_extreme_tile_dimensions_saturate() {
        let arranger = FlowArranger::new(10);
        let huge = tiles(&[(u32::MAX, u32::MAX), (u32::MAX, u32::MAX)]);

        // Each oversized tile gets its own row at the origin; the running
        // coordinates saturate instead of overflowing.
        let layout = arranger.arrange(&huge, 120);
        assert_eq!(layout.placements[0].x, 0);
        assert_eq!(layout.placements[1].x, 0);
        assert_eq!(layout.placements[1].y, u32::MAX);
        assert_eq!(layout.total_height, u32::MAX);
        assert_eq!(arranger.height_for_width(&huge, 120), u32::MAX);
    }

    #[test]
    fn test_stateless_across_calls() {
        let arranger = FlowArranger::new(10);
        let seq = tiles(&[(50, 40), (50, 40), (50, 40)]);
        let first = arranger.arrange(&seq, 120);
        let second = arranger.arrange(&seq, 120);
        assert_eq!(first.placements, second.placements);
        assert_eq!(first.total_height, second.total_height);
    }
}
