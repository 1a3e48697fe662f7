//! The refresh cycle: scan, decode, arrange, replace the displayed tiles.
//!
//! A cycle always publishes as an atomic whole-sequence replacement, so the
//! display never shows a mix of two cycles. In the single-threaded setup
//! `run_cycle` does the replacement itself; a background variant computes a
//! [`CompletedCycle`] off-thread and hands it to the surface-owning context
//! through a [`CycleSlot`], where a newer cycle supersedes an older one.

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::layout::{FlowArranger, PlacedTile};
use crate::models::{RefreshConfig, Thumbnail, Tile};
use crate::scanner::{scan, ScanRequest};
use crate::thumbnails::ThumbnailDecoder;

/// Where positioned tiles end up. Implemented by the surrounding UI.
///
/// The core drives it with exactly one replacement per completed cycle:
/// clear, place each tile, then report the new content height.
pub trait DisplaySurface {
    /// Drops every currently displayed tile.
    fn clear_tiles(&mut self);

    /// Shows a thumbnail at the given position, at its own bitmap size.
    fn place_tile(&mut self, thumbnail: Thumbnail, x: u32, y: u32);

    /// New scrollable content height after a replacement.
    fn set_content_height(&mut self, height: u32);
}

/// Summary of one refresh cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleReport {
    pub cycle_id: u64,
    /// Paths the scanner returned.
    pub scanned: usize,
    /// Thumbnails that survived decoding and were placed.
    pub displayed: usize,
    pub content_height: u32,
}

/// A finished scan+decode+arrange pass, ready to replace the display.
#[derive(Debug)]
pub struct CompletedCycle {
    pub cycle_id: u64,
    /// Thumbnails paired with their positions, in display order.
    pub tiles: Vec<(Thumbnail, PlacedTile)>,
    pub total_height: u32,
    pub scanned: usize,
}

/// Runs refresh cycles against a configuration.
///
/// Holds the monotonically increasing cycle id that orders completed
/// cycles when they are handed across threads.
#[derive(Debug)]
pub struct RefreshPipeline {
    config: RefreshConfig,
    arranger: FlowArranger,
    next_cycle: u64,
}

impl RefreshPipeline {
    pub fn new(config: RefreshConfig) -> Self {
        Self {
            config,
            arranger: FlowArranger::default(),
            next_cycle: 0,
        }
    }

    pub fn with_arranger(config: RefreshConfig, arranger: FlowArranger) -> Self {
        Self {
            config,
            arranger,
            next_cycle: 0,
        }
    }

    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// Replaces the configuration; picked up by the next cycle.
    pub fn set_config(&mut self, config: RefreshConfig) {
        self.config = config;
    }

    /// Runs one full cycle and replaces the surface contents.
    ///
    /// With no directory configured the cycle is a no-op: nothing is
    /// scanned and the surface is left untouched.
    pub fn run_cycle(&mut self, surface: &mut dyn DisplaySurface, available_width: u32) -> CycleReport {
        let cycle = self.compute_cycle(available_width);
        let report = CycleReport {
            cycle_id: cycle.cycle_id,
            scanned: cycle.scanned,
            displayed: cycle.tiles.len(),
            content_height: cycle.total_height,
        };
        if self.config.is_ready() {
            apply_cycle(cycle, surface);
            info!(
                cycle_id = report.cycle_id,
                scanned = report.scanned,
                displayed = report.displayed,
                height = report.content_height,
                "Refresh cycle complete"
            );
        }
        report
    }

    /// Computes a cycle without touching any surface, for the background
    /// variant. The result is published through a [`CycleSlot`].
    pub fn compute_cycle(&mut self, available_width: u32) -> CompletedCycle {
        let cycle_id = self.next_cycle;
        self.next_cycle += 1;

        let Some(directory) = self.config.directory.clone().filter(|d| !d.as_os_str().is_empty())
        else {
            debug!(cycle_id, "No directory configured, refresh skipped");
            return CompletedCycle {
                cycle_id,
                tiles: Vec::new(),
                total_height: 0,
                scanned: 0,
            };
        };

        let mut request = ScanRequest::new(directory);
        if let Some(limit) = self.config.limit {
            request = request.limit(limit);
        }
        let paths = scan(&request);
        let scanned = paths.len();

        let (target_w, target_h) = self.config.thumbnail_size;
        let decoder = ThumbnailDecoder::new(target_w, target_h);
        let thumbnails = decoder.decode_batch(&paths);

        let tile_sizes: Vec<Tile> = thumbnails.iter().map(Tile::from).collect();
        let layout = self.arranger.arrange(&tile_sizes, available_width);

        CompletedCycle {
            cycle_id,
            tiles: thumbnails.into_iter().zip(layout.placements).collect(),
            total_height: layout.total_height,
            scanned,
        }
    }
}

/// Replaces the surface contents with a completed cycle, wholesale.
fn apply_cycle(cycle: CompletedCycle, surface: &mut dyn DisplaySurface) {
    surface.clear_tiles();
    for (thumbnail, placed) in cycle.tiles {
        surface.place_tile(thumbnail, placed.x, placed.y);
    }
    surface.set_content_height(cycle.total_height);
}

/// Single-owner transfer point between a background refresh and the
/// context that owns the display surface.
///
/// At most one completed cycle is pending; a newer cycle supersedes an
/// older one that lands later, decided by cycle id.
#[derive(Debug, Default)]
pub struct CycleSlot {
    pending: Mutex<Option<CompletedCycle>>,
}

impl CycleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a completed cycle. Kept only if it is newer than the
    /// currently pending one.
    pub fn publish(&self, cycle: CompletedCycle) {
        let mut pending = self.pending.lock();
        match pending.as_ref() {
            Some(current) if current.cycle_id > cycle.cycle_id => {
                debug!(
                    stale = cycle.cycle_id,
                    pending = current.cycle_id,
                    "Dropping superseded refresh cycle"
                );
            }
            _ => *pending = Some(cycle),
        }
    }

    /// Takes the pending cycle, if any. Called by the surface owner.
    pub fn take(&self) -> Option<CompletedCycle> {
        self.pending.lock().take()
    }

    /// Applies the pending cycle to the surface as an atomic replacement.
    /// Returns the applied cycle id, or `None` if nothing was pending.
    pub fn apply_to(&self, surface: &mut dyn DisplaySurface) -> Option<u64> {
        let cycle = self.take()?;
        let cycle_id = cycle.cycle_id;
        apply_cycle(cycle, surface);
        Some(cycle_id)
    }
}
