use crate::core::geometry::{overlaps, Rect};

/// One blocking (or damaging) rectangle of level terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainTile {
    pub rect: Rect,
    /// Spikes hurt instead of blocking; see the rigid body resolver.
    pub is_spike: bool,
}

impl TerrainTile {
    pub fn solid(rect: Rect) -> Self {
        Self { rect, is_spike: false }
    }

    pub fn spike(rect: Rect) -> Self {
        Self { rect, is_spike: true }
    }
}

/// Static collision geometry for one level, in pixels.
///
/// Tiles are arbitrary rectangles; nothing requires a uniform grid. The map
/// only answers overlap queries, it never mutates entities.
#[derive(Debug, Clone, Default)]
pub struct Map {
    width: i32,
    height: i32,
    tiles: Vec<TerrainTile>,
}

impl Map {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: Vec::new(),
        }
    }

    /// Horizontal extent in pixels; entities are clamped inside it.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Vertical extent in pixels; falling past it is lethal.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn add(&mut self, tile: TerrainTile) {
        self.tiles.push(tile);
    }

    pub fn with_solid(mut self, rect: Rect) -> Self {
        self.add(TerrainTile::solid(rect));
        self
    }

    pub fn with_spike(mut self, rect: Rect) -> Self {
        self.add(TerrainTile::spike(rect));
        self
    }

    /// Add a `cols` x `rows` block of solid tiles of `tile_size` pixels,
    /// top-left corner at `(x, y)`.
    pub fn fill_solid(&mut self, x: i32, y: i32, cols: i32, rows: i32, tile_size: i32) {
        for row in 0..rows {
            for col in 0..cols {
                self.add(TerrainTile::solid(Rect::new(
                    x + col * tile_size,
                    y + row * tile_size,
                    tile_size,
                    tile_size,
                )));
            }
        }
    }

    pub fn tiles(&self) -> &[TerrainTile] {
        &self.tiles
    }

    /// All tiles strictly overlapping `rect`, in insertion order.
    pub fn overlapping(&self, rect: Rect) -> impl Iterator<Item = &TerrainTile> {
        self.tiles.iter().filter(move |t| overlaps(rect, t.rect))
    }
}
