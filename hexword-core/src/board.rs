//! Hex board geometry with axial coordinates

use crate::error::PlacementError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Default board radius (distance from center to edge)
pub const BOARD_RADIUS: i8 = 5;

/// Largest radius a board may be built with
pub const MAX_RADIUS: i8 = 20;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
}

impl Hex {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    /// Check if this hex lies within a board of the given radius
    pub fn is_within(&self, radius: i8) -> bool {
        let (q, r, radius) = (i16::from(self.q), i16::from(self.r), i16::from(radius));
        q.abs() <= radius && r.abs() <= radius && (q + r).abs() <= radius
    }

    /// Hex reached after `steps` moves along a direction vector.
    ///
    /// Saturates at the `i8` limits, which lie outside every board.
    pub fn offset(&self, (dq, dr): (i8, i8), steps: i8) -> Hex {
        Hex::new(
            self.q.saturating_add(dq.saturating_mul(steps)),
            self.r.saturating_add(dr.saturating_mul(steps)),
        )
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Direction vectors in axial coordinates (dq, dr), in scan order
pub const DIRECTIONS: [(i8, i8); 6] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, 1),
];

/// Side owning a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Player,
    Ai,
}

/// A letter on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub owner: Owner,
}

/// The playing surface: a fixed set of cells, each empty or holding one tile.
///
/// Cells are kept in construction order (`q` ascending, then `r` ascending),
/// which is the enumeration order used by word scanning and AI search.
#[derive(Clone, Debug)]
pub struct HexBoard {
    radius: i8,
    cells: Vec<(Hex, Option<Tile>)>,
    index: FxHashMap<Hex, usize>,
}

impl HexBoard {
    /// Build an empty board containing every hex within `radius`.
    ///
    /// The radius is clamped to `1..=MAX_RADIUS`.
    pub fn new(radius: i8) -> Self {
        let radius = radius.clamp(1, MAX_RADIUS);
        let mut cells = Vec::new();
        let mut index = FxHashMap::default();

        for q in -radius..=radius {
            for r in -radius..=radius {
                let hex = Hex::new(q, r);
                if hex.is_within(radius) {
                    index.insert(hex, cells.len());
                    cells.push((hex, None));
                }
            }
        }

        Self { radius, cells, index }
    }

    pub fn radius(&self) -> i8 {
        self.radius
    }

    /// Number of cells on the board
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.index.contains_key(&hex)
    }

    /// Tile at a hex; off-board hexes read as empty
    pub fn tile_at(&self, hex: Hex) -> Option<Tile> {
        self.index.get(&hex).and_then(|&i| self.cells[i].1)
    }

    /// Place a tile, reporting why a placement was refused
    pub fn try_place(&mut self, hex: Hex, letter: char, owner: Owner) -> Result<(), PlacementError> {
        let i = *self
            .index
            .get(&hex)
            .ok_or(PlacementError::InvalidCoordinate { q: hex.q, r: hex.r })?;

        let cell = &mut self.cells[i].1;
        if cell.is_some() {
            return Err(PlacementError::CellOccupied { q: hex.q, r: hex.r });
        }

        *cell = Some(Tile {
            letter: letter.to_ascii_uppercase(),
            owner,
        });
        Ok(())
    }

    /// Place a tile. Off-board and occupied hexes both yield `false`.
    pub fn place(&mut self, hex: Hex, letter: char, owner: Owner) -> bool {
        self.try_place(hex, letter, owner).is_ok()
    }

    /// All cells in enumeration order
    pub fn cells(&self) -> impl Iterator<Item = (Hex, Option<Tile>)> + '_ {
        self.cells.iter().copied()
    }

    /// Occupied cells in enumeration order
    pub fn tiles(&self) -> impl Iterator<Item = (Hex, Tile)> + '_ {
        self.cells
            .iter()
            .filter_map(|&(hex, tile)| tile.map(|t| (hex, t)))
    }

    pub fn empty_coordinates(&self) -> Vec<Hex> {
        self.cells
            .iter()
            .filter(|(_, tile)| tile.is_none())
            .map(|&(hex, _)| hex)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|(_, tile)| tile.is_some())
    }

    /// Copy of every cell and its contents
    pub fn snapshot(&self) -> Vec<(Hex, Option<Tile>)> {
        self.cells.clone()
    }
}

impl Default for HexBoard {
    fn default() -> Self {
        Self::new(BOARD_RADIUS)
    }
}
