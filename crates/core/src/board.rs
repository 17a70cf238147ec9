use crate::{Inventory, RngState, Symbol};

/// Moore-neighborhood offsets in the fixed scan order every neighbor effect
/// uses: left, right, up, down, then the four diagonals. The order is part
/// of the engine contract; tests pin it.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// The grid. Owns its occupants; `Symbol::empty()` fills unused cells so
/// every cell holds exactly one symbol at all times.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Symbol>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Symbol::empty(); size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    pub fn get(&self, x: usize, y: usize) -> &Symbol {
        &self.cells[y][x]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Symbol {
        &mut self.cells[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, symbol: Symbol) {
        self.cells[y][x] = symbol;
    }

    /// Replaces the occupant with Empty and returns it.
    pub fn take(&mut self, x: usize, y: usize) -> Symbol {
        std::mem::replace(&mut self.cells[y][x], Symbol::empty())
    }

    /// All coordinates in row-major order, the order both turn passes visit.
    pub fn coords(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.size * self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                out.push((x, y));
            }
        }
        out
    }

    /// Coordinates of the 8 neighbors whose occupant satisfies `pred`,
    /// bounds-filtered, in the fixed scan order. Downstream code may assume
    /// every returned coordinate is valid.
    pub fn neighbors_matching<F>(&self, x: usize, y: usize, pred: F) -> Vec<(usize, usize)>
    where
        F: Fn(&Symbol) -> bool,
    {
        let mut out = Vec::new();
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if self.in_bounds(nx, ny) && pred(self.get(nx as usize, ny as usize)) {
                out.push((nx as usize, ny as usize));
            }
        }
        out
    }

    /// Neighboring cells a spawned symbol can land on (Empty or Hole).
    pub fn neighbors_open(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.neighbors_matching(x, y, |s| s.kind.is_open_space())
    }

    pub fn neighbors_all(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.neighbors_matching(x, y, |_| true)
    }

    /// Occupants that are actual owned symbols (everything but the Empty
    /// filler; Holes are owned).
    pub fn occupants(&self) -> impl Iterator<Item = &Symbol> {
        self.cells.iter().flatten().filter(|s| !s.is_empty())
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants().count()
    }

    /// Random bijective placement: moves the inventory's symbols onto
    /// randomly chosen distinct cells. If there are more symbols than cells
    /// the overflow stays in the inventory; unused cells become Empty.
    /// Returns how many symbols were placed.
    pub fn roll(&mut self, inventory: &mut Inventory, rng: &mut RngState) -> usize {
        self.cells = vec![vec![Symbol::empty(); self.size]; self.size];
        let mut pool = std::mem::take(&mut inventory.symbols);
        let mut open = self.coords();
        let mut placed = 0;
        while !pool.is_empty() && !open.is_empty() {
            let Some(symbol) = rng.pick_remove(&mut pool) else {
                break;
            };
            let Some((x, y)) = rng.pick_remove(&mut open) else {
                break;
            };
            self.cells[y][x] = symbol;
            placed += 1;
        }
        inventory.symbols = pool;
        placed
    }

    /// Moves every owned occupant back into the inventory list, leaving the
    /// grid all Empty. Runs after the score pass so the shop and the next
    /// roll see the full collection.
    pub fn sweep_into(&mut self, inventory: &mut Inventory) {
        for (x, y) in self.coords() {
            if !self.get(x, y).is_empty() {
                let symbol = self.take(x, y);
                inventory.symbols.push(symbol);
            }
        }
    }
}
