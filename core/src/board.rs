use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Uninitialized -> Active (first reveal, mines are placed)
/// - Uninitialized -> Won (first reveal clears the whole board)
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    Uninitialized,
    Active,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_uninitialized(self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Uninitialized
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// A safe tile was opened, `cascade` more tiles were opened by the flood fill.
    Revealed { cascade: CellCount },
    HitMine,
    Won,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
}

/// Owns the truth grid, the visibility grid and the unopened-safe set of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    seed: u64,
    layout: Option<MineLayout>,
    visible: Array2<Visibility>,
    unopened_safe: BTreeSet<Coord2>,
    eligible: Vec<Coord2>,
    flag_count: CellCount,
    state: BoardState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Fresh board: everything hidden, no mines yet. Mines are placed with a
    /// [`RandomMinePlacer`] seeded by `seed` on the first reveal.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let size = config.size;
        Self {
            config,
            seed,
            layout: None,
            visible: Array2::default(size.to_nd_index()),
            unopened_safe: iter_coords(size).collect(),
            eligible: iter_coords(size).collect(),
            flag_count: 0,
            state: BoardState::default(),
            triggered_mine: None,
        }
    }

    /// Board with a predetermined layout, already past mine placement.
    pub fn from_layout(layout: MineLayout) -> Self {
        let size = layout.size();
        let config = GameConfig::new_unchecked(size, layout.mine_count());
        let unopened_safe = iter_coords(size)
            .filter(|&coords| !layout.contains_mine(coords))
            .collect();
        Self {
            config,
            seed: 0,
            layout: Some(layout),
            visible: Array2::default(size.to_nd_index()),
            unopened_safe,
            eligible: Vec::new(),
            flag_count: 0,
            state: BoardState::Active,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn outcome(&self) -> Outcome {
        match self.state {
            BoardState::Uninitialized | BoardState::Active => Outcome::InProgress,
            BoardState::Won => Outcome::Won,
            BoardState::Lost => Outcome::Lost,
        }
    }

    pub fn layout(&self) -> Option<&MineLayout> {
        self.layout.as_ref()
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        neighbors(coords, self.size())
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<Visibility> {
        self.visible.get(coords.to_nd_index()).copied()
    }

    /// Truth of a tile, `None` before mines are placed or outside the board.
    pub fn truth_at(&self, coords: Coord2) -> Option<Truth> {
        let layout = self.layout.as_ref()?;
        layout.truth().get(coords.to_nd_index()).copied()
    }

    pub fn visibility(&self) -> &Array2<Visibility> {
        &self.visible
    }

    /// The visibility grid rendered as symbols, indexed `[x, y]`.
    pub fn symbols(&self) -> Array2<char> {
        self.visible.map(|tile| tile.symbol())
    }

    pub fn unopened_safe(&self) -> &BTreeSet<Coord2> {
        &self.unopened_safe
    }

    /// Tiles still allowed to receive a mine, empty once mines are placed.
    pub fn eligible_pool(&self) -> &[Coord2] {
        &self.eligible
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines minus flags, what a mine counter would display.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flag_count)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Mines whose tile carries no flag, only meaningful after a loss.
    pub fn remaining_mines_unflagged(&self) -> Result<CellCount> {
        if self.state != BoardState::Lost {
            return Err(GameError::InvalidState);
        }
        let layout = self.layout.as_ref().ok_or(GameError::InvalidState)?;
        let count = layout
            .iter_mines()
            .filter(|&coords| !self.visible[coords.to_nd_index()].is_flagged())
            .count();
        Ok(count as CellCount)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let index = coords.to_nd_index();
        match self.visible[index] {
            Visibility::Hidden => {
                self.visible[index] = Visibility::Flagged;
                self.flag_count += 1;
                log::debug!("Flagged tile at {:?}", coords);
                Ok(FlagOutcome::Flagged)
            }
            Visibility::Flagged => {
                self.visible[index] = Visibility::Hidden;
                self.flag_count -= 1;
                log::debug!("Unflagged tile at {:?}", coords);
                Ok(FlagOutcome::Unflagged)
            }
            Visibility::Revealed(_) => Err(GameError::AlreadyRevealed(coords)),
        }
    }

    /// Reveals a tile, placing mines with this board's seeded placer on the first call.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.reveal_with(coords, RandomMinePlacer::new(self.seed))
    }

    /// Reveals a tile; `placer` is only consulted if mines have not been placed yet.
    pub fn reveal_with<P: MinePlacer>(
        &mut self,
        coords: Coord2,
        placer: P,
    ) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let index = coords.to_nd_index();
        if self.visible[index].is_revealed() {
            return Err(GameError::AlreadyRevealed(coords));
        }

        if self.state.is_uninitialized() {
            self.place_mines(coords, placer)?;
        }

        let Some(layout) = self.layout.as_ref() else {
            return Err(GameError::InvalidState);
        };

        let truth = layout[coords];
        if self.visible[index].is_flagged() {
            self.flag_count -= 1;
        }
        self.visible[index] = Visibility::Revealed(truth);
        log::debug!("Revealed tile at {:?}: {:?}", coords, truth);

        if truth.is_mine() {
            self.triggered_mine = Some(coords);
            self.state = BoardState::Lost;
            log::debug!("Hit mine at {:?}, game lost", coords);
            return Ok(RevealOutcome::HitMine);
        }

        self.unopened_safe.remove(&coords);
        let cascade = if truth.is_zero() {
            flood_reveal(
                coords,
                layout.truth(),
                &mut self.visible,
                &mut self.unopened_safe,
            )
            .len()
        } else {
            0
        };

        if self.unopened_safe.is_empty() {
            self.state = BoardState::Won;
            log::debug!("All safe tiles revealed, game won");
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed {
                cascade: cascade as CellCount,
            })
        }
    }

    /// The `Uninitialized -> Active` transition: clears the safe zone around `start`
    /// from the eligible pool, places the mines and counts adjacency.
    fn place_mines<P: MinePlacer>(&mut self, start: Coord2, placer: P) -> Result<()> {
        let size = self.size();
        let zone: BTreeSet<_> = safe_zone(start, size).collect();
        let pool: Vec<_> = self
            .eligible
            .iter()
            .copied()
            .filter(|coords| !zone.contains(coords))
            .collect();

        let available = pool.len() as CellCount;
        if self.config.mines > available {
            return Err(GameError::InsufficientSpace {
                mines: self.config.mines,
                available,
            });
        }

        let mines = placer.place(&pool, self.config.mines);
        let layout = MineLayout::from_mine_coords(size, &mines)?;
        let misplaced = layout.iter_mines().any(|m| zone.contains(&m));
        if layout.mine_count() != self.config.mines || misplaced {
            log::error!(
                "Placer returned an invalid layout, {} mines for {} requested",
                layout.mine_count(),
                self.config.mines
            );
            return Err(GameError::InvalidState);
        }

        for coords in layout.iter_mines() {
            self.unopened_safe.remove(&coords);
        }
        self.eligible.clear();
        self.layout = Some(layout);
        self.state = BoardState::Active;
        log::debug!(
            "Placed {} mines around first click at {:?}, {} safe tiles to open",
            self.config.mines,
            start,
            self.unopened_safe.len()
        );
        Ok(())
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
