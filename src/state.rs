//! Core application state, separated from UI logic.
//!
//! `AdminState` holds one grid controller per admin screen plus the
//! active-screen selection. UI components receive it as a parameter
//! rather than owning it.

use std::collections::HashMap;

use crate::entities::grid_config;
use crate::grid::{GridController, GridId};

pub struct AdminState {
    active: GridId,
    grids: HashMap<GridId, GridController>,
}

impl AdminState {
    pub fn new(page_size: u64) -> Self {
        let grids = GridId::ALL
            .into_iter()
            .map(|id| (id, GridController::new(grid_config(id, page_size))))
            .collect();
        Self {
            active: GridId::Customers,
            grids,
        }
    }

    pub fn active(&self) -> GridId {
        self.active
    }

    pub fn set_active(&mut self, id: GridId) {
        self.active = id;
    }

    pub fn grid(&self, id: GridId) -> &GridController {
        self.grids.get(&id).expect("every screen has a grid")
    }

    pub fn grid_mut(&mut self, id: GridId) -> &mut GridController {
        self.grids.get_mut(&id).expect("every screen has a grid")
    }

    pub fn active_grid(&self) -> &GridController {
        self.grid(self.active)
    }

    pub fn active_grid_mut(&mut self) -> &mut GridController {
        self.grid_mut(self.active)
    }

    /// Reset every grid to its first page with cleared filters, for a
    /// full screen reload.
    pub fn reset_all(&mut self) {
        for grid in self.grids.values_mut() {
            grid.reset();
        }
    }
}
