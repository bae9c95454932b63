//! Registry of running auctions, one per game table.
//!
//! An [`Auction`] is not synchronized. The registry owns each one behind its
//! own lock so a player's `can_*` check and the matching `do_*` run as one
//! step with respect to the other players at the table.

use crate::auction::{Auction, AuctionError, AuctionRules, Player};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Identifier of a game table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(Uuid);

impl TableId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Unknown table {0}")]
    UnknownTable(TableId),

    #[error(transparent)]
    Auction(#[from] AuctionError),
}

/// Tables keyed by id, each holding the auction of its current round.
pub struct AuctionTables {
    rules: AuctionRules,
    tables: RwLock<HashMap<TableId, Arc<Mutex<Auction>>>>,
}

impl AuctionTables {
    /// Create an empty registry whose tables all bid under `rules`.
    pub fn new(rules: AuctionRules) -> Result<Self, AuctionError> {
        rules.validate()?;
        Ok(Self {
            rules,
            tables: RwLock::new(HashMap::new()),
        })
    }

    /// Open a table with a fresh auction.
    pub fn open(&self) -> Result<TableId, AuctionError> {
        let auction = Auction::new(self.rules.clone())?;
        let id = TableId::new();
        self.tables.write().insert(id, Arc::new(Mutex::new(auction)));
        info!(table = %id, "table opened");
        Ok(id)
    }

    /// Shared handle to the table's auction, if the table is open.
    ///
    /// The handle stays valid after [`AuctionTables::close`]; it just no
    /// longer belongs to the registry.
    pub fn get(&self, id: TableId) -> Option<Arc<Mutex<Auction>>> {
        self.tables.read().get(&id).cloned()
    }

    /// Run `f` with exclusive access to the table's auction.
    ///
    /// The registry lock is released before `f` runs, so one busy table
    /// never blocks the others.
    pub fn with_auction<R>(
        &self,
        id: TableId,
        f: impl FnOnce(&mut Auction) -> R,
    ) -> Result<R, TableError> {
        let table = self.table(id)?;
        let mut auction = table.lock();
        Ok(f(&mut auction))
    }

    /// Replace the table's auction with a fresh round opened by `first`.
    pub fn restart(&self, id: TableId, first: Player) -> Result<(), TableError> {
        let table = self.table(id)?;
        let mut auction = table.lock();
        *auction = Auction::starting_with(self.rules.clone(), first)?;
        info!(table = %id, first = %first, "table restarted");
        Ok(())
    }

    /// Discard the table and its auction.
    pub fn close(&self, id: TableId) -> Result<(), TableError> {
        if self.tables.write().remove(&id).is_none() {
            return Err(TableError::UnknownTable(id));
        }
        info!(table = %id, "table closed");
        Ok(())
    }

    pub fn contains(&self, id: TableId) -> bool {
        self.tables.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    fn table(&self, id: TableId) -> Result<Arc<Mutex<Auction>>, TableError> {
        self.get(id).ok_or(TableError::UnknownTable(id))
    }
}
