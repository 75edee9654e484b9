//! Reward Ledger State and Minting
//!
//! The ledger holds token balances, the minter allow-list, and the running
//! total supply. The single privileged mutation is [`RewardLedger::mint`],
//! gated by the allow-list; the allow-list itself is mutated only by the
//! administrative owner through [`RewardLedger::set_minter`].
//!
//! # Enforcement
//!
//! - **Minter gate**: `mint` fails unless the caller is flagged
//! - **Owner gate**: `set_minter` fails unless the caller is the owner
//! - **Conservation**: every successful mint increases `balances[to]` and
//!   `total_supply` by exactly the minted amount
//! - **Overflow**: checked arithmetic throughout; both additions are
//!   validated before either is committed

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use lib_types::{Address, Amount};

use crate::errors::{LedgerError, LedgerResult};

/// Trait for the minting capability
///
/// This is the minimal seam the registry needs from the ledger. Passing the
/// capability explicitly (rather than reaching for a global singleton) keeps
/// the registry unit-testable against a fake ledger that records calls and
/// can be made to fail.
pub trait RewardMinter {
    /// Mint `amount` base units to `to`, on behalf of `caller`
    fn mint(&mut self, caller: Address, to: Address, amount: Amount) -> LedgerResult<()>;
}

/// Reward token ledger
///
/// An accounting ledger, not a transferable token: there is no transfer(),
/// approve(), or burn() surface. Supply only ever grows, and only through
/// flagged minters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardLedger {
    /// Per-principal balances (absent principal reads as zero)
    balances: HashMap<Address, Amount>,

    /// Principals authorized to mint
    minters: HashSet<Address>,

    /// Total supply in circulation
    total_supply: Amount,

    /// Administrative owner (sole authority over the minter allow-list)
    owner: Address,
}

impl RewardLedger {
    /// Create an empty ledger administered by `owner`
    pub fn new(owner: Address) -> Self {
        Self {
            balances: HashMap::new(),
            minters: HashSet::new(),
            total_supply: 0,
            owner,
        }
    }

    /// Flag or unflag `principal` as a minter (owner-gated, idempotent)
    ///
    /// # Errors
    /// Returns `LedgerError::OwnableUnauthorized` if `caller` is not the owner
    pub fn set_minter(
        &mut self,
        caller: Address,
        principal: Address,
        enabled: bool,
    ) -> LedgerResult<()> {
        if caller != self.owner {
            return Err(LedgerError::OwnableUnauthorized { caller });
        }

        if enabled {
            self.minters.insert(principal);
        } else {
            self.minters.remove(&principal);
        }
        Ok(())
    }

    /// Get the balance of a principal (zero if never credited)
    pub fn balance_of(&self, principal: &Address) -> Amount {
        self.balances.get(principal).copied().unwrap_or(0)
    }

    /// Check whether a principal is a flagged minter
    pub fn is_minter(&self, principal: &Address) -> bool {
        self.minters.contains(principal)
    }

    /// Get the total supply in circulation
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Get the administrative owner
    pub const fn owner(&self) -> Address {
        self.owner
    }
}

impl RewardMinter for RewardLedger {
    /// Mint `amount` base units to `to`
    ///
    /// # Errors
    /// Returns `LedgerError::Unauthorized` if `caller` is not a flagged minter
    /// Returns `LedgerError::Overflow` if either the recipient balance or the
    /// total supply would overflow; neither is mutated in that case
    fn mint(&mut self, caller: Address, to: Address, amount: Amount) -> LedgerResult<()> {
        if !self.minters.contains(&caller) {
            return Err(LedgerError::Unauthorized { caller });
        }

        // Validate both additions before committing either
        let new_balance = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(to, new_balance);
        self.total_supply = new_supply;
        Ok(())
    }
}
