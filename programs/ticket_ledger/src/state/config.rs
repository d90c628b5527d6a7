use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;
use crate::utils::calculate_fee;
use crate::utils::validation::*;

/// Program-wide scalars and id counters. One instance, at the `config` PDA.
#[account]
#[derive(InitSpace)]
pub struct Config {
    pub owner: Pubkey,              // 32 bytes - may update fee and min price
    pub next_event_id: u64,         // 8 bytes
    pub next_ticket_id: u64,        // 8 bytes
    pub platform_fee_percent: u64,  // 8 bytes
    pub min_ticket_price: u64,      // 8 bytes - lamports
    pub max_refund_window: u64,     // 8 bytes - slots
    pub bump: u8,                   // 1 byte
}

impl Config {
    pub fn new(
        owner: Pubkey,
        platform_fee_percent: u64,
        min_ticket_price: u64,
        max_refund_window: u64,
        bump: u8,
    ) -> Self {
        Self {
            owner,
            next_event_id: 1,
            next_ticket_id: 1,
            platform_fee_percent,
            min_ticket_price,
            max_refund_window,
            bump,
        }
    }

    /// The config is created once, by whoever may upgrade the program.
    pub fn require_deployer(caller: &Pubkey, upgrade_authority: Option<Pubkey>) -> Result<()> {
        require!(
            upgrade_authority == Some(*caller),
            TicketLedgerError::NotAuthorized
        );
        Ok(())
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, TicketLedgerError::NotAuthorized);
        Ok(())
    }

    pub fn set_platform_fee(&mut self, caller: &Pubkey, percent: u64) -> Result<()> {
        self.require_owner(caller)?;
        self.platform_fee_percent = percent;
        Ok(())
    }

    pub fn set_min_ticket_price(&mut self, caller: &Pubkey, amount: u64) -> Result<()> {
        self.require_owner(caller)?;
        self.min_ticket_price = amount;
        Ok(())
    }

    /// Fee the platform would take on `amount`. Nothing deducts it yet.
    pub fn calculate_platform_fee(&self, amount: u64) -> Result<u64> {
        calculate_fee(amount, self.platform_fee_percent)
    }

    /// Checks new-event terms against the current scalars, in reporting order.
    pub fn validate_event_terms(
        &self,
        ticket_price: u64,
        refund_window: u64,
        date: u64,
        current_slot: u64,
    ) -> Result<()> {
        validate_ticket_price(ticket_price, self.min_ticket_price)?;
        validate_refund_window(refund_window, self.max_refund_window)?;
        validate_event_date(date, current_slot)?;
        Ok(())
    }
}
