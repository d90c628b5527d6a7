pub mod transfer;
pub mod validation;

use anchor_lang::prelude::*;
use crate::constants::FEE_DENOMINATOR;
use crate::errors::TicketLedgerError;

pub use transfer::transfer_lamports;

pub fn validate_text(input: &str, max_len: usize) -> Result<()> {
    require!(
        input.len() <= max_len,
        TicketLedgerError::TextTooLong
    );
    Ok(())
}

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(TicketLedgerError::MathOverflow.into())
}

pub fn safe_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(TicketLedgerError::MathOverflow.into())
}

/// `floor(amount * fee_percent / 100)`, widened so the product cannot wrap.
pub fn calculate_fee(amount: u64, fee_percent: u64) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(fee_percent as u128)
        .ok_or(TicketLedgerError::MathOverflow)?
        / FEE_DENOMINATOR as u128;
    u64::try_from(fee).map_err(|_| TicketLedgerError::MathOverflow.into())
}
