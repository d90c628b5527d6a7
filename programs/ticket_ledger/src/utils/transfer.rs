use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::errors::TicketLedgerError;

/// Moves `amount` lamports between two system accounts through the System
/// Program. `from` must have signed the transaction.
pub fn transfer_lamports<'info>(
    system_program: &Program<'info, System>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(
        from.lamports() >= amount,
        TicketLedgerError::InsufficientFunds
    );

    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer { from, to },
        ),
        amount,
    )
}
