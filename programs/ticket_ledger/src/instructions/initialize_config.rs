use anchor_lang::prelude::*;
use crate::state::Config;
use crate::errors::TicketLedgerError;
use crate::constants::*;

/// Only the program's upgrade authority, the deployer, may create the config.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ TicketLedgerError::NotAuthorized,
    )]
    pub program: Program<'info, crate::program::TicketLedger>,

    pub program_data: Account<'info, ProgramData>,

    #[account(
        init,
        payer = owner,
        space = 8 + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    platform_fee_percent: u64,
    min_ticket_price: u64,
    max_refund_window: u64,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    Config::require_deployer(&owner, ctx.accounts.program_data.upgrade_authority_address)?;

    ctx.accounts.config.set_inner(Config::new(
        owner,
        platform_fee_percent,
        min_ticket_price,
        max_refund_window,
        ctx.bumps.config,
    ));

    emit!(ConfigInitialized {
        owner,
        platform_fee_percent,
        min_ticket_price,
        max_refund_window,
        slot: Clock::get()?.slot,
    });

    msg!(
        "Ledger initialized: fee {}%, min price {}, max refund window {}",
        platform_fee_percent,
        min_ticket_price,
        max_refund_window
    );

    Ok(())
}

#[event]
pub struct ConfigInitialized {
    pub owner: Pubkey,
    pub platform_fee_percent: u64,
    pub min_ticket_price: u64,
    pub max_refund_window: u64,
    pub slot: u64,
}
