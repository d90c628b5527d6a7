use anchor_lang::prelude::*;
use crate::state::Config;
use crate::constants::CONFIG_SEED;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

pub fn update_platform_fee(ctx: Context<UpdateConfig>, percent: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let config = &mut ctx.accounts.config;
    let previous = config.platform_fee_percent;
    config.set_platform_fee(&owner, percent)?;

    emit!(PlatformFeeUpdated { previous, current: percent });
    msg!("Platform fee updated: {}% -> {}%", previous, percent);

    Ok(())
}

pub fn update_min_ticket_price(ctx: Context<UpdateConfig>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let config = &mut ctx.accounts.config;
    let previous = config.min_ticket_price;
    config.set_min_ticket_price(&owner, amount)?;

    emit!(MinTicketPriceUpdated { previous, current: amount });
    msg!("Minimum ticket price updated: {} -> {}", previous, amount);

    Ok(())
}

#[event]
pub struct PlatformFeeUpdated {
    pub previous: u64,
    pub current: u64,
}

#[event]
pub struct MinTicketPriceUpdated {
    pub previous: u64,
    pub current: u64,
}
