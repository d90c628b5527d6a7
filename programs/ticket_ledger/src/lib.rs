use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{CreateEventParams, Event, Organizer, Ticket};

declare_id!("RF4fvU2ibfnm9kJqzHUAhN7Yk83P4AS2YfjiSBYyke8");

#[program]
pub mod ticket_ledger {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        platform_fee_percent: u64,
        min_ticket_price: u64,
        max_refund_window: u64,
    ) -> Result<()> {
        instructions::initialize_config::initialize_config(
            ctx,
            platform_fee_percent,
            min_ticket_price,
            max_refund_window,
        )
    }

    pub fn create_event(
        ctx: Context<CreateEvent>,
        params: CreateEventParams,
    ) -> Result<()> {
        instructions::create_event::create_event(ctx, params)
    }

    pub fn purchase_ticket(ctx: Context<PurchaseTicket>, event_id: u64) -> Result<()> {
        instructions::purchase_ticket::purchase_ticket(ctx, event_id)
    }

    pub fn validate_ticket(ctx: Context<ValidateTicket>, ticket_id: u64) -> Result<()> {
        instructions::validate_ticket::validate_ticket(ctx, ticket_id)
    }

    pub fn refund_ticket(ctx: Context<RefundTicket>, ticket_id: u64) -> Result<()> {
        instructions::refund_ticket::refund_ticket(ctx, ticket_id)
    }

    pub fn update_platform_fee(ctx: Context<UpdateConfig>, percent: u64) -> Result<()> {
        instructions::update_config::update_platform_fee(ctx, percent)
    }

    pub fn update_min_ticket_price(ctx: Context<UpdateConfig>, amount: u64) -> Result<()> {
        instructions::update_config::update_min_ticket_price(ctx, amount)
    }

    pub fn get_event(ctx: Context<GetEvent>, event_id: u64) -> Result<Option<Event>> {
        instructions::queries::get_event(ctx, event_id)
    }

    pub fn get_ticket(ctx: Context<GetTicket>, ticket_id: u64) -> Result<Option<Ticket>> {
        instructions::queries::get_ticket(ctx, ticket_id)
    }

    pub fn get_user_tickets(
        ctx: Context<GetUserTickets>,
        owner: Pubkey,
    ) -> Result<Option<Vec<u64>>> {
        instructions::queries::get_user_tickets(ctx, owner)
    }

    pub fn get_organizer_revenue(
        ctx: Context<GetOrganizerRevenue>,
        organizer: Pubkey,
    ) -> Result<Option<Organizer>> {
        instructions::queries::get_organizer_revenue(ctx, organizer)
    }

    pub fn calculate_platform_fee(
        ctx: Context<CalculatePlatformFee>,
        amount: u64,
    ) -> Result<u64> {
        instructions::queries::calculate_platform_fee(ctx, amount)
    }
}


#[cfg(test)]
mod tests;
