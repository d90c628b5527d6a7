//! Read-only lookups. Each returns its record through instruction return
//! data; a record whose account does not exist comes back as `None`.

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{Config, Event, Organizer, Ticket, TicketIndex};

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct GetEvent<'info> {
    #[account(seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()], bump)]
    pub event: Option<Account<'info, Event>>,
}

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct GetTicket<'info> {
    #[account(seeds = [TICKET_SEED, ticket_id.to_le_bytes().as_ref()], bump)]
    pub ticket: Option<Account<'info, Ticket>>,
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetUserTickets<'info> {
    #[account(seeds = [USER_TICKETS_SEED, owner.as_ref()], bump)]
    pub user_tickets: Option<Account<'info, TicketIndex>>,
}

#[derive(Accounts)]
#[instruction(organizer: Pubkey)]
pub struct GetOrganizerRevenue<'info> {
    #[account(seeds = [ORGANIZER_SEED, organizer.as_ref()], bump)]
    pub organizer_stats: Option<Account<'info, Organizer>>,
}

#[derive(Accounts)]
pub struct CalculatePlatformFee<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}

/// Copies a record out of its account, if the account exists.
pub fn read_record<T: Clone>(record: Option<&T>) -> Option<T> {
    record.cloned()
}

pub fn user_ticket_ids(index: Option<&TicketIndex>) -> Option<Vec<u64>> {
    index.map(|index| index.ticket_ids.clone())
}

pub fn get_event(ctx: Context<GetEvent>, _event_id: u64) -> Result<Option<Event>> {
    Ok(read_record(ctx.accounts.event.as_deref()))
}

pub fn get_ticket(ctx: Context<GetTicket>, _ticket_id: u64) -> Result<Option<Ticket>> {
    Ok(read_record(ctx.accounts.ticket.as_deref()))
}

pub fn get_user_tickets(ctx: Context<GetUserTickets>, _owner: Pubkey) -> Result<Option<Vec<u64>>> {
    Ok(user_ticket_ids(ctx.accounts.user_tickets.as_deref()))
}

pub fn get_organizer_revenue(
    ctx: Context<GetOrganizerRevenue>,
    _organizer: Pubkey,
) -> Result<Option<Organizer>> {
    Ok(read_record(ctx.accounts.organizer_stats.as_deref()))
}

pub fn calculate_platform_fee(ctx: Context<CalculatePlatformFee>, amount: u64) -> Result<u64> {
    ctx.accounts.config.calculate_platform_fee(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_records_read_as_none() {
        assert_eq!(read_record::<Ticket>(None).map(|t| t.ticket_id), None);
        assert_eq!(read_record::<Organizer>(None).map(|o| o.events_organized), None);
        assert_eq!(user_ticket_ids(None), None);
    }

    #[test]
    fn test_present_records_are_copied() {
        let stats = Organizer {
            total_revenue: 0,
            pending_withdrawals: 0,
            events_organized: 3,
            bump: 250,
        };
        let read = read_record(Some(&stats)).unwrap();
        assert_eq!(read.events_organized, 3);
        assert_eq!(read.bump, 250);

        let mut index = TicketIndex::default();
        index.push(4).unwrap();
        index.push(9).unwrap();
        assert_eq!(user_ticket_ids(Some(&index)), Some(vec![4, 9]));

        // An existing but empty index is distinct from a missing one
        assert_eq!(user_ticket_ids(Some(&TicketIndex::default())), Some(vec![]));
    }
}
