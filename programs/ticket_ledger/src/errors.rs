use anchor_lang::prelude::*;

#[error_code]
pub enum TicketLedgerError {
    #[msg("Caller is not authorized for this operation")]
    NotAuthorized,
    #[msg("Event not found")]
    EventNotFound,
    #[msg("Event is sold out")]
    SoldOut,
    #[msg("Ticket not found")]
    TicketNotFound,
    #[msg("Invalid ticket price or refund window")]
    InvalidPrice,
    #[msg("Event has expired")]
    EventExpired,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Record already exists")]
    AlreadyExists,
    #[msg("Transfer not allowed")]
    TransferNotAllowed,
    #[msg("Ticket already used or refunded")]
    TicketUsed,
    #[msg("Refund window has closed")]
    RefundWindowClosed,
    #[msg("Text field exceeds its maximum length")]
    TextTooLong,
    #[msg("Math overflow")]
    MathOverflow,
}
