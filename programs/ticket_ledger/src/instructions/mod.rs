pub mod initialize_config;
pub mod create_event;
pub mod purchase_ticket;
pub mod validate_ticket;
pub mod refund_ticket;
pub mod update_config;
pub mod queries;

pub use initialize_config::*;
pub use create_event::*;
pub use purchase_ticket::*;
pub use validate_ticket::*;
pub use refund_ticket::*;
pub use update_config::*;
pub use queries::*;
