//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod item_card;
mod item_pool;
mod tier_row;
mod tier_board;
mod toolbar;

pub use confirm_button::ConfirmButton;
pub use item_card::ItemCard;
pub use item_pool::ItemPool;
pub use tier_row::TierRow;
pub use tier_board::TierBoard;
pub use toolbar::Toolbar;
