//! # gavel-ingress
//!
//! **Bid Entry Plane**: input parsing, bid validation, auction lifecycle,
//! and the live bid book.
//!
//! ## Architecture
//!
//! The entry plane sits between participants and the clearing computation:
//! 1. **BidInput**: turns user-entered decimal text into integer amounts
//! 2. **OrderValidator**: hard gate, reports the first failing rule
//! 3. **Lifecycle**: derives the auction phase from the window and the
//!    settlement signal
//! 4. **BidBook**: admits live bids under the clearing rules, keeps them in
//!    queue order, and recomputes the current clearing price
//!
//! ## Bid Flow
//!
//! ```text
//! BidInput → OrderValidator.validate_input() → BidBook.place()
//!     → BidBook.current_clearing_order() → OrderValidator.set_clearing_price()
//! ```

pub mod bid_book;
pub mod bid_input;
pub mod lifecycle;
pub mod validator;

pub use bid_book::BidBook;
pub use bid_input::BidInput;
pub use lifecycle::{next_boundary, transition};
pub use validator::{OrderValidator, validate};
