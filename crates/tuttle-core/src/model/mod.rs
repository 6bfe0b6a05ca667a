pub mod client;
pub mod contact;
pub mod contract;
pub mod profile;
pub mod time;

pub use client::Client;
pub use contact::Contact;
pub use contract::Contract;
pub use profile::UserProfile;
pub use time::{Cycle, ParseEnumError, TimeUnit};
