//! External collaborator contracts.
//!
//! The provisioning drivers never talk to the network or the terminal
//! themselves; both concerns sit behind the traits defined here.

mod helper;
mod input;

pub use helper::ConnectorHelper;
pub use input::InputCollector;
