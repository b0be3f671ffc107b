pub mod admins;
pub mod bid;
pub mod contract;
pub mod error;
pub mod helper;
pub mod msg;
pub mod state;
