pub mod delete_user_clients_command;

pub use delete_user_clients_command::*;
