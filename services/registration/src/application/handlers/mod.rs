pub mod delete_user_clients_handler;

pub use delete_user_clients_handler::*;
