// Interface adapters: auth client, wire protocol and HTTP handling.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod writer;
