mod common;
mod server_lifecycle;
