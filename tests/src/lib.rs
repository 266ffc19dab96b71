//! End-to-end tests running Nmap XML fixtures through the public parser API.

mod network;
mod parsing;
mod utils;
