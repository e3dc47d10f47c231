use crate::resize::params::DEFAULT_MAX_DIMENSION;
use clap::Parser;
use std::net::SocketAddr;


#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Largest request body the resize endpoint accepts, in bytes.
    #[arg(long)]
    #[arg(default_value_t = 10_000_000)]
    pub max_body_bytes: usize,
    /// Upper bound on either output dimension, in pixels.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_MAX_DIMENSION)]
    pub max_dimension: u32,
}
