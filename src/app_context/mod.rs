use crate::cli::Args;

/// Shared handler state. Resize requests are otherwise independent, so the
/// only thing worth threading through the router is the configured dimension
/// ceiling.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub max_dimension: u32,
}

pub fn init(args: &Args) -> AppContext {
    AppContext {
        max_dimension: args.max_dimension,
    }
}
