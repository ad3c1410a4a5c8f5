//! CLI subcommands other than `serve`

pub mod list;
pub mod new;
