//! CLI command implementations.

mod assign;
mod book;
mod config;
mod connect;
mod find;
mod list;
mod map;
mod release;
mod render;
mod show;
mod watch;
mod whoami;

pub use assign::AssignCmd;
pub use book::BookCmd;
pub use config::ConfigCmd;
pub use find::FindCmd;
pub use list::ListCmd;
pub use map::MapCmd;
pub use release::ReleaseCmd;
pub use show::ShowCmd;
pub use watch::WatchCmd;
pub use whoami::WhoamiCmd;
