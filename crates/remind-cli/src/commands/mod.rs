//! Command implementations for the CLI.

mod add;
mod check;
mod list;
mod remove;
mod show;
mod sound;
mod toggle;
mod update;

pub use add::cmd_add;
pub use check::cmd_check;
pub use list::cmd_list;
pub use remove::{cmd_clear, cmd_delete};
pub use show::cmd_show;
pub use sound::cmd_sound;
pub use toggle::cmd_toggle;
pub use update::cmd_update;
