pub mod check;
mod context;
pub mod init;
pub mod list;

pub use check::run_check;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use list::{format_checklist, run_list, run_list_impl};
