pub mod init;
pub mod run;

pub use init::{generate_config_template, run_init, run_init_impl};
pub use run::{run_lens, run_lens_impl};
