pub mod env_validate;

pub use env_validate::{ get_storage_dir, init_env, STORAGE_DIR_VAR };
