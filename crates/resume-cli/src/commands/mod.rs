//! Command implementations.

pub mod extract;
pub mod init;
pub mod normalize;
pub mod validate;

pub use self::extract::execute_extract;
pub use self::init::execute_init;
pub use self::normalize::execute_normalize;
pub use self::validate::execute_validate;
