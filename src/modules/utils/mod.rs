pub mod io;
pub mod logging;

pub use io::{prompt_with_confirmation, wait_for_enter, Console, Terminal};
pub use logging::{initialize_logging, log_auth_event, log_data_operation};
