pub mod cli_deserialize;
pub mod logging;
pub mod parse;
