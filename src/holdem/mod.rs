/// Table configuration.
mod config;
/// Export `TableConfig`
pub use self::config::TableConfig;

/// Module for `Table` which deals hole cards and a board from its own deck
/// and ranks the players at showdown.
mod table;
/// Export `Table`, `Deal`, `Standing` and `deal_from`
pub use self::table::{Deal, Standing, Table, deal_from};
