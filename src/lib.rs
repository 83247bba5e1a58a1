pub mod commands;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod logging;
pub mod paths;
pub mod profiles;
pub mod setup;
pub mod switch;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
