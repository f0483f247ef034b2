pub mod changes;
pub mod export;
pub mod indicators;
pub mod refresh;
pub mod setup;
pub mod show;
pub mod ui;
