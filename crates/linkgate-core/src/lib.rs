pub mod config;
pub mod logging;

// Policy core and the two collaborator seams the host application implements.
pub mod handoff;
pub mod launcher;
pub mod presenter;
