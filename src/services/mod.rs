pub mod store;

pub use store::TournamentStore;
