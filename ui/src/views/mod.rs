mod history;
pub use history::History;

mod roster;
pub use roster::Roster;
