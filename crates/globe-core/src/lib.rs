pub mod audio;
pub mod constants;
pub mod crisis;
pub mod events;
pub mod frame;
pub mod geo;
pub mod markers;
pub mod pulse;
pub mod schedule;
pub mod session;
pub mod state;
pub mod timeline;

pub use audio::*;
pub use constants::*;
pub use crisis::*;
pub use events::*;
pub use frame::*;
pub use geo::*;
pub use markers::*;
pub use pulse::*;
pub use schedule::*;
pub use session::*;
pub use state::*;
pub use timeline::*;
