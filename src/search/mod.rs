//! Match-location search core
//!
//! Three layers, each depending on the previous: `outline` resolves a page
//! to its active heading path, `engine` finds and groups raw matches,
//! `context` frames a match in its containing sentence. `session` drives a
//! cursor over the results and `display` defines the results-list line
//! contract the UI renders against.

pub mod context;
pub mod display;
pub mod engine;
pub mod outline;
pub mod session;

pub use context::{Excerpt, sentence_context};
pub use display::{LineMap, location_lines};
pub use engine::{Location, Match, SearchResults, search};
pub use outline::OutlineIndex;
pub use session::{MatchView, SearchSession};
