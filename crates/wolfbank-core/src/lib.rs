pub mod game;
pub mod model;
pub mod rng;

pub use game::config::TableConfig;
pub use game::outcome::{Effect, Outcome, Rejected, SkipReason};
pub use game::state::Game;
pub use game::view::TableView;
pub use model::phase::Phase;
pub use model::role::Role;
pub use model::seat::BankId;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "wolfbank"
    }

    pub const fn codename() -> &'static str {
        "Four Banks"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
