//! Wikicount core: pure run state machine, tally and report view-model.
mod effect;
mod msg;
mod state;
mod tier;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    ArticleIndex, ArticleRow, ArticleStatus, FailureReason, RunPhase, RunState, RunTally,
};
pub use tier::PrizeTier;
pub use update::update;
pub use view_model::{ReportRowView, ReportView};
