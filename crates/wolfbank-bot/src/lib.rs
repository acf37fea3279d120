pub mod bot;
pub mod driver;
pub mod policy;

pub use bot::{BitePlanner, BotContext, GuardPlanner, LynchPlanner, MadPlanner, SeerPlanner};
pub use driver::{AutoRunReport, StopReason, cpu_step, run_auto_turns};
pub use policy::{Decision, HeuristicPolicy, Policy};
