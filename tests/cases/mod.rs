//! Generation scenarios

mod escaping;
mod isolation;
mod sink_flow;
mod values;
