//! Running the external ovs-vsctl process

pub mod locate;
pub mod vsctl;

pub use locate::find_ovs_vsctl;
pub use vsctl::{CommandOutput, ParseMode, VsCtl, DEFAULT_ADDR, DEFAULT_PORT, DEFAULT_PROTOCOL};
