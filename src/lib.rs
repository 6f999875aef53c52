//! Runtime identification of single-board computers.
//!
//! Cross-references kernel-exposed device-tree strings and vendor module
//! identifiers against static catalogs of known boards (NVIDIA Jetson
//! family, Raspberry Pi), answering both "which exact board is this?" and
//! "is this board a specialization of category X?".
//!
//! Detection is first-match-wins across an ordered [`identify::Registry`] of
//! vendor identifiers; nothing is cached, every call re-reads the
//! filesystem.

pub mod boardtype;
pub mod cli;
pub mod error;
pub mod identify;
pub mod output;
pub mod sysfs;

pub use boardtype::BoardType;
pub use error::{Error, Result};
pub use identify::{Identifier, Registry};

use sysfs::SysfsRoot;

/// Identify the board this process is running on.
pub fn identify() -> Result<&'static BoardType> {
    Registry::with_defaults().identify(&SysfsRoot::system())
}

/// Is the running board the same as, or a specialization of, `want`?
/// Any detection failure answers `false`.
pub fn is_board_type(want: &BoardType) -> bool {
    Registry::with_defaults().is_board_type(&SysfsRoot::system(), want)
}

/// Is this any Raspberry Pi?
pub fn is_raspberry_pi() -> bool {
    is_board_type(&boardtype::raspberrypi::RASPBERRY_PI)
}

/// Is this any NVIDIA board?
pub fn is_nvidia() -> bool {
    is_board_type(&boardtype::nvidia::NVIDIA)
}

/// Is this any NVIDIA Jetson?
pub fn is_jetson() -> bool {
    is_board_type(&boardtype::nvidia::JETSON)
}
