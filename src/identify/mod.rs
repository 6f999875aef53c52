pub mod jetson;
pub mod raspberrypi;

use tracing::debug;

use crate::boardtype::BoardType;
use crate::error::{Error, Result};
use crate::sysfs::SysfsRoot;

pub(crate) const FIRMWARE_DT_MODEL: &str = "sys/firmware/devicetree/base/model";
pub(crate) const PROC_DT_MODEL: &str = "proc/device-tree/model";

/// The closed set of vendor identifiers.
///
/// Each variant implements one vendor's multi-tier detection protocol and is
/// expected to fail fast and distinguishably on foreign hardware (e.g. the
/// Jetson DTS path simply does not exist on a Raspberry Pi).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier {
    Jetson,
    RaspberryPi,
}

impl Identifier {
    pub fn name(&self) -> &'static str {
        match self {
            Identifier::Jetson => "Jetson",
            Identifier::RaspberryPi => "Raspberry Pi",
        }
    }

    /// Run this vendor's detection protocol against the given filesystem root.
    pub fn detect(&self, sysfs: &SysfsRoot) -> Result<&'static BoardType> {
        match self {
            Identifier::Jetson => jetson::detect(sysfs),
            Identifier::RaspberryPi => raspberrypi::detect(sysfs),
        }
    }
}

/// Ordered collection of vendor identifiers, built explicitly by the caller.
/// There is no ambient global registration.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    identifiers: Vec<Identifier>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard identifiers in their standard order.
    pub fn with_defaults() -> Self {
        Self {
            identifiers: vec![Identifier::Jetson, Identifier::RaspberryPi],
        }
    }

    /// Append an identifier. Order is significant: earlier entries win.
    pub fn register(&mut self, identifier: Identifier) {
        self.identifiers.push(identifier);
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// Try each identifier in registration order and return the first
    /// success. When all of them fail, every individual failure is kept in
    /// the returned aggregate so no diagnostic detail is lost.
    pub fn identify(&self, sysfs: &SysfsRoot) -> Result<&'static BoardType> {
        let mut causes = Vec::new();
        for identifier in &self.identifiers {
            match identifier.detect(sysfs) {
                Ok(board) => {
                    debug!(
                        identifier = identifier.name(),
                        board = %board.pretty_name(),
                        "board identified"
                    );
                    return Ok(board);
                }
                Err(e) => {
                    debug!(identifier = identifier.name(), error = %e, "identifier failed");
                    causes.push(e);
                }
            }
        }
        Err(Error::Unknown { causes })
    }

    /// Is the running board the same as, or a specialization of, `want`?
    /// Any detection failure answers `false`.
    pub fn is_board_type(&self, sysfs: &SysfsRoot, want: &BoardType) -> bool {
        self.identify(sysfs)
            .map(|board| board.is_board_type(want))
            .unwrap_or(false)
    }
}

/// Firmware device-tree model string. Absence is the expected condition on
/// systems without a device tree, not an I/O error.
pub(crate) fn device_tree_base_model(sysfs: &SysfsRoot) -> Result<String> {
    let model = read_model(sysfs, FIRMWARE_DT_MODEL)?;
    debug!(model = %model, "firmware device tree model");
    Ok(model)
}

/// Legacy /proc device-tree model string.
pub(crate) fn device_tree_model(sysfs: &SysfsRoot) -> Result<String> {
    let model = read_model(sysfs, PROC_DT_MODEL)?;
    debug!(model = %model, "proc device tree model");
    Ok(model)
}

/// Any failure to produce the model string, absence included, reads as "no
/// device tree model here" so callers move on to their next tier.
fn read_model(sysfs: &SysfsRoot, path: &str) -> Result<String> {
    match sysfs.read_model_optional(path) {
        Ok(Some(model)) => Ok(model),
        Ok(None) => Err(Error::DeviceTreeMissing),
        Err(e) => {
            debug!(path, error = %e, "cannot read device tree model file");
            Err(Error::DeviceTreeMissing)
        }
    }
}
