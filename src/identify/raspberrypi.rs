//! Raspberry Pi detection.
//!
//! The device-tree model string narrows the board down to a model family,
//! but it is ambiguous with respect to RAM capacity, so all matching rows
//! are collected and the installed RAM (queried through the VideoCore
//! firmware tool) picks the exact variant. When RAM cannot be measured the
//! first candidate's fallback leaf is reported instead of failing.

use std::io;
use std::process::Command;

use tracing::debug;

use super::{device_tree_base_model, device_tree_model};
use crate::boardtype::BoardType;
use crate::boardtype::raspberrypi::*;
use crate::error::{Error, Result};
use crate::sysfs::SysfsRoot;

const VENDOR: &str = "Raspberry Pi";
const RAM_TOOL: &str = "vcgencmd";

/// One detection row: the shared device-tree model text, the RAM size that
/// pins an exact variant, and the coarser leaf to report when RAM cannot be
/// measured or matches no row.
struct ModelRow {
    model: &'static str,
    memory_mb: u32,
    board: &'static BoardType,
    fallback: &'static BoardType,
}

const fn row(
    model: &'static str,
    memory_mb: u32,
    board: &'static BoardType,
    fallback: &'static BoardType,
) -> ModelRow {
    ModelRow {
        model,
        memory_mb,
        board,
        fallback,
    }
}

static MODEL_ROWS: &[ModelRow] = &[
    row("Raspberry Pi 3 Model B", 1024, &RASPBERRY_PI_3B, &RASPBERRY_PI_3B),
    row("Raspberry Pi 3 Model A", 512, &RASPBERRY_PI_3A_PLUS, &RASPBERRY_PI_3A_PLUS),
    row("Raspberry Pi 3 Model B", 1024, &RASPBERRY_PI_3B_PLUS, &RASPBERRY_PI_3B_PLUS),
    row("Raspberry Pi 4 Model B", 1024, &RASPBERRY_PI_4B_1GB, &RASPBERRY_PI_4B),
    row("Raspberry Pi 4 Model B", 2048, &RASPBERRY_PI_4B_2GB, &RASPBERRY_PI_4B),
    row("Raspberry Pi 4 Model B", 4096, &RASPBERRY_PI_4B_4GB, &RASPBERRY_PI_4B),
    row("Raspberry Pi 4 Model B", 8192, &RASPBERRY_PI_4B_8GB, &RASPBERRY_PI_4B),
    row("Raspberry Pi 400", 4096, &RASPBERRY_PI_400, &RASPBERRY_PI_400),
    row("Raspberry Pi 5 Model B", 2048, &RASPBERRY_PI_5B_2GB, &RASPBERRY_PI_5B),
    row("Raspberry Pi 5 Model B", 4096, &RASPBERRY_PI_5B_4GB, &RASPBERRY_PI_5B),
    row("Raspberry Pi 5 Model B", 8192, &RASPBERRY_PI_5B_8GB, &RASPBERRY_PI_5B),
];

/// Measures installed RAM in megabytes. A seam so tests can stand in for the
/// external firmware tool.
pub(crate) trait RamProbe {
    fn total_mem_mb(&self) -> Result<u32>;
}

/// Queries the VideoCore firmware via `vcgencmd get_config total_mem`.
pub(crate) struct Vcgencmd;

impl RamProbe for Vcgencmd {
    fn total_mem_mb(&self) -> Result<u32> {
        let output = match Command::new(RAM_TOOL)
            .args(["get_config", "total_mem"])
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("vcgencmd not found");
                return Err(Error::RamToolMissing);
            }
            Err(e) => {
                return Err(Error::SignalRead {
                    path: RAM_TOOL.into(),
                    source: e,
                });
            }
        };
        if !output.status.success() {
            return Err(Error::RamToolFailed {
                status: output.status,
            });
        }
        parse_total_mem(&String::from_utf8_lossy(&output.stdout))
    }
}

pub(crate) fn detect(sysfs: &SysfsRoot) -> Result<&'static BoardType> {
    detect_with_probe(sysfs, &Vcgencmd)
}

fn detect_with_probe(sysfs: &SysfsRoot, probe: &dyn RamProbe) -> Result<&'static BoardType> {
    let model = match device_tree_base_model(sysfs) {
        Ok(model) => model,
        Err(Error::DeviceTreeMissing) => match device_tree_model(sysfs) {
            Ok(model) => model,
            Err(Error::DeviceTreeMissing) => return Err(Error::Unrecognized { vendor: VENDOR }),
            Err(e) => return Err(e),
        },
        Err(e) => return Err(e),
    };

    let candidates: Vec<&ModelRow> = MODEL_ROWS
        .iter()
        .filter(|row| model.contains(row.model))
        .collect();
    if candidates.is_empty() {
        debug!(model = %model, "device tree model does not match any known board");
        return Err(Error::Unrecognized { vendor: VENDOR });
    }

    let ram_mb = match probe.total_mem_mb() {
        Ok(ram_mb) => ram_mb,
        Err(Error::RamToolMissing) => {
            let fallback = candidates[0].fallback;
            debug!(
                model = %model,
                fallback = %fallback.pretty_name(),
                "RAM query tool not present, using fallback"
            );
            return Ok(fallback);
        }
        Err(e) => return Err(e),
    };

    for candidate in &candidates {
        if candidate.memory_mb == ram_mb {
            return Ok(candidate.board);
        }
    }

    // Unexpected RAM size is not a failure; report the best generic
    // classification available.
    let fallback = candidates[0].fallback;
    debug!(
        model = %model,
        ram_mb,
        fallback = %fallback.pretty_name(),
        "no exact RAM match, using fallback"
    );
    Ok(fallback)
}

/// Parse `total_mem=<megabytes>` as printed by vcgencmd.
fn parse_total_mem(output: &str) -> Result<u32> {
    let output = output.trim();
    let parts: Vec<&str> = output.split('=').collect();
    if parts.len() != 2 {
        return Err(Error::RamOutputFormat(output.to_string()));
    }
    parts[1]
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::RamOutputFormat(output.to_string()))
}
