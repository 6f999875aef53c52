//! NVIDIA Jetson detection.
//!
//! Tier 1 reads the DTS source filename the firmware records in the device
//! tree and looks up the module part number encoded in it. Tier 2 falls back
//! to substring-matching the descriptive device-tree model string, which is
//! coarser (it usually cannot tell RAM variants apart).

use std::path::Path;

use tracing::debug;

use super::device_tree_base_model;
use crate::boardtype::BoardType;
use crate::boardtype::nvidia::*;
use crate::error::{Error, Result};
use crate::sysfs::SysfsRoot;

const DTS_FILENAME: &str = "proc/device-tree/nvidia,dtsfilename";
const VENDOR: &str = "NVIDIA";

/// Module part numbers as embedded in DTS filenames. Exact match only.
static MODULES_BY_PART_NUMBER: &[(&str, &BoardType)] = &[
    ("p3767-0000", &JETSON_ORIN_NX_16GB),
    ("p3767-0001", &JETSON_ORIN_NX_8GB),
    ("p3767-0003", &JETSON_ORIN_NANO_8GB),
    ("p3767-0004", &JETSON_ORIN_NANO_4GB),
    ("p3767-0005", &JETSON_ORIN_NANO_DEVELOPER_KIT),
    ("p3701-0000", &JETSON_AGX_ORIN),
    ("p3701-0004", &JETSON_AGX_ORIN_32GB),
    ("p3701-0005", &JETSON_AGX_ORIN_64GB),
    ("p3668-0000", &JETSON_XAVIER_NX_DEVELOPER_KIT),
    ("p3668-0001", &JETSON_XAVIER_NX_8GB),
    ("p3668-0003", &JETSON_XAVIER_NX_16GB),
    ("p2888-0001", &JETSON_AGX_XAVIER_16GB),
    ("p2888-0003", &JETSON_AGX_XAVIER_32GB),
    ("p2888-0004", &JETSON_AGX_XAVIER_32GB),
    ("p2888-0005", &JETSON_AGX_XAVIER_64GB),
    ("p2888-0006", &JETSON_AGX_XAVIER_8GB),
    ("p2888-0008", &JETSON_AGX_XAVIER_INDUSTRIAL_32GB),
    ("p2972-0000", &JETSON_AGX_XAVIER),
    ("p2771-0000", &JETSON_TX2),
    ("p3448-0000", &JETSON_NANO_4GB),
    ("p3448-0002", &JETSON_NANO_16GB_EMMC),
    ("p3448-0003", &JETSON_NANO_2GB),
    ("p3450-0000", &JETSON_NANO_DEVELOPER_KIT),
    ("p3636-0001", &JETSON_TX2_NX),
    ("p3509-0000", &JETSON_TX2_NX),
    ("p3489-0888", &JETSON_TX2_4GB),
    ("p3489-0000", &JETSON_TX2I),
    ("p3310-1000", &JETSON_TX2),
    ("p2180-1000", &JETSON_TX1),
    ("p2371-2180", &JETSON_TX1),
    ("p2894-0050", &SHIELD_TV),
    ("p3904-0000", &CLARA_AGX),
];

/// Descriptive device-tree model names, matched by substring. The first row
/// whose text is contained in the read string wins, so longer names must
/// come before the shorter names they contain.
static MODULES_BY_DEVICE_TREE_MODEL: &[(&str, &BoardType)] = &[
    (
        "NVIDIA Jetson Orin NX Engineering Reference Developer Kit",
        &JETSON_ORIN_NX_16GB,
    ),
    ("NVIDIA Jetson Orin Nano Developer Kit", &JETSON_ORIN_NANO_DEVELOPER_KIT),
    ("NVIDIA Jetson TX2 Developer Kit", &JETSON_TX2),
    ("NVIDIA Jetson TX2 NX Developer Kit", &JETSON_TX2_NX),
    ("NVIDIA Jetson TX2", &JETSON_TX2),
    ("NVIDIA Jetson AGX Xavier Developer Kit", &JETSON_AGX_XAVIER),
    ("NVIDIA Jetson AGX Xavier", &JETSON_AGX_XAVIER),
    (
        "NVIDIA Jetson Xavier NX Developer Kit (SD-card)",
        &JETSON_XAVIER_NX_DEVELOPER_KIT,
    ),
    (
        "NVIDIA Jetson Xavier NX Developer Kit (eMMC)",
        &JETSON_XAVIER_NX_DEVELOPER_KIT,
    ),
    ("NVIDIA Jetson Xavier NX (SD-card)", &JETSON_XAVIER_NX_DEVELOPER_KIT),
    ("NVIDIA Jetson Xavier NX (eMMC)", &JETSON_XAVIER_NX_8GB),
    ("NVIDIA Jetson TX1 Developer Kit", &JETSON_TX1),
    ("NVIDIA Jetson TX1", &JETSON_TX1),
    ("NVIDIA Shield TV", &SHIELD_TV),
    ("NVIDIA Jetson Nano Developer Kit", &JETSON_NANO_DEVELOPER_KIT),
    ("NVIDIA Jetson AGX Orin Developer Kit", &JETSON_AGX_ORIN),
    ("NVIDIA Jetson AGX Orin", &JETSON_AGX_ORIN),
];

pub(crate) fn detect(sysfs: &SysfsRoot) -> Result<&'static BoardType> {
    match board_from_module_model(sysfs) {
        Ok(board) => {
            debug!(board = %board.pretty_name(), "matched module part number");
            Ok(board)
        }
        Err(
            Error::DtsFilenameMissing | Error::Unrecognized { .. } | Error::ModuleNameFormat(_),
        ) => {
            debug!("module model unavailable, falling back to device tree model");
            board_from_device_tree_model(sysfs)
        }
        Err(e) => Err(e),
    }
}

fn board_from_module_model(sysfs: &SysfsRoot) -> Result<&'static BoardType> {
    let dts_path = dts_filename(sysfs)?;
    let module_name = module_name_from_dts_path(&dts_path);
    let module_model = module_model_from_name(&module_name)?;
    debug!(module_model = %module_model, "module model");
    MODULES_BY_PART_NUMBER
        .iter()
        .find(|(part_number, _)| *part_number == module_model)
        .map(|(_, board)| *board)
        .ok_or(Error::Unrecognized { vendor: VENDOR })
}

fn board_from_device_tree_model(sysfs: &SysfsRoot) -> Result<&'static BoardType> {
    let model = match device_tree_base_model(sysfs) {
        Ok(model) => model,
        Err(Error::DeviceTreeMissing) => return Err(Error::Unrecognized { vendor: VENDOR }),
        Err(e) => return Err(e),
    };
    MODULES_BY_DEVICE_TREE_MODEL
        .iter()
        .find(|(name, _)| model.contains(*name))
        .map(|(_, board)| *board)
        .ok_or_else(|| {
            debug!(model = %model, "device tree model does not match any known board");
            Error::Unrecognized { vendor: VENDOR }
        })
}

fn dts_filename(sysfs: &SysfsRoot) -> Result<String> {
    if !sysfs.exists(DTS_FILENAME) {
        return Err(Error::DtsFilenameMissing);
    }
    let filename = sysfs.read(DTS_FILENAME)?;
    debug!(filename = %filename, "DTS filename");
    Ok(filename)
}

/// Base name of the DTS path without its extension, e.g.
/// `.../tegra234-p3767-0003-p3768-0000-a0.dts` ->
/// `tegra234-p3767-0003-p3768-0000-a0`.
fn module_name_from_dts_path(dts_path: &str) -> String {
    Path::new(dts_path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(dts_path)
        .to_string()
}

/// Segments 1 and 2 of the module name are the module part number, e.g.
/// `tegra234-p3767-0003-p3768-0000-a0` -> `p3767-0003`.
fn module_model_from_name(module_name: &str) -> Result<String> {
    let parts: Vec<&str> = module_name.split('-').collect();
    if parts.len() < 4 {
        return Err(Error::ModuleNameFormat(module_name.to_string()));
    }
    Ok(parts[1..3].join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const ORIN_NANO_DTS: &str = "/dvs/git/dirty/git-master_linux/kernel/kernel-5.10/arch/arm64/boot/dts/../../../../../../hardware/nvidia/platform/t23x/p3768/kernel-dts/tegra234-p3767-0003-p3768-0000-a0.dts";

    fn fixture() -> (TempDir, SysfsRoot) {
        let tmp = TempDir::new().unwrap();
        let sysfs = SysfsRoot::new(tmp.path());
        (tmp, sysfs)
    }

    fn write_dts_filename(root: &Path, contents: &str) {
        let dir = root.join("proc/device-tree");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("nvidia,dtsfilename"), contents).unwrap();
    }

    fn write_firmware_model(root: &Path, contents: &str) {
        let dir = root.join("sys/firmware/devicetree/base");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("model"), contents).unwrap();
    }

    #[test]
    fn test_module_name_from_dts_path() {
        assert_eq!(
            module_name_from_dts_path(ORIN_NANO_DTS),
            "tegra234-p3767-0003-p3768-0000-a0"
        );
    }

    #[test]
    fn test_module_model_from_name() {
        assert_eq!(
            module_model_from_name("tegra234-p3767-0003-p3768-0000-a0").unwrap(),
            "p3767-0003"
        );
        assert!(matches!(
            module_model_from_name("tegra234-p3767"),
            Err(Error::ModuleNameFormat(_))
        ));
    }

    #[test]
    fn test_detect_from_part_number() {
        let (tmp, sysfs) = fixture();
        write_dts_filename(tmp.path(), ORIN_NANO_DTS);

        let board = detect(&sysfs).unwrap();
        assert!(std::ptr::eq(board, &JETSON_ORIN_NANO_8GB));
    }

    #[test]
    fn test_detect_from_device_tree_model() {
        let (tmp, sysfs) = fixture();
        write_firmware_model(tmp.path(), "NVIDIA Jetson AGX Orin Developer Kit\u{0}");

        let board = detect(&sysfs).unwrap();
        assert!(std::ptr::eq(board, &JETSON_AGX_ORIN));
    }

    #[test]
    fn test_unknown_part_number_falls_back() {
        let (tmp, sysfs) = fixture();
        write_dts_filename(tmp.path(), "tegra234-p9999-9999-p0000-0000-a0.dts");
        write_firmware_model(tmp.path(), "NVIDIA Jetson Xavier NX Developer Kit (SD-card)");

        let board = detect(&sysfs).unwrap();
        assert!(std::ptr::eq(board, &JETSON_XAVIER_NX_DEVELOPER_KIT));
    }

    #[test]
    fn test_table_order_prefers_longer_names() {
        // "NVIDIA Jetson TX2 NX Developer Kit" also contains
        // "NVIDIA Jetson TX2", so row order decides.
        let (tmp, sysfs) = fixture();
        write_firmware_model(tmp.path(), "NVIDIA Jetson TX2 NX Developer Kit");

        let board = detect(&sysfs).unwrap();
        assert!(std::ptr::eq(board, &JETSON_TX2_NX));
    }

    #[test]
    fn test_foreign_board_is_unrecognized() {
        let (tmp, sysfs) = fixture();
        write_firmware_model(tmp.path(), "Raspberry Pi 4 Model B Rev 1.4");

        assert!(matches!(
            detect(&sysfs),
            Err(Error::Unrecognized { vendor: "NVIDIA" })
        ));
    }

    #[test]
    fn test_unreadable_model_is_unrecognized() {
        // Tier 2's model path exists but is not a readable file; that is a
        // tier miss, not a hard read failure.
        let (tmp, sysfs) = fixture();
        fs::create_dir_all(tmp.path().join("sys/firmware/devicetree/base/model")).unwrap();

        assert!(matches!(
            detect(&sysfs),
            Err(Error::Unrecognized { vendor: "NVIDIA" })
        ));
    }

    #[test]
    fn test_no_signals_is_unrecognized() {
        let (_tmp, sysfs) = fixture();
        assert!(matches!(
            detect(&sysfs),
            Err(Error::Unrecognized { vendor: "NVIDIA" })
        ));
    }
}
