//! NVIDIA board subtree: Jetson families plus the Clara AGX and Shield TV
//! oddballs. RAM-specific leaves hang off a generic per-family node.

use super::{BoardType, node};

pub static NVIDIA: BoardType = node("NVIDIA", "", "", 0, None);
pub static JETSON: BoardType = node("NVIDIA", "Jetson", "", 0, Some(&NVIDIA));

pub static JETSON_ORIN: BoardType = node("NVIDIA", "Jetson", "Orin", 0, Some(&JETSON));
pub static JETSON_ORIN_NX: BoardType = node("NVIDIA", "Jetson", "Orin NX", 0, Some(&JETSON_ORIN));
pub static JETSON_ORIN_NX_16GB: BoardType =
    node("NVIDIA", "Jetson", "Orin NX", 16384, Some(&JETSON_ORIN_NX));
pub static JETSON_ORIN_NX_8GB: BoardType =
    node("NVIDIA", "Jetson", "Orin NX", 8192, Some(&JETSON_ORIN_NX));
pub static JETSON_ORIN_NANO: BoardType =
    node("NVIDIA", "Jetson", "Orin Nano", 0, Some(&JETSON_ORIN));
pub static JETSON_ORIN_NANO_8GB: BoardType =
    node("NVIDIA", "Jetson", "Orin Nano", 8192, Some(&JETSON_ORIN_NANO));
pub static JETSON_ORIN_NANO_4GB: BoardType =
    node("NVIDIA", "Jetson", "Orin Nano", 4096, Some(&JETSON_ORIN_NANO));
pub static JETSON_ORIN_NANO_DEVELOPER_KIT: BoardType = node(
    "NVIDIA",
    "Jetson",
    "Orin Nano Developer Kit",
    8192,
    Some(&JETSON_ORIN_NANO),
);
pub static JETSON_AGX_ORIN: BoardType = node("NVIDIA", "Jetson", "AGX Orin", 0, Some(&JETSON));
pub static JETSON_AGX_ORIN_32GB: BoardType =
    node("NVIDIA", "Jetson", "AGX Orin", 32768, Some(&JETSON_AGX_ORIN));
pub static JETSON_AGX_ORIN_64GB: BoardType =
    node("NVIDIA", "Jetson", "AGX Orin", 65536, Some(&JETSON_AGX_ORIN));

pub static JETSON_XAVIER: BoardType = node("NVIDIA", "Jetson", "Xavier", 0, Some(&JETSON));
pub static JETSON_XAVIER_NX: BoardType = node("NVIDIA", "Jetson", "Xavier NX", 0, Some(&JETSON));
pub static JETSON_XAVIER_NX_DEVELOPER_KIT: BoardType = node(
    "NVIDIA",
    "Jetson",
    "Xavier NX Developer Kit",
    0,
    Some(&JETSON_XAVIER_NX),
);
pub static JETSON_XAVIER_NX_8GB: BoardType =
    node("NVIDIA", "Jetson", "Xavier NX", 8192, Some(&JETSON_XAVIER_NX));
pub static JETSON_XAVIER_NX_16GB: BoardType =
    node("NVIDIA", "Jetson", "Xavier NX", 16384, Some(&JETSON_XAVIER_NX));
pub static JETSON_AGX_XAVIER: BoardType = node("NVIDIA", "Jetson", "AGX Xavier", 0, Some(&JETSON));
pub static JETSON_AGX_XAVIER_8GB: BoardType =
    node("NVIDIA", "Jetson", "AGX Xavier", 8192, Some(&JETSON_AGX_XAVIER));
pub static JETSON_AGX_XAVIER_16GB: BoardType =
    node("NVIDIA", "Jetson", "AGX Xavier", 16384, Some(&JETSON_AGX_XAVIER));
pub static JETSON_AGX_XAVIER_32GB: BoardType =
    node("NVIDIA", "Jetson", "AGX Xavier", 32768, Some(&JETSON_AGX_XAVIER));
pub static JETSON_AGX_XAVIER_64GB: BoardType =
    node("NVIDIA", "Jetson", "AGX Xavier", 65536, Some(&JETSON_AGX_XAVIER));
pub static JETSON_AGX_XAVIER_INDUSTRIAL_32GB: BoardType = node(
    "NVIDIA",
    "Jetson",
    "AGX Xavier Industrial",
    32768,
    Some(&JETSON_AGX_XAVIER),
);

pub static JETSON_NANO: BoardType = node("NVIDIA", "Jetson", "Nano", 0, Some(&JETSON));
pub static JETSON_NANO_DEVELOPER_KIT: BoardType =
    node("NVIDIA", "Jetson", "Nano Developer Kit", 0, Some(&JETSON_NANO));
pub static JETSON_NANO_2GB: BoardType = node("NVIDIA", "Jetson", "Nano", 2048, Some(&JETSON_NANO));
// The 16 GB figure on this module is eMMC storage, not RAM.
pub static JETSON_NANO_16GB_EMMC: BoardType =
    node("NVIDIA", "Jetson", "Nano", 0, Some(&JETSON_NANO));
pub static JETSON_NANO_4GB: BoardType = node("NVIDIA", "Jetson", "Nano", 4096, Some(&JETSON_NANO));

pub static JETSON_TX2: BoardType = node("NVIDIA", "Jetson", "TX2", 0, Some(&JETSON));
pub static JETSON_TX2_NX: BoardType = node("NVIDIA", "Jetson", "TX2 NX", 0, Some(&JETSON));
pub static JETSON_TX2_4GB: BoardType = node("NVIDIA", "Jetson", "TX2", 4096, Some(&JETSON_TX2));
pub static JETSON_TX2I: BoardType = node("NVIDIA", "Jetson", "TX2i", 0, Some(&JETSON_TX2));
pub static JETSON_TX1: BoardType = node("NVIDIA", "Jetson", "TX1", 0, Some(&JETSON));

pub static CLARA_AGX: BoardType = node("NVIDIA", "Clara", "AGX", 0, Some(&NVIDIA));
pub static SHIELD_TV: BoardType = node("NVIDIA", "Shield", "TV", 0, Some(&NVIDIA));
