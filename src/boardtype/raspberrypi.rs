//! Raspberry Pi board subtree. The model string alone does not distinguish
//! RAM variants, so each generation keeps a RAM-unspecified node (`4B`, `5B`)
//! for identifiers to fall back to when RAM cannot be measured.

use super::{BoardType, node};

pub static RASPBERRY_PI: BoardType = node("Raspberry Pi", "Raspberry Pi", "", 0, None);

pub static RASPBERRY_PI_3: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "", 0, Some(&RASPBERRY_PI));
pub static RASPBERRY_PI_3B: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "3B", 1024, Some(&RASPBERRY_PI_3));
pub static RASPBERRY_PI_3A_PLUS: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "3A+", 512, Some(&RASPBERRY_PI_3B));
pub static RASPBERRY_PI_3B_PLUS: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "3B+", 1024, Some(&RASPBERRY_PI_3B));

pub static RASPBERRY_PI_4: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "", 0, Some(&RASPBERRY_PI));
pub static RASPBERRY_PI_4B: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "4B", 0, Some(&RASPBERRY_PI_4));
pub static RASPBERRY_PI_4B_1GB: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "4B", 1024, Some(&RASPBERRY_PI_4B));
pub static RASPBERRY_PI_4B_2GB: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "4B", 2048, Some(&RASPBERRY_PI_4B));
pub static RASPBERRY_PI_4B_4GB: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "4B", 4096, Some(&RASPBERRY_PI_4B));
pub static RASPBERRY_PI_4B_8GB: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "4B", 8192, Some(&RASPBERRY_PI_4B));
pub static RASPBERRY_PI_400: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "4 400", 4096, Some(&RASPBERRY_PI_4B));

pub static RASPBERRY_PI_5: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "", 0, Some(&RASPBERRY_PI));
pub static RASPBERRY_PI_5B: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "5B", 0, Some(&RASPBERRY_PI_5));
pub static RASPBERRY_PI_5B_2GB: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "5B", 2048, Some(&RASPBERRY_PI_5B));
pub static RASPBERRY_PI_5B_4GB: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "5B", 4096, Some(&RASPBERRY_PI_5B));
pub static RASPBERRY_PI_5B_8GB: BoardType =
    node("Raspberry Pi", "Raspberry Pi", "5B", 8192, Some(&RASPBERRY_PI_5B));
