pub mod nvidia;
pub mod raspberrypi;

/// One node in a vendor's board generalization tree.
///
/// Exact identity is the `(manufacturer, model, sub_model, ram_mb)` tuple;
/// `base` points at the next more generic node in the same static catalog.
/// Generic nodes carry `ram_mb = 0`. The whole catalog lives in `static`
/// items, so parent links are plain `'static` borrows and the forest is
/// immutable for the life of the process.
#[derive(Debug)]
pub struct BoardType {
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub sub_model: &'static str,
    pub ram_mb: u32,
    pub base: Option<&'static BoardType>,
}

pub(crate) const fn node(
    manufacturer: &'static str,
    model: &'static str,
    sub_model: &'static str,
    ram_mb: u32,
    base: Option<&'static BoardType>,
) -> BoardType {
    BoardType {
        manufacturer,
        model,
        sub_model,
        ram_mb,
        base,
    }
}

impl BoardType {
    /// Exact 4-tuple equality. The parent link is not part of identity.
    pub fn same_model(&self, other: &BoardType) -> bool {
        self.manufacturer == other.manufacturer
            && self.model == other.model
            && self.sub_model == other.sub_model
            && self.ram_mb == other.ram_mb
    }

    /// Is `self` the same as, or a specialization of, `want`?
    ///
    /// Walks `self`'s own ancestor chain and compares each node's 4-tuple
    /// against `want`; first match wins. Iterative: catalog depth is small
    /// and bounded, and this sidesteps any recursion-depth concern.
    pub fn is_board_type(&self, want: &BoardType) -> bool {
        let mut current = Some(self);
        while let Some(board) = current {
            if board.same_model(want) {
                return true;
            }
            current = board.base;
        }
        false
    }

    /// Human-readable name: non-empty name parts joined by spaces, with a
    /// RAM suffix only when the node pins a RAM size. Sizes below 1 GiB
    /// render as `<n>MB`, otherwise `<n/1024>GB` (integer division).
    pub fn pretty_name(&self) -> String {
        let mut name = String::new();
        for part in [self.manufacturer, self.model, self.sub_model] {
            if part.is_empty() {
                continue;
            }
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(part);
        }
        if self.ram_mb > 0 {
            if !name.is_empty() {
                name.push(' ');
            }
            if self.ram_mb < 1024 {
                name.push_str(&format!("{}MB", self.ram_mb));
            } else {
                name.push_str(&format!("{}GB", self.ram_mb / 1024));
            }
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::nvidia::*;
    use super::raspberrypi::*;

    #[test]
    fn test_reflexive() {
        for board in [
            &NVIDIA,
            &JETSON,
            &JETSON_AGX_ORIN_64GB,
            &RASPBERRY_PI,
            &RASPBERRY_PI_4B_2GB,
        ] {
            assert!(board.is_board_type(board), "{}", board.pretty_name());
        }
    }

    #[test]
    fn test_ancestor_chain() {
        // Direct parent, and transitively up to the root.
        assert!(JETSON_ORIN_NX_16GB.is_board_type(&JETSON_ORIN_NX));
        assert!(JETSON_ORIN_NX_16GB.is_board_type(&JETSON_ORIN));
        assert!(JETSON_ORIN_NX_16GB.is_board_type(&JETSON));
        assert!(JETSON_ORIN_NX_16GB.is_board_type(&NVIDIA));
    }

    #[test]
    fn test_asymmetric() {
        assert!(JETSON_AGX_ORIN_64GB.is_board_type(&JETSON_AGX_ORIN));
        assert!(!JETSON_AGX_ORIN.is_board_type(&JETSON_AGX_ORIN_64GB));
        assert!(JETSON_AGX_ORIN_64GB.is_board_type(&NVIDIA));
        assert!(!NVIDIA.is_board_type(&JETSON_AGX_ORIN_64GB));
    }

    #[test]
    fn test_unrelated_branches() {
        assert!(!JETSON_ORIN_NANO.is_board_type(&JETSON_AGX_ORIN));
        assert!(JETSON_ORIN_NANO_8GB.is_board_type(&JETSON_ORIN_NANO));
        assert!(!JETSON_ORIN_NANO_8GB.is_board_type(&JETSON_XAVIER));
    }

    #[test]
    fn test_raspberry_pi_hierarchy() {
        assert!(RASPBERRY_PI_4B_8GB.is_board_type(&RASPBERRY_PI));
        assert!(RASPBERRY_PI_5B_8GB.is_board_type(&RASPBERRY_PI));
        assert!(RASPBERRY_PI_4B_8GB.is_board_type(&RASPBERRY_PI_4B));
        assert!(!RASPBERRY_PI_4B.is_board_type(&RASPBERRY_PI_4B_8GB));
        assert!(!RASPBERRY_PI_4B_4GB.is_board_type(&RASPBERRY_PI_4B_8GB));
        assert!(RASPBERRY_PI_3B_PLUS.is_board_type(&RASPBERRY_PI_3B));
        assert!(!RASPBERRY_PI_3B.is_board_type(&RASPBERRY_PI_3B_PLUS));
        assert!(RASPBERRY_PI_5B_4GB.is_board_type(&RASPBERRY_PI_5B));
        assert!(!RASPBERRY_PI_5B.is_board_type(&RASPBERRY_PI_5B_4GB));
        assert!(!RASPBERRY_PI_4B.is_board_type(&RASPBERRY_PI_3B));
    }

    #[test]
    fn test_pretty_name() {
        assert_eq!(NVIDIA.pretty_name(), "NVIDIA");
        assert_eq!(JETSON.pretty_name(), "NVIDIA Jetson");
        assert_eq!(
            JETSON_ORIN_NANO_8GB.pretty_name(),
            "NVIDIA Jetson Orin Nano 8GB"
        );
        assert_eq!(
            JETSON_AGX_XAVIER_16GB.pretty_name(),
            "NVIDIA Jetson AGX Xavier 16GB"
        );
        // Below 1 GiB renders in megabytes.
        assert_eq!(
            RASPBERRY_PI_3A_PLUS.pretty_name(),
            "Raspberry Pi Raspberry Pi 3A+ 512MB"
        );
        // Generic node: no RAM suffix.
        assert_eq!(RASPBERRY_PI_4B.pretty_name(), "Raspberry Pi Raspberry Pi 4B");
    }
}
