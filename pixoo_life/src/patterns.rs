// patterns.rs - Compiled-in starting patterns
//
// Offsets are (x, y) pairs. A shape is stamped at each of its anchors and
// anything that lands outside the board is clipped.

use crate::grid::GRID_SIZE;

pub type Shape = &'static [(i32, i32)];

pub enum Seed {
    /// Stamp `shape` once per anchor.
    Cells { shape: Shape, anchors: &'static [(i32, i32)] },
    /// Every cell alive independently with this probability.
    Random { density: f64 },
}

pub struct Pattern {
    pub name: &'static str,
    pub about: &'static str,
    pub seed: Seed,
}

pub const GLIDER: Shape = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

pub const BLOCK: Shape = &[(0, 0), (1, 0), (0, 1), (1, 1)];

pub const GOSPER_GUN: Shape = &[
    // Left square
    (1, 5), (2, 5), (1, 6), (2, 6),
    // Left part
    (11, 5), (11, 6), (11, 7), (12, 4), (12, 8), (13, 3), (13, 9),
    (14, 3), (14, 9), (15, 6), (16, 4), (16, 8), (17, 5), (17, 6),
    (17, 7), (18, 6),
    // Middle part
    (21, 3), (21, 4), (21, 5), (22, 3), (22, 4), (22, 5), (23, 2),
    (23, 6), (25, 1), (25, 2), (25, 6), (25, 7),
    // Right square
    (35, 3), (35, 4), (36, 3), (36, 4),
];

pub const PULSAR: Shape = &[
    // Top section
    (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
    (0, 2), (5, 2), (7, 2), (12, 2),
    (0, 3), (5, 3), (7, 3), (12, 3),
    (0, 4), (5, 4), (7, 4), (12, 4),
    (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
    // Bottom section (mirrored across y=6)
    (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
    (0, 8), (5, 8), (7, 8), (12, 8),
    (0, 9), (5, 9), (7, 9), (12, 9),
    (0, 10), (5, 10), (7, 10), (12, 10),
    (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
];

const CENTER: i32 = GRID_SIZE as i32 / 2 - 6;

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "random",
        about: "Random starting state (30% density)",
        seed: Seed::Random { density: 0.3 },
    },
    Pattern {
        name: "random-sparse",
        about: "Random sparse (15% density)",
        seed: Seed::Random { density: 0.15 },
    },
    Pattern {
        name: "random-dense",
        about: "Random dense (50% density)",
        seed: Seed::Random { density: 0.5 },
    },
    Pattern {
        name: "gliders",
        about: "Multiple glider patterns",
        seed: Seed::Cells { shape: GLIDER, anchors: &[(5, 5), (15, 20), (30, 10), (45, 35)] },
    },
    Pattern {
        name: "gosper-gun",
        about: "Gosper glider gun",
        seed: Seed::Cells { shape: GOSPER_GUN, anchors: &[(0, 0)] },
    },
    Pattern {
        name: "pulsar",
        about: "Pulsar oscillator",
        seed: Seed::Cells { shape: PULSAR, anchors: &[(CENTER, CENTER)] },
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name == name)
}
