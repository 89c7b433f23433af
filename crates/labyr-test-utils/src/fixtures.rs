//! Named mazes shared by unit, integration and benchmark code.

/// 2×2, all open.
pub const OPEN_2X2: &str = "0 0\n0 0\n";

/// 2×2 with the anti-diagonal walled off: start and goal are isolated.
pub const DIAGONAL_WALL_2X2: &str = "0 1\n1 0\n";

/// A single open cell: start and goal coincide.
pub const SINGLE_CELL: &str = "0\n";

/// 3×3 with a wall down the middle column, open only at the bottom.
pub const CENTER_COLUMN_3X3: &str = "0 1 0\n0 1 0\n0 0 0\n";

/// 5×5 serpentine corridor: the only route zig-zags through every row.
pub const SERPENTINE_5X5: &str = "\
0 0 0 0 0
1 1 1 1 0
0 0 0 0 0
0 1 1 1 1
0 0 0 0 0
";

/// Two equally short routes around a single central wall.
pub const TIE_3X3: &str = "0 0 0\n0 1 0\n0 0 0\n";
