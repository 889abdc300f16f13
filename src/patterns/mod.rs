// Pattern modules: each one holds the role traits, the concrete variants and
// the demo that wires them together.

pub mod behavioral;
pub mod creational;
pub mod structural;
