// Control catalogue — the fixed ISO/IEC 27001:2022 Annex A reference list.
// Loaded once at startup; every control identifier a caller supplies must
// resolve against it.

pub mod handlers;
pub mod registry;
