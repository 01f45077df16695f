//! conf-burndown - remediation burndown for config option modules
//!
//! Scans config option modules for `# needs:<phase>` marker comments, asks a
//! Gerrit review service which open changes remove them, and writes a
//! burndown time series (`data.csv`), a JSON snapshot (`data.json`) and a
//! text table (`data.txt`).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, summary)
//! - `config`: Configuration file loading and parsing
//! - `core`: Marker scanning and review attribution
//! - `logging`: Tracing subscriber setup
//! - `output`: Report writers
//! - `review`: Gerrit client and diff scanning

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod output;
pub mod review;
