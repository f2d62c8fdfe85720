//! # jar-sniffer
//!
//! Find hard-coded secrets in compiled JARs by orchestrating the Vineflower
//! Java decompiler and the Trufflehog secret scanner.
//!
//! ## Architecture
//!
//! - **cli**: Command-line argument surface
//! - **config**: One-shot dependency resolution (flags > env > lib directory)
//! - **locate**: Dependency discovery inside the lib directory
//! - **process**: Shared process-spawning helpers
//! - **probe**: JAR pre-flight inspection
//! - **vineflower**: Vineflower decompiler invocation
//! - **trufflehog**: Trufflehog scanner invocation
//! - **sniffer**: Decompile-then-scan orchestration and result delivery

pub mod cli;
pub mod config;
pub mod locate;
pub mod probe;
pub mod process;
pub mod sniffer;
pub mod trufflehog;
pub mod vineflower;
