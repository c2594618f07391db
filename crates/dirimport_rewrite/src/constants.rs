//! Extensions of the source files the driver rewrites.
//!
//! Broader than the aggregated extensions: any JS/TS module can contain a
//! directory import, including the legacy `.es`/`.es6` suffixes.

/// File extensions collected from directory inputs
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "js",  // JavaScript
    "jsx", // JavaScript with JSX
    "mjs", // JavaScript module
    "cjs", // JavaScript CommonJS
    "es",  // legacy ES module
    "es6", // legacy ES module
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
    "mts", // TypeScript module
    "cts", // TypeScript CommonJS
];

/// Directories never descended into when collecting inputs
pub const SKIPPED_DIRS: &[&str] = &[".git", "node_modules"];
