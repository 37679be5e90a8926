//! cordova-build-config - build-step utility that assembles a Cordova
//! signing/build configuration (build.json) for a mobile build pipeline.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Env-bound inputs, validation gate, pipeline
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── inputs        # Typed, validated input set
//!     ├── secret        # Masked-by-default secret wrapper
//!     ├── keystore      # file:// resolution / remote keystore download
//!     ├── document      # build.json assembly and redacted projection
//!     └── publish       # Artifact write + envman handoff
//! ```
//!
//! The run is strictly sequential: validation, optional keystore fetch,
//! assembly, redacted display, persistence, handoff. Any failure is
//! terminal; the one designed early exit is the empty "nothing to
//! generate" case.

pub mod cli;
pub mod core;
pub mod error;
