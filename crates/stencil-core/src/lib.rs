//! Stencil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Stencil, a
//! tool that scaffolds PHP classes from built-in templates and launches a
//! project's entry point from its manifest.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, LaunchService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, Manifest, Class  │
//! │        Resolver, Entry Invoker)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (NameResolver, TemplateKey, Namespace  │
//! │     Map, ProjectDescriptor, Launch)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stencil_core::application::{ScaffoldRequest, ScaffoldService};
//!
//! let service = ScaffoldService::new(renderer, filesystem, "Application");
//! let request = ScaffoldRequest {
//!     template: Some("controller".into()),
//!     name: Some("user".into()),
//!     directory: None,
//! };
//! let outcome = service.scaffold(&request, &std::env::current_dir()?)?;
//! assert_eq!(outcome.identity.namespace, "Application\\Controllers");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LaunchRequest, LaunchService, ScaffoldOutcome, ScaffoldRequest, ScaffoldService,
        TemplateInfo,
        ports::{ClassResolver, EntryInvoker, Filesystem, ManifestLoader, TemplateRenderer},
    };
    pub use crate::domain::{
        EntryClass, GeneratedFile, LaunchTarget, NameResolver, NamespaceMap, ProjectDescriptor,
        ResolvedIdentity, TemplateKey,
    };
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
