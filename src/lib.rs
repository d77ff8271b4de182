//! Diceutils: shared building blocks for tabletop dice-bot plugins.
//!
//! The crate covers the parts every plugin needs before it can do anything
//! interesting: turning a chat command into typed parameters, turning a
//! session log into a readable transcript, and persisting cards and status
//! behind a narrow store contract.
//!
//! # Architecture
//!
//! Each subsystem follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and rules with no infrastructure dependencies
//! - **Ports**: Trait seams for rendering and persistence
//! - **Adapters**: Concrete implementations of ports (HTML, in-memory)
//! - **Services**: Orchestration over domain types and ports
//!
//! # Modules
//!
//! - [`command`]: Parameter schemas, binding, and chat input normalisation
//! - [`transcript`]: Message labeling, filtering, and HTML export
//! - [`storage`]: Key-value store contract, registry, and read cache

pub mod command;
pub mod storage;
pub mod transcript;
