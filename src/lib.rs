// Lethe - Sensitive Data Recognition & Desensitization Core
// Copyright (c) 2025 Lethe Contributors
// Licensed under the MIT License

//! # Lethe - Sensitive Data Recognition & Desensitization
//!
//! Lethe locates personally-identifiable spans inside extracted document text
//! and rewrites them under configurable, per-category rules, producing a
//! desensitized text while preserving everything else byte-for-byte.
//!
//! ## Overview
//!
//! The crate is built around two public entry points:
//!
//! - [`recognition::RecognitionEngine::identify`] - turns raw text into a
//!   deduplicated list of typed, positioned, confidence-scored spans using an
//!   ensemble of deterministic pattern matchers and an optional probabilistic
//!   entity extractor
//! - [`desensitization::DesensitizationProcessor::process`] - applies
//!   rule-driven Mask / Replace / Delete strategies to those spans with a
//!   document-wide consistency guarantee
//!
//! Document ingestion, export, rule persistence and any request surface are
//! external collaborators: callers hand in plain text, receive spans, and
//! hand text, spans and rules back for transformation.
//!
//! ## Architecture
//!
//! - [`domain`] - core types ([`Span`](domain::Span), [`Rule`](domain::Rule))
//!   and the error taxonomy
//! - [`recognition`] - pattern matcher set, entity extractor, deduplication
//! - [`desensitization`] - strategy set, rule resolution, consistent splicing
//! - [`config`] - configuration management
//! - [`logging`] - structured logging bootstrap for hosts and tests
//!
//! ## Quick Start
//!
//! ```
//! use lethe::desensitization::DesensitizationProcessor;
//! use lethe::domain::Rule;
//! use lethe::recognition::RecognitionEngine;
//!
//! # fn main() -> lethe::domain::Result<()> {
//! let text = "张三的手机号是13812345678";
//!
//! let engine = RecognitionEngine::new()?;
//! let spans = engine.identify(text, false)?;
//!
//! let processor = DesensitizationProcessor::new()?;
//! let clean = processor.process(text, &spans, &Rule::builtin_defaults());
//! assert_eq!(clean, "张三的手机号是138****5678");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Both entry points either return a value or raise one distinguished error:
//! [`domain::LetheError::ExtractorUnavailable`] when probabilistic extraction
//! was requested and its backend failed to initialize. Every other
//! irregularity degrades gracefully - a failed extractor scan falls back to
//! pattern-matcher results, and a category without an applicable rule is left
//! untouched.
//!
//! ## Concurrency
//!
//! Both entry points are synchronous pure functions over their inputs. The
//! entity extractor's backend initializes lazily at most once and is
//! read-only afterwards, so engines and processors can be shared across
//! threads and called for independent documents in parallel.

pub mod config;
pub mod desensitization;
pub mod domain;
pub mod logging;
pub mod recognition;
