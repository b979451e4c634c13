//! ddcheck - Bilingual due-diligence checklist generator for M&A transactions
//!
//! This crate assembles a document-tracking checklist from constant
//! reference catalogs — core documents, sector-specific documents and
//! deal-type-specific documents — and renders it as a three-sheet Excel
//! workbook (Checklist, Summary, Instructions) in English or Portuguese.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ddcheck::{ChecklistBuilder, DealType, Jurisdiction, Language, Sector};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ddcheck::ChecklistError> {
//!     let path = ChecklistBuilder::new("TechVida Lda")
//!         .deal_type(DealType::ShareDeal)
//!         .sector(Sector::Technology)
//!         .jurisdiction(Jurisdiction::Portugal)
//!         .language(Language::En)
//!         .build()?
//!         .generate_in(Path::new("."))?;
//!
//!     println!("generated {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! # Non-interactive requests
//!
//! A generation run can also be described as JSON and executed with
//! [`generate_request`]:
//!
//! ```rust,no_run
//! use ddcheck::{generate_request, GenerationRequest};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request: GenerationRequest = serde_json::from_str(
//!     r#"{
//!         "target": "Farma Saúde SA",
//!         "deal_type": "Merger",
//!         "sector": "Healthcare",
//!         "jurisdiction": "Portugal",
//!         "language": "PT"
//!     }"#,
//! )?;
//! let path = generate_request(&request, Path::new("."))?;
//! # Ok(())
//! # }
//! ```
//!
//! Invalid parameter strings (an unknown deal type, sector, jurisdiction
//! or language) fail before any file is written; generation is
//! all-or-nothing.

mod assembler;
mod builder;
mod catalog;
mod error;
mod labels;
mod naming;
mod sheet;
mod style;
mod types;

pub use assembler::{assemble, count_by_category, count_by_priority};
pub use builder::{generate_request, ChecklistBuilder, ChecklistGenerator, GenerationRequest};
pub use error::ChecklistError;
pub use labels::Labels;
pub use naming::output_filename;
pub use types::{Category, DealType, DocumentEntry, Jurisdiction, Language, Priority, Sector};
