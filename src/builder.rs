//! Builder Module
//!
//! Fluent builder for a generation run. All selection parameters are
//! validated in [`ChecklistBuilder::build`], before any file is touched;
//! the resulting [`ChecklistGenerator`] owns the assembled list and can
//! render it to a buffer or to a file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ddcheck::{ChecklistBuilder, DealType, Jurisdiction, Language, Sector};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), ddcheck::ChecklistError> {
//! let path = ChecklistBuilder::new("TechVida Lda")
//!     .deal_type(DealType::ShareDeal)
//!     .sector(Sector::Technology)
//!     .jurisdiction(Jurisdiction::Portugal)
//!     .language(Language::En)
//!     .build()?
//!     .generate_in(Path::new("."))?;
//! println!("generated {}", path.display());
//! # Ok(())
//! # }
//! ```

use crate::assembler::assemble;
use crate::error::ChecklistError;
use crate::naming::output_filename;
use crate::sheet::{build_workbook, RenderContext};
use crate::types::{DealType, DocumentEntry, Jurisdiction, Language, Sector};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Builder for a single checklist generation.
///
/// `target` is mandatory at construction; deal type, sector and
/// jurisdiction must be set before `build()`. The language defaults to
/// English. Custom documents are appended verbatim after the assembled
/// (sorted) list — original relative order, no re-sort, no validation
/// against catalog entries.
#[derive(Debug, Clone)]
pub struct ChecklistBuilder {
    target: String,
    deal_type: Option<DealType>,
    sector: Option<Sector>,
    jurisdiction: Option<Jurisdiction>,
    language: Language,
    custom_documents: Vec<DocumentEntry>,
}

impl ChecklistBuilder {
    /// Starts a builder for `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            deal_type: None,
            sector: None,
            jurisdiction: None,
            language: Language::En,
            custom_documents: Vec::new(),
        }
    }

    pub fn deal_type(mut self, deal_type: DealType) -> Self {
        self.deal_type = Some(deal_type);
        self
    }

    pub fn sector(mut self, sector: Sector) -> Self {
        self.sector = Some(sector);
        self
    }

    pub fn jurisdiction(mut self, jurisdiction: Jurisdiction) -> Self {
        self.jurisdiction = Some(jurisdiction);
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Appends ad hoc documents after the assembled list.
    pub fn custom_documents(mut self, documents: Vec<DocumentEntry>) -> Self {
        self.custom_documents.extend(documents);
        self
    }

    /// Validates the parameters and assembles the document list.
    ///
    /// # Errors
    ///
    /// [`ChecklistError::EmptyTarget`] if the target trims to nothing;
    /// [`ChecklistError::MissingParameter`] if deal type, sector or
    /// jurisdiction was never supplied.
    pub fn build(self) -> Result<ChecklistGenerator, ChecklistError> {
        let target = self.target.trim().to_string();
        if target.is_empty() {
            return Err(ChecklistError::EmptyTarget);
        }
        let deal_type = self
            .deal_type
            .ok_or(ChecklistError::MissingParameter("deal type"))?;
        let sector = self.sector.ok_or(ChecklistError::MissingParameter("sector"))?;
        let jurisdiction = self
            .jurisdiction
            .ok_or(ChecklistError::MissingParameter("jurisdiction"))?;

        let mut documents = assemble(deal_type, sector, self.language);
        documents.extend(self.custom_documents);

        Ok(ChecklistGenerator {
            target,
            deal_type,
            sector,
            jurisdiction,
            language: self.language,
            documents,
        })
    }
}

/// A validated, assembled generation run.
#[derive(Debug, Clone)]
pub struct ChecklistGenerator {
    target: String,
    deal_type: DealType,
    sector: Sector,
    jurisdiction: Jurisdiction,
    language: Language,
    documents: Vec<DocumentEntry>,
}

impl ChecklistGenerator {
    /// The final ordered list backing every sheet: the sorted assembled
    /// entries followed by any custom entries in input order.
    pub fn documents(&self) -> &[DocumentEntry] {
        &self.documents
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Renders the workbook into memory. Used by tests and callers that
    /// want to handle the bytes themselves.
    pub fn generate_to_buffer(&self) -> Result<Vec<u8>, ChecklistError> {
        let mut workbook = build_workbook(&self.context(Local::now()))?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Renders the workbook and writes it into `dir`, returning the full
    /// output path. The filename is derived from the target name and the
    /// current date; a same-day re-run for the same target overwrites the
    /// previous file.
    pub fn generate_in(&self, dir: &Path) -> Result<PathBuf, ChecklistError> {
        let now = Local::now();
        let mut workbook = build_workbook(&self.context(now))?;
        let path = dir.join(output_filename(&self.target, now.date_naive()));
        workbook.save(&path)?;
        Ok(path)
    }

    fn context(&self, generated_at: DateTime<Local>) -> RenderContext<'_> {
        RenderContext {
            target: &self.target,
            deal_type: self.deal_type,
            sector: self.sector,
            jurisdiction: self.jurisdiction,
            language: self.language,
            documents: &self.documents,
            generated_at,
        }
    }
}

/// One non-interactive generation request, deserializable from JSON with
/// the canonical enum strings (`"Share Deal"`, `"Financial Services"`,
/// `"PT"`, ...). Unknown values fail at deserialization, before any file
/// is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub target: String,
    pub deal_type: DealType,
    pub sector: Sector,
    pub jurisdiction: Jurisdiction,
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default)]
    pub custom_documents: Vec<DocumentEntry>,
}

fn default_language() -> Language {
    Language::En
}

/// Runs `request` and writes the workbook into `dir`.
pub fn generate_request(
    request: &GenerationRequest,
    dir: &Path,
) -> Result<PathBuf, ChecklistError> {
    ChecklistBuilder::new(&request.target)
        .deal_type(request.deal_type)
        .sector(request.sector)
        .jurisdiction(request.jurisdiction)
        .language(request.language)
        .custom_documents(request.custom_documents.clone())
        .build()?
        .generate_in(dir)
}
