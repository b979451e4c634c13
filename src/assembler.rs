//! List Assembler
//!
//! Pure functions that turn the constant catalogs into the ordered
//! document list backing every rendered view, plus the aggregate counts
//! used by the summary sheet.

use crate::catalog::{deal_documents, sector_documents, CORE_DOCUMENTS};
use crate::types::{Category, DealType, DocumentEntry, Language, Priority, Sector};

/// Assembles the ordered checklist for a (deal type, sector, language)
/// triple.
///
/// Concatenates core, sector and deal-type entries in that order, selects
/// the language's display name, then stable-sorts by category name
/// (lexically ascending) and priority rank (High before Medium before
/// Low). Ties keep the catalog order: core, then sector, then deal-type.
///
/// No de-duplication is applied; the catalogs are curated to avoid
/// overlap.
pub fn assemble(deal_type: DealType, sector: Sector, language: Language) -> Vec<DocumentEntry> {
    let mut docs: Vec<DocumentEntry> = CORE_DOCUMENTS
        .iter()
        .chain(sector_documents(sector))
        .chain(deal_documents(deal_type))
        .map(|d| DocumentEntry::new(d.category, d.name(language), d.required, d.priority))
        .collect();

    // Vec::sort_by_key is stable, which the tie-break rule relies on.
    docs.sort_by_key(|d| (d.category.as_str(), d.priority));
    docs
}

/// Document counts per category, in catalog declaration order.
/// Zero-count categories are omitted.
pub fn count_by_category(docs: &[DocumentEntry]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&cat| (cat, docs.iter().filter(|d| d.category == cat).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

/// Document counts per priority, High to Low. Zero-count priorities are
/// omitted.
pub fn count_by_priority(docs: &[DocumentEntry]) -> Vec<(Priority, usize)> {
    Priority::ALL
        .iter()
        .map(|&prio| (prio, docs.iter().filter(|d| d.priority == prio).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}
