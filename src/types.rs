//! Selection Types
//!
//! The closed enumerations that parameterize a generation run, plus the
//! assembled row type [`DocumentEntry`].
//!
//! Every enum has one canonical display string per variant (the strings
//! the original checklists use). Parsing from a string, `Display`, and the
//! serde representation all go through those canonical strings, so an
//! invalid value fails identically at the CLI boundary and the JSON
//! boundary. Each enum also exposes a `const ALL` array for menu rendering
//! and exhaustive iteration.

use crate::error::ChecklistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Legal structure of the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DealType {
    /// Purchase of individual assets and liabilities.
    AssetDeal,
    /// Purchase of the target's share capital.
    ShareDeal,
    /// Statutory merger of the two entities.
    Merger,
}

impl DealType {
    /// All deal types, in menu order.
    pub const ALL: [DealType; 3] = [DealType::AssetDeal, DealType::ShareDeal, DealType::Merger];

    /// Canonical display string, e.g. `"Share Deal"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DealType::AssetDeal => "Asset Deal",
            DealType::ShareDeal => "Share Deal",
            DealType::Merger => "Merger",
        }
    }
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealType {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DealType::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| ChecklistError::InvalidDealType(s.to_string()))
    }
}

impl TryFrom<String> for DealType {
    type Error = ChecklistError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DealType> for String {
    fn from(v: DealType) -> String {
        v.as_str().to_string()
    }
}

/// Industry sector of the target company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sector {
    Healthcare,
    Technology,
    Industrial,
    RealEstate,
    FinancialServices,
    Retail,
}

impl Sector {
    /// All sectors, in menu order.
    pub const ALL: [Sector; 6] = [
        Sector::Healthcare,
        Sector::Technology,
        Sector::Industrial,
        Sector::RealEstate,
        Sector::FinancialServices,
        Sector::Retail,
    ];

    /// Canonical display string, e.g. `"Real Estate"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Healthcare => "Healthcare",
            Sector::Technology => "Technology",
            Sector::Industrial => "Industrial",
            Sector::RealEstate => "Real Estate",
            Sector::FinancialServices => "Financial Services",
            Sector::Retail => "Retail",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| ChecklistError::InvalidSector(s.to_string()))
    }
}

impl TryFrom<String> for Sector {
    type Error = ChecklistError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Sector> for String {
    fn from(v: Sector) -> String {
        v.as_str().to_string()
    }
}

/// Jurisdiction governing the transaction.
///
/// The canonical strings are the Portuguese names used by the original
/// checklists (`"Espanha"`, `"Internacional"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Jurisdiction {
    Portugal,
    Espanha,
    Internacional,
}

impl Jurisdiction {
    /// All jurisdictions, in menu order.
    pub const ALL: [Jurisdiction; 3] = [
        Jurisdiction::Portugal,
        Jurisdiction::Espanha,
        Jurisdiction::Internacional,
    ];

    /// Canonical display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Jurisdiction::Portugal => "Portugal",
            Jurisdiction::Espanha => "Espanha",
            Jurisdiction::Internacional => "Internacional",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Jurisdiction::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| ChecklistError::InvalidJurisdiction(s.to_string()))
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = ChecklistError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Jurisdiction> for String {
    fn from(v: Jurisdiction) -> String {
        v.as_str().to_string()
    }
}

/// Output language of the generated workbook.
///
/// Catalogs are stored bilingually; the language is applied at assembly
/// time when the display name is selected, never at storage time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    En,
    Pt,
}

impl Language {
    /// Both languages, in menu order.
    pub const ALL: [Language; 2] = [Language::En, Language::Pt];

    /// Canonical code: `"EN"` or `"PT"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Pt => "PT",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EN" => Ok(Language::En),
            "PT" => Ok(Language::Pt),
            other => Err(ChecklistError::InvalidLanguage(other.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = ChecklistError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Language> for String {
    fn from(v: Language) -> String {
        v.as_str().to_string()
    }
}

/// Functional classification of a document.
///
/// `ALL` preserves the original declaration order, which drives the
/// summary table and the custom-entry menu. The checklist sort instead
/// orders categories lexically by canonical name (Commercial first).
/// Category names are shown in English in both output languages, exactly
/// as the original checklists do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Legal,
    Financial,
    Operational,
    Tax,
    Hr,
    Commercial,
    Ip,
    Compliance,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::Legal,
        Category::Financial,
        Category::Operational,
        Category::Tax,
        Category::Hr,
        Category::Commercial,
        Category::Ip,
        Category::Compliance,
    ];

    /// Canonical display string, e.g. `"HR"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Legal => "Legal",
            Category::Financial => "Financial",
            Category::Operational => "Operational",
            Category::Tax => "Tax",
            Category::Hr => "HR",
            Category::Commercial => "Commercial",
            Category::Ip => "IP",
            Category::Compliance => "Compliance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| ChecklistError::InvalidCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = ChecklistError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Category> for String {
    fn from(v: Category) -> String {
        v.as_str().to_string()
    }
}

/// Urgency ranking of obtaining a document.
///
/// The derived ordering follows declaration order, so
/// `High < Medium < Low` — the rank used by the checklist sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities, High to Low.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Canonical display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Sort rank: High = 0, Medium = 1, Low = 2.
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| ChecklistError::InvalidPriority(s.to_string()))
    }
}

impl TryFrom<String> for Priority {
    type Error = ChecklistError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Priority> for String {
    fn from(v: Priority) -> String {
        v.as_str().to_string()
    }
}

/// One row of an assembled checklist.
///
/// The display name is already language-selected; category, required flag
/// and priority are language-independent. Entries are immutable once
/// assembled and exist only as rows of the generated list/sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Functional classification.
    pub category: Category,
    /// Language-selected display name.
    pub name: String,
    /// Whether the document must be provided.
    pub required: bool,
    /// Urgency of obtaining the document.
    pub priority: Priority,
}

impl DocumentEntry {
    pub fn new(
        category: Category,
        name: impl Into<String>,
        required: bool,
        priority: Priority,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            required,
            priority,
        }
    }

    /// Cell text for the Required column. The original checklists render
    /// this column as `Yes`/`No` in both languages.
    pub fn required_label(&self) -> &'static str {
        if self.required {
            "Yes"
        } else {
            "No"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_type_round_trips_through_canonical_strings() {
        for deal in DealType::ALL {
            assert_eq!(deal.as_str().parse::<DealType>().unwrap(), deal);
        }
        assert!(matches!(
            "Spin-off".parse::<DealType>(),
            Err(ChecklistError::InvalidDealType(v)) if v == "Spin-off"
        ));
    }

    #[test]
    fn sector_round_trips_through_canonical_strings() {
        for sector in Sector::ALL {
            assert_eq!(sector.as_str().parse::<Sector>().unwrap(), sector);
        }
        assert_eq!(Sector::RealEstate.as_str(), "Real Estate");
        assert!("real estate".parse::<Sector>().is_err());
    }

    #[test]
    fn language_accepts_exact_codes_only() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("PT".parse::<Language>().unwrap(), Language::Pt);
        assert!("en".parse::<Language>().is_err());
        assert!("ES".parse::<Language>().is_err());
    }

    #[test]
    fn priority_orders_high_before_medium_before_low() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(Priority::High.rank(), 0);
        assert_eq!(Priority::Low.rank(), 2);
    }

    #[test]
    fn enums_serialize_as_canonical_strings() {
        assert_eq!(
            serde_json::to_string(&DealType::ShareDeal).unwrap(),
            "\"Share Deal\""
        );
        assert_eq!(
            serde_json::from_str::<Sector>("\"Financial Services\"").unwrap(),
            Sector::FinancialServices
        );
        assert!(serde_json::from_str::<Jurisdiction>("\"Spain\"").is_err());
    }

    #[test]
    fn document_entry_deserializes_from_json() {
        let entry: DocumentEntry = serde_json::from_str(
            r#"{"category":"Legal","name":"Side letters","required":true,"priority":"High"}"#,
        )
        .unwrap();
        assert_eq!(entry.category, Category::Legal);
        assert_eq!(entry.required_label(), "Yes");
        assert_eq!(entry.priority, Priority::High);
    }

    #[test]
    fn required_label_is_yes_no() {
        let doc = DocumentEntry::new(Category::Tax, "x", false, Priority::Low);
        assert_eq!(doc.required_label(), "No");
    }
}
