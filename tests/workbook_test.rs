//! Workbook integration tests.
//!
//! Each test generates a workbook in memory and reads it back with
//! `calamine` to verify sheet structure, header rows, default statuses
//! and aggregate values.

use calamine::{Data, Range, Reader, Xlsx};
use ddcheck::{
    generate_request, Category, ChecklistBuilder, ChecklistGenerator, DealType, DocumentEntry,
    GenerationRequest, Jurisdiction, Language, Priority, Sector,
};
use std::io::Cursor;

fn generator(deal: DealType, sector: Sector, language: Language) -> ChecklistGenerator {
    ChecklistBuilder::new("TechVida Lda")
        .deal_type(deal)
        .sector(sector)
        .jurisdiction(Jurisdiction::Portugal)
        .language(language)
        .build()
        .expect("valid parameters")
}

fn open(buffer: Vec<u8>) -> Xlsx<Cursor<Vec<u8>>> {
    Xlsx::new(Cursor::new(buffer)).expect("generated workbook should parse")
}

fn cell_string(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected string at ({row}, {col}), got {other:?}"),
    }
}

#[test]
fn workbook_has_the_three_sheets_in_order() {
    let buffer = generator(DealType::ShareDeal, Sector::Technology, Language::En)
        .generate_to_buffer()
        .unwrap();
    let workbook = open(buffer);
    assert_eq!(
        workbook.sheet_names().to_vec(),
        vec!["Checklist", "Summary", "Instructions"]
    );
}

#[test]
fn pt_workbook_localizes_the_sheet_names() {
    let buffer = generator(DealType::Merger, Sector::Retail, Language::Pt)
        .generate_to_buffer()
        .unwrap();
    let workbook = open(buffer);
    assert_eq!(
        workbook.sheet_names().to_vec(),
        vec!["Checklist", "Resumo", "Instruções"]
    );
}

#[test]
fn checklist_sheet_has_header_plus_one_row_per_document() {
    let gen = generator(DealType::ShareDeal, Sector::Technology, Language::En);
    let expected_rows = gen.documents().len() as u32 + 1;

    let mut workbook = open(gen.generate_to_buffer().unwrap());
    let range = workbook.worksheet_range("Checklist").unwrap();
    assert_eq!(range.height() as u32, expected_rows);
    assert_eq!(range.width(), 8);

    // First data row follows the sort: Commercial / High.
    assert_eq!(cell_string(&range, 1, 0), "Commercial");
    assert_eq!(cell_string(&range, 1, 3), "High");
}

#[test]
fn en_header_row_and_default_status() {
    let buffer = generator(DealType::AssetDeal, Sector::Industrial, Language::En)
        .generate_to_buffer()
        .unwrap();
    let mut workbook = open(buffer);
    let range = workbook.worksheet_range("Checklist").unwrap();

    let header: Vec<String> = (0..8).map(|col| cell_string(&range, 0, col)).collect();
    assert_eq!(
        header,
        [
            "Category",
            "Document Name",
            "Required",
            "Priority",
            "Received Date",
            "Status",
            "Responsible",
            "Comments"
        ]
    );

    for row in 1..range.height() as u32 {
        assert_eq!(cell_string(&range, row, 5), "Pending");
    }
}

#[test]
fn pt_retail_merger_header_row_and_default_status() {
    let buffer = generator(DealType::Merger, Sector::Retail, Language::Pt)
        .generate_to_buffer()
        .unwrap();
    let mut workbook = open(buffer);
    let range = workbook.worksheet_range("Checklist").unwrap();

    let header: Vec<String> = (0..8).map(|col| cell_string(&range, 0, col)).collect();
    assert_eq!(
        header,
        [
            "Categoria",
            "Nome do Documento",
            "Obrigatório",
            "Prioridade",
            "Data de Receção",
            "Estado",
            "Responsável",
            "Comentários"
        ]
    );

    for row in 1..range.height() as u32 {
        assert_eq!(cell_string(&range, row, 5), "Pendente");
    }
}

#[test]
fn required_and_priority_columns_use_the_fixed_vocabularies() {
    let buffer = generator(DealType::ShareDeal, Sector::Healthcare, Language::Pt)
        .generate_to_buffer()
        .unwrap();
    let mut workbook = open(buffer);
    let range = workbook.worksheet_range("Checklist").unwrap();

    for row in 1..range.height() as u32 {
        let required = cell_string(&range, row, 2);
        assert!(required == "Yes" || required == "No");
        let priority = cell_string(&range, row, 3);
        assert!(["High", "Medium", "Low"].contains(&priority.as_str()));
    }
}

#[test]
fn summary_sheet_carries_metadata_and_total_count() {
    let gen = generator(DealType::ShareDeal, Sector::Technology, Language::En);
    let total = gen.documents().len() as f64;

    let mut workbook = open(gen.generate_to_buffer().unwrap());
    let range = workbook.worksheet_range("Summary").unwrap();

    assert_eq!(cell_string(&range, 0, 0), "Due Diligence — Summary");
    assert_eq!(cell_string(&range, 2, 0), "Target Company");
    assert_eq!(cell_string(&range, 2, 1), "TechVida Lda");
    assert_eq!(cell_string(&range, 3, 1), "Share Deal");
    assert_eq!(cell_string(&range, 4, 1), "Technology");
    assert_eq!(cell_string(&range, 5, 1), "Portugal");

    match range.get_value((7, 1)) {
        Some(Data::Float(n)) => assert_eq!(*n, total),
        Some(Data::Int(n)) => assert_eq!(*n as f64, total),
        other => panic!("expected total document count, got {other:?}"),
    }

    // The category table starts below the metadata block and omits
    // zero-count rows, so every listed count is positive.
    assert_eq!(cell_string(&range, 10, 0), "Documents by Category");
    assert_eq!(cell_string(&range, 11, 0), "Category");
    assert_eq!(cell_string(&range, 11, 1), "Count");
    let mut row = 12;
    while let Some(Data::String(_)) = range.get_value((row, 0)) {
        match range.get_value((row, 1)) {
            Some(Data::Float(n)) => assert!(*n > 0.0),
            Some(Data::Int(n)) => assert!(*n > 0),
            other => panic!("expected count at row {row}, got {other:?}"),
        }
        row += 1;
        if row > 50 {
            panic!("category table does not terminate");
        }
    }
}

#[test]
fn instructions_sheet_contains_the_static_sections() {
    let buffer = generator(DealType::Merger, Sector::Healthcare, Language::Pt)
        .generate_to_buffer()
        .unwrap();
    let mut workbook = open(buffer);
    let range = workbook.worksheet_range("Instruções").unwrap();

    assert_eq!(cell_string(&range, 0, 0), "Instruções");
    assert_eq!(cell_string(&range, 2, 0), "Como Usar Esta Checklist");
    assert_eq!(cell_string(&range, 10, 0), "Definições de Estado");
    assert_eq!(cell_string(&range, 11, 0), "Estado");
    assert_eq!(cell_string(&range, 11, 1), "Definição");
    assert_eq!(cell_string(&range, 17, 0), "Timeline Indicativo de DD");
    assert_eq!(cell_string(&range, 26, 0), "Contactos dos Assessores");
    // 6 advisor roles under the 5-column header.
    assert_eq!(cell_string(&range, 27, 0), "Função");
    assert_eq!(cell_string(&range, 28, 0), "Assessor Jurídico");
    assert_eq!(cell_string(&range, 33, 0), "Assessor TI / Cyber");
}

#[test]
fn custom_documents_render_after_the_sorted_section() {
    let custom = vec![
        DocumentEntry::new(Category::Tax, "Municipal surtax ruling", false, Priority::Low),
        DocumentEntry::new(Category::Legal, "Side letters", true, Priority::High),
    ];
    let gen = ChecklistBuilder::new("Alpha")
        .deal_type(DealType::AssetDeal)
        .sector(Sector::Retail)
        .jurisdiction(Jurisdiction::Espanha)
        .custom_documents(custom)
        .build()
        .unwrap();

    let mut workbook = open(gen.generate_to_buffer().unwrap());
    let range = workbook.worksheet_range("Checklist").unwrap();
    let last = range.height() as u32 - 1;
    assert_eq!(cell_string(&range, last - 1, 1), "Municipal surtax ruling");
    assert_eq!(cell_string(&range, last, 1), "Side letters");
    assert_eq!(cell_string(&range, last, 0), "Legal");
}

#[test]
fn generate_in_writes_the_conventional_filename() {
    let dir = tempfile::tempdir().unwrap();
    let path = generator(DealType::ShareDeal, Sector::Technology, Language::En)
        .generate_in(dir.path())
        .unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("TechVida_Lda_DD_Checklist_"));
    assert!(name.ends_with(".xlsx"));
    assert!(path.exists());
}

#[test]
fn request_entry_point_generates_a_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let request: GenerationRequest = serde_json::from_str(
        r#"{
            "target": "Farma Saúde SA",
            "deal_type": "Merger",
            "sector": "Healthcare",
            "jurisdiction": "Portugal",
            "language": "PT",
            "custom_documents": [
                {"category": "Compliance", "name": "Registo de lobbying", "required": false, "priority": "Low"}
            ]
        }"#,
    )
    .unwrap();

    let path = generate_request(&request, dir.path()).unwrap();
    assert!(path.exists());
    assert!(path
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("Farma_Saúde_SA_DD_Checklist_"));

    let buffer = std::fs::read(&path).unwrap();
    let mut workbook = open(buffer);
    let range = workbook.worksheet_range("Checklist").unwrap();
    let last = range.height() as u32 - 1;
    assert_eq!(cell_string(&range, last, 1), "Registo de lobbying");
}

#[test]
fn every_valid_pair_renders_without_error() {
    for deal in DealType::ALL {
        for sector in Sector::ALL {
            let buffer = generator(deal, sector, Language::En)
                .generate_to_buffer()
                .unwrap();
            assert!(!buffer.is_empty());
        }
    }
}
