//! Assembly properties over the full selection domain.
//!
//! The domain is finite (3 deal types × 6 sectors × 2 languages), so the
//! properties are checked exhaustively rather than sampled.

use ddcheck::{
    assemble, count_by_category, count_by_priority, Category, DealType, Language, Priority, Sector,
};

const CORE_COUNT: usize = 28;

fn sector_count(sector: Sector) -> usize {
    match sector {
        Sector::Healthcare => 8,
        Sector::Technology => 10,
        Sector::Industrial => 8,
        Sector::RealEstate => 9,
        Sector::FinancialServices => 9,
        Sector::Retail => 8,
    }
}

fn deal_count(deal_type: DealType) -> usize {
    match deal_type {
        DealType::AssetDeal => 6,
        DealType::ShareDeal => 8,
        DealType::Merger => 8,
    }
}

#[test]
fn assembled_length_is_core_plus_sector_plus_deal_for_every_pair() {
    for deal in DealType::ALL {
        for sector in Sector::ALL {
            for language in Language::ALL {
                let docs = assemble(deal, sector, language);
                assert_eq!(
                    docs.len(),
                    CORE_COUNT + sector_count(sector) + deal_count(deal),
                    "length mismatch for {deal} / {sector} / {language}"
                );
            }
        }
    }
}

#[test]
fn category_blocks_are_lexically_ordered() {
    for deal in DealType::ALL {
        for sector in Sector::ALL {
            let docs = assemble(deal, sector, Language::En);
            for pair in docs.windows(2) {
                assert!(
                    pair[0].category.as_str() <= pair[1].category.as_str(),
                    "category order broken between '{}' and '{}'",
                    pair[0].name,
                    pair[1].name
                );
            }
        }
    }
}

#[test]
fn priority_never_decreases_within_a_category() {
    for deal in DealType::ALL {
        for sector in Sector::ALL {
            for language in Language::ALL {
                let docs = assemble(deal, sector, language);
                for pair in docs.windows(2) {
                    if pair[0].category == pair[1].category {
                        assert!(pair[0].priority <= pair[1].priority);
                    }
                }
            }
        }
    }
}

#[test]
fn language_switch_is_structure_preserving_for_every_pair() {
    for deal in DealType::ALL {
        for sector in Sector::ALL {
            let en = assemble(deal, sector, Language::En);
            let pt = assemble(deal, sector, Language::Pt);
            assert_eq!(en.len(), pt.len());
            for (a, b) in en.iter().zip(&pt) {
                assert_eq!(a.category, b.category);
                assert_eq!(a.required, b.required);
                assert_eq!(a.priority, b.priority);
            }
        }
    }
}

#[test]
fn share_deal_technology_en_scenario() {
    let docs = assemble(DealType::ShareDeal, Sector::Technology, Language::En);
    assert_eq!(docs.len(), 46);
    assert_eq!(docs[0].category, Category::Commercial);
    assert_eq!(docs[0].priority, Priority::High);
}

#[test]
fn aggregate_counts_partition_the_list() {
    for deal in DealType::ALL {
        for sector in Sector::ALL {
            let docs = assemble(deal, sector, Language::Pt);
            let category_total: usize = count_by_category(&docs).iter().map(|(_, n)| n).sum();
            let priority_total: usize = count_by_priority(&docs).iter().map(|(_, n)| n).sum();
            assert_eq!(category_total, docs.len());
            assert_eq!(priority_total, docs.len());
        }
    }
}
