//! Integration tests for layout and price calculation.
//!
//! Covers the worked storefront scenarios end to end and checks the
//! arithmetic properties over a spread of inputs.

use label_calc::report::render_text;
use label_calc::{
    calculate, compute_layout, compute_quote, evaluate, quote_with_advice, CalcError,
    CalculationRequest, Dimensions, DiscountSchedule, ErrorKind, FormInput, FormOutcome,
    PriceTier, PricingBasis, PricingMode, PrintType, RateCard, SubstrateSheet,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;

fn roll() -> SubstrateSheet {
    SubstrateSheet::new(570.0, 1000.0, 0.0)
}

fn per_sheet(price: Decimal) -> PricingMode {
    PricingMode::PerSheet { unit_price: price }
}

fn ten_sheets_thirty_percent() -> DiscountSchedule {
    DiscountSchedule::single(PriceTier::new(10, dec!(0.3))).expect("Should succeed")
}

// ==================== Worked scenarios ====================

#[test]
fn test_scenario_roll_layout() {
    let packing = compute_layout(Dimensions::new(40.0, 40.0), 2.0, roll()).expect("Should succeed");
    assert_eq!(packing.per_row, 13);
    assert_eq!(packing.per_column, 23);
    assert_eq!(packing.per_sheet, 299);
}

#[test]
fn test_scenario_sheet_count_and_efficiency() {
    let quote = compute_quote(1000, 299, per_sheet(dec!(20)), &ten_sheets_thirty_percent())
        .expect("Should succeed");
    assert_eq!(quote.sheets_required, 4);
    assert_eq!(quote.produced_labels, 1196);
    assert!((quote.efficiency_percent - 83.6).abs() < 0.05);
}

#[test]
fn test_scenario_below_discount_threshold() {
    let quote = compute_quote(1000, 299, per_sheet(dec!(20)), &ten_sheets_thirty_percent())
        .expect("Should succeed");
    assert_eq!(quote.subtotal, dec!(80));
    assert_eq!(quote.discount, dec!(0));
    assert_eq!(quote.total, dec!(80));
}

#[test]
fn test_scenario_above_discount_threshold() {
    let quote = compute_quote(3000, 299, per_sheet(dec!(20)), &ten_sheets_thirty_percent())
        .expect("Should succeed");
    assert_eq!(quote.sheets_required, 11);
    assert_eq!(quote.subtotal, dec!(220));
    assert_eq!(quote.discount, dec!(66));
    assert_eq!(quote.total, dec!(154));
}

#[test]
fn test_scenario_label_wider_than_sheet() {
    let label = Dimensions::new(600.0, 40.0);
    let packing = compute_layout(label, 0.0, roll()).expect("Should succeed");
    assert_eq!(packing.per_row, 0);

    let request = CalculationRequest::new(label, 100, per_sheet(dec!(20))).with_spacing(0.0);
    let err = calculate(&request).unwrap_err();
    assert!(matches!(err, CalcError::LayoutImpossible { .. }));
    assert_eq!(err.kind(), ErrorKind::Impossible);
}

#[test]
fn test_scenario_zero_quantity() {
    let err = compute_quote(0, 299, per_sheet(dec!(20)), &DiscountSchedule::none()).unwrap_err();
    assert!(matches!(err, CalcError::InvalidQuantity { .. }));
    assert_eq!(err.kind(), ErrorKind::Invalid);
}

#[test]
fn test_scenario_counts_beyond_range() {
    let tiny = Dimensions::new(1e-9, 1e-9);
    let request = CalculationRequest::new(tiny, 100, per_sheet(dec!(20))).with_spacing(0.0);
    let err = calculate(&request).unwrap_err();
    assert!(matches!(err, CalcError::InvalidDimension { field: "label size", .. }));
    assert_eq!(err.kind(), ErrorKind::Invalid);

    let label = Dimensions::new(40.0, 40.0);
    let request = CalculationRequest::new(label, u64::MAX, per_sheet(dec!(20)));
    let err = calculate(&request).unwrap_err();
    assert!(matches!(err, CalcError::InvalidQuantity { quantity: u64::MAX }));
}

// ==================== Properties ====================

#[test]
fn test_packing_monotonic_and_exact() {
    let spacings = [0.0, 1.0, 2.0, 5.0];
    let sheet = SubstrateSheet::new(570.0, 1000.0, 5.0);

    for spacing in spacings {
        let mut previous = compute_layout(Dimensions::new(1.0, 1.0), spacing, sheet)
            .expect("Should succeed");
        for step in 2..300 {
            let size = step as f64 * 1.7;
            for label in [Dimensions::new(size, 1.0), Dimensions::new(1.0, size)] {
                let packing = compute_layout(label, spacing, sheet).expect("Should succeed");
                assert_eq!(packing.per_sheet, packing.per_row * packing.per_column);
            }
            let square = compute_layout(Dimensions::new(size, size), spacing, sheet)
                .expect("Should succeed");
            assert!(square.per_row <= previous.per_row);
            assert!(square.per_column <= previous.per_column);
            assert!(square.per_sheet <= previous.per_sheet);
            previous = square;
        }
    }
}

#[test]
fn test_sheet_count_sufficient_and_minimal() {
    for per_sheet_yield in [1u64, 7, 24, 299, 1000] {
        for quantity in [1u64, 2, 23, 24, 25, 298, 299, 300, 999, 1000, 1001, 12345] {
            let quote = compute_quote(
                quantity,
                per_sheet_yield,
                per_sheet(dec!(20)),
                &DiscountSchedule::none(),
            )
            .expect("Should succeed");
            assert!(quote.sheets_required * per_sheet_yield >= quantity);
            if quote.sheets_required > 1 {
                assert!((quote.sheets_required - 1) * per_sheet_yield < quantity);
            }
            assert!(quote.efficiency_percent > 0.0);
            assert!(quote.efficiency_percent <= 100.0);
        }
    }
}

#[test]
fn test_discount_threshold_boundary() {
    let threshold = 250;
    let rate = dec!(0.15);
    let schedule = DiscountSchedule::single(PriceTier::new(threshold, rate)).expect("Should succeed");
    let mode = PricingMode::PerUnit {
        unit_price: dec!(2.5),
    };

    let below = compute_quote(threshold - 1, 299, mode, &schedule).expect("Should succeed");
    assert_eq!(below.discount, Decimal::ZERO);

    let at = compute_quote(threshold, 299, mode, &schedule).expect("Should succeed");
    assert_eq!(at.discount, at.subtotal * rate);
    assert_eq!(at.total, at.subtotal - at.discount);
}

#[test]
fn test_sheet_discount_threshold_boundary() {
    // 40 x 40 mm on the roll gives 299 per sheet; 9 sheets hold 2691
    let label = Dimensions::new(40.0, 40.0);
    let quote_for = |quantity| {
        let request = CalculationRequest::new(label, quantity, per_sheet(dec!(20)))
            .with_discounts(ten_sheets_thirty_percent());
        calculate(&request).expect("Should succeed").quote
    };

    let below = quote_for(2691);
    assert_eq!(below.sheets_required, 9);
    assert_eq!(below.discount, Decimal::ZERO);
    assert_eq!(below.total, dec!(180));

    let at = quote_for(2692);
    assert_eq!(at.sheets_required, 10);
    assert_eq!(at.discount, at.subtotal * dec!(0.3));
    assert_eq!(at.total, dec!(140));
}

#[test]
fn test_total_consistency() {
    let schedule = DiscountSchedule::new(vec![
        PriceTier::new(50, dec!(0.10)),
        PriceTier::new(100, dec!(0.15)),
    ])
    .expect("Should succeed");

    for quantity in [1u64, 49, 50, 99, 100, 101, 777] {
        for mode in [
            PricingMode::PerUnit {
                unit_price: dec!(2.5),
            },
            PricingMode::PerSheet {
                unit_price: dec!(19.99),
            },
        ] {
            let quote = compute_quote(quantity, 24, mode, &schedule).expect("Should succeed");
            assert_eq!(quote.total, quote.subtotal - quote.discount);
        }
    }
}

// ==================== Rate card ====================

#[test]
fn test_rate_card_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
    write!(
        file,
        r#"
currency = "€"

[per_sheet]
normal = 12
metallic = 30
discounts = [{{ threshold_quantity = 5, discount_rate = 0.25 }}]

[per_unit]
normal = 0.5
metallic = 1.0
"#
    )
    .expect("Should write");

    let card = RateCard::load(file.path()).expect("Should load");
    let request = CalculationRequest::from_rate_card(
        Dimensions::new(40.0, 40.0),
        1500,
        PrintType::Metallic,
        PricingBasis::PerSheet,
        &card,
    )
    .expect("Should succeed");
    let calc = calculate(&request).expect("Should succeed");

    assert_eq!(calc.quote.sheets_required, 6);
    assert_eq!(calc.quote.subtotal, dec!(180));
    assert_eq!(calc.quote.discount, dec!(45));
    assert_eq!(calc.quote.total, dec!(135));
}

#[test]
fn test_example_rate_card_matches_defaults() {
    let path = std::path::Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/rates.example.toml"));
    let card = RateCard::load(path).expect("Should load");
    assert_eq!(card, RateCard::default());
}

#[test]
fn test_rate_card_missing_file() {
    let err = RateCard::load(std::path::Path::new("/nonexistent/rates.toml")).unwrap_err();
    assert!(matches!(err, CalcError::Io(_)));
    assert_eq!(err.kind(), ErrorKind::Config);
}

// ==================== Form ====================

#[test]
fn test_form_distinguishes_incomplete_from_impossible() {
    let card = RateCard::default();

    let incomplete = evaluate(
        &FormInput {
            width: "40".into(),
            ..Default::default()
        },
        &card,
    );
    assert!(matches!(incomplete, FormOutcome::Incomplete { .. }));
    assert_eq!(incomplete.error_kind(), None);

    let impossible = evaluate(
        &FormInput {
            width: "600".into(),
            height: "40".into(),
            quantity: "10".into(),
            spacing: "0".into(),
            ..Default::default()
        },
        &card,
    );
    assert_eq!(impossible.error_kind(), Some(ErrorKind::Impossible));
}

#[test]
fn test_form_per_unit_order_pricing() {
    let outcome = evaluate(
        &FormInput {
            width: "50".into(),
            height: "50".into(),
            quantity: "100".into(),
            print_type: PrintType::Metallic,
            basis: PricingBasis::PerUnit,
            ..Default::default()
        },
        &RateCard::default(),
    );
    let calc = outcome.calculation().expect("Should be ready");
    assert_eq!(calc.quote.subtotal, dec!(500));
    assert_eq!(calc.quote.discount, dec!(75));
    assert_eq!(calc.quote.total, dec!(425));
}

// ==================== Report ====================

#[test]
fn test_text_report() {
    let request = CalculationRequest::from_rate_card(
        Dimensions::new(40.0, 40.0),
        1000,
        PrintType::Normal,
        PricingBasis::PerSheet,
        &RateCard::default(),
    )
    .expect("Should succeed");
    let (calc, advice) = quote_with_advice(&request).expect("Should succeed");

    insta::assert_snapshot!(render_text(&calc, &advice, "₺"), @r"
    Label:       40 x 40 mm (spacing 2 mm)
    Sheet:       570 x 1000 mm (margin 0 mm)
    Layout:      13 per row x 23 per column = 299 per sheet
    Required:    1000 labels
    Sheets:      4 (1196 labels produced)
    Efficiency:  83.6% (waste 16.4%)
    Print type:  normal
    Unit price:  ₺20.00 per sheet
    Subtotal:    ₺80.00
    Discount:    ₺0.00
    Total:       ₺80.00
    ! High waste (16.4%): 196 of 1196 produced labels are surplus; a small change to the label size may reduce it
    - 6 more sheet(s) unlock 30% off
    ");
}

#[test]
fn test_json_report_fields() {
    let request = CalculationRequest::new(Dimensions::new(40.0, 40.0), 3000, per_sheet(dec!(20)))
        .with_discounts(ten_sheets_thirty_percent());
    let (calc, advice) = quote_with_advice(&request).expect("Should succeed");

    let json = label_calc::report::render_json(&calc, &advice, "₺").expect("Should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Should parse");

    assert_eq!(value["currency"], "₺");
    assert_eq!(value["packing"]["per_sheet"], 299);
    assert_eq!(value["quote"]["sheets_required"], 11);
    assert_eq!(value["quote"]["mode"]["basis"], "per_sheet");
    let total: Decimal = value["quote"]["total"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("Total should be a decimal string");
    assert_eq!(total, dec!(154));
}
