//! Context Tests - production attribution and root-input resolution
//!
//! The invariant under test: the statically-typed and type-erased context
//! forms must report identical production names, and a context bound to a
//! nested sub-parse must resolve its input to the true root.

use rstest::rstest;

use faultline::{
    ErrorContext, Production, ProductionContext, ProductionInfo, StrInput, SubInput, TextSize,
};

struct Expr;
impl Production for Expr {
    const NAME: &'static str = "expr";
}

struct Digit;
impl Production for Digit {
    const NAME: &'static str = "digit";
}

struct StringLiteral;
impl Production for StringLiteral {
    const NAME: &'static str = "string_literal";
}

// ============================================================================
// Static vs. erased production names
// ============================================================================

#[rstest]
#[case::expr(ProductionContext::<Expr, StrInput>::production(), ProductionInfo::of::<Expr>())]
#[case::digit(ProductionContext::<Digit, StrInput>::production(), ProductionInfo::of::<Digit>())]
#[case::string_literal(
    ProductionContext::<StringLiteral, StrInput>::production(),
    ProductionInfo::of::<StringLiteral>()
)]
fn test_static_and_dynamic_production_names_agree(
    #[case] static_name: &'static str,
    #[case] info: ProductionInfo,
) {
    let input = StrInput::new("12 + ab");
    let erased = ErrorContext::new(info, &input, TextSize::new(5));
    assert_eq!(erased.production(), static_name);
    assert_eq!(info.name(), static_name);
}

#[test]
fn test_typed_context_erases_to_the_same_name() {
    let input = StrInput::new("42");
    let typed = ProductionContext::<Digit, _>::new(&input, TextSize::new(0));
    let erased = ErrorContext::new(ProductionInfo::of::<Digit>(), &input, TextSize::new(0));

    assert_eq!(typed.as_context().production(), erased.production());
    assert_eq!(typed.into_context().production(), "digit");
}

#[test]
fn test_static_name_needs_no_instance() {
    // Associated function: resolvable without ever constructing a context.
    assert_eq!(ProductionContext::<Expr, StrInput>::production(), "expr");
    assert_eq!(
        ProductionContext::<StringLiteral, StrInput>::production(),
        "string_literal"
    );
}

// ============================================================================
// Root-input resolution
// ============================================================================

#[test]
fn test_context_on_depth_two_chain_reports_the_root() {
    let root = StrInput::new("f(\"a\\nb\")");
    let mid = SubInput::new(&root, TextSize::new(2), TextSize::new(8));
    let leaf = SubInput::new(&mid, TextSize::new(3), TextSize::new(7));

    let ctx = ProductionContext::<StringLiteral, _>::new(&leaf, TextSize::new(4));

    // The root, not the mid input.
    assert!(std::ptr::eq(ctx.input(), &root));
    assert!(!std::ptr::eq(
        ctx.input() as *const StrInput as *const (),
        &mid as *const SubInput<'_, StrInput> as *const (),
    ));
}

#[test]
fn test_context_on_standalone_input_reports_it_unchanged() {
    let input = StrInput::new("a b c");
    let ctx = ErrorContext::new(ProductionInfo::new("expr"), &input, TextSize::new(2));
    assert!(std::ptr::eq(ctx.input(), &input));
}

#[test]
fn test_position_survives_root_resolution_untranslated() {
    let root = StrInput::new("[1, 2]");
    let sub = SubInput::new(&root, TextSize::new(1), TextSize::new(5));

    // Bound at 4, reported at 4, even though input() walks up to the root.
    let ctx = ProductionContext::<Expr, _>::new(&sub, TextSize::new(4));
    assert_eq!(ctx.position(), TextSize::new(4));
    assert!(std::ptr::eq(ctx.input(), &root));
}
