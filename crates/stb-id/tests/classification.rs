//! # Integration Tests for stb-id
//!
//! Exercises the public surface end to end: builder precedence, the
//! factory chain, serde boundaries, and canonical-form stability of every
//! identifier kind.

use chrono::NaiveDate;
use proptest::prelude::*;
use stb_core::checksum::{digit_char, modulo10};
use stb_core::ErrorKind;
use stb_id::factory::chain;
use stb_id::{
    BirthCounty, BuilderConfig, CoordinationId, Delimiter, IdFactory, IdKind, Identifier,
    IdentifierBuilder, KindFactory, NationalId, OrganizationGroup, OrganizationId, PersonalId, Sex,
};

/// Helper: the fixed reference date all tests resolve centuries against.
fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Helper: builder accepting every kind.
fn builder() -> IdentifierBuilder {
    IdentifierBuilder::at(BuilderConfig::all(), reference())
}

/// Helper: append the modulo 10 check digit over `YYMMDDNNN`.
fn with_check_digit(date: &str, delimiter: char, serial: &str) -> String {
    let check = modulo10::check_digit(&format!("{date}{serial}")).unwrap();
    format!("{date}{delimiter}{serial}{}", digit_char(check))
}

// -- Builder ------------------------------------------------------------------

#[test]
fn test_builder_classifies_each_kind() {
    let cases = [
        ("556016-0680", IdKind::Organization),
        ("202100-5489", IdKind::Organization),
        ("670919-9530", IdKind::Personal),
        ("19670919-9530", IdKind::Personal),
        ("6709199530", IdKind::Personal),
        ("701063-2391", IdKind::Coordination),
        ("820383-2772", IdKind::Coordination),
    ];
    for (raw, kind) in cases {
        let id = builder().build(raw).unwrap();
        assert_eq!(id.kind(), kind, "{raw}");
    }
}

#[test]
fn test_builder_canonical_forms() {
    assert_eq!(builder().build("6709199530").unwrap().to_string(), "670919-9530");
    assert_eq!(
        builder().build("19670919+9530").unwrap().to_string(),
        "19670919-9530"
    );
    assert_eq!(builder().build("556016-0680").unwrap().to_string(), "556016-0680");
}

#[test]
fn test_builder_check_digit_is_terminal() {
    for raw in ["556016-0681", "670919-9531", "820383-2770"] {
        let err = builder().build(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CheckDigit, "{raw}");
    }
}

#[test]
fn test_builder_garbage_is_structural() {
    for raw in ["", "hello", "12-34", "670919_9530", "670919-95301"] {
        let err = builder().build(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure, "{raw:?}");
    }
}

#[test]
fn test_builder_respects_config() {
    let only_orgs = IdentifierBuilder::at(BuilderConfig::organizations_only(), reference());
    assert!(only_orgs.build("556016-0680").is_ok());
    assert!(only_orgs.build("670919-9530").is_err());
    assert!(only_orgs.build("701063-2391").is_err());

    let no_coordination = IdentifierBuilder::at(
        BuilderConfig::all().with_coordination(false),
        reference(),
    );
    assert!(no_coordination.build("670919-9530").is_ok());
    assert_eq!(
        no_coordination.build("701063-2391").unwrap_err().kind(),
        ErrorKind::Structure
    );
}

// -- Factory chain ------------------------------------------------------------

#[test]
fn test_factory_chain_recovers_where_builder_stops() {
    // Where the builder stops at CheckDigit, the chain keeps going.
    let factory = chain(
        &[IdKind::Organization, IdKind::Personal, IdKind::Coordination],
        Some(reference()),
    );
    let err = factory.create_id("556016-0681").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnableToClassify);
    assert!(factory.create_id("701063-2391").is_ok());
}

#[test]
fn test_factory_nested_links() {
    let factory = KindFactory::with_fallback(
        IdKind::Personal,
        KindFactory::with_fallback(
            IdKind::Coordination,
            KindFactory::new(IdKind::Organization),
        )
        .at(reference()),
    )
    .at(reference());
    assert_eq!(factory.create_id("670919-9530").unwrap().kind(), IdKind::Personal);
    assert_eq!(factory.create_id("701063-2391").unwrap().kind(), IdKind::Coordination);
    assert_eq!(factory.create_id("556016-0680").unwrap().kind(), IdKind::Organization);
}

// -- Derived fields -----------------------------------------------------------

#[test]
fn test_personal_derived_fields() {
    let id = PersonalId::parse_at("670919-1230", reference()).unwrap();
    assert_eq!(id.birth_date(), NaiveDate::from_ymd_opt(1967, 9, 19));
    assert_eq!(id.sex(), Sex::Male);
    assert_eq!(id.birth_county(), BirthCounty::Stockholm);
    assert_eq!(id.delimiter(), Delimiter::Minus);
    assert_eq!(id.to_long_string(), "19670919-1230");
}

#[test]
fn test_centenarian_delimiter() {
    let id = PersonalId::parse_at("670919+9530", reference()).unwrap();
    assert_eq!(id.birth_date(), NaiveDate::from_ymd_opt(1867, 9, 19));
    assert_eq!(id.delimiter(), Delimiter::Plus);
    assert_eq!(id.to_long_string(), "18670919+9530");
}

#[test]
fn test_coordination_derived_fields() {
    let id = CoordinationId::parse_at("770374-0345", reference()).unwrap();
    assert_eq!(id.birth_date(), NaiveDate::from_ymd_opt(1977, 3, 14));
    assert_eq!(id.day(), 74);
    assert_eq!(id.sex(), Sex::Female);
    assert_eq!(id.birth_county(), BirthCounty::Undefined);
}

#[test]
fn test_organization_derived_fields() {
    let id = OrganizationId::parse("556016-0680").unwrap();
    assert_eq!(id.group(), OrganizationGroup::LimitedCompany);
    assert_eq!(id.birth_date(), None);
    assert_eq!(id.sex(), Sex::Other);
}

// -- Serde --------------------------------------------------------------------

#[test]
fn test_identifier_json_shape() {
    let id = builder().build("701063-2391").unwrap();
    let json = serde_json::to_value(&id).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "coordination", "id": "701063-2391"}));
}

#[test]
fn test_deserialize_rejects_invalid() {
    assert!(serde_json::from_str::<OrganizationId>("\"556016-0681\"").is_err());
    assert!(serde_json::from_str::<PersonalId>("\"not a number\"").is_err());
    let tagged = serde_json::json!({"kind": "personal", "id": "556016-0680"});
    assert!(serde_json::from_value::<Identifier>(tagged).is_err());
}

// -- Property tests -----------------------------------------------------------

proptest! {
    #[test]
    fn personal_canonical_form_is_stable(
        year in 0u32..100,
        month in 1u32..=12,
        day in 1u32..=28,
        serial in 0u32..1000,
    ) {
        let raw = with_check_digit(
            &format!("{year:02}{month:02}{day:02}"),
            '-',
            &format!("{serial:03}"),
        );
        let id = PersonalId::parse_at(&raw, reference()).unwrap();
        prop_assert_eq!(id.to_string(), raw.clone());
        let again = PersonalId::parse_at(&id.to_string(), reference()).unwrap();
        prop_assert_eq!(again, id);
    }

    #[test]
    fn coordination_never_classified_as_personal(
        year in 0u32..100,
        month in 1u32..=12,
        day in 61u32..=88,
        serial in 0u32..1000,
    ) {
        let raw = with_check_digit(
            &format!("{year:02}{month:02}{day:02}"),
            '-',
            &format!("{serial:03}"),
        );
        let id = builder().build(&raw).unwrap();
        prop_assert_eq!(id.kind(), IdKind::Coordination);
    }

    #[test]
    fn wrong_check_digit_always_rejected(
        year in 0u32..100,
        month in 1u32..=12,
        day in 1u32..=28,
        serial in 0u32..1000,
        bump in 1u8..10,
    ) {
        let date = format!("{year:02}{month:02}{day:02}");
        let serial = format!("{serial:03}");
        let check = modulo10::check_digit(&format!("{date}{serial}")).unwrap();
        let wrong = digit_char((check + bump) % 10);
        let raw = format!("{date}-{serial}{wrong}");
        let err = builder().build(&raw).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::CheckDigit);
    }
}
