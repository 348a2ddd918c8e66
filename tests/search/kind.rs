use ugtabs_rs::{ParamValue, TabType, TypeFilter, UgError, validate_type};

#[test]
fn names_aliases_and_codes_normalize_to_the_same_type() {
    for token in ["Chords", "chords", "CHORD", " chords ", "300"] {
        assert_eq!(validate_type(token).unwrap(), TabType::Chords, "{token}");
    }
    assert_eq!(validate_type("guitar pro").unwrap(), TabType::GuitarPro);
    assert_eq!(validate_type("Ukulele Chords").unwrap(), TabType::Ukulele);
    assert_eq!(validate_type("tab").unwrap(), TabType::Tabs);
}

#[test]
fn every_type_round_trips_through_its_code() {
    for t in TabType::ALL {
        assert_eq!(validate_type(&t.code().to_string()).unwrap(), t);
        assert_eq!(validate_type(t.as_str()).unwrap(), t);
    }
}

#[test]
fn unknown_tokens_are_invalid_type() {
    for token in ["bogus-instrument", "harmonica", "301", "0"] {
        match validate_type(token) {
            Err(UgError::InvalidType(t)) => assert_eq!(t, token),
            other => panic!("expected InvalidType for {token}, got {other:?}"),
        }
    }
}

#[test]
fn filter_validates_each_element() {
    let ok = TypeFilter::from_param(&ParamValue::from(vec!["tabs", "300"])).unwrap();
    assert_eq!(ok, TypeFilter::Many(vec![TabType::Tabs, TabType::Chords]));
    assert_eq!(ok.to_param(), ParamValue::from(vec!["200", "300"]));

    let err = TypeFilter::from_param(&ParamValue::from(vec!["tabs", "kazoo"])).unwrap_err();
    assert!(matches!(err, UgError::InvalidType(_)));
}

#[test]
fn empty_type_means_no_filter() {
    let f = TypeFilter::from_param(&ParamValue::from("")).unwrap();
    assert_eq!(f, TypeFilter::Any);
    assert_eq!(f.to_param(), ParamValue::from(""));
}
