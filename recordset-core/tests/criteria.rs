use recordset_core::{Criteria, Direction, Filter, Filters, Value};

#[test]
fn builder_collects_filters_in_order() {
    let criteria = Criteria::new()
        .eq("status", "active")
        .one_of("id", [1, 2, 3]);

    let entries: Vec<_> = criteria.filters.iter().collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], ("status", &Filter::Equals(Value::from("active"))));
    assert_eq!(
        entries[1],
        (
            "id",
            &Filter::OneOf(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
        )
    );
}

#[test]
fn reinserting_a_property_replaces_in_place() {
    let mut filters = Filters::new();
    filters.insert("status", Filter::equals("active"));
    filters.insert("id", Filter::equals(1));
    filters.insert("status", Filter::equals("inactive"));

    let props: Vec<_> = filters.iter().map(|(p, _)| p).collect();
    assert_eq!(props, vec!["status", "id"]);
    assert_eq!(filters.get("status"), Some(&Filter::equals("inactive")));
}

#[test]
fn direction_parse_defaults_to_ascending() {
    assert_eq!(Direction::parse("desc"), Direction::Desc);
    assert_eq!(Direction::parse("DESC"), Direction::Desc);
    assert_eq!(Direction::parse("asc"), Direction::Asc);
    assert_eq!(Direction::parse("sideways"), Direction::Asc);
    assert_eq!(Direction::parse(""), Direction::Asc);
}

#[test]
fn limit_helpers_store_positional_values() {
    assert_eq!(Criteria::new().limit(2).limit, vec![Value::Integer(2)]);
    assert_eq!(
        Criteria::new().limit_bounds(2, 5).limit,
        vec![Value::Integer(2), Value::Integer(5)]
    );
    assert_eq!(
        Criteria::new().limit_values(["ten"]).limit,
        vec![Value::from("ten")]
    );
}

#[test]
fn limit_bound_accepts_numeric_values_only() {
    assert_eq!(Value::Integer(5).as_limit_bound(), Some(5));
    assert_eq!(Value::from("12").as_limit_bound(), Some(12));
    assert_eq!(Value::from(" 7 ").as_limit_bound(), Some(7));
    assert_eq!(Value::Real(3.0).as_limit_bound(), Some(3));
    assert_eq!(Value::Real(3.5).as_limit_bound(), None);
    assert_eq!(Value::Integer(-1).as_limit_bound(), None);
    assert_eq!(Value::from("ten").as_limit_bound(), None);
    assert_eq!(Value::Null.as_limit_bound(), None);
}

#[test]
fn criteria_deserializes_from_json() {
    let criteria: Criteria = serde_json::from_str(
        r#"{
            "filters": [["status", {"one_of": ["active", "pending"]}], ["id", {"equals": 3}]],
            "order": ["createdAt"],
            "direction": "desc",
            "limit": [10]
        }"#,
    )
    .unwrap();

    assert_eq!(
        criteria.filters.get("status"),
        Some(&Filter::one_of(["active", "pending"]))
    );
    assert_eq!(criteria.filters.get("id"), Some(&Filter::equals(3)));
    assert_eq!(criteria.order, vec!["createdAt".to_string()]);
    assert_eq!(criteria.direction, Direction::Desc);
    assert_eq!(criteria.limit, vec![Value::Integer(10)]);
}

#[test]
fn criteria_fields_default_when_absent() {
    let criteria: Criteria =
        serde_json::from_str(r#"{"filters": [["id", {"equals": 1}]]}"#).unwrap();
    assert!(criteria.order.is_empty());
    assert_eq!(criteria.direction, Direction::Asc);
    assert!(criteria.limit.is_empty());
}
