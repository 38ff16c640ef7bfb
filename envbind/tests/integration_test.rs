//! Integration tests

use envbind::{bind, bind_with, BindError, Bound, EnvBind, EnvField, FieldKind};
use serial_test::serial;
use std::collections::HashMap;
use std::env;

#[derive(Debug, EnvBind)]
struct ServerConfig {
    #[env("name=PORT,default=8080")]
    pub port: i32,
}

#[derive(Debug, EnvBind)]
struct HostConfig {
    #[env("name=HOST,required")]
    pub host: String,
}

#[derive(Debug, EnvBind)]
struct InnerConfig {
    #[env("name=INNER_HOST,required")]
    pub host: String,

    #[env("name=INNER_PORT,required")]
    pub port: u16,
}

#[derive(Debug, EnvBind)]
struct OuterConfig {
    #[env("name=LEVEL,required")]
    pub level: String,

    pub inner: InnerConfig,

    #[env("name=VERBOSE,default=false")]
    pub verbose: bool,
}

#[derive(Debug, EnvBind)]
struct AllTypes {
    #[env("name=T_I8")]
    pub i8_value: i8,
    #[env("name=T_I16")]
    pub i16_value: i16,
    #[env("name=T_I32")]
    pub i32_value: i32,
    #[env("name=T_I64")]
    pub i64_value: i64,
    #[env("name=T_ISIZE")]
    pub isize_value: isize,
    #[env("name=T_U8")]
    pub u8_value: u8,
    #[env("name=T_U16")]
    pub u16_value: u16,
    #[env("name=T_U32")]
    pub u32_value: u32,
    #[env("name=T_U64")]
    pub u64_value: u64,
    #[env("name=T_USIZE")]
    pub usize_value: usize,
    #[env("name=T_F32")]
    pub f32_value: f32,
    #[env("name=T_F64")]
    pub f64_value: f64,
    #[env("name=T_STRING")]
    pub string_value: String,
    #[env("name=T_BOOL")]
    pub bool_value: bool,
}

#[derive(Debug, EnvBind)]
struct WorkerConfig {
    #[env("name=WORKERS, min=1, max=10")]
    pub workers: u32,
}

#[derive(Debug, EnvBind)]
struct Ordered {
    #[env("name=FIRST")]
    pub first: String,

    #[env("name=SECOND,required")]
    pub second: String,

    #[env("name=THIRD,default=third")]
    pub third: String,
}

#[derive(Debug, EnvBind)]
struct Unannotated {
    pub count: u64,

    #[env("default=fallback")]
    pub label: String,
}

#[derive(Debug, EnvBind)]
struct BadOption {
    #[env("name=BAD,min=1")]
    pub text: String,
}

#[derive(Debug, EnvBind)]
struct Wrap<T: EnvField> {
    #[env("name=WRAP_VALUE,required")]
    pub value: T,

    #[env("name=WRAP_LABEL,default=wrapped")]
    pub label: String,
}

#[derive(Debug, EnvBind)]
struct WithWrapped<T>
where
    T: EnvField,
{
    pub wrapped: Wrap<T>,
}

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
#[serial]
fn test_default_used_when_unset() {
    env::remove_var("PORT");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
#[serial]
fn test_variable_overrides_default() {
    env::set_var("PORT", "9090");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.port, 9090);

    env::remove_var("PORT");
}

#[test]
#[serial]
fn test_invalid_number() {
    env::set_var("PORT", "abc");

    let result = ServerConfig::from_env();
    assert!(matches!(result, Err(BindError::InvalidNumber { ref name, .. }) if name == "PORT"));

    env::remove_var("PORT");
}

#[test]
#[serial]
fn test_required_missing() {
    env::remove_var("HOST");

    let result = HostConfig::from_env();
    assert!(matches!(result, Err(BindError::MissingRequired { ref name }) if name == "HOST"));
}

#[test]
#[serial]
fn test_required_empty_is_missing() {
    env::set_var("HOST", "");

    let result = HostConfig::from_env();
    assert!(matches!(result, Err(BindError::MissingRequired { .. })));

    env::remove_var("HOST");
}

#[test]
#[serial]
fn test_required_present() {
    env::set_var("HOST", "localhost");

    let config = HostConfig::from_env().unwrap();
    assert_eq!(config.host, "localhost");

    env::remove_var("HOST");
}

#[test]
#[serial]
fn test_nested_record() {
    env::set_var("LEVEL", "debug");
    env::set_var("INNER_HOST", "localhost");
    env::set_var("INNER_PORT", "8080");
    env::remove_var("VERBOSE");

    let config = OuterConfig::from_env().unwrap();
    assert_eq!(config.level, "debug");
    assert_eq!(config.inner.host, "localhost");
    assert_eq!(config.inner.port, 8080);
    assert!(!config.verbose);

    env::remove_var("LEVEL");
    env::remove_var("INNER_HOST");
    env::remove_var("INNER_PORT");
}

#[test]
#[serial]
fn test_bind_in_place_with_process_env() {
    env::set_var("PORT", "3000");

    let mut config = ServerConfig { port: 1 };
    bind(&mut config).unwrap();
    assert_eq!(config.port, 3000);

    env::remove_var("PORT");
}

#[test]
fn test_nested_failure_propagates_unchanged() {
    let env = vars(&[("LEVEL", "info"), ("INNER_HOST", "db")]);

    let mut config = OuterConfig {
        level: String::new(),
        inner: InnerConfig {
            host: "previous".to_string(),
            port: 1,
        },
        verbose: true,
    };
    let result = bind_with(&mut config, &env);

    assert!(matches!(result, Err(BindError::MissingRequired { ref name }) if name == "INNER_PORT"));
    assert_eq!(config.level, "info");
    assert_eq!(config.inner.host, "previous");
    assert!(config.verbose);
}

#[test]
fn test_all_leaf_types() {
    let env = vars(&[
        ("T_I8", "-8"),
        ("T_I16", "-16"),
        ("T_I32", "-32"),
        ("T_I64", "-64"),
        ("T_ISIZE", "-1"),
        ("T_U8", "8"),
        ("T_U16", "16"),
        ("T_U32", "32"),
        ("T_U64", "64"),
        ("T_USIZE", "1"),
        ("T_F32", "1.5"),
        ("T_F64", "-2.25"),
        ("T_STRING", "hello world"),
        ("T_BOOL", "True"),
    ]);

    let mut config = AllTypes::zero();
    bind_with(&mut config, &env).unwrap();

    assert_eq!(config.i8_value, -8);
    assert_eq!(config.i16_value, -16);
    assert_eq!(config.i32_value, -32);
    assert_eq!(config.i64_value, -64);
    assert_eq!(config.isize_value, -1);
    assert_eq!(config.u8_value, 8);
    assert_eq!(config.u16_value, 16);
    assert_eq!(config.u32_value, 32);
    assert_eq!(config.u64_value, 64);
    assert_eq!(config.usize_value, 1);
    assert_eq!(config.f32_value, 1.5);
    assert_eq!(config.f64_value, -2.25);
    assert_eq!(config.string_value, "hello world");
    assert!(config.bool_value);
}

#[test]
fn test_bounds_round_trip() {
    let mut config = WorkerConfig::zero();

    let result = bind_with(&mut config, &vars(&[("WORKERS", "0")]));
    assert!(matches!(
        result,
        Err(BindError::OutOfRange { bound: Bound::Min(_), .. })
    ));

    bind_with(&mut config, &vars(&[("WORKERS", "5")])).unwrap();
    assert_eq!(config.workers, 5);

    let result = bind_with(&mut config, &vars(&[("WORKERS", "11")]));
    assert!(matches!(
        result,
        Err(BindError::OutOfRange { bound: Bound::Max(_), .. })
    ));
    assert_eq!(config.workers, 5);
}

#[test]
fn test_stops_at_first_failure() {
    let env = vars(&[("FIRST", "one")]);

    let mut config = Ordered {
        first: String::new(),
        second: "kept".to_string(),
        third: "kept".to_string(),
    };
    let result = bind_with(&mut config, &env);

    assert!(matches!(result, Err(BindError::MissingRequired { .. })));
    assert_eq!(config.first, "one");
    assert_eq!(config.second, "kept");
    assert_eq!(config.third, "kept");
}

#[test]
fn test_unannotated_fields() {
    let env = vars(&[("COUNT", "3"), ("", "ignored")]);

    let mut config = Unannotated::zero();
    bind_with(&mut config, &env).unwrap();

    assert_eq!(config.count, 0);
    assert_eq!(config.label, "fallback");
}

#[test]
fn test_malformed_option() {
    let result = bind_with(&mut BadOption::zero(), &vars(&[("BAD", "x")]));

    match result {
        Err(BindError::MalformedOption { field, option, .. }) => {
            assert_eq!(field, "text");
            assert_eq!(option, "min");
        }
        other => panic!("Expected MalformedOption, got {other:?}"),
    }
}

#[test]
fn test_schema_describes_fields_in_order() {
    let schema = OuterConfig::schema();

    let described: Vec<_> = schema
        .iter()
        .map(|field| (field.ident, field.kind, field.annotation))
        .collect();
    assert_eq!(
        described,
        vec![
            ("level", FieldKind::String, "name=LEVEL,required"),
            ("inner", FieldKind::Record, ""),
            ("verbose", FieldKind::Bool, "name=VERBOSE,default=false"),
        ]
    );
}

#[test]
fn test_error_messages() {
    let result = bind_with(&mut HostConfig::zero(), &vars(&[]));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Environment variable 'HOST' is required but not set"
    );

    let result = bind_with(&mut ServerConfig::zero(), &vars(&[("PORT", "abc")]));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Environment variable 'PORT' must be a number (i32), got 'abc'"
    );
}

#[test]
fn test_generic_record() {
    let mut port = Wrap::<u16>::zero();
    bind_with(&mut port, &vars(&[("WRAP_VALUE", "8080")])).unwrap();
    assert_eq!(port.value, 8080);
    assert_eq!(port.label, "wrapped");

    let mut flag = Wrap::<bool>::zero();
    bind_with(&mut flag, &vars(&[("WRAP_VALUE", "true"), ("WRAP_LABEL", "flag")])).unwrap();
    assert!(flag.value);
    assert_eq!(flag.label, "flag");

    let result = bind_with(&mut Wrap::<u16>::zero(), &vars(&[("WRAP_VALUE", "-1")]));
    assert!(matches!(result, Err(BindError::InvalidNumber { type_name: "u16", .. })));
}

#[test]
fn test_generic_record_nested_with_where_clause() {
    let mut config = WithWrapped::<f64>::zero();
    bind_with(&mut config, &vars(&[("WRAP_VALUE", "0.5")])).unwrap();
    assert_eq!(config.wrapped.value, 0.5);

    let kinds: Vec<_> = WithWrapped::<f64>::schema()
        .iter()
        .map(|field| field.kind)
        .collect();
    assert_eq!(kinds, vec![FieldKind::Record]);
    assert_eq!(Wrap::<f64>::schema()[0].kind, FieldKind::Float);
}
