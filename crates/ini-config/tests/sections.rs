use ini_config::{
    build_model, decode_with_options, DecodeOptions, Decoder, DuplicateTagPolicy, ErrorKind,
    FieldKind, IniRecord, SectionLookup, UnknownSection, Unmatched,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, PartialEq, IniRecord)]
struct Endpoint {
    host: String,
    port: u16,
}

#[derive(Debug, Default, PartialEq, IniRecord)]
struct Deployment {
    name: String,
    server: Endpoint,
    database: Endpoint,
}

fn bare() -> DecodeOptions {
    DecodeOptions::new().section_lookup(SectionLookup::Bare)
}

#[test]
fn literal_lookup_leaves_plain_sections_unmatched() {
    let input = "\
name = app
[server]
host = a.example
";
    let mut decoder = Decoder::new(input.as_bytes());
    let mut deployment = Deployment::default();
    decoder.decode(&mut deployment).unwrap();

    assert_eq!(deployment.name, "app");
    assert_eq!(deployment.server, Endpoint::default());
    assert_eq!(
        decoder.unmatched(),
        &[Unmatched {
            line: 3,
            text: "host = a.example".into(),
        }]
    );
}

#[test]
fn bare_lookup_namespaces_identical_keys() {
    let input = "\
name = app
[Server]
host = a.example
port = 80
[ database ]
host = db.example
port = 5432
";
    let mut deployment = Deployment::default();
    decode_with_options(input.as_bytes(), &mut deployment, &bare()).unwrap();

    assert_eq!(
        deployment,
        Deployment {
            name: "app".into(),
            server: Endpoint {
                host: "a.example".into(),
                port: 80,
            },
            database: Endpoint {
                host: "db.example".into(),
                port: 5432,
            },
        }
    );
}

#[test]
fn section_scope_hides_top_level_keys() {
    let input = "\
host = top
[server]
name = inside
host = a.example
";
    let mut decoder = Decoder::with_options(input.as_bytes(), bare());
    let mut deployment = Deployment::default();
    decoder.decode(&mut deployment).unwrap();

    assert_eq!(deployment.name, "");
    assert_eq!(deployment.server.host, "a.example");
    let lines: Vec<usize> = decoder.unmatched().iter().map(|u| u.line).collect();
    assert_eq!(lines, vec![1, 3]);
}

#[test]
fn unknown_section_swallows_properties_until_next_header() {
    let input = "\
[nowhere]
name = lost
[server]
port = 8080
";
    let mut decoder = Decoder::with_options(input.as_bytes(), bare());
    let mut deployment = Deployment::default();
    decoder.decode(&mut deployment).unwrap();

    assert_eq!(deployment.name, "");
    assert_eq!(deployment.server.port, 8080);
    assert_eq!(
        decoder.unmatched(),
        &[Unmatched {
            line: 2,
            text: "name = lost".into(),
        }]
    );
}

#[test]
fn unknown_section_can_fall_back_to_top_level() {
    let options = bare().unknown_section(UnknownSection::TopLevel);
    let mut deployment = Deployment::default();
    decode_with_options(b"[nowhere]\nname = found", &mut deployment, &options).unwrap();
    assert_eq!(deployment.name, "found");
}

#[derive(Debug, Default, IniRecord)]
struct Duplicated {
    first: String,
    #[ini(name = " FIRST ")]
    second: String,
}

#[test]
fn duplicate_tags_last_declared_wins() {
    let mut record = Duplicated::default();
    decode_with_options(b"first = x", &mut record, &DecodeOptions::default()).unwrap();
    assert_eq!(record.first, "");
    assert_eq!(record.second, "x");
}

#[test]
fn duplicate_tags_can_be_rejected() {
    let options = DecodeOptions::new().duplicate_tags(DuplicateTagPolicy::Error);
    let mut record = Duplicated::default();
    let err = decode_with_options(b"first = x", &mut record, &options).unwrap_err();

    assert_eq!(err.line, 0);
    match err.kind {
        ErrorKind::DuplicateTag { tag } => assert_eq!(tag, "first"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(record.second, "");
}

#[derive(Debug, Default, IniRecord)]
struct Tuning {
    workers: u32,
}

#[derive(Debug, Default, IniRecord)]
#[ini(rename_all = "kebab-case")]
struct Service {
    listen_port: u16,
    #[ini(name = "Max_Conn")]
    max_connections: u32,
    #[ini(skip)]
    internal: String,
    #[ini(flatten)]
    tuning: Tuning,
    upstream: Endpoint,
}

#[test]
fn model_reflects_tags_sections_and_flattening() {
    let (model, error) = build_model::<Service>(&DecodeOptions::default());
    assert!(error.is_none());
    assert_eq!(
        model.tags(),
        vec!["listen-port", "max_conn", "upstream", "workers"]
    );

    let upstream = model.get("upstream").unwrap();
    assert_eq!(upstream.kind, FieldKind::Record);
    assert_eq!(upstream.children.tags(), vec!["host", "port"]);
    assert!(model.get("listen-port").unwrap().children.is_empty());
}

#[test]
fn renamed_and_skipped_fields_decode() {
    let input = "\
Listen-Port = 8080
max_conn = 10
internal = nope
workers = 4
";
    let mut decoder = Decoder::new(input.as_bytes());
    let mut service = Service::default();
    decoder.decode(&mut service).unwrap();

    assert_eq!(service.listen_port, 8080);
    assert_eq!(service.max_connections, 10);
    assert_eq!(service.internal, "");
    assert_eq!(service.tuning.workers, 4);
    assert_eq!(decoder.unmatched().len(), 1);
    assert_eq!(decoder.unmatched()[0].to_string(), "3 internal = nope");
}
