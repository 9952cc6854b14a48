use super::*;

fn car(id: u64, image: Option<&str>) -> Car {
    Car {
        id: CarId(id),
        make: "Toyota".to_owned(),
        model: "Corolla".to_owned(),
        year: 2020,
        price: "15000".to_owned(),
        image: image.map(str::to_owned),
    }
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn parses_create_with_optional_image() {
    let cli = Cli::try_parse_from([
        "carlot", "--token", "t", "create", "--make", "Toyota", "--model", "Corolla", "--year", "2020", "--price",
        "15000", "--image", "corolla.jpg",
    ])
    .unwrap();
    let Command::Create(args) = cli.command else {
        panic!("expected create");
    };
    assert_eq!(args.make, "Toyota");
    assert_eq!(args.image.as_deref(), Some(Path::new("corolla.jpg")));
}

#[test]
fn create_requires_every_field() {
    assert!(Cli::try_parse_from(["carlot", "create", "--make", "Toyota"]).is_err());
}

#[test]
fn parses_update_with_partial_fields() {
    let cli = Cli::try_parse_from(["carlot", "update", "5", "--model", "Civic"]).unwrap();
    let Command::Update(args) = cli.command else {
        panic!("expected update");
    };
    assert_eq!(args.id, CarId(5));
    assert_eq!(args.model.as_deref(), Some("Civic"));
    assert!(args.make.is_none());
}

#[test]
fn parses_delete_id_and_global_json_flag() {
    let cli = Cli::try_parse_from(["carlot", "delete", "7", "--json"]).unwrap();
    assert!(cli.json);
    assert!(matches!(cli.command, Command::Delete { id: CarId(7) }));
    assert!(Cli::try_parse_from(["carlot", "delete", "seven"]).is_err());
}

// =============================================================
// Form wiring
// =============================================================

#[test]
fn apply_fields_only_overrides_given_values() {
    let mut form = CarFormState::default();
    form.begin_edit(&car(5, None));
    let args = UpdateArgs {
        id: CarId(5),
        make: None,
        model: Some("Civic".to_owned()),
        year: None,
        price: Some("9999".to_owned()),
        image: None,
    };
    apply_fields(&mut form, &args.fields());
    assert_eq!(form.draft.make, "Toyota");
    assert_eq!(form.draft.model, "Civic");
    assert_eq!(form.draft.year, "2020");
    assert_eq!(form.draft.price, "9999");
    assert_eq!(form.editing_id, Some(CarId(5)));
}

#[test]
fn session_from_opaque_token_keeps_token() {
    let session = session_from_token("  opaque-token ");
    assert_eq!(session.token(), "opaque-token");
    assert!(session.user().username.is_empty());
}

#[tokio::test]
async fn read_image_loads_bytes_and_guesses_type() {
    let path = std::env::temp_dir().join(format!("carlot-cli-{}.png", std::process::id()));
    std::fs::write(&path, b"\x89PNG").unwrap();

    let upload = read_image(Some(path.as_path())).await.unwrap().unwrap();
    assert_eq!(upload.bytes, b"\x89PNG");
    assert_eq!(upload.content_type.as_deref(), Some("image/png"));
    assert!(upload.file_name.ends_with(".png"));

    std::fs::remove_file(&path).unwrap();
    assert!(read_image(None).await.unwrap().is_none());
    assert!(matches!(read_image(Some(path.as_path())).await, Err(CliError::Image { .. })));
}

// =============================================================
// Output
// =============================================================

#[test]
fn render_list_shows_greeting_and_rows() {
    let mut page = CarsPage::default();
    page.cars.replace_all(vec![car(1, Some("/media/a.png")), car(2, None)]);
    let user = User { id: Some(1), username: "alice".to_owned() };
    let lines = render_list(&page, &user, "http://127.0.0.1:8000");
    assert_eq!(
        lines,
        [
            "Home Page for alice!",
            "#1  2020 Toyota Corolla - $15000  [http://127.0.0.1:8000/media/a.png]",
            "#2  2020 Toyota Corolla - $15000",
        ]
    );
}

#[test]
fn render_list_reports_empty_list() {
    let page = CarsPage::default();
    let lines = render_list(&page, &User::default(), "http://h");
    assert_eq!(lines, [EMPTY_LIST_MESSAGE]);
}
