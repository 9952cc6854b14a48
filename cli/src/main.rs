use std::path::{Path, PathBuf};

use carlot::api::{ApiConfig, ApiError, ConfigError, DEFAULT_API_BASE_URL, HttpCarApi};
use carlot::page::{EMPTY_LIST_MESSAGE, greeting};
use carlot::state::form::{CarField, CarFormState, FormError};
use carlot::{Car, CarId, CarsPage, ImageUpload, LoadOutcome, Session, User};
use clap::{Args, Parser, Subcommand};

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing bearer token; pass --token or set CARLOT_TOKEN")]
    MissingToken,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Api(#[from] ApiError),
    #[error("invalid car details: {0}")]
    Form(#[from] FormError),
    #[error("could not load your cars")]
    LoadFailed,
    #[error("car {0} is not in your list")]
    NotFound(CarId),
    #[error("{0}")]
    Alert(&'static str),
    #[error("could not read image {path}: {source}")]
    Image { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "carlot", about = "Manage your car listings")]
struct Cli {
    #[arg(long, env = "CARLOT_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "CARLOT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Print records as JSON instead of listing lines.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List your cars.
    List,
    /// Add a new car.
    Create(CreateArgs),
    /// Edit one of your cars; omitted fields keep their current value.
    Update(UpdateArgs),
    /// Delete one of your cars.
    Delete { id: CarId },
}

#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long)]
    make: String,
    #[arg(long)]
    model: String,
    #[arg(long)]
    year: String,
    #[arg(long)]
    price: String,
    #[arg(long, help = "Image file to upload")]
    image: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: CarId,
    #[arg(long)]
    make: Option<String>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long, help = "Replacement image; the stored image is kept when omitted")]
    image: Option<PathBuf>,
}

impl CreateArgs {
    fn fields(&self) -> [(CarField, Option<&str>); 4] {
        [
            (CarField::Make, Some(self.make.as_str())),
            (CarField::Model, Some(self.model.as_str())),
            (CarField::Year, Some(self.year.as_str())),
            (CarField::Price, Some(self.price.as_str())),
        ]
    }
}

impl UpdateArgs {
    fn fields(&self) -> [(CarField, Option<&str>); 4] {
        [
            (CarField::Make, self.make.as_deref()),
            (CarField::Model, self.model.as_deref()),
            (CarField::Year, self.year.as_deref()),
            (CarField::Price, self.price.as_deref()),
        ]
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = ApiConfig::new(&cli.base_url)?;
    let token = cli
        .token
        .filter(|t| !t.trim().is_empty())
        .ok_or(CliError::MissingToken)?;
    let session = session_from_token(&token);
    let api = HttpCarApi::new(&config)?;
    let mut page = CarsPage::default();

    match cli.command {
        Command::List => {
            load(&mut page, &api, &session).await?;
            if cli.json {
                print_json(&page.cars.items)?;
            } else {
                for line in render_list(&page, session.user(), api.base_url()) {
                    println!("{line}");
                }
            }
        }
        Command::Create(args) => {
            apply_fields(&mut page.form, &args.fields());
            page.form.select_image(read_image(args.image.as_deref()).await?);
            submit(&mut page, &api, &session).await?;
            if let Some(car) = page.cars.items.last() {
                print_car(car, api.base_url(), cli.json)?;
            }
        }
        Command::Update(args) => {
            load(&mut page, &api, &session).await?;
            let car = page.cars.get(args.id).cloned().ok_or(CliError::NotFound(args.id))?;
            page.form.begin_edit(&car);
            apply_fields(&mut page.form, &args.fields());
            page.form.select_image(read_image(args.image.as_deref()).await?);
            submit(&mut page, &api, &session).await?;
            if let Some(car) = page.cars.get(args.id) {
                print_car(car, api.base_url(), cli.json)?;
            }
        }
        Command::Delete { id } => {
            if let Some(alert) = page.delete(&api, &session, id).await {
                return Err(CliError::Alert(alert.message()));
            }
            println!("deleted car {id}");
        }
    }
    Ok(())
}

/// Use JWT claims for the username when the token carries them; otherwise
/// treat the token as opaque.
fn session_from_token(token: &str) -> Session {
    Session::from_bearer_token(token).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "token has no readable claims; using it as opaque");
        Session::new(User::default(), token.trim())
    })
}

fn apply_fields(form: &mut CarFormState, fields: &[(CarField, Option<&str>)]) {
    for (field, value) in fields {
        if let Some(value) = value {
            form.set(*field, *value);
        }
    }
}

async fn read_image(path: Option<&Path>) -> Result<Option<ImageUpload>, CliError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::Image { path: path.to_path_buf(), source })?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image");
    Ok(Some(ImageUpload::new(file_name, bytes)))
}

async fn load(page: &mut CarsPage, api: &HttpCarApi, session: &Session) -> Result<(), CliError> {
    match page.load(api, session).await {
        Some(LoadOutcome::Applied(_)) => Ok(()),
        _ => Err(CliError::LoadFailed),
    }
}

async fn submit(page: &mut CarsPage, api: &HttpCarApi, session: &Session) -> Result<(), CliError> {
    match page.submit(api, session).await? {
        Some(alert) => Err(CliError::Alert(alert.message())),
        None => Ok(()),
    }
}

fn render_list(page: &CarsPage, user: &User, base_url: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if !user.username.is_empty() {
        lines.push(greeting(user));
    }
    if page.cars.is_empty() {
        lines.push(EMPTY_LIST_MESSAGE.to_owned());
        return lines;
    }
    for car in page.cars.iter() {
        lines.push(render_car(car, base_url));
    }
    lines
}

fn render_car(car: &Car, base_url: &str) -> String {
    match car.image_url(base_url) {
        Some(url) => format!("#{}  {}  [{url}]", car.id, car.summary()),
        None => format!("#{}  {}", car.id, car.summary()),
    }
}

fn print_car(car: &Car, base_url: &str, json: bool) -> Result<(), CliError> {
    if json {
        print_json(car)
    } else {
        println!("{}", render_car(car, base_url));
        Ok(())
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
