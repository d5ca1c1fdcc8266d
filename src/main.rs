use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use realo_listings::catalog::{map_pins, ListingSnapshot, ListingStats, DEFAULT_PIN_LIMIT};
use realo_listings::gallery::ImageGallery;
use realo_listings::models::PropertyForm;
use realo_listings::session::{guard, Access, AuthContext, Credentials, Route};
use realo_listings::{
    Config, FilterCriteria, ListingSource, ListingView, PropertyRecord, RealoClient, SortOrder,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "realo")]
#[command(about = "Browse and manage listings on the Realo real-estate API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List properties, filtered and sorted
    List {
        /// Listing-page query string, e.g. "propertyType=House&maxPrice=90000"
        #[arg(short, long)]
        query: Option<String>,

        /// Match title or city
        #[arg(short, long)]
        search: Option<String>,

        /// Property type tag (House, Apartment, Land, ...)
        #[arg(long = "type")]
        property_type: Option<String>,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        #[arg(long)]
        bedrooms: Option<i64>,

        #[arg(long)]
        bathrooms: Option<i64>,

        #[arg(long)]
        min_area: Option<i64>,

        #[arg(long)]
        max_area: Option<i64>,

        /// Only listings for sale
        #[arg(long, conflicts_with = "for_rent")]
        for_sale: bool,

        /// Only listings not for sale
        #[arg(long)]
        for_rent: bool,

        /// Sort by id
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Write what was listed to this JSON file
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Show one property with its facts and images
    Show { id: String },

    /// List the images of a property
    Images { id: String },

    /// Dashboard counters
    Stats,

    /// Listings that can be placed on the map
    Map {
        #[arg(long, default_value_t = DEFAULT_PIN_LIMIT)]
        limit: usize,
    },

    /// Back-office operations
    Admin {
        #[arg(short, long)]
        user: String,

        #[arg(short, long)]
        password: String,

        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a property from a JSON form file
    Add {
        #[arg(long)]
        form: PathBuf,
    },

    /// Update a property; the JSON form file only needs the changed fields,
    /// and numeric fields may be JSON numbers or text
    Edit {
        id: String,

        #[arg(long)]
        form: PathBuf,
    },

    /// Delete a property
    Delete { id: String },

    /// Attach an image URL to a property
    AddImage { id: String, url: String },

    /// Remove an image from a property
    DeleteImage { id: String, image_id: i64 },

    /// Preview a drag-and-drop reorder of a property's images
    MoveImage { id: String, dragged: i64, target: i64 },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let client = RealoClient::new(&config).context("Failed to create HTTP client")?;
    info!("🏠 Using {} at {}", client.source_name(), config.api_url);

    match cli.command {
        Commands::List {
            query,
            search,
            property_type,
            min_price,
            max_price,
            bedrooms,
            bathrooms,
            min_area,
            max_area,
            for_sale,
            for_rent,
            sort,
            snapshot,
        } => {
            let mut criteria = query.as_deref().map(FilterCriteria::from_query).unwrap_or_default();
            criteria.search = search.or(criteria.search);
            criteria.property_type = property_type.or(criteria.property_type);
            criteria.min_price = min_price.or(criteria.min_price);
            criteria.max_price = max_price.or(criteria.max_price);
            criteria.bedrooms = bedrooms.or(criteria.bedrooms);
            criteria.bathrooms = bathrooms.or(criteria.bathrooms);
            criteria.min_area = min_area.or(criteria.min_area);
            criteria.max_area = max_area.or(criteria.max_area);
            if for_sale {
                criteria.is_for_sale = Some(true);
            } else if for_rent {
                criteria.is_for_sale = Some(false);
            }

            list(&client, criteria, sort.map(SortOrder::from), snapshot.as_deref()).await
        }
        Commands::Show { id } => show(&client, &id).await,
        Commands::Images { id } => {
            let images = client.fetch_images(&id).await.context("Failed to fetch property images")?;
            print_gallery(&ImageGallery::new(id, client.origin(), images));
            Ok(())
        }
        Commands::Stats => {
            let records = client.fetch_all().await.context("Failed to fetch properties")?;
            let stats = ListingStats::from_records(&records);
            println!("Total:     {}", stats.total);
            println!("For sale:  {}", stats.for_sale);
            println!("For rent:  {}", stats.for_rent);
            println!("Available: {}", stats.available);
            Ok(())
        }
        Commands::Map { limit } => {
            let records = client.fetch_all().await.context("Failed to fetch properties")?;
            let pins = map_pins(&records, limit);
            info!("📍 {} of {} properties can be placed on the map", pins.len(), records.len());
            for pin in &pins {
                println!(
                    "{:>10.5} {:>10.5}  {} ({}, {})  {}",
                    pin.latitude, pin.longitude, pin.title, pin.kind, pin.price, pin.path
                );
            }
            Ok(())
        }
        Commands::Admin {
            user,
            password,
            action,
        } => {
            let mut auth = AuthContext::default();
            auth.login(&Credentials::new(user, password), &config.admin);
            if let Access::Redirect(to) = guard(&admin_route(&action), auth) {
                bail!("Invalid username or password (redirected to {to})");
            }
            admin(&client, action).await
        }
    }
}

async fn list(
    client: &RealoClient,
    criteria: FilterCriteria,
    sort: Option<SortOrder>,
    snapshot: Option<&Path>,
) -> Result<()> {
    let records = client.fetch_all().await.context("Failed to fetch properties")?;

    let mut view = ListingView::new(records);
    view.criteria = criteria;
    if let Some(order) = sort {
        view.set_sort_order(order);
    }

    let visible = view.visible();
    if visible.is_empty() {
        println!("No properties found for the selected filters.");
    }
    for (i, property) in visible.iter().enumerate() {
        print_summary(i + 1, property);
    }
    info!("✅ Showing {} of {} properties", visible.len(), view.records().len());

    if let Some(path) = snapshot {
        let snapshot = ListingSnapshot::new(
            client.source_name(),
            &view.criteria,
            view.sort_order(),
            view.records(),
            visible,
        );
        let json = serde_json::to_string_pretty(&snapshot)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved snapshot to {}", path.display());
    }

    Ok(())
}

async fn show(client: &RealoClient, id: &str) -> Result<()> {
    let property = client.fetch_one(id).await.context("Failed to fetch property")?;

    println!("{}, {}", property.title, property.city());
    println!("   {}", property.price_label());
    println!("   {} · {}", property.kind().display_name(), sale_label(&property));
    let facts: Vec<String> = property.facts().iter().map(|f| f.to_string()).collect();
    if !facts.is_empty() {
        println!("   {}", facts.join(" | "));
    }
    if let Some(description) = property.description.as_deref().filter(|d| !d.trim().is_empty()) {
        println!("   {}", description.trim());
    }
    if let Some(address) = &property.location.address {
        println!("   Address: {}", address);
    }
    println!("   Link: {}", property.detail_path());
    for image in &property.images {
        println!("   🖼  {}", image.image_url);
    }
    Ok(())
}

async fn admin(client: &RealoClient, action: AdminAction) -> Result<()> {
    match action {
        AdminAction::Add { form } => {
            let fields: serde_json::Value = read_json(&form).await?;
            let form = PropertyForm::default()
                .overlay(fields)
                .context("Form file does not describe a property")?;
            let payload = form.to_payload()?;
            client.create_property(&payload).await.context("Failed to add property")?;
            println!("Property added successfully!");
        }
        AdminAction::Edit { id, form } => {
            let current = client.fetch_one(&id).await.context("Failed to load property details")?;
            let changes: serde_json::Value = read_json(&form).await?;
            let form = PropertyForm::from_record(&current)
                .overlay(changes)
                .context("Form file does not describe a property")?;
            let payload = form.to_payload()?;
            client
                .update_property(&id, &payload)
                .await
                .context("Failed to update property")?;
            println!("Property updated successfully!");
        }
        AdminAction::Delete { id } => {
            client.delete_property(&id).await.context("Failed to delete property")?;
            println!("Property deleted successfully.");
        }
        AdminAction::AddImage { id, url } => {
            let mut gallery = load_gallery(client, &id).await?;
            let url = url.trim();
            if url.is_empty() {
                bail!("Please enter a valid image URL.");
            }
            client.add_image(&id, url).await.context("Failed to add image")?;
            gallery.add(url)?;
            print_gallery(&gallery);
        }
        AdminAction::DeleteImage { id, image_id } => {
            let mut gallery = load_gallery(client, &id).await?;
            client
                .delete_image(&id, image_id)
                .await
                .context("Failed to delete image")?;
            if gallery.remove(image_id).is_none() {
                warn!("Image {} was not in the fetched list", image_id);
            }
            print_gallery(&gallery);
        }
        AdminAction::MoveImage { id, dragged, target } => {
            let mut gallery = load_gallery(client, &id).await?;
            if !gallery.move_image(dragged, target) {
                bail!("Cannot move image {dragged} onto {target}");
            }
            info!("🔀 Reordered locally only, the API keeps its own image order");
            print_gallery(&gallery);
        }
    }
    Ok(())
}

fn admin_route(action: &AdminAction) -> Route {
    match action {
        AdminAction::Add { .. } => Route::AddProperty,
        AdminAction::Edit { id, .. } => Route::EditProperty { id: id.clone() },
        AdminAction::Delete { .. } => Route::Dashboard,
        AdminAction::AddImage { id, .. }
        | AdminAction::DeleteImage { id, .. }
        | AdminAction::MoveImage { id, .. } => Route::ManageImages { id: id.clone() },
    }
}

async fn load_gallery(client: &RealoClient, id: &str) -> Result<ImageGallery> {
    let images = client
        .fetch_images(id)
        .await
        .context("Failed to fetch property images")?;
    Ok(ImageGallery::new(id, client.origin(), images))
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn sale_label(property: &PropertyRecord) -> &'static str {
    match (property.is_for_sale, property.is_for_rent) {
        (true, _) => "For sale",
        (false, true) => "For rent",
        (false, false) => "Off market",
    }
}

fn print_summary(position: usize, property: &PropertyRecord) {
    println!("{}. {} ({})", position, property.title, property.price_label());
    println!("   {} · {} · {}", property.city(), property.kind().display_name(), sale_label(property));
    let facts: Vec<String> = property.facts().iter().map(|f| f.to_string()).collect();
    if !facts.is_empty() {
        println!("   {}", facts.join(", "));
    }
    println!("   ID: {}", property.id);
    println!("   URL: {}", property.detail_path());
    println!();
}

fn print_gallery(gallery: &ImageGallery) {
    println!("Property {} images ({})", gallery.property_id(), gallery.len());
    if gallery.is_empty() {
        println!("   No images found");
    }
    for image in gallery.images() {
        println!("   #{} {}", image.image_id, image.image_url);
    }
}
