use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use artisan_assistant::app::App;
use artisan_assistant::config::Config;
use artisan_assistant::listing::{
    listing_registry, listing_wizard, page_slice, sample_products, total_pages, Category,
    CategoryFilter, ExportFormat, ListingExport, ListingGenerator, ListingStep, MockGenerator,
    ProductDraft, ProductFilter, VoiceNote,
};
use artisan_assistant::logging;
use artisan_assistant::profile::ArtisanProfile;
use artisan_assistant::wizard::WizardSession;

#[derive(Parser)]
#[command(name = "artisan")]
#[command(about = "AI marketplace assistant for local artisans")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the add-product flow steps
    Steps,

    /// List products from the catalog
    Products {
        /// Case-insensitive match on title or description
        #[arg(short, long)]
        search: Option<String>,

        /// Only show one category (pottery, jewelry, textiles, woodwork, other)
        #[arg(short, long)]
        category: Option<String>,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Run the add-product flow without the TUI and write the listing
    Export {
        /// Product photo path
        #[arg(short, long, default_value = "product.jpg")]
        image: String,

        /// Comma separated keywords describing the product
        #[arg(short, long, default_value = "handmade")]
        keywords: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Exact output file (default: a new file in the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the artisan profile in use
    Whoami,

    /// Write the current settings to .artisan/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    let profile = ArtisanProfile::resolve(&config.profile_path(), &config.profile);

    match cli.command {
        Some(Commands::Steps) => cmd_steps(),
        Some(Commands::Products {
            search,
            category,
            page,
        }) => cmd_products(&config, search, category, page)?,
        Some(Commands::Export {
            image,
            keywords,
            format,
            output,
        }) => cmd_export(&config, &profile, image, keywords, format, output).await?,
        Some(Commands::Whoami) => cmd_whoami(&profile),
        Some(Commands::Init { force }) => cmd_init(&config, force)?,
        None => {
            // No subcommand = launch TUI dashboard
            let result = App::new(config, profile).run();
            logging::report_log_file(logging_handle.log_file_path.as_deref());
            result?;
        }
    }

    Ok(())
}

fn cmd_steps() {
    let registry = listing_registry();
    println!("Add New Product ({} steps)", registry.len());
    println!("{}", "─".repeat(50));
    for (index, step) in registry.steps().iter().enumerate() {
        println!(
            "{}. {} {:<14} {:<16} {}",
            index + 1,
            step.id.glyph(),
            step.id.key(),
            step.label,
            step.description
        );
    }
}

fn cmd_products(
    config: &Config,
    search: Option<String>,
    category: Option<String>,
    page: usize,
) -> Result<()> {
    let category = match category {
        Some(name) => match Category::parse(&name) {
            Some(c) => CategoryFilter::Only(c),
            None => bail!("Unknown category '{}'", name),
        },
        None => CategoryFilter::All,
    };
    let filter = ProductFilter {
        search: search.unwrap_or_default(),
        category,
    };

    let catalog = sample_products();
    let matching = filter.apply(&catalog);
    if matching.is_empty() {
        println!("No products found");
        return Ok(());
    }

    let page_size = config.ui.products_per_page.max(1);
    let pages = total_pages(matching.len(), page_size);
    let page = page.clamp(1, pages);

    println!(
        "My Products ({} matching, {}) - page {}/{}",
        matching.len(),
        filter.category.label(),
        page,
        pages
    );
    println!("{}", "─".repeat(60));
    for product in page_slice(&matching, page, page_size) {
        println!(
            "[{:<5}] {:<36} {:>8}  {}",
            product.status.label(),
            product.title,
            product.price,
            product.category
        );
    }
    Ok(())
}

async fn cmd_export(
    config: &Config,
    profile: &ArtisanProfile,
    image: String,
    keywords: String,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let draft = ProductDraft {
        image_path: image,
        keywords,
        voice_note: VoiceNote::None,
    };
    if !draft.is_complete() {
        bail!("An image path and at least one keyword are required");
    }
    if !draft.image_exists() {
        tracing::warn!(image = %draft.image_path, "image file not found, continuing anyway");
    }

    let (handle, task) = WizardSession::spawn(listing_wizard());
    let mut generated = None;
    loop {
        let transition = handle.advance().await?;
        if !transition.changed() {
            break;
        }
        let step = ListingStep::all()[transition.to];
        tracing::debug!(%step, "headless flow step");
        if step == ListingStep::Results {
            generated = Some(MockGenerator.generate(&draft));
        }
    }
    let snapshot = handle.snapshot().await?;
    drop(handle);
    task.await.context("Wizard session task failed")?;

    let Some(generated) = generated else {
        bail!(
            "Flow stopped at '{}' before any content was generated",
            snapshot.current_id
        );
    };

    let export = ListingExport::new(generated.listing, profile.display_name());
    let path = match output {
        Some(path) => {
            export.write_to(&path, format)?;
            path
        }
        None => export.write_to_dir(&config.exports_path(), format)?,
    };
    println!("{}", path.display());
    Ok(())
}

fn cmd_whoami(profile: &ArtisanProfile) {
    println!("Name:      {}", profile.display_name());
    if profile.has_name() {
        println!("Initials:  {}", profile.initials());
    } else {
        println!("Initials:  -");
    }
    println!("Specialty: {}", profile.specialty());
    if let Some(ref email) = profile.email {
        println!("Email:     {}", email);
    }
}

fn cmd_init(config: &Config, force: bool) -> Result<()> {
    let path = Config::local_config_path();
    if config.init_file(&path, force)? {
        println!("Wrote {}", path.display());
    } else {
        println!("{} already exists (use --force to overwrite)", path.display());
    }
    Ok(())
}
