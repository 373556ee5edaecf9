use anyhow::Context;
use clap::Parser;
use content_relations::core::ConfigProvider;
use content_relations::domain::model::ContentManifest;
use content_relations::utils::{logger, validation::Validate};
use content_relations::{get_all_series, LocalStorage, SiteConfig, SiteEngine, SitePipeline};

#[derive(Parser)]
#[command(name = "toml-build")]
#[command(about = "Build the site index from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override include_drafts from config
    #[arg(long)]
    include_drafts: Option<bool>,

    /// Override related.max_results from config
    #[arg(long)]
    max_related: Option<usize>,

    /// Dry run - show what would be built without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based site build");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match SiteConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 套用命令列覆蓋設定
    if let Some(include) = args.include_drafts {
        config.content.include_drafts = Some(include);
        tracing::info!("🔧 include_drafts overridden to: {}", include);
    }
    if let Some(max) = args.max_related {
        config.related.max_results = Some(max);
        tracing::info!("🔧 max_related overridden to: {}", max);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        return perform_dry_run(&config);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SitePipeline::new(storage, config);
    let engine = SiteEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Site index built successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &SiteConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Site: {}", config.site.title);
    if let Some(url) = config.site_url() {
        println!("  URL: {}", url);
    }
    println!("  Content: {}", config.content_path());
    println!("  Output: {}", config.output_path());
    println!("  Related posts per page: {}", config.max_related());
    println!("  Reading speed: {} wpm", config.words_per_minute());
    println!("  Include drafts: {}", config.include_drafts());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &SiteConfig) -> anyhow::Result<()> {
    let data = std::fs::read(config.content_path())
        .with_context(|| format!("reading content manifest {}", config.content_path()))?;
    let manifest = ContentManifest::from_json_slice(&data)?;
    manifest.validate()?;

    let drafts = manifest.posts.iter().filter(|p| p.draft).count();
    let series = get_all_series(&manifest.posts);

    println!("🔍 Dry Run Analysis:");
    println!("  Posts: {} ({} drafts)", manifest.posts.len(), drafts);
    println!("  Projects: {}", manifest.projects.len());
    println!("  Series: {}", series.len());
    for group in &series {
        println!("    {} ({} parts)", group.name, group.total_parts);
    }
    println!();
    println!("✅ Dry run analysis complete.");

    Ok(())
}
